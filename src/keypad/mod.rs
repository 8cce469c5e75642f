//! Sources of key presses and the buffer collecting them into tokens.
mod bg;
mod buffer;
mod err;
#[cfg(target_os = "linux")]
mod evdev;
mod key;
mod keypad;
mod queue;
mod stdin;

pub use bg::BackgroundKeypad;
pub use buffer::InputBuffer;
pub use err::Error;
#[cfg(target_os = "linux")]
pub use evdev::EvdevKeypad;
pub use key::Key;
pub use keypad::Keypad;
pub use queue::{QueueInput, QueueKeypad};
pub use stdin::StdinKeypad;
