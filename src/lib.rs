//! Core of the LED timing board used in the pit lane.
//!
//! Operators type short codes on a numeric keypad, the board decides
//! what the LED matrix shows and writes it as lines of text to the
//! driver process rendering them.
//!
//! `App` wires input, board and driver together for the binary, while
//! `Board` can be driven directly, e.g. from integration tests.

pub mod app;
pub mod board;
pub mod classify;
pub mod config;
pub mod driver;
pub mod interactive;
pub mod keypad;
pub mod log;
pub mod reboot;
pub mod result;
pub mod strategies;
pub mod timing;

pub use app::{App, Builder as AppBuilder};
pub use board::{Board, BoardError};
pub use classify::{classify, Command, Vocabulary};
pub use config::Config;
pub use strategies::Strategy;
pub use timing::parse_timing;
