use crate::keypad::{Error, Key};

pub trait Keypad {
    /// Tries to get the next key press in a way that may block.
    ///
    /// When an error other than `WouldBlock` is returned, it is
    /// assumed non-recoverable.
    fn poll(&mut self) -> Result<Key, Error>;
}
