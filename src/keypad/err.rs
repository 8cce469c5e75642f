#[derive(Debug)]
pub enum Error {
    /// No key pressed yet, try again later.
    WouldBlock,
    /// The keypad is gone for good.
    Fatal(failure::Error),
}

impl Error {
    pub fn fatal<E: Into<failure::Error>>(cause: E) -> Self {
        Error::Fatal(cause.into())
    }
}
