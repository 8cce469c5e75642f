use crate::keypad::{Error, Key, Keypad};
use failure::format_err;
use std::io::{self, Read};

/// A keypad typed on stdin, or on any other byte stream.
///
/// Accepts the characters printed on a numeric keypad, newlines
/// count as enter. Everything else is ignored. The end of the stream
/// is fatal, nothing will ever be typed there again.
pub struct StdinKeypad<R = io::Stdin> {
    reader: R,
    buf: [u8; 1],
}

impl StdinKeypad {
    pub fn new() -> Self {
        StdinKeypad::from_reader(io::stdin())
    }
}

impl<R: Read> StdinKeypad<R> {
    pub fn from_reader(reader: R) -> Self {
        StdinKeypad { reader, buf: [0] }
    }
}

impl<R: Read> Keypad for StdinKeypad<R> {
    /// Blocks until a keypad character was read.
    fn poll(&mut self) -> Result<Key, Error> {
        loop {
            self.buf[0] = 0;

            match self.reader.read(&mut self.buf) {
                Ok(1) => {
                    if let Some(key) = Key::from_char(char::from(self.buf[0])) {
                        return Ok(key);
                    }
                    // Ignore any other byte
                }
                Ok(_) => return Err(Error::Fatal(format_err!("end of keypad input"))),
                Err(ref e) if e.kind() == io::ErrorKind::Interrupted => (),
                Err(ref e) if e.kind() == io::ErrorKind::WouldBlock => {
                    return Err(Error::WouldBlock)
                }
                Err(e) => return Err(Error::fatal(e)),
            }
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn reads_keys_and_skips_the_rest() {
        // given
        let mut keypad = StdinKeypad::from_reader("/1a2\n".as_bytes());

        // when
        let keys: Vec<Key> = (0..4).map(|_| keypad.poll().unwrap()).collect();

        // then
        assert_eq!(
            keys,
            vec![Key::Char('/'), Key::Char('1'), Key::Char('2'), Key::Enter]
        );
    }

    #[test]
    fn end_of_input_is_fatal() {
        let mut keypad = StdinKeypad::from_reader("x".as_bytes());

        match keypad.poll() {
            Err(Error::Fatal(_)) => (),
            other => panic!("expected fatal error, got {:?}", other),
        }
    }
}
