use crate::keypad::Key;

/// Collects key presses until enter is hit.
///
/// Input growing beyond the maximum length is dropped, so a stale
/// half-typed command never turns into something valid later.
#[derive(Debug, Clone)]
pub struct InputBuffer {
    buf: String,
    max_len: usize,
}

impl InputBuffer {
    pub fn new(max_len: usize) -> Self {
        InputBuffer {
            buf: String::with_capacity(max_len + 1),
            max_len,
        }
    }

    /// Adds a key and returns the completed token on enter.
    pub fn push(&mut self, key: Key) -> Option<String> {
        match key {
            Key::Enter => Some(std::mem::replace(&mut self.buf, String::new())),
            Key::Char(c) => {
                self.buf.push(c);
                if self.buf.len() > self.max_len {
                    self.buf.clear();
                }
                None
            }
        }
    }

    /// Everything typed since the last enter.
    pub fn pending(&self) -> &str {
        &self.buf
    }
}
