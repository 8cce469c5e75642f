use std::time::Instant;

/// Sends its text to the sign once, then leaves it there.
///
/// Text with embedded newlines turns into multiple lines on the
/// output stream, all written in the same tick.
#[derive(Debug, Clone)]
pub struct Fixed {
    text: String,
    emitted: bool,
}

impl Fixed {
    pub fn new(text: impl Into<String>) -> Self {
        Fixed {
            text: text.into(),
            emitted: false,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn update(&mut self, _now: Instant) -> Option<String> {
        if self.emitted {
            None
        } else {
            self.emitted = true;
            Some(self.text.clone())
        }
    }
}
