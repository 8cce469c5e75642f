/// A key on the numeric keypad.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    /// One of `0-9`, `/`, `*`, `-`, `+` and `.`.
    Char(char),
    /// Completes the token typed so far.
    Enter,
}

impl Key {
    /// Maps a character to the keypad key printing it, if any.
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '0'..='9' | '/' | '*' | '-' | '+' | '.' => Some(Key::Char(c)),
            '\n' | '\r' => Some(Key::Enter),
            _ => None,
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn keypad_characters() {
        for c in "0123456789/*-+.".chars() {
            assert_eq!(Key::from_char(c), Some(Key::Char(c)));
        }
    }

    #[test]
    fn newlines_are_enter() {
        assert_eq!(Key::from_char('\n'), Some(Key::Enter));
        assert_eq!(Key::from_char('\r'), Some(Key::Enter));
    }

    #[test]
    fn other_characters_are_not_on_the_keypad() {
        for c in "aZ #,".chars() {
            assert_eq!(Key::from_char(c), None);
        }
    }
}
