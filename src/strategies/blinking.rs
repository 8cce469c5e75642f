use std::time::{Duration, Instant};

/// Time the text stays on the sign.
const VISIBLE: Duration = Duration::from_millis(1000);
/// Time the sign stays blank between two flashes.
const BLANK: Duration = Duration::from_millis(100);

/// Shows the text, blanks the sign briefly, shows the text again.
#[derive(Debug, Clone)]
pub struct Blinking {
    text: String,
    visible: bool,
    /// `None` until the first update showed the text.
    last_toggle: Option<Instant>,
}

impl Blinking {
    pub fn new(text: impl Into<String>) -> Self {
        Blinking {
            text: text.into(),
            visible: false,
            last_toggle: None,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn update(&mut self, now: Instant) -> Option<String> {
        let due = match self.last_toggle {
            None => true,
            Some(last) => {
                let phase = if self.visible { VISIBLE } else { BLANK };
                now.saturating_duration_since(last) >= phase
            }
        };
        if !due {
            return None;
        }

        self.visible = !self.visible;
        self.last_toggle = Some(now);
        Some(if self.visible {
            self.text.clone()
        } else {
            String::new()
        })
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn text_is_shown_long_and_blanked_short() {
        // given
        let start = Instant::now();
        let at = |millis| start + Duration::from_millis(millis);
        let mut blinking = Blinking::new("BOX");

        // when
        let shown = blinking.update(at(0));
        let still_shown = blinking.update(at(999));
        let blanked = blinking.update(at(1000));
        let still_blank = blinking.update(at(1099));
        let shown_again = blinking.update(at(1100));
        let after_shown_again = blinking.update(at(1200));

        // then
        assert_eq!(shown, Some("BOX".to_string()));
        assert_eq!(still_shown, None);
        assert_eq!(blanked, Some(String::new()));
        assert_eq!(still_blank, None);
        assert_eq!(shown_again, Some("BOX".to_string()));
        assert_eq!(after_shown_again, None);
    }

    #[test]
    fn repeated_polls_without_time_passing_change_nothing() {
        let start = Instant::now();
        let mut blinking = Blinking::new("FEUX");
        blinking.update(start);

        for _ in 0..10 {
            assert_eq!(blinking.update(start), None);
        }
    }
}
