use crate::strategies::{Blinking, Fixed, Initial};
use std::time::Instant;

/// The closed set of things the sign can be doing.
///
/// Swapping the strategy on a board drops the old one together with
/// all of its timers, nothing carries over.
#[derive(Debug, Clone)]
pub enum Strategy {
    /// Cycles placeholders while nothing was entered yet.
    Initial(Initial),
    /// Shows one text and then keeps it.
    Fixed(Fixed),
    /// Flashes an instruction to the driver.
    Blinking(Blinking),
    /// Reserved for showing two texts in turn. Has no behavior yet and
    /// never changes the sign.
    Alternating,
}

impl Strategy {
    pub fn initial(parts: Vec<String>) -> Self {
        Strategy::Initial(Initial::new(parts))
    }

    pub fn fixed(text: impl Into<String>) -> Self {
        Strategy::Fixed(Fixed::new(text))
    }

    pub fn blinking(text: impl Into<String>) -> Self {
        Strategy::Blinking(Blinking::new(text))
    }

    /// Advances timers to `now` and returns text to send to the sign,
    /// or `None` if the sign should keep showing what it shows.
    ///
    /// `now` is expected not to go backwards between calls.
    pub fn update(&mut self, now: Instant) -> Option<String> {
        match self {
            Strategy::Initial(initial) => initial.update(now),
            Strategy::Fixed(fixed) => fixed.update(now),
            Strategy::Blinking(blinking) => blinking.update(now),
            Strategy::Alternating => None,
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use std::time::Duration;

    #[test]
    fn alternating_never_changes_the_sign() {
        let start = Instant::now();
        let mut alternating = Strategy::Alternating;

        for secs in 0..5 {
            assert_eq!(alternating.update(start + Duration::from_secs(secs)), None);
        }
    }

    #[test]
    fn dispatches_to_variant() {
        let now = Instant::now();

        assert_eq!(Strategy::fixed("P1").update(now), Some("P1".to_string()));
        assert_eq!(Strategy::blinking("BOX").update(now), Some("BOX".to_string()));
        assert_eq!(
            Strategy::initial(vec!["#???".into(), "RDY".into()]).update(now),
            Some("#???".to_string())
        );
    }
}
