use std::time::{Duration, Instant};

/// How long each placeholder stays on the sign.
const ADVANCE_INTERVAL: Duration = Duration::from_secs(1);

/// Cycles through placeholders, one per second, starting over after
/// the last one. Shown before anything was entered and after a reset.
#[derive(Debug, Clone)]
pub struct Initial {
    parts: Vec<String>,
    /// `None` until the first placeholder went out.
    index: Option<usize>,
    last_advance: Option<Instant>,
}

impl Initial {
    pub fn new(parts: Vec<String>) -> Self {
        Initial {
            parts,
            index: None,
            last_advance: None,
        }
    }

    pub fn update(&mut self, now: Instant) -> Option<String> {
        if self.parts.is_empty() {
            return None;
        }

        let due = match self.last_advance {
            None => true,
            Some(last) => now.saturating_duration_since(last) >= ADVANCE_INTERVAL,
        };
        if !due {
            return None;
        }

        let next = self.index.map_or(0, |idx| (idx + 1) % self.parts.len());
        self.index = Some(next);
        self.last_advance = Some(now);
        Some(self.parts[next].clone())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn placeholders() -> Vec<String> {
        vec!["#???".to_string(), "RDY".to_string()]
    }

    #[test]
    fn first_update_shows_first_placeholder() {
        let mut initial = Initial::new(placeholders());

        assert_eq!(initial.update(Instant::now()), Some("#???".to_string()));
    }

    #[test]
    fn cycles_once_per_second_and_wraps() {
        // given
        let start = Instant::now();
        let at = |millis| start + Duration::from_millis(millis);
        let mut initial = Initial::new(placeholders());

        // when
        let updates: Vec<Option<String>> = [0, 100, 999, 1000, 1500, 2000, 2999, 3000]
            .iter()
            .map(|&millis| initial.update(at(millis)))
            .collect();

        // then
        assert_eq!(
            updates,
            vec![
                Some("#???".to_string()),
                None,
                None,
                Some("RDY".to_string()),
                None,
                Some("#???".to_string()),
                None,
                Some("RDY".to_string()),
            ]
        );
    }

    #[test]
    fn no_placeholders_means_no_output() {
        let mut initial = Initial::new(vec![]);

        assert_eq!(initial.update(Instant::now()), None);
    }
}
