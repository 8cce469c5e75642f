//! Formatting of lap times typed as raw digits on the keypad.
//!
//! Digits are packed from the right: the last three are milliseconds,
//! the two before are seconds and anything before that are minutes,
//! e.g. `456789` is `4:56.789`.
use failure::Fail;

/// Raw timings are zero-padded to this many digits, `MMSSmmm`.
const PADDED_LEN: usize = 7;

#[derive(Debug, Fail, PartialEq)]
pub enum TimingError {
    #[fail(display = "no digits entered for timing")]
    Empty,
    #[fail(display = "timing {:?} contains something else than digits", _0)]
    NotDigits(String),
    #[fail(display = "timing {:?} has more than seven digits", _0)]
    TooLong(String),
    #[fail(display = "{} is not a valid number of minutes", _0)]
    Minutes(u32),
    #[fail(display = "{} is not a valid number of seconds", _0)]
    Seconds(u32),
}

/// Turns raw keypad digits into a human-readable lap time
/// `<minutes>:<seconds>.<millis>`, e.g. `"1234567"` into `"12:34.567"`.
///
/// Minutes and seconds both need to be less than 60.
pub fn parse_timing(raw: &str) -> Result<String, TimingError> {
    if raw.is_empty() {
        return Err(TimingError::Empty);
    }
    if !raw.bytes().all(|b| b.is_ascii_digit()) {
        return Err(TimingError::NotDigits(raw.to_string()));
    }
    if raw.len() > PADDED_LEN {
        return Err(TimingError::TooLong(raw.to_string()));
    }

    let padded = format!("{:0>width$}", raw, width = PADDED_LEN);
    // all ascii digits and at most seven of them, parsing cannot fail
    let field = |range: std::ops::Range<usize>| padded[range].parse::<u32>().unwrap_or(0);
    let minutes = field(0..2);
    let seconds = field(2..4);
    let millis = field(4..7);

    if minutes >= 60 {
        return Err(TimingError::Minutes(minutes));
    }
    if seconds >= 60 {
        return Err(TimingError::Seconds(seconds));
    }

    Ok(format!("{}:{:02}.{:03}", minutes, seconds, millis))
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn formats_known_timings() {
        let table = [
            ("0", "0:00.000"),
            ("1234567", "12:34.567"),
            ("5959999", "59:59.999"),
            ("456789", "4:56.789"),
            ("1", "0:00.001"),
            ("0000000", "0:00.000"),
        ];

        for (raw, expected) in table.iter() {
            assert_eq!(
                parse_timing(raw).as_ref().map(String::as_str),
                Ok(*expected),
                "unexpected result for raw timing {:?}",
                raw
            );
        }
    }

    #[test]
    fn rejects_malformed_timings() {
        for raw in ["", "a", "+0", "-0", "*0", "/0", ".0", "60000", "6000000"].iter() {
            assert!(
                parse_timing(raw).is_err(),
                "expected {:?} to be rejected",
                raw
            );
        }
    }

    #[test]
    fn rejects_too_many_digits() {
        assert_eq!(
            parse_timing("01234567"),
            Err(TimingError::TooLong("01234567".to_string()))
        );
    }

    #[test]
    fn names_offending_field() {
        assert_eq!(parse_timing("60000"), Err(TimingError::Seconds(60)));
        assert_eq!(parse_timing("6000000"), Err(TimingError::Minutes(60)));
    }

    #[test]
    fn every_valid_length_has_lap_time_shape() {
        let mut raw = String::new();
        for digit in "1234567".chars() {
            raw.push(digit);

            let formatted = parse_timing(&raw).unwrap();
            let (minutes, rest) = formatted.split_at(formatted.find(':').unwrap());

            assert!(!minutes.is_empty());
            assert!(minutes.chars().all(|c| c.is_ascii_digit()));
            assert_eq!(rest.len(), 7, "expected :SS.mmm, got {:?}", rest);
            assert_eq!(&rest[3..4], ".");
        }
    }
}
