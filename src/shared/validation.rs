use chrono::NaiveTime;
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Regex for validating time-of-day strings from clients
    /// Accepts "HH:MM" or "HH:MM:SS" on a 24-hour clock
    /// - Valid: "08:00", "16:00:00", "23:59"
    /// - Invalid: "8:00", "24:00", "16:60", "16.00"
    pub static ref TIME_REGEX: Regex =
        Regex::new(r"^([01][0-9]|2[0-3]):[0-5][0-9](:[0-5][0-9])?$").unwrap();
}

/// Parse a client-supplied time string ("HH:MM" or "HH:MM:SS") into a NaiveTime.
///
/// The booking UI sends bare "HH:MM" values; the database returns "HH:MM:SS".
pub fn parse_time(value: &str) -> Option<NaiveTime> {
    if !TIME_REGEX.is_match(value) {
        return None;
    }
    NaiveTime::parse_from_str(value, "%H:%M:%S")
        .or_else(|_| NaiveTime::parse_from_str(value, "%H:%M"))
        .ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_time_regex_valid() {
        assert!(TIME_REGEX.is_match("08:00"));
        assert!(TIME_REGEX.is_match("16:00:00"));
        assert!(TIME_REGEX.is_match("00:00"));
        assert!(TIME_REGEX.is_match("23:59:59"));
    }

    #[test]
    fn test_time_regex_invalid() {
        assert!(!TIME_REGEX.is_match("8:00")); // missing leading zero
        assert!(!TIME_REGEX.is_match("24:00")); // hour out of range
        assert!(!TIME_REGEX.is_match("16:60")); // minute out of range
        assert!(!TIME_REGEX.is_match("16.00")); // wrong separator
        assert!(!TIME_REGEX.is_match("")); // empty
    }

    #[test]
    fn test_parse_time_both_formats() {
        let expected = NaiveTime::from_hms_opt(16, 0, 0).unwrap();
        assert_eq!(parse_time("16:00"), Some(expected));
        assert_eq!(parse_time("16:00:00"), Some(expected));
        assert_eq!(parse_time("25:00"), None);
    }
}
