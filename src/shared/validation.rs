use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Regex for ISO calendar-date strings (YYYY-MM-DD).
    /// Shape check only; chrono decides whether the date actually exists.
    /// - Valid: "2015-12-25", "1970-01-01"
    /// - Invalid: "2015-1-2", "25-12-2015", "2015/12/25", "2015-12-25T00:00:00"
    pub static ref DATE_REGEX: Regex = Regex::new(r"^\d{4}-\d{2}-\d{2}$").unwrap();

    /// Regex for epoch-millisecond strings, sign included (pre-1970 is allowed)
    /// - Valid: "1451001600000", "-86400000", "0"
    /// - Invalid: "145100160000.5", "1451001600000ms", ""
    pub static ref EPOCH_MILLIS_REGEX: Regex = Regex::new(r"^-?\d+$").unwrap();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_date_regex_valid() {
        assert!(DATE_REGEX.is_match("2015-12-25"));
        assert!(DATE_REGEX.is_match("1970-01-01"));
        assert!(DATE_REGEX.is_match("9999-99-99")); // shape only
    }

    #[test]
    fn test_date_regex_invalid() {
        assert!(!DATE_REGEX.is_match("2015-1-2")); // single-digit fields
        assert!(!DATE_REGEX.is_match("25-12-2015")); // wrong order
        assert!(!DATE_REGEX.is_match("2015/12/25")); // wrong separator
        assert!(!DATE_REGEX.is_match("2015-12-25T00:00:00")); // datetime
        assert!(!DATE_REGEX.is_match("")); // empty
    }

    #[test]
    fn test_epoch_millis_regex() {
        assert!(EPOCH_MILLIS_REGEX.is_match("1451001600000"));
        assert!(EPOCH_MILLIS_REGEX.is_match("-86400000"));
        assert!(EPOCH_MILLIS_REGEX.is_match("0"));
        assert!(!EPOCH_MILLIS_REGEX.is_match("145100160000.5"));
        assert!(!EPOCH_MILLIS_REGEX.is_match("1451001600000ms"));
        assert!(!EPOCH_MILLIS_REGEX.is_match(""));
        assert!(!EPOCH_MILLIS_REGEX.is_match("2015-12-25"));
    }
}
