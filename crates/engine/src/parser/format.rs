use std::fmt::Write;

use chrono::format::{Item, StrftimeItems};
use chrono::NaiveDateTime;

/// Timestamp layout shared by log lines and query literals.
///
/// Passed explicitly to the parser, loader and interpreter; never global.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateFormat {
    pattern: String,
}

impl DateFormat {
    /// `dd.mm.yyyy HH:MM:SS`, 24-hour clock.
    pub const DEFAULT_PATTERN: &'static str = "%d.%m.%Y %H:%M:%S";

    pub fn new(pattern: impl Into<String>) -> Self {
        Self { pattern: pattern.into() }
    }

    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// False when the pattern contains an unknown `%` specifier.
    pub fn is_valid(&self) -> bool {
        !StrftimeItems::new(&self.pattern).any(|item| matches!(item, Item::Error))
    }

    pub fn parse(&self, text: &str) -> Result<NaiveDateTime, chrono::ParseError> {
        NaiveDateTime::parse_from_str(text, &self.pattern)
    }

    /// Render `timestamp`. An invalid pattern renders as an empty string.
    pub fn format(&self, timestamp: NaiveDateTime) -> String {
        let mut out = String::new();
        if write!(out, "{}", timestamp.format(&self.pattern)).is_err() {
            out.clear();
        }
        out
    }
}

impl Default for DateFormat {
    fn default() -> Self {
        Self::new(Self::DEFAULT_PATTERN)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, Timelike};

    #[test]
    fn test_default_pattern_parses_day_first() {
        let fmt = DateFormat::default();
        let ts = fmt.parse("03.02.2021 23:59:58").unwrap();
        assert_eq!(ts.date(), NaiveDate::from_ymd_opt(2021, 2, 3).unwrap());
        assert_eq!(ts.hour(), 23);
        assert_eq!(ts.second(), 58);
    }

    #[test]
    fn test_invalid_pattern_does_not_panic() {
        let fmt = DateFormat::new("%d.%m.%Y %Q");
        assert!(!fmt.is_valid());
        assert!(DateFormat::default().is_valid());
        let ts = DateFormat::default().parse("03.02.2021 23:59:58").unwrap();
        assert_eq!(fmt.format(ts), "");
    }

    #[test]
    fn test_default_pattern_rejects_other_layouts() {
        let fmt = DateFormat::default();
        assert!(fmt.parse("2021-02-03 23:59:58").is_err());
        assert!(fmt.parse("03.02.2021").is_err());
        assert!(fmt.parse("03.02.2021 25:00:00").is_err());
        assert!(fmt.parse("").is_err());
    }

    #[test]
    fn test_format_is_zero_padded() {
        let fmt = DateFormat::default();
        let ts = NaiveDate::from_ymd_opt(2020, 1, 1)
            .unwrap()
            .and_hms_opt(9, 5, 7)
            .unwrap();
        assert_eq!(fmt.format(ts), "01.01.2020 09:05:07");
    }

    #[test]
    fn test_custom_pattern() {
        let fmt = DateFormat::new("%Y-%m-%dT%H:%M:%S");
        let ts = fmt.parse("2020-01-01T10:00:00").unwrap();
        assert_eq!(fmt.format(ts), "2020-01-01T10:00:00");
    }
}
