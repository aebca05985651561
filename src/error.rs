use crate::{AbsoluteDay, MAX_YEAR};

/// Error type for date construction, parsing and conversion.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DateError {
    /// Year outside `1..=MAX_YEAR`.
    #[error("Invalid year: {0} (must be 1-{max})", max = MAX_YEAR)]
    InvalidYear(u16),

    /// Month outside the months of its year.
    #[error("Invalid month: {month} (must be 1-{last})")]
    InvalidMonth { month: u8, last: u8 },

    /// Day outside the days of its month.
    #[error("Invalid day {day} for month {year}/{month} (must be 1-{last})")]
    InvalidDay { year: u16, month: u8, day: u8, last: u8 },

    /// Absolute day that falls outside the supported years of a calendar.
    #[error("Absolute day {day} is outside the supported range of the {calendar} calendar")]
    OutOfRange { day: AbsoluteDay, calendar: &'static str },

    /// Malformed textual date.
    #[error("Invalid date format: {0}")]
    InvalidFormat(String),

    #[error("Empty date string")]
    EmptyInput,
}

impl DateError {
    /// True for the variants describing a well-formed but impossible
    /// `year/month/day` combination.
    pub const fn is_invalid_date(&self) -> bool {
        matches!(
            self,
            Self::InvalidYear(_) | Self::InvalidMonth { .. } | Self::InvalidDay { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        assert_eq!(
            DateError::InvalidYear(0).to_string(),
            "Invalid year: 0 (must be 1-9999)"
        );
        assert_eq!(
            DateError::InvalidMonth { month: 13, last: 12 }.to_string(),
            "Invalid month: 13 (must be 1-12)"
        );
        assert_eq!(
            DateError::InvalidDay {
                year: 2021,
                month: 2,
                day: 29,
                last: 28
            }
            .to_string(),
            "Invalid day 29 for month 2021/2 (must be 1-28)"
        );
        assert_eq!(
            DateError::OutOfRange {
                day: AbsoluteDay::new(0),
                calendar: "Gregorian"
            }
            .to_string(),
            "Absolute day 0 is outside the supported range of the Gregorian calendar"
        );
    }

    #[test]
    fn test_is_invalid_date() {
        assert!(DateError::InvalidYear(0).is_invalid_date());
        assert!(DateError::InvalidMonth { month: 0, last: 12 }.is_invalid_date());
        assert!(!DateError::EmptyInput.is_invalid_date());
        assert!(!DateError::InvalidFormat("x".to_owned()).is_invalid_date());
    }

    #[test]
    fn test_error_is_send_and_sync() {
        fn assert_impl<T: Send + Sync + std::error::Error>() {}
        assert_impl::<DateError>();
    }
}
