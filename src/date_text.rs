//! Shared parsing of the numeric `year/month/day` form.

use crate::DateError;
use crate::consts::DATE_SEPARATOR;

/// Helper to parse u16 with better error messages
fn parse_u16(s: &str) -> Result<u16, DateError> {
    s.parse::<u16>()
        .map_err(|_| DateError::InvalidFormat(s.to_owned()))
}

/// Helper to parse u8 with better error messages
fn parse_u8(s: &str) -> Result<u8, DateError> {
    s.parse::<u8>()
        .map_err(|_| DateError::InvalidFormat(s.to_owned()))
}

/// Splits `year/month/day` into unchecked components.
pub(crate) fn split_components(s: &str) -> Result<(u16, u8, u8), DateError> {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        return Err(DateError::EmptyInput);
    }

    let parts: Vec<&str> = trimmed.split(DATE_SEPARATOR).map(str::trim).collect();
    match parts.as_slice() {
        [year, month, day] => Ok((parse_u16(year)?, parse_u8(month)?, parse_u8(day)?)),
        _ => Err(DateError::InvalidFormat(format!(
            "expected year{DATE_SEPARATOR}month{DATE_SEPARATOR}day, found {} component(s): {trimmed}",
            parts.len()
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_components() {
        assert_eq!(split_components("5775/2/24"), Ok((5775, 2, 24)));
        assert_eq!(split_components(" 2015 / 05 / 13 "), Ok((2015, 5, 13)));
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(split_components(""), Err(DateError::EmptyInput));
        assert_eq!(split_components("   "), Err(DateError::EmptyInput));
    }

    #[test]
    fn test_bad_tokens() {
        struct TestCase {
            input: &'static str,
            description: &'static str,
        }

        let cases = [
            TestCase {
                input: "2015/5",
                description: "missing day",
            },
            TestCase {
                input: "2015/5/13/1",
                description: "too many components",
            },
            TestCase {
                input: "2015-05-13",
                description: "wrong separator",
            },
            TestCase {
                input: "20X5/5/13",
                description: "non-numeric year",
            },
            TestCase {
                input: "2015/5/300",
                description: "day does not fit in u8",
            },
            TestCase {
                input: "-1/5/13",
                description: "negative year",
            },
        ];

        for case in &cases {
            assert!(
                matches!(split_components(case.input), Err(DateError::InvalidFormat(_))),
                "{} ({}) should be rejected",
                case.input,
                case.description
            );
        }
    }

    #[test]
    fn test_component_count_message() {
        let err = split_components("1/2/3/4").unwrap_err();
        assert!(err.to_string().contains("found 4 component(s)"));
    }
}
