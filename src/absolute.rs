use serde::{Deserialize, Serialize};

use crate::DAYS_PER_WEEK;
use crate::prelude::*;

/// Days elapsed since the Gregorian epoch: day 1 is January 1 of year 1,
/// day 0 is December 31, 1 BCE (a Sunday).
///
/// This is the currency every calendar converts through.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, From, Into, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct AbsoluteDay(i64);

impl AbsoluteDay {
    pub const fn new(day: i64) -> Self {
        Self(day)
    }

    #[inline]
    pub const fn get(self) -> i64 {
        self.0
    }

    /// Day of the week this absolute day falls on.
    pub const fn weekday(self) -> Weekday {
        Weekday::from_day_number(self.0)
    }
}

/// Day of the week. Numbering follows the absolute day count, with Sunday
/// as 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
pub enum Weekday {
    Sunday,
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
}

impl Weekday {
    /// Weekday of any day count whose day 0 is a Sunday.
    pub const fn from_day_number(day: i64) -> Self {
        match day.rem_euclid(DAYS_PER_WEEK) {
            0 => Self::Sunday,
            1 => Self::Monday,
            2 => Self::Tuesday,
            3 => Self::Wednesday,
            4 => Self::Thursday,
            5 => Self::Friday,
            _ => Self::Saturday,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_epoch_is_sunday() {
        assert_eq!(AbsoluteDay::new(0).weekday(), Weekday::Sunday);
        assert_eq!(AbsoluteDay::new(1).weekday(), Weekday::Monday);
        assert_eq!(AbsoluteDay::new(-1).weekday(), Weekday::Saturday);
    }

    #[test]
    fn test_known_weekdays() {
        // 2015-05-13
        assert_eq!(AbsoluteDay::new(735_731).weekday(), Weekday::Wednesday);
        // 2000-01-01
        assert_eq!(AbsoluteDay::new(730_120).weekday(), Weekday::Saturday);
    }

    #[test]
    fn test_conversions() {
        let day: AbsoluteDay = 42.into();
        assert_eq!(day.get(), 42);
        let raw: i64 = day.into();
        assert_eq!(raw, 42);
        assert_eq!(day.to_string(), "42");
    }

    #[test]
    fn test_serde_transparent() {
        let day = AbsoluteDay::new(-1_373_427);
        let json = serde_json::to_string(&day).unwrap();
        assert_eq!(json, "-1373427");
        let parsed: AbsoluteDay = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, day);
    }

    #[test]
    fn test_weekday_display() {
        assert_eq!(Weekday::Thursday.to_string(), "Thursday");
    }
}
