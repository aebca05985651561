//! The Gregorian (solar) calendar.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use tracing::trace;

use crate::consts::{
    CENTURY_CYCLE, DATE_SEPARATOR, DAYS_IN_MONTH, DECEMBER, FEBRUARY, FEBRUARY_DAYS_LEAP,
    GREGORIAN_CYCLE, JANUARY, LEAP_YEAR_CYCLE, MAX_YEAR, MIN_DAY,
};
use crate::date_text::split_components;
use crate::types::{Day, Month, Year};
use crate::{AbsoluteDay, DateError};

/// Name used in reports and errors.
pub const CALENDAR_NAME: &str = "Gregorian";

/// Absolute day of January 1, 1
pub const FIRST_ABSOLUTE_DAY: AbsoluteDay = AbsoluteDay::new(absolute_from_parts(1, JANUARY, MIN_DAY));

/// Absolute day of December 31, `MAX_YEAR`
pub const LAST_ABSOLUTE_DAY: AbsoluteDay = AbsoluteDay::new(absolute_from_parts(
    MAX_YEAR,
    DECEMBER,
    DAYS_IN_MONTH[DECEMBER as usize],
));

pub const fn is_leap_year(year: u16) -> bool {
    (year % LEAP_YEAR_CYCLE == 0 && year % CENTURY_CYCLE != 0) || (year % GREGORIAN_CYCLE == 0)
}

/// Number of days in `month` of `year`, which is also its last day.
pub const fn last_day_of_month(year: Year, month: Month) -> u8 {
    month_length(year.get(), month.get())
}

/// Expects `month` in `1..=12`.
const fn month_length(year: u16, month: u8) -> u8 {
    if month == FEBRUARY && is_leap_year(year) {
        FEBRUARY_DAYS_LEAP
    } else {
        DAYS_IN_MONTH[month as usize]
    }
}

/// Closed-form absolute day of an unchecked `year/month/day`.
///
/// Expects `year >= 1`, so every division below sees non-negative operands.
const fn absolute_from_parts(year: u16, month: u8, day: u8) -> i64 {
    let mut days = day as i64;
    let mut m = JANUARY;
    while m < month {
        days += month_length(year, m) as i64;
        m += 1;
    }

    let prior_years = year as i64 - 1;
    days + 365 * prior_years
        + prior_years / LEAP_YEAR_CYCLE as i64
        - prior_years / CENTURY_CYCLE as i64
        + prior_years / GREGORIAN_CYCLE as i64
}

/// A validated date on the Gregorian calendar.
///
/// Field order makes the derived ordering chronological.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct GregorianDate {
    year: Year,
    month: Month,
    day: Day,
}

impl GregorianDate {
    /// Creates a date, checking the day against the length of its month.
    ///
    /// # Errors
    /// Returns the `DateError` variant naming the first invalid component.
    pub fn new(year: u16, month: u8, day: u8) -> Result<Self, DateError> {
        let year_typed = Year::new(year)?;
        let month_typed = Month::new(month)?;
        let last = last_day_of_month(year_typed, month_typed);
        if !(MIN_DAY..=last).contains(&day) {
            return Err(DateError::InvalidDay {
                year,
                month,
                day,
                last,
            });
        }
        Ok(Self {
            year: year_typed,
            month: month_typed,
            day: Day::new(day)?,
        })
    }

    pub const fn year(&self) -> u16 {
        self.year.get()
    }

    pub const fn month(&self) -> u8 {
        self.month.get()
    }

    pub const fn day(&self) -> u8 {
        self.day.get()
    }

    pub const fn year_typed(&self) -> Year {
        self.year
    }

    pub const fn month_typed(&self) -> Month {
        self.month
    }

    pub const fn day_typed(&self) -> Day {
        self.day
    }

    pub const fn is_leap_year(&self) -> bool {
        is_leap_year(self.year())
    }

    pub const fn to_absolute(&self) -> AbsoluteDay {
        AbsoluteDay::new(absolute_from_parts(self.year(), self.month(), self.day()))
    }

    /// Finds the date of an absolute day by searching forward from an
    /// approximate year, then month by month from January.
    ///
    /// # Errors
    /// Returns `DateError::OutOfRange` for days before January 1, 1 or after
    /// December 31, `MAX_YEAR`.
    pub fn from_absolute(day: AbsoluteDay) -> Result<Self, DateError> {
        if !(FIRST_ABSOLUTE_DAY..=LAST_ABSOLUTE_DAY).contains(&day) {
            return Err(DateError::OutOfRange {
                day,
                calendar: CALENDAR_NAME,
            });
        }
        let target = day.get();

        // Never overshoots: no year is longer than 366 days.
        let approx = u16::try_from(target / 366).map_err(|_| DateError::OutOfRange {
            day,
            calendar: CALENDAR_NAME,
        })?;
        let mut year = approx;
        while target >= absolute_from_parts(year + 1, JANUARY, MIN_DAY) {
            year += 1;
        }

        let mut month = JANUARY;
        while target > absolute_from_parts(year, month, month_length(year, month)) {
            month += 1;
        }

        let day_of_month = target - absolute_from_parts(year, month, MIN_DAY) + 1;
        trace!(%day, approx, year, month, day_of_month, "resolved gregorian date");

        let day_of_month = u8::try_from(day_of_month).map_err(|_| DateError::OutOfRange {
            day,
            calendar: CALENDAR_NAME,
        })?;
        Self::new(year, month, day_of_month)
    }
}

impl fmt::Display for GregorianDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{DATE_SEPARATOR}{}{DATE_SEPARATOR}{}",
            self.year, self.month, self.day
        )
    }
}

impl FromStr for GregorianDate {
    type Err = DateError;

    /// Parses `year/month/day`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (year, month, day) = split_components(s)?;
        Self::new(year, month, day)
    }
}

impl TryFrom<(u16, u8, u8)> for GregorianDate {
    type Error = DateError;

    fn try_from((year, month, day): (u16, u8, u8)) -> Result<Self, Self::Error> {
        Self::new(year, month, day)
    }
}

impl Serialize for GregorianDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for GregorianDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
