//! The Hebrew (lunisolar) calendar.
//!
//! Years start at the molad (mean conjunction) of Tishri, moved later by
//! the postponement rules so that 1 Tishri never falls on Sunday,
//! Wednesday or Friday. Year length then fixes the two variable months,
//! Heshvan and Kislev.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use tracing::trace;

use crate::absolute::Weekday;
use crate::consts::{
    BETUTAKPAT_PARTS, DATE_SEPARATOR, EPOCH_MOLAD_HOURS, EPOCH_MOLAD_PARTS, GATARAD_PARTS,
    HEBREW_EPOCH, HOURS_PER_DAY, LUNATION_EXTRA_PARTS, MAX_YEAR, METONIC_CYCLE_LEAP_YEARS,
    METONIC_CYCLE_MONTHS, METONIC_CYCLE_YEARS, MIN_DAY, MOLAD_ZAKEN_PARTS, PARTS_PER_HOUR,
};
use crate::date_text::split_components;
use crate::types::{Day, HebrewMonth, Year};
use crate::{AbsoluteDay, DateError};

/// Name used in reports and errors.
pub const CALENDAR_NAME: &str = "hebrew";

const NISAN: u8 = HebrewMonth::Nisan.get();
const TISHRI: u8 = HebrewMonth::Tishri.get();

/// Absolute day of 1 Tishri of year 1
pub const FIRST_ABSOLUTE_DAY: AbsoluteDay = AbsoluteDay::new(absolute_from_parts(1, TISHRI, MIN_DAY));

/// Absolute day of the last day of `MAX_YEAR` (29 Elul)
pub const LAST_ABSOLUTE_DAY: AbsoluteDay =
    AbsoluteDay::new(absolute_from_parts(MAX_YEAR + 1, TISHRI, MIN_DAY) - 1);

/// True for the 3rd, 6th, 8th, 11th, 14th, 17th and 19th years of each
/// Metonic cycle.
pub const fn is_leap_year(year: u16) -> bool {
    (METONIC_CYCLE_LEAP_YEARS * year as i64 + 1) % METONIC_CYCLE_YEARS < METONIC_CYCLE_LEAP_YEARS
}

/// Adar II in leap years, Adar otherwise.
pub const fn last_month_of_year(year: u16) -> HebrewMonth {
    if is_leap_year(year) {
        HebrewMonth::AdarII
    } else {
        HebrewMonth::Adar
    }
}

/// Days from the Sunday before the epoch to 1 Tishri of `year`.
///
/// Locates the molad of Tishri, then applies the postponements in order:
/// first the molad-time rules, then the weekday rule on their result.
pub const fn elapsed_days(year: Year) -> i64 {
    new_year_day(year.get())
}

/// 353, 354 or 355 days in a common year; 383, 384 or 385 in a leap year.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub const fn days_in_year(year: Year) -> u16 {
    year_length(year.get()) as u16
}

pub const fn has_long_heshvan(year: Year) -> bool {
    long_heshvan(year.get())
}

pub const fn has_short_kislev(year: Year) -> bool {
    short_kislev(year.get())
}

/// Length class of a Hebrew year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum YearKind {
    /// Short Kislev (353 or 383 days)
    Deficient,
    /// Neither variable month changed (354 or 384 days)
    Regular,
    /// Long Heshvan (355 or 385 days)
    Complete,
}

pub const fn year_kind(year: Year) -> YearKind {
    if has_short_kislev(year) {
        YearKind::Deficient
    } else if has_long_heshvan(year) {
        YearKind::Complete
    } else {
        YearKind::Regular
    }
}

/// Number of days in `month` of `year`, which is also its last day.
pub const fn last_day_of_month(year: Year, month: HebrewMonth) -> u8 {
    month_length(year.get(), month.get())
}

// Unchecked forms below take `1..=MAX_YEAR + 1`, the extra year bounding
// the search in `from_absolute`.

const fn new_year_day(year: u16) -> i64 {
    let prior_years = year as i64 - 1;
    let cycle_year = prior_years % METONIC_CYCLE_YEARS;

    let months_elapsed = METONIC_CYCLE_MONTHS * (prior_years / METONIC_CYCLE_YEARS)
        + 12 * cycle_year
        + (METONIC_CYCLE_LEAP_YEARS * cycle_year + 1) / METONIC_CYCLE_YEARS;

    let parts_elapsed = EPOCH_MOLAD_PARTS + LUNATION_EXTRA_PARTS * (months_elapsed % PARTS_PER_HOUR);
    let hours_elapsed = EPOCH_MOLAD_HOURS
        + 12 * months_elapsed
        + LUNATION_EXTRA_PARTS * (months_elapsed / PARTS_PER_HOUR)
        + parts_elapsed / PARTS_PER_HOUR;
    let conjunction_day = 1 + 29 * months_elapsed + hours_elapsed / HOURS_PER_DAY;
    let conjunction_parts =
        PARTS_PER_HOUR * (hours_elapsed % HOURS_PER_DAY) + parts_elapsed % PARTS_PER_HOUR;

    let conjunction_weekday = Weekday::from_day_number(conjunction_day);
    let postponed = conjunction_parts >= MOLAD_ZAKEN_PARTS
        || (matches!(conjunction_weekday, Weekday::Tuesday)
            && conjunction_parts >= GATARAD_PARTS
            && !is_leap_year(year))
        || (matches!(conjunction_weekday, Weekday::Monday)
            && conjunction_parts >= BETUTAKPAT_PARTS
            && is_leap_year(year - 1));
    let postponed_day = if postponed {
        conjunction_day + 1
    } else {
        conjunction_day
    };

    if matches!(
        Weekday::from_day_number(postponed_day),
        Weekday::Sunday | Weekday::Wednesday | Weekday::Friday
    ) {
        postponed_day + 1
    } else {
        postponed_day
    }
}

const fn year_length(year: u16) -> i64 {
    new_year_day(year + 1) - new_year_day(year)
}

const fn long_heshvan(year: u16) -> bool {
    year_length(year) % 10 == 5
}

const fn short_kislev(year: u16) -> bool {
    year_length(year) % 10 == 3
}

const fn month_length(year: u16, month: u8) -> u8 {
    match month {
        2 | 4 | 6 | 10 | 13 => 29,
        8 if !long_heshvan(year) => 29,
        9 if short_kislev(year) => 29,
        12 if !is_leap_year(year) => 29,
        _ => 30,
    }
}

/// Absolute day of an unchecked `year/month/day`.
///
/// Months before Tishri belong to the end of the civil year, so they sit
/// after every month from Tishri onward.
const fn absolute_from_parts(year: u16, month: u8, day: u8) -> i64 {
    let mut day_in_year = day as i64;
    let mut m = TISHRI;
    if month < TISHRI {
        let last_month = last_month_of_year(year).get();
        while m <= last_month {
            day_in_year += month_length(year, m) as i64;
            m += 1;
        }
        m = NISAN;
    }
    while m < month {
        day_in_year += month_length(year, m) as i64;
        m += 1;
    }

    day_in_year + new_year_day(year) + HEBREW_EPOCH
}

/// A validated date on the Hebrew calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HebrewDate {
    year: Year,
    month: HebrewMonth,
    day: Day,
}

impl HebrewDate {
    /// Creates a date, checking the month against the year (Adar II only
    /// exists in leap years) and the day against the length of its month.
    ///
    /// # Errors
    /// Returns the `DateError` variant naming the first invalid component.
    pub fn new(year: u16, month: u8, day: u8) -> Result<Self, DateError> {
        let year_typed = Year::new(year)?;
        let last_month = last_month_of_year(year).get();
        if !(1..=last_month).contains(&month) {
            return Err(DateError::InvalidMonth {
                month,
                last: last_month,
            });
        }
        let month_typed = HebrewMonth::new(month)?;
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

    pub const fn month_typed(&self) -> HebrewMonth {
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
    /// approximate year, then month by month from Tishri or Nisan.
    ///
    /// # Errors
    /// Returns `DateError::OutOfRange` for days before 1 Tishri 1 or after
    /// the last day of `MAX_YEAR`.
    pub fn from_absolute(day: AbsoluteDay) -> Result<Self, DateError> {
        let out_of_range = || DateError::OutOfRange {
            day,
            calendar: CALENDAR_NAME,
        };
        if !(FIRST_ABSOLUTE_DAY..=LAST_ABSOLUTE_DAY).contains(&day) {
            return Err(out_of_range());
        }
        let target = day.get();

        // Approximation from below, then forward by whole years.
        let approx = u16::try_from((target - HEBREW_EPOCH) / 366).map_err(|_| out_of_range())?;
        let mut year = approx;
        while target >= absolute_from_parts(year + 1, TISHRI, MIN_DAY) {
            year += 1;
        }

        let mut month = if target < absolute_from_parts(year, NISAN, MIN_DAY) {
            TISHRI
        } else {
            NISAN
        };
        while target > absolute_from_parts(year, month, month_length(year, month)) {
            month += 1;
        }

        let day_of_month = target - absolute_from_parts(year, month, MIN_DAY) + 1;
        trace!(%day, approx, year, month, day_of_month, "resolved hebrew date");

        let day_of_month = u8::try_from(day_of_month).map_err(|_| out_of_range())?;
        Self::new(year, month, day_of_month)
    }

    /// Position of the month within the civil year, Tishri first.
    const fn civil_month_index(&self) -> u8 {
        let month = self.month.get();
        if month >= TISHRI {
            month - TISHRI
        } else {
            month + HebrewMonth::AdarII.get()
        }
    }
}

impl PartialOrd for HebrewDate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for HebrewDate {
    /// Chronological order: Nisan..Elul come after Tishri..Adar II of the
    /// same year.
    fn cmp(&self, other: &Self) -> Ordering {
        (self.year, self.civil_month_index(), self.day).cmp(&(
            other.year,
            other.civil_month_index(),
            other.day,
        ))
    }
}

impl fmt::Display for HebrewDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{DATE_SEPARATOR}{}{DATE_SEPARATOR}{}",
            self.year,
            self.month.get(),
            self.day
        )
    }
}

impl FromStr for HebrewDate {
    type Err = DateError;

    /// Parses `year/month/day`, with months numbered from Nisan.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (year, month, day) = split_components(s)?;
        Self::new(year, month, day)
    }
}

impl TryFrom<(u16, u8, u8)> for HebrewDate {
    type Error = DateError;

    fn try_from((year, month, day): (u16, u8, u8)) -> Result<Self, Self::Error> {
        Self::new(year, month, day)
    }
}

impl Serialize for HebrewDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for HebrewDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
