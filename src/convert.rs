//! Conversion between calendars through the absolute day count.

use std::fmt;

use tracing::debug;

use crate::{AbsoluteDay, DateError, GregorianDate, HebrewDate, gregorian, hebrew};

/// A date on some calendar that maps to and from an [`AbsoluteDay`].
pub trait CalendarDate: Sized + Copy + fmt::Display {
    /// Calendar name as it appears in a conversion report.
    const NAME: &'static str;

    fn to_absolute(&self) -> AbsoluteDay;

    /// # Errors
    /// Returns `DateError::OutOfRange` if the calendar cannot represent `day`.
    fn from_absolute(day: AbsoluteDay) -> Result<Self, DateError>;
}

impl CalendarDate for GregorianDate {
    const NAME: &'static str = gregorian::CALENDAR_NAME;

    fn to_absolute(&self) -> AbsoluteDay {
        Self::to_absolute(self)
    }

    fn from_absolute(day: AbsoluteDay) -> Result<Self, DateError> {
        Self::from_absolute(day)
    }
}

impl CalendarDate for HebrewDate {
    const NAME: &'static str = hebrew::CALENDAR_NAME;

    fn to_absolute(&self) -> AbsoluteDay {
        Self::to_absolute(self)
    }

    fn from_absolute(day: AbsoluteDay) -> Result<Self, DateError> {
        Self::from_absolute(day)
    }
}

/// One completed conversion: the source date, the absolute day it maps to
/// and the date on the target calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Conversion<A, B> {
    source: A,
    absolute: AbsoluteDay,
    target: B,
}

impl<A: CalendarDate, B: CalendarDate> Conversion<A, B> {
    pub const fn source(&self) -> A {
        self.source
    }

    pub const fn absolute(&self) -> AbsoluteDay {
        self.absolute
    }

    pub const fn target(&self) -> B {
        self.target
    }
}

impl<A: CalendarDate, B: CalendarDate> fmt::Display for Conversion<A, B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} on the {} calendar is {} on the {} calendar",
            self.source,
            A::NAME,
            self.target,
            B::NAME
        )
    }
}

/// Converts `date` to calendar `B` via its absolute day.
///
/// # Errors
/// Returns `DateError::OutOfRange` if `B` cannot represent the day.
pub fn convert<A: CalendarDate, B: CalendarDate>(date: &A) -> Result<Conversion<A, B>, DateError> {
    let absolute = date.to_absolute();
    let target = B::from_absolute(absolute)?;
    debug!(
        from = A::NAME,
        to = B::NAME,
        %date,
        %absolute,
        %target,
        "converted date"
    );
    Ok(Conversion {
        source: *date,
        absolute,
        target,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gregorian_to_hebrew_report() {
        let date = GregorianDate::new(2015, 5, 13).unwrap();
        let conversion = convert::<_, HebrewDate>(&date).unwrap();
        assert_eq!(conversion.absolute(), AbsoluteDay::new(735_731));
        assert_eq!(conversion.source(), date);
        assert_eq!(conversion.target(), HebrewDate::new(5775, 2, 24).unwrap());
        assert_eq!(
            conversion.to_string(),
            "2015/5/13 on the Gregorian calendar is 5775/2/24 on the hebrew calendar"
        );
    }

    #[test]
    fn test_hebrew_to_gregorian() {
        let date = HebrewDate::new(5784, 13, 1).unwrap();
        let conversion = convert::<_, GregorianDate>(&date).unwrap();
        assert_eq!(conversion.target(), GregorianDate::new(2024, 3, 11).unwrap());
    }

    #[test]
    fn test_same_calendar_is_identity() {
        let date = GregorianDate::new(1999, 12, 31).unwrap();
        let conversion = convert::<_, GregorianDate>(&date).unwrap();
        assert_eq!(conversion.target(), date);
    }

    #[test]
    fn test_unrepresentable_target() {
        // Before the Hebrew epoch there is no Gregorian year 0 or earlier
        let date = HebrewDate::new(1, 7, 1).unwrap();
        let result = convert::<_, GregorianDate>(&date);
        assert!(matches!(
            result,
            Err(DateError::OutOfRange {
                calendar: "Gregorian",
                ..
            })
        ));

        // Gregorian 9999 is far past Hebrew 9999
        let date = GregorianDate::new(9999, 12, 31).unwrap();
        assert!(convert::<_, HebrewDate>(&date).is_err());
    }
}
