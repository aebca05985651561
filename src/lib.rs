//! Date conversion between the Gregorian and Hebrew calendars.
//!
//! Each calendar maps its `year/month/day` dates to and from an
//! [`AbsoluteDay`], a day count where day 1 is January 1 of Gregorian year 1.
//! Converting between calendars goes through that count and nothing else.
//!
//! ```
//! use luach::{GregorianDate, HebrewDate, convert};
//!
//! let date = GregorianDate::new(2015, 5, 13).unwrap();
//! let conversion = convert::<_, HebrewDate>(&date).unwrap();
//!
//! assert_eq!(conversion.absolute().get(), 735_731);
//! assert_eq!(conversion.target().to_string(), "5775/2/24");
//! ```
//!
//! Hebrew months are numbered from Nisan (1); the year itself begins at
//! Tishri (7), and leap years add Adar II (13).

mod absolute;
mod consts;
mod convert;
mod date_text;
mod error;
pub mod gregorian;
pub mod hebrew;
mod prelude;
mod types;

pub use absolute::{AbsoluteDay, Weekday};
pub use consts::*;
pub use convert::{CalendarDate, Conversion, convert};
pub use error::DateError;
pub use gregorian::GregorianDate;
pub use hebrew::{HebrewDate, YearKind};
pub use types::{Day, HebrewMonth, Month, Year};
