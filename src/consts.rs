/// Maximum valid year (inclusive), in either calendar
pub const MAX_YEAR: u16 = 9999;

/// Maximum valid Gregorian month (December)
pub const MAX_MONTH: u8 = 12;

/// First day of month, used for lower bounds
pub const MIN_DAY: u8 = 1;

/// Longest month in either calendar
pub const MAX_DAY: u8 = 31;

/// Month number for January
pub const JANUARY: u8 = 1;
/// Month number for February
pub const FEBRUARY: u8 = 2;
/// Month number for December
pub const DECEMBER: u8 = 12;

/// Days in February for leap years
pub const FEBRUARY_DAYS_LEAP: u8 = 29;

/// Maximum days in each month (index 0 is unused, months are 1-indexed)
/// February shows 28 days (non-leap year default)
pub const DAYS_IN_MONTH: [u8; 13] = [
    0,  // index 0 unused (months are 1-indexed)
    31, // January
    28, // February (non-leap, adjusted by is_leap_year check)
    31, // March
    30, // April
    31, // May
    30, // June
    31, // July
    31, // August
    30, // September
    31, // October
    30, // November
    31, // December
];

/// Leap year occurs every 4 years
pub(crate) const LEAP_YEAR_CYCLE: u16 = 4;
/// Century years are not leap years unless...
pub(crate) const CENTURY_CYCLE: u16 = 100;
/// ...they are divisible by 400 (Gregorian calendar correction)
pub(crate) const GREGORIAN_CYCLE: u16 = 400;

/// Absolute day of the Sunday before 1 Tishri of Hebrew year 1
pub const HEBREW_EPOCH: i64 = -1_373_429;

/// Years in the Metonic cycle
pub const METONIC_CYCLE_YEARS: i64 = 19;
/// Months in one Metonic cycle (12 common years of 12, 7 leap years of 13)
pub const METONIC_CYCLE_MONTHS: i64 = 235;
/// Leap years in one Metonic cycle
pub const METONIC_CYCLE_LEAP_YEARS: i64 = 7;

/// Halakim (parts) in one hour
pub const PARTS_PER_HOUR: i64 = 1080;
/// Hours in one day
pub const HOURS_PER_DAY: i64 = 24;
/// Mean lunation beyond 29 days 12 hours, in parts
pub const LUNATION_EXTRA_PARTS: i64 = 793;
/// Molad of the epoch (BaHaRaD): 5 hours...
pub(crate) const EPOCH_MOLAD_HOURS: i64 = 5;
/// ...and 204 parts
pub(crate) const EPOCH_MOLAD_PARTS: i64 = 204;

/// Molad at or after noon (18 hours into the day) postpones the new year
pub const MOLAD_ZAKEN_PARTS: i64 = 18 * PARTS_PER_HOUR;
/// Tuesday molad at 9h 204p or later in a common year
pub const GATARAD_PARTS: i64 = 9 * PARTS_PER_HOUR + 204;
/// Monday molad at 15h 589p or later following a leap year
pub const BETUTAKPAT_PARTS: i64 = 15 * PARTS_PER_HOUR + 589;

/// Days in a week
pub const DAYS_PER_WEEK: i64 = 7;

/// Date component separator used by `Display` and `FromStr` (`year/month/day`)
pub const DATE_SEPARATOR: char = '/';
