/// Number of characters in a `YYYYMMDD` string date
pub const STRING_DATE_LEN: usize = 8;

/// Width of the year field in a string date
pub const YEAR_DIGITS: usize = 4;
/// Width of the month and day fields in a string date
pub const FIELD_DIGITS: usize = 2;

/// Sentinel returned for "no valid date". Month `00` never parses.
pub const INVALID_STRING_DATE: &str = "00000000";

/// Smallest year a four-digit string date can hold
pub const MIN_YEAR: i32 = 0;
/// Largest year a four-digit string date can hold
pub const MAX_YEAR: i32 = 9999;

/// Months in a year
pub const MONTHS_PER_YEAR: i32 = 12;

/// First day of month, used for lower bounds
pub const MIN_DAY: u8 = 1;

/// Separator inserted by the ISO 8601 rewrite
pub const ISO_SEPARATOR: char = '-';

/// Locale tag of the shipped label tables
pub const JA_JP: &str = "ja-JP";

/// Short weekday names, Sunday first
pub const JA_WEEKDAYS: [&str; 7] = ["日", "月", "火", "水", "木", "金", "土"];
/// Suffix appended to weekday names in the long style
pub const JA_WEEKDAY_SUFFIX: &str = "曜日";

/// Month numerals, January first
pub const JA_MONTHS: [&str; 12] = ["1", "2", "3", "4", "5", "6", "7", "8", "9", "10", "11", "12"];

/// Standalone suffixes for single-field renderings
pub const JA_YEAR_SUFFIX: &str = "年";
pub const JA_MONTH_SUFFIX: &str = "月";
pub const JA_DAY_SUFFIX: &str = "日";

/// Literal between numeric fields
pub const JA_DATE_SEPARATOR: &str = "/";

/// Index of Sunday, the first column of the calendar
pub const SUNDAY: u8 = 0;
