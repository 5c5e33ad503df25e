//! Filename parsing for body-worn-camera clips.
//!
//! Clip names follow a fixed, underscore-delimited convention:
//!
//! ```text
//! <first>_<last>_<MM>_<DD>_<YYYY>_<HH>_<mm>_<SS>_<case>.<ext>
//! ```
//!
//! The case number is everything between the seconds field and the final
//! extension, so it may itself contain `.` or `_` characters.

use crate::error::{CoreError, CoreResult};

use chrono::{NaiveDate, NaiveDateTime};
use regex::Regex;
use std::fmt;
use std::sync::LazyLock;

static FILE_NAME_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?x)
        ^
        (?P<first_name>[^_]+) _
        (?P<last_name>[^_]+) _
        (?P<month>[0-9]{2}) _
        (?P<day>[0-9]{2}) _
        (?P<year>[0-9]{4}) _
        (?P<hour>[0-9]{2}) _
        (?P<minute>[0-9]{2}) _
        (?P<second>[0-9]{2}) _
        (?P<case_number>.+)
        \.
        (?P<extension>[A-Za-z0-9]+)
        $
        ",
    )
    .expect("clip filename pattern is a valid regex")
});

/// Person a clip belongs to, used to partition clips for gap detection.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Identity {
    pub first_name: String,
    pub last_name: String,
}

impl Identity {
    pub fn new(first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
        }
    }
}

impl fmt::Display for Identity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.first_name, self.last_name)
    }
}

/// Structured fields recovered from a clip's file name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedName {
    pub first_name: String,
    pub last_name: String,
    pub capture_time: NaiveDateTime,
    pub case_number: String,
    pub extension: String,
}

impl ParsedName {
    pub fn identity(&self) -> Identity {
        Identity::new(&self.first_name, &self.last_name)
    }
}

/// Parses a clip file name into its components.
///
/// Fails with [`CoreError::MalformedFilename`] when the name does not follow
/// the naming convention or when the date/time fields do not form a valid
/// calendar timestamp.
///
/// # Examples
///
/// ```rust
/// use bwc_core::naming::parse_file_name;
///
/// let parsed = parse_file_name("Alice_Smith_01_01_2024_10_00_00_CASE1.mp4").unwrap();
/// assert_eq!(parsed.first_name, "Alice");
/// assert_eq!(parsed.case_number, "CASE1");
/// assert_eq!(parsed.capture_time.to_string(), "2024-01-01 10:00:00");
/// ```
pub fn parse_file_name(file_name: &str) -> CoreResult<ParsedName> {
    let malformed = || CoreError::MalformedFilename(file_name.to_string());

    let caps = FILE_NAME_PATTERN.captures(file_name).ok_or_else(malformed)?;
    let field = |name: &str| caps.name(name).map(|m| m.as_str()).unwrap_or_default();
    let number = |name: &str| field(name).parse::<u32>().map_err(|_| malformed());

    let year = field("year").parse::<i32>().map_err(|_| malformed())?;
    let (month, day) = (number("month")?, number("day")?);
    let (hour, minute, second) = (number("hour")?, number("minute")?, number("second")?);
    let capture_time = NaiveDate::from_ymd_opt(year, month, day)
        .and_then(|date| date.and_hms_opt(hour, minute, second))
        .ok_or_else(malformed)?;

    Ok(ParsedName {
        first_name: field("first_name").to_string(),
        last_name: field("last_name").to_string(),
        capture_time,
        case_number: field("case_number").to_string(),
        extension: field("extension").to_string(),
    })
}
