//! Primitive value types shared across models.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveTime, TimeDelta, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Format of calendar dates on the wire.
const DATE_FORMAT: &str = "%Y-%m-%d";

/// Offset calendar dates are anchored to, in seconds west of UTC.
///
/// Scryfall documents dates as "in UTC-8" rather than UTC, so a card
/// released on `2024-02-09` is represented as midnight at UTC−08:00.
const DATE_OFFSET_WEST_SECS: i32 = 8 * 60 * 60;

/// A calendar date such as a card's `released_at`.
///
/// Parsed from `YYYY-MM-DD` and anchored at midnight UTC−08:00. Use
/// [`naive`](Self::naive) for the plain calendar date.
///
/// # Example
///
/// ```
/// use scryfall_rs::Date;
///
/// let date: Date = "2024-02-09".parse().unwrap();
/// assert_eq!(date.to_string(), "2024-02-09");
/// assert_eq!(date.to_utc().to_rfc3339(), "2024-02-09T08:00:00+00:00");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Date(DateTime<FixedOffset>);

impl Date {
    fn offset() -> FixedOffset {
        FixedOffset::west_opt(DATE_OFFSET_WEST_SECS).expect("offset within a day")
    }

    /// Anchor a calendar date at midnight UTC−08:00.
    pub fn from_naive(date: NaiveDate) -> Self {
        let midnight = date.and_time(NaiveTime::MIN);
        let utc = midnight + TimeDelta::seconds(i64::from(DATE_OFFSET_WEST_SECS));
        Self(DateTime::from_naive_utc_and_offset(utc, Self::offset()))
    }

    /// The calendar date.
    pub fn naive(&self) -> NaiveDate {
        self.0.date_naive()
    }

    /// Midnight UTC−08:00 of this date.
    pub fn as_datetime(&self) -> DateTime<FixedOffset> {
        self.0
    }

    /// The same instant expressed in UTC.
    pub fn to_utc(&self) -> DateTime<Utc> {
        self.0.with_timezone(&Utc)
    }
}

impl FromStr for Date {
    type Err = chrono::ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        NaiveDate::parse_from_str(s, DATE_FORMAT).map(Self::from_naive)
    }
}

impl fmt::Display for Date {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(DATE_FORMAT))
    }
}

impl Serialize for Date {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Date {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
