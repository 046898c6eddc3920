//! Pixel date keys in `YYYYMMDD` form.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Local, NaiveDate, TimeZone};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::types::PixelaError;

const KEY_FORMAT: &str = "%Y%m%d";

/// Calendar date identifying a pixel within a graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PixelDate(NaiveDate);

impl PixelDate {
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Option<Self> {
        if !(0..=9999).contains(&year) {
            return None;
        }
        NaiveDate::from_ymd_opt(year, month, day).map(Self)
    }

    /// The calendar date of `moment` in its own timezone.
    pub fn from_datetime<Tz: TimeZone>(moment: &DateTime<Tz>) -> Self {
        Self(moment.date_naive())
    }

    /// Today's date on the local clock, read at call time.
    pub fn today() -> Self {
        Self::from_datetime(&Local::now())
    }

    pub fn naive(&self) -> NaiveDate {
        self.0
    }

    /// The 8-character key sent to the service.
    pub fn key(&self) -> String {
        self.0.format(KEY_FORMAT).to_string()
    }
}

impl fmt::Display for PixelDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(KEY_FORMAT))
    }
}

impl FromStr for PixelDate {
    type Err = PixelaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let compact = match s.len() {
            8 => s.to_string(),
            10 if s.as_bytes()[4] == b'-' && s.as_bytes()[7] == b'-' => s.replace('-', ""),
            _ => String::new(),
        };

        let parsed = if compact.len() == 8 && compact.bytes().all(|b| b.is_ascii_digit()) {
            let year = compact[0..4].parse().ok();
            let month = compact[4..6].parse().ok();
            let day = compact[6..8].parse().ok();
            match (year, month, day) {
                (Some(y), Some(m), Some(d)) => Self::from_ymd(y, m, d),
                _ => None,
            }
        } else {
            None
        };

        parsed.ok_or_else(|| PixelaError::InvalidDate(s.to_string()))
    }
}

impl Serialize for PixelDate {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.key())
    }
}

impl<'de> Deserialize<'de> for PixelDate {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}
