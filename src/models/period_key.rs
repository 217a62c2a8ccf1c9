use crate::types::{Month, UnixTimestamp, Year};
use crate::Error;
use chrono::{DateTime, Datelike};
use std::fmt;
use std::str::FromStr;

/// A calendar (month, year) bucket.
///
/// The canonical text form is `"<month>-<year>"` without zero padding, so month 3 of 2024
/// is rendered as `"3-2024"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PeriodKey {
    // Field order gives chronological ordering when derived.
    year: Year,
    month: Month,
}

impl PeriodKey {
    pub fn new(month: Month, year: Year) -> Result<Self, Error> {
        if !(1..=12).contains(&month) {
            return Err(Error::InvalidArgument(format!(
                "Month must be between 1 and 12, got {}",
                month
            )));
        }

        Ok(PeriodKey { year, month })
    }

    /// Derives the period a message belongs to from its arrival time (UTC).
    pub fn from_timestamp(timestamp: UnixTimestamp) -> Result<Self, Error> {
        let date_time = DateTime::from_timestamp(timestamp, 0).ok_or_else(|| {
            Error::InvalidArgument(format!("Timestamp {} is out of range", timestamp))
        })?;

        PeriodKey::new(date_time.month(), date_time.year())
    }

    pub fn month(&self) -> Month {
        self.month
    }

    pub fn year(&self) -> Year {
        self.year
    }
}

impl fmt::Display for PeriodKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.month, self.year)
    }
}

impl FromStr for PeriodKey {
    type Err = Error;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        let (month, year) = text
            .split_once('-')
            .ok_or_else(|| Error::ParserError(format!("Malformed period key: {}", text)))?;

        let month = month
            .parse::<Month>()
            .map_err(|e| Error::ParserError(format!("Invalid month in {}: {}", text, e)))?;
        let year = year
            .parse::<Year>()
            .map_err(|e| Error::ParserError(format!("Invalid year in {}: {}", text, e)))?;

        PeriodKey::new(month, year)
    }
}
