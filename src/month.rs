//! Calendar year-month token and its total order.
//!
//! Every time-varying series in the budget is keyed by a [`Month`]. The
//! wire form is the unpadded `"<year>-<month>"` token, so months can key
//! JSON maps directly.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Datelike, Utc};
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

/// A calendar (year, month) pair ordered by year, then month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Month {
    pub year: i32,
    /// 1-based calendar month, always in `1..=12`.
    pub month: u32,
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("Invalid month token: {0}")]
pub struct ParseMonthError(String);

impl Month {
    pub fn new(year: i32, month: u32) -> Self {
        Self { year, month }
    }

    /// The following month, rolling into January of the next year.
    pub fn next(self) -> Self {
        if self.month == 12 {
            Self {
                year: self.year + 1,
                month: 1,
            }
        } else {
            Self {
                year: self.year,
                month: self.month + 1,
            }
        }
    }

    /// The preceding month, rolling into December of the previous year.
    pub fn previous(self) -> Self {
        if self.month == 1 {
            Self {
                year: self.year - 1,
                month: 12,
            }
        } else {
            Self {
                year: self.year,
                month: self.month - 1,
            }
        }
    }

    /// Derives the month of a point-in-time instant, taken as epoch
    /// milliseconds on the UTC calendar.
    pub fn from_timestamp_millis(millis: i64) -> Self {
        let instant = DateTime::<Utc>::from_timestamp_millis(millis).unwrap_or_default();
        Self {
            year: instant.year(),
            month: instant.month(),
        }
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.year, self.month)
    }
}

impl FromStr for Month {
    type Err = ParseMonthError;

    fn from_str(token: &str) -> Result<Self, Self::Err> {
        let invalid = || ParseMonthError(token.to_string());
        let (year, month) = token.split_once('-').ok_or_else(invalid)?;
        let year = year.parse().map_err(|_| invalid())?;
        let month = month.parse().map_err(|_| invalid())?;
        if !(1..=12).contains(&month) {
            return Err(invalid());
        }
        Ok(Self { year, month })
    }
}

impl Serialize for Month {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Month {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let token = String::deserialize(deserializer)?;
        token.parse().map_err(de::Error::custom)
    }
}
