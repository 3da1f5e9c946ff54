//! Month-year identifier codec
//!
//! A [`MonthYearId`] is a 6-character `YYYYMM` string key: 4-digit
//! zero-padded year followed by 2-digit zero-padded month. It sorts
//! chronologically as plain text, which makes it a stable lookup key for
//! monthly grouping.
//!
//! The conversion is lossy: the day component of the source date is
//! discarded irrecoverably, and [`MonthYearId::to_date`] materializes the
//! first day of the month.

use crate::date::{self, DateError, DateFormat};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum MonthYearIdError {
    #[error("invalid month-year identifier length: expected 6 characters, got {0}")]
    InvalidLength(usize),
}

/// A 6-character `YYYYMM` identifier, e.g. `"202410"` for October 2024.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct MonthYearId(String);

impl MonthYearId {
    /// Derives the identifier for `date`, discarding its day component.
    ///
    /// Propagates [`DateError`] when the month or 4-digit year cannot be
    /// resolved for the date.
    pub fn from_date(date: NaiveDate) -> Result<Self, DateError> {
        date::month_year_id(date).map(Self)
    }

    /// Resolves the identifier back to a date on the first day of its month.
    ///
    /// Returns `None` when the identifier's content does not name a real
    /// year/month combination (e.g. month `"13"` or non-digit characters).
    pub fn to_date(&self) -> Option<NaiveDate> {
        let year: String = self.0.chars().take(4).collect();
        let month: String = self.0.chars().skip(4).collect();
        date::parse(&format!("{year}/{month}"), &DateFormat::YearSlashMonth)
    }

    /// The identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for MonthYearId {
    type Err = MonthYearIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let length = s.chars().count();
        if length != 6 {
            return Err(MonthYearIdError::InvalidLength(length));
        }
        Ok(Self(s.to_string()))
    }
}

impl TryFrom<String> for MonthYearId {
    type Error = MonthYearIdError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<MonthYearId> for String {
    fn from(id: MonthYearId) -> Self {
        id.0
    }
}

impl fmt::Display for MonthYearId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
