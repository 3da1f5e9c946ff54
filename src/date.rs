//! Date conversion between calendar values and formatted strings
//!
//! Parsing distinguishes two outcomes: a string that does not match the
//! pattern yields `None` (well-formed input, no match), while structural
//! problems in derived operations surface as [`DateError`]. Patterns that
//! omit calendar fields are completed with fixed defaults when a concrete
//! date is materialized: year 2000 for patterns without a year, day 1 for
//! patterns without a day.

use chrono::format::{Parsed, StrftimeItems};
use chrono::{Datelike, NaiveDate};
use std::fmt::Write as _;
use thiserror::Error;

/// Year substituted when a pattern carries no year field.
const FALLBACK_YEAR: i64 = 2000;

/// Day substituted when a pattern carries no day field.
const FALLBACK_DAY: i64 = 1;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DateError {
    #[error("cannot resolve a month component for the date")]
    CannotGetMonth,

    #[error("cannot resolve a 4-digit year component for the date")]
    CannotGetYear,
}

/// A date rendering/parsing pattern.
///
/// The named variants cover the formats the crate itself relies on;
/// `Custom` accepts any strftime pattern understood by chrono.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DateFormat {
    /// Full month name and day of month, e.g. `October 15`.
    MonthNameDay,
    /// 4-digit year and 2-digit month separated by a slash, e.g. `2024/10`.
    YearSlashMonth,
    /// A free-form strftime pattern.
    Custom(String),
}

impl DateFormat {
    /// The strftime pattern this format renders and parses with.
    pub fn pattern(&self) -> &str {
        match self {
            DateFormat::MonthNameDay => "%B %d",
            DateFormat::YearSlashMonth => "%Y/%m",
            DateFormat::Custom(pattern) => pattern,
        }
    }
}

/// Parses `raw` against `format` under the proleptic Gregorian calendar.
///
/// Returns `None` when the string does not match the pattern. Fields the
/// pattern does not carry are completed with the documented fallbacks, so
/// `"October 15"` resolves to 2000-10-15 and `"2024/10"` to 2024-10-01.
/// Never panics.
pub fn parse(raw: &str, format: &DateFormat) -> Option<NaiveDate> {
    let mut parsed = Parsed::new();
    chrono::format::parse(&mut parsed, raw.trim(), StrftimeItems::new(format.pattern())).ok()?;
    resolve(&parsed)
}

/// Renders `date` with `format`.
///
/// Never fails: a custom pattern chrono cannot render yields an empty
/// string rather than a panic.
pub fn format(date: NaiveDate, format: &DateFormat) -> String {
    let mut out = String::new();
    if write!(out, "{}", date.format(format.pattern())).is_err() {
        out.clear();
    }
    out
}

/// Derives the 6-character `YYYYMM` identifier for `date`.
///
/// The month must fall in 1..=12 and the year must fit a 4-digit zero-padded
/// rendering (0..=9999); each is checked and surfaced rather than assumed.
pub fn month_year_id(date: NaiveDate) -> Result<String, DateError> {
    let month = date.month();
    if !(1..=12).contains(&month) {
        return Err(DateError::CannotGetMonth);
    }
    let year = date.year();
    if !(0..=9999).contains(&year) {
        return Err(DateError::CannotGetYear);
    }
    Ok(format!("{year:04}{month:02}"))
}

/// Materializes a calendar date from parsed fields, trying the fallbacks for
/// whichever of year/day the pattern left unset. `set_*` rejects a fallback
/// that conflicts with an actually-parsed field, so complete inputs win.
fn resolve(parsed: &Parsed) -> Option<NaiveDate> {
    for (fill_year, fill_day) in [(false, false), (false, true), (true, false), (true, true)] {
        let mut candidate = parsed.clone();
        if fill_year && candidate.set_year(FALLBACK_YEAR).is_err() {
            continue;
        }
        if fill_day && candidate.set_day(FALLBACK_DAY).is_err() {
            continue;
        }
        if let Ok(date) = candidate.to_naive_date() {
            return Some(date);
        }
    }
    None
}
