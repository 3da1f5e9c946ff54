//! Currency amount conversion
//!
//! Renders an `f64` amount in a locale's currency style (symbol, 3-digit
//! grouping, exactly 2 fractional digits) and recovers the amount from such a
//! string. Parsing is strict: a missing or misplaced symbol, malformed
//! grouping, or a fractional part that is not exactly 2 digits is rejected
//! rather than guessed at.

use crate::locale::Locale;
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum CurrencyError {
    #[error("cannot render {0} in the locale's currency format")]
    CannotLocalize(f64),

    #[error("cannot parse {0:?} as a currency formatted amount")]
    CannotParse(String),
}

/// Converter between numeric amounts and localized currency strings.
///
/// A converter is a scoped resource: construct one where needed and drop it
/// after the call. It holds no mutable state, so it is also fine to share.
#[derive(Debug, Clone, Copy)]
pub struct CurrencyConverter {
    locale: Locale,
}

impl CurrencyConverter {
    /// Creates a converter bound to the host's current locale.
    pub fn new() -> Self {
        Self::with_locale(Locale::current())
    }

    /// Creates a converter bound to an explicit locale.
    pub fn with_locale(locale: Locale) -> Self {
        Self { locale }
    }

    /// Renders `amount` in the locale's currency style.
    ///
    /// Always produces exactly 2 fractional digits, e.g. `250.0` becomes
    /// `"$250.00"` under [`Locale::en_us`]. Fails with
    /// [`CurrencyError::CannotLocalize`] for NaN or infinite input.
    pub fn format(&self, amount: f64) -> Result<String, CurrencyError> {
        if !amount.is_finite() {
            return Err(CurrencyError::CannotLocalize(amount));
        }

        let digits = format!("{:.2}", amount.abs());
        let (int_part, frac_part) = digits.split_once('.').unwrap_or((digits.as_str(), "00"));
        let sign = if amount < 0.0 && digits != "0.00" { "-" } else { "" };
        let grouped = group_digits(int_part, self.locale.grouping_separator());
        let number = format!("{grouped}{}{frac_part}", self.locale.decimal_separator());

        Ok(if self.locale.symbol_first() {
            format!("{sign}{}{number}", self.locale.symbol())
        } else {
            format!("{sign}{number} {}", self.locale.symbol())
        })
    }

    /// Recovers the numeric amount from a localized currency string.
    ///
    /// Fails with [`CurrencyError::CannotParse`] when the text does not carry
    /// the locale's symbol in its expected position, groups integer digits
    /// incorrectly, or has a fractional part other than exactly 2 digits.
    pub fn parse(&self, text: &str) -> Result<f64, CurrencyError> {
        let cannot_parse = || CurrencyError::CannotParse(text.to_string());

        let trimmed = text.trim();
        let (negative, rest) = match trimmed.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, trimmed),
        };

        let number = if self.locale.symbol_first() {
            rest.strip_prefix(self.locale.symbol()).ok_or_else(cannot_parse)?
        } else {
            let without_symbol = rest.strip_suffix(self.locale.symbol()).ok_or_else(cannot_parse)?;
            without_symbol.strip_suffix(' ').unwrap_or(without_symbol)
        };

        let (int_raw, frac_part) = number
            .split_once(self.locale.decimal_separator())
            .ok_or_else(cannot_parse)?;
        if frac_part.len() != 2 || !frac_part.bytes().all(|b| b.is_ascii_digit()) {
            return Err(cannot_parse());
        }

        let int_digits =
            ungroup_digits(int_raw, self.locale.grouping_separator()).ok_or_else(cannot_parse)?;
        let value: f64 = format!("{int_digits}.{frac_part}")
            .parse()
            .map_err(|_| cannot_parse())?;

        Ok(if negative { -value } else { value })
    }
}

impl Default for CurrencyConverter {
    fn default() -> Self {
        Self::new()
    }
}

/// Inserts the grouping separator every 3 digits, counting from the right.
fn group_digits(digits: &str, separator: char) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    let len = digits.len();
    for (i, c) in digits.chars().enumerate() {
        if i != 0 && (len - i) % 3 == 0 {
            out.push(separator);
        }
        out.push(c);
    }
    out
}

/// Strips grouping separators, validating that every group is well formed:
/// the leading group has 1-3 digits and every later group exactly 3.
fn ungroup_digits(raw: &str, separator: char) -> Option<String> {
    if raw.is_empty() {
        return None;
    }
    if !raw.contains(separator) {
        return raw
            .bytes()
            .all(|b| b.is_ascii_digit())
            .then(|| raw.to_string());
    }

    let mut digits = String::with_capacity(raw.len());
    for (i, group) in raw.split(separator).enumerate() {
        let len_ok = if i == 0 {
            (1..=3).contains(&group.len())
        } else {
            group.len() == 3
        };
        if !len_ok || !group.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        digits.push_str(group);
    }
    Some(digits)
}
