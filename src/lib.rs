//! valueconv - conversion utilities between human-facing representations
//! and canonical typed values
//!
//! Four independent, side-effect-free codecs, each pairing a parse operation
//! with a format/encode operation over one value domain:
//!
//! - [`date`]: calendar dates to formatted strings and back, plus derivation
//!   of a compact month-year key;
//! - [`currency`]: `f64` amounts to localized currency strings and back;
//! - [`month_year`]: the 6-character `YYYYMM` identifier to dates and back;
//! - [`color`]: RGBA colors to a byte payload and back, plus one-way
//!   construction from a loosely-typed map.
//!
//! Every operation is synchronous, stateless, and deterministic, and every
//! failure surfaces as a domain-specific error rather than a substituted
//! default.

pub mod color;
pub mod currency;
pub mod date;
pub mod locale;
pub mod month_year;

pub use color::{Color, ColorError, RgbChannels};
pub use currency::{CurrencyConverter, CurrencyError};
pub use date::{DateError, DateFormat};
pub use locale::Locale;
pub use month_year::{MonthYearId, MonthYearIdError};
