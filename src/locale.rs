//! Locale conventions for currency rendering
//!
//! A [`Locale`] captures the handful of conventions needed to render and
//! recover a currency amount: the symbol, its placement, and the digit
//! separators. Converters accept an injected locale so tests stay
//! deterministic; [`Locale::current`] resolves one from the host environment.

/// Currency rendering conventions for a single locale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Locale {
    symbol: &'static str,
    decimal_sep: char,
    group_sep: char,
    symbol_first: bool,
}

impl Locale {
    /// United States: `$1,234.50`
    pub fn en_us() -> Self {
        Self {
            symbol: "$",
            decimal_sep: '.',
            group_sep: ',',
            symbol_first: true,
        }
    }

    /// Mexico: `$1,234.50`
    pub fn es_mx() -> Self {
        Self {
            symbol: "$",
            decimal_sep: '.',
            group_sep: ',',
            symbol_first: true,
        }
    }

    /// Germany: `1.234,50 €`
    pub fn de_de() -> Self {
        Self {
            symbol: "€",
            decimal_sep: ',',
            group_sep: '.',
            symbol_first: false,
        }
    }

    /// France: `1 234,50 €`
    pub fn fr_fr() -> Self {
        Self {
            symbol: "€",
            decimal_sep: ',',
            group_sep: ' ',
            symbol_first: false,
        }
    }

    /// Resolves the locale from the host environment.
    ///
    /// Consults `LC_ALL`, `LC_MONETARY`, then `LANG` (POSIX precedence) and
    /// maps the first recognized tag. Falls back to [`Locale::en_us`] when
    /// nothing matches, so callers always get a usable locale.
    pub fn current() -> Self {
        for var in ["LC_ALL", "LC_MONETARY", "LANG"] {
            if let Ok(tag) = std::env::var(var) {
                if let Some(locale) = Self::from_tag(&tag) {
                    return locale;
                }
            }
        }
        Self::en_us()
    }

    /// Maps a BCP 47 / POSIX locale tag (e.g. `en_US.UTF-8`, `de-DE`) to a
    /// known locale. Returns `None` for unrecognized tags.
    pub fn from_tag(tag: &str) -> Option<Self> {
        let base = tag.split('.').next().unwrap_or("");
        match base.replace('-', "_").to_ascii_lowercase().as_str() {
            "en_us" => Some(Self::en_us()),
            "es_mx" => Some(Self::es_mx()),
            "de_de" => Some(Self::de_de()),
            "fr_fr" => Some(Self::fr_fr()),
            _ => None,
        }
    }

    /// The currency symbol, e.g. `$`.
    pub fn symbol(&self) -> &'static str {
        self.symbol
    }

    /// The separator between integer and fractional digits.
    pub fn decimal_separator(&self) -> char {
        self.decimal_sep
    }

    /// The separator between 3-digit integer groups.
    pub fn grouping_separator(&self) -> char {
        self.group_sep
    }

    /// Whether the symbol precedes the digits (`$1.00`) or follows them
    /// (`1,00 €`).
    pub fn symbol_first(&self) -> bool {
        self.symbol_first
    }
}

impl Default for Locale {
    fn default() -> Self {
        Self::en_us()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_tag_recognizes_posix_and_bcp47_forms() {
        assert_eq!(Locale::from_tag("en_US.UTF-8"), Some(Locale::en_us()));
        assert_eq!(Locale::from_tag("en-US"), Some(Locale::en_us()));
        assert_eq!(Locale::from_tag("de_DE"), Some(Locale::de_de()));
        assert_eq!(Locale::from_tag("fr-FR.ISO8859-1"), Some(Locale::fr_fr()));
    }

    #[test]
    fn from_tag_rejects_unknown_tags() {
        assert_eq!(Locale::from_tag("ja_JP"), None);
        assert_eq!(Locale::from_tag(""), None);
        assert_eq!(Locale::from_tag("C"), None);
    }

    #[test]
    fn default_is_en_us() {
        assert_eq!(Locale::default(), Locale::en_us());
    }
}
