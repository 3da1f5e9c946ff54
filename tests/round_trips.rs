//! Round-trip properties across the conversion domains
//!
//! These tests exercise the guarantees callers lean on: formatted values
//! parse back to what was formatted (at the pattern's granularity), and
//! encoded payloads decode to the exact source value.

use chrono::{Datelike, NaiveDate};
use proptest::prelude::*;
use valueconv::{Color, CurrencyConverter, DateFormat, Locale, MonthYearId};

fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

// =============================================================================
// Worked examples
// =============================================================================

#[test]
fn october_2024_round_trips_through_its_identifier() {
    let date = ymd(2024, 10, 15);
    let id = MonthYearId::from_date(date).unwrap();
    assert_eq!(id.as_str(), "202410");

    let back = id.to_date().unwrap();
    assert_eq!((back.year(), back.month()), (2024, 10));
    // The day component is lost: resolution is to the first of the month.
    assert_eq!(back.day(), 1);
}

#[test]
fn dollar_amount_round_trips_through_its_rendering() {
    let converter = CurrencyConverter::with_locale(Locale::en_us());
    let rendered = converter.format(250.0).unwrap();
    assert_eq!(rendered, "$250.00");
    assert_eq!(converter.parse(&rendered).unwrap(), 250.0);
}

// =============================================================================
// Properties
// =============================================================================

proptest! {
    #[test]
    fn month_name_day_round_trips_at_day_granularity(
        year in 0i32..=9999,
        month in 1u32..=12,
        day in 1u32..=28,
    ) {
        let date = ymd(year, month, day);
        let rendered = valueconv::date::format(date, &DateFormat::MonthNameDay);
        let parsed = valueconv::date::parse(&rendered, &DateFormat::MonthNameDay)
            .expect("rendered date must parse back");
        prop_assert_eq!((parsed.month(), parsed.day()), (month, day));
    }

    #[test]
    fn year_slash_month_round_trips_at_month_granularity(
        year in 0i32..=9999,
        month in 1u32..=12,
        day in 1u32..=28,
    ) {
        let date = ymd(year, month, day);
        let rendered = valueconv::date::format(date, &DateFormat::YearSlashMonth);
        let parsed = valueconv::date::parse(&rendered, &DateFormat::YearSlashMonth)
            .expect("rendered date must parse back");
        prop_assert_eq!((parsed.year(), parsed.month()), (year, month));
    }

    #[test]
    fn month_year_identifier_recovers_year_and_month(
        year in 0i32..=9999,
        month in 1u32..=12,
        day in 1u32..=28,
    ) {
        let id = MonthYearId::from_date(ymd(year, month, day)).unwrap();
        let back = id.to_date().expect("derived identifier must resolve");
        prop_assert_eq!((back.year(), back.month()), (year, month));
    }

    #[test]
    fn wrong_length_identifiers_never_parse(s in "[0-9]{0,12}") {
        prop_assume!(s.chars().count() != 6);
        prop_assert!(s.parse::<MonthYearId>().is_err());
    }

    #[test]
    fn currency_round_trips_within_a_cent(cents in -1_000_000_000i64..=1_000_000_000) {
        let amount = cents as f64 / 100.0;
        let converter = CurrencyConverter::with_locale(Locale::en_us());
        let rendered = converter.format(amount).unwrap();
        let parsed = converter.parse(&rendered).unwrap();
        prop_assert!((parsed - amount).abs() < 1e-2, "{} -> {} -> {}", amount, rendered, parsed);
    }

    #[test]
    fn currency_round_trips_in_suffix_symbol_locales(cents in -1_000_000_000i64..=1_000_000_000) {
        let amount = cents as f64 / 100.0;
        for locale in [Locale::de_de(), Locale::fr_fr()] {
            let converter = CurrencyConverter::with_locale(locale);
            let rendered = converter.format(amount).unwrap();
            let parsed = converter.parse(&rendered).unwrap();
            prop_assert!((parsed - amount).abs() < 1e-2, "{} -> {} -> {}", amount, rendered, parsed);
        }
    }

    #[test]
    fn color_payloads_round_trip_exactly(
        red in 0.0f64..=1.0,
        green in 0.0f64..=1.0,
        blue in 0.0f64..=1.0,
        alpha in 0.0f64..=1.0,
    ) {
        let color = Color::rgba(red, green, blue, alpha);
        let payload = color.encode().unwrap();
        prop_assert_eq!(Color::decode(Some(&payload)).unwrap(), color);
    }

    #[test]
    fn color_maps_normalize_into_unit_range(
        red in 0.0f64..=255.0,
        green in 0.0f64..=255.0,
        blue in 0.0f64..=255.0,
    ) {
        let map = serde_json::json!({ "red": red, "green": green, "blue": blue });
        let color = Color::from_map(Some(&map)).unwrap();
        prop_assert_eq!(color.red, red / 255.0);
        prop_assert_eq!(color.green, green / 255.0);
        prop_assert_eq!(color.blue, blue / 255.0);
        prop_assert_eq!(color.alpha, 1.0);
    }
}
