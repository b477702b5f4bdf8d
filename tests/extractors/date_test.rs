//! Tests for `src/extractors/date.rs` — rule precedence and date resolution.

use chrono::{Datelike, NaiveDate, Weekday};
use wayfarer::extractors::date::{next_weekday, DateExtractor};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
}

fn extractor() -> DateExtractor {
    DateExtractor::new().expect("patterns compile")
}

fn parse_iso(iso: &str) -> NaiveDate {
    NaiveDate::parse_from_str(iso, "%Y-%m-%d").expect("ISO date")
}

const WEEKDAY_NAMES: [(&str, Weekday); 7] = [
    ("monday", Weekday::Mon),
    ("tuesday", Weekday::Tue),
    ("wednesday", Weekday::Wed),
    ("thursday", Weekday::Thu),
    ("friday", Weekday::Fri),
    ("saturday", Weekday::Sat),
    ("sunday", Weekday::Sun),
];

// ---------------------------------------------------------------------------
// Rule 1: next <weekday>
// ---------------------------------------------------------------------------

#[test]
fn next_friday_from_wednesday() {
    // 2025-01-01 is a Wednesday.
    let date = extractor().extract("I want to fly to Goa next Friday", ymd(2025, 1, 1));
    assert_eq!(date.as_deref(), Some("2025-01-03"));
}

#[test]
fn next_weekday_is_strictly_after_and_within_a_week() {
    let ext = extractor();
    let mut reference = ymd(2025, 12, 25);
    // Two full weeks of reference dates, crossing a year boundary.
    for _ in 0..14 {
        for (name, weekday) in WEEKDAY_NAMES {
            let iso = ext
                .extract(&format!("next {name}"), reference)
                .expect("rule 1 should match");
            let date = parse_iso(&iso);
            assert!(date > reference, "{iso} should be after {reference}");
            assert_eq!(date.weekday(), weekday);
            assert!(date.signed_duration_since(reference).num_days() <= 7);
        }
        reference = reference.succ_opt().expect("next day");
    }
}

#[test]
fn next_weekday_on_same_weekday_rolls_full_week() {
    // 2025-12-05 is a Friday.
    let date = extractor().extract("next friday", ymd(2025, 12, 5));
    assert_eq!(date.as_deref(), Some("2025-12-12"));
}

#[test]
fn next_weekday_is_case_insensitive() {
    let date = extractor().extract("NEXT MONDAY", ymd(2025, 1, 1));
    assert_eq!(date.as_deref(), Some("2025-01-06"));
}

#[test]
fn next_weekday_helper_matches_rule() {
    assert_eq!(next_weekday(ymd(2025, 1, 1), Weekday::Wed), Some(ymd(2025, 1, 8)));
}

// ---------------------------------------------------------------------------
// Rule 2: <day> <month>
// ---------------------------------------------------------------------------

#[test]
fn day_month_in_future_uses_reference_year() {
    let date = extractor().extract("on 5th December", ymd(2025, 1, 1));
    assert_eq!(date.as_deref(), Some("2025-12-05"));
}

#[test]
fn day_month_already_passed_rolls_to_next_year() {
    let date = extractor().extract("on 5th December", ymd(2025, 12, 10));
    assert_eq!(date.as_deref(), Some("2026-12-05"));
}

#[test]
fn day_month_on_reference_day_is_this_year() {
    let date = extractor().extract("3rd mar", ymd(2025, 3, 3));
    assert_eq!(date.as_deref(), Some("2025-03-03"));
}

#[test]
fn day_month_accepts_abbreviations() {
    let ext = extractor();
    let reference = ymd(2025, 1, 1);
    assert_eq!(ext.extract("20 sept", reference).as_deref(), Some("2025-09-20"));
    assert_eq!(ext.extract("1st jan", reference).as_deref(), Some("2025-01-01"));
    assert_eq!(ext.extract("22nd Feb", reference).as_deref(), Some("2025-02-22"));
    assert_eq!(ext.extract("9 august", reference).as_deref(), Some("2025-08-09"));
}

#[test]
fn impossible_day_month_falls_through_to_later_rules() {
    let date = extractor().extract("31 april, or on friday", ymd(2025, 1, 1));
    assert_eq!(date.as_deref(), Some("2025-01-03"));
}

// ---------------------------------------------------------------------------
// Rule 3: literal ISO date
// ---------------------------------------------------------------------------

#[test]
fn iso_date_is_returned_verbatim() {
    let date = extractor().extract("flights to goa for 2025-12-05 please", ymd(2030, 6, 1));
    assert_eq!(date.as_deref(), Some("2025-12-05"));
}

#[test]
fn iso_date_is_not_calendar_checked() {
    let date = extractor().extract("2025-13-45", ymd(2025, 1, 1));
    assert_eq!(date.as_deref(), Some("2025-13-45"));
}

// ---------------------------------------------------------------------------
// Rule 4: on <weekday>
// ---------------------------------------------------------------------------

#[test]
fn on_weekday_resolves_to_next_occurrence() {
    // Wednesday reference, "on wednesday" means a week later.
    let date = extractor().extract("leaving on wednesday", ymd(2025, 1, 1));
    assert_eq!(date.as_deref(), Some("2025-01-08"));
}

// ---------------------------------------------------------------------------
// Precedence and misses
// ---------------------------------------------------------------------------

#[test]
fn next_weekday_beats_iso_date() {
    let date = extractor().extract("next friday or 2025-12-20", ymd(2025, 1, 1));
    assert_eq!(date.as_deref(), Some("2025-01-03"));
}

#[test]
fn day_month_beats_iso_date() {
    let date = extractor().extract("2025-12-20 or 5 dec", ymd(2025, 1, 1));
    assert_eq!(date.as_deref(), Some("2025-12-05"));
}

#[test]
fn iso_date_beats_on_weekday() {
    let date = extractor().extract("on friday 2025-12-20", ymd(2025, 1, 1));
    assert_eq!(date.as_deref(), Some("2025-12-20"));
}

#[test]
fn no_date_cue_returns_none() {
    let ext = extractor();
    let reference = ymd(2025, 1, 1);
    assert_eq!(ext.extract("I want to fly to Goa", reference), None);
    assert_eq!(ext.extract("sometime soon", reference), None);
    assert_eq!(ext.extract("", reference), None);
}
