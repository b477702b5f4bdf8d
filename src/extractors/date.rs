//! Date extractor — ordered pattern rules resolved against a reference date.
//!
//! Rule precedence, first match wins:
//! 1. "next <weekday>"
//! 2. "<day>[st|nd|rd|th] <month name>"
//! 3. a literal `20YY-MM-DD`, returned verbatim
//! 4. "on <weekday>"
//!
//! Precedence follows trigger phrase order, not specificity: "next friday,
//! 2025-12-05" resolves via rule 1.

use chrono::{Datelike, NaiveDate, Weekday};
use regex::Regex;

use super::ExtractorError;

const WEEKDAYS: &str = "monday|tuesday|wednesday|thursday|friday|saturday|sunday";

const MONTHS: &str = "jan|feb|mar|apr|may|jun|jul|aug|sep|sept|oct|nov|dec|january|february|\
                      march|april|june|july|august|september|october|november|december";

/// Extracts a travel date from free text.
#[derive(Debug, Clone)]
pub struct DateExtractor {
    next_weekday: Regex,
    day_month: Regex,
    iso: Regex,
    on_weekday: Regex,
}

impl DateExtractor {
    /// Compile the rule patterns.
    ///
    /// # Errors
    ///
    /// Returns [`ExtractorError::Pattern`] if a pattern fails to compile.
    pub fn new() -> Result<Self, ExtractorError> {
        Ok(Self {
            next_weekday: Regex::new(&format!("next ({WEEKDAYS})"))?,
            day_month: Regex::new(&format!(r"(\d{{1,2}})(?:st|nd|rd|th)?\s+({MONTHS})"))?,
            iso: Regex::new(r"20\d{2}-\d{2}-\d{2}")?,
            on_weekday: Regex::new(&format!("on ({WEEKDAYS})"))?,
        })
    }

    /// Extract an ISO `YYYY-MM-DD` date from `text`.
    ///
    /// Relative phrases resolve against `reference`, never the system clock.
    /// Returns `None` when no rule matches.
    pub fn extract(&self, text: &str, reference: NaiveDate) -> Option<String> {
        let lower = text.to_lowercase();

        if let Some(target) = capture_weekday(&self.next_weekday, &lower) {
            return next_weekday(reference, target).map(to_iso);
        }

        // A day/month pair that is not a real date (31 april) does not count
        // as a match; later rules still get a chance.
        if let Some(date) = self.day_month.captures_iter(&lower).find_map(|caps| {
            let day = caps.get(1)?.as_str().parse::<u32>().ok()?;
            let month = month_number(caps.get(2)?.as_str())?;
            resolve_day_month(day, month, reference)
        }) {
            return Some(to_iso(date));
        }

        if let Some(found) = self.iso.find(&lower) {
            return Some(found.as_str().to_owned());
        }

        if let Some(target) = capture_weekday(&self.on_weekday, &lower) {
            return next_weekday(reference, target).map(to_iso);
        }

        None
    }
}

/// Next occurrence of `target` strictly after `reference` (1 to 7 days later).
///
/// Returns `None` only at the edge of the representable calendar.
pub fn next_weekday(reference: NaiveDate, target: Weekday) -> Option<NaiveDate> {
    reference
        .iter_days()
        .skip(1)
        .take(7)
        .find(|day| day.weekday() == target)
}

/// Resolve a day and month to the reference year, or the following year if
/// that date is already behind `reference`.
///
/// The reference date itself counts as not yet passed.
fn resolve_day_month(day: u32, month: u32, reference: NaiveDate) -> Option<NaiveDate> {
    if let Some(candidate) = NaiveDate::from_ymd_opt(reference.year(), month, day) {
        if candidate >= reference {
            return Some(candidate);
        }
    }
    let next_year = reference.year().checked_add(1)?;
    NaiveDate::from_ymd_opt(next_year, month, day)
}

fn capture_weekday(pattern: &Regex, lower: &str) -> Option<Weekday> {
    pattern.captures(lower)?.get(1)?.as_str().parse().ok()
}

/// Map a full or abbreviated lowercase month name to 1..=12.
fn month_number(name: &str) -> Option<u32> {
    let month = match name {
        "jan" | "january" => 1,
        "feb" | "february" => 2,
        "mar" | "march" => 3,
        "apr" | "april" => 4,
        "may" => 5,
        "jun" | "june" => 6,
        "jul" | "july" => 7,
        "aug" | "august" => 8,
        "sep" | "sept" | "september" => 9,
        "oct" | "october" => 10,
        "nov" | "november" => 11,
        "dec" | "december" => 12,
        _ => return None,
    };
    Some(month)
}

fn to_iso(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}
