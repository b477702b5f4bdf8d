//! Destination extractor — known-city scan with a "to <words>" fallback.
//!
//! Matching is a plain case-insensitive substring test with no word
//! boundaries, so "Mumbaikar" resolves to Mumbai.

use regex::Regex;

use super::ExtractorError;

/// Cities recognised by name, in match priority order.
pub const KNOWN_CITIES: [&str; 9] = [
    "Delhi",
    "Mumbai",
    "Chennai",
    "Kolkata",
    "Hyderabad",
    "Pune",
    "Ahmedabad",
    "Jaipur",
    "Goa",
];

/// City assumed when an utterance names no destination.
pub const DEFAULT_DESTINATION: &str = "Delhi";

/// Extracts a destination city from free text.
#[derive(Debug, Clone)]
pub struct DestinationExtractor {
    cities: Vec<String>,
    to_phrase: Regex,
}

impl DestinationExtractor {
    /// Build an extractor scanning `cities` in the given order.
    ///
    /// Empty entries are dropped since they would match every utterance.
    ///
    /// # Errors
    ///
    /// Returns [`ExtractorError::Pattern`] if the fallback pattern fails to compile.
    pub fn new(cities: Vec<String>) -> Result<Self, ExtractorError> {
        let cities = cities
            .into_iter()
            .map(|c| c.trim().to_owned())
            .filter(|c| !c.is_empty())
            .collect();
        Ok(Self {
            cities,
            to_phrase: Regex::new(r"to ([a-zA-Z ]+)")?,
        })
    }

    /// Return the first known city contained in `text`, else the capitalised
    /// words following "to ", else `None`.
    pub fn extract(&self, text: &str) -> Option<String> {
        let lower = text.to_lowercase();

        if let Some(city) = self
            .cities
            .iter()
            .find(|city| lower.contains(&city.to_lowercase()))
        {
            return Some(city.clone());
        }

        let guess = self.to_phrase.captures(&lower)?.get(1)?.as_str().trim();
        if guess.is_empty() {
            return None;
        }
        Some(capitalize_words(guess))
    }
}

/// Uppercase the first character of each space-separated word.
fn capitalize_words(text: &str) -> String {
    text.split(' ')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}
