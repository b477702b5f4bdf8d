//! Structured extractors: deterministic parsers over a single utterance.
//!
//! Extractors output typed fields, not free text. A miss is never an error:
//! the destination extractor falls back to a default city and the date
//! extractor reports `None` so the pipeline can ask for clarification.
//!
//! - `destination`: known-city scan with a "to <words>" fallback
//! - `date`: ordered relative/explicit/ISO date rules against a reference date

pub mod date;
pub mod destination;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::debug;

pub use date::DateExtractor;
pub use destination::{DestinationExtractor, DEFAULT_DESTINATION, KNOWN_CITIES};

/// Errors raised while building an extractor.
///
/// Extraction itself cannot fail; only pattern compilation can.
#[derive(Debug, thiserror::Error)]
pub enum ExtractorError {
    /// A built-in or configured pattern failed to compile.
    #[error("invalid extractor pattern: {0}")]
    Pattern(#[from] regex::Error),
}

/// Destination and date pulled out of one utterance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TravelIntent {
    /// Extracted city, or the configured default when nothing matched.
    pub destination: String,
    /// ISO `YYYY-MM-DD` date, or `None` when no date rule matched.
    pub date: Option<String>,
}

/// Runs the destination and date extractors over the same utterance.
#[derive(Debug, Clone)]
pub struct IntentExtractor {
    destination: DestinationExtractor,
    date: DateExtractor,
    default_destination: String,
}

impl IntentExtractor {
    /// Build an extractor over the given city list and default destination.
    ///
    /// # Errors
    ///
    /// Returns [`ExtractorError::Pattern`] if a pattern fails to compile.
    pub fn new(
        cities: Vec<String>,
        default_destination: impl Into<String>,
    ) -> Result<Self, ExtractorError> {
        Ok(Self {
            destination: DestinationExtractor::new(cities)?,
            date: DateExtractor::new()?,
            default_destination: default_destination.into(),
        })
    }

    /// Build an extractor over [`KNOWN_CITIES`] defaulting to [`DEFAULT_DESTINATION`].
    ///
    /// # Errors
    ///
    /// Returns [`ExtractorError::Pattern`] if a pattern fails to compile.
    pub fn with_defaults() -> Result<Self, ExtractorError> {
        let cities = KNOWN_CITIES.iter().map(|c| (*c).to_owned()).collect();
        Self::new(cities, DEFAULT_DESTINATION)
    }

    /// Extract a travel intent, resolving relative dates against `reference`.
    pub fn extract(&self, text: &str, reference: NaiveDate) -> TravelIntent {
        let destination = self
            .destination
            .extract(text)
            .unwrap_or_else(|| self.default_destination.clone());
        let date = self.date.extract(text, reference);

        debug!(destination = %destination, date = ?date, "intent extracted");

        TravelIntent { destination, date }
    }
}
