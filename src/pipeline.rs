//! Intent pipeline: utterance to structured outcome.
//!
//! One call per transcript. The pipeline performs no I/O: the caller supplies
//! the loaded catalog and dispatches speech and rendering from the outcome.

use chrono::NaiveDate;
use serde::Serialize;
use tracing::info;

use crate::catalog::{search_from, FlightRecord, RankedFlights, DEFAULT_ORIGIN};
use crate::config::Config;
use crate::extractors::{ExtractorError, IntentExtractor};
use crate::speech;

/// How many of the cheapest flights the spoken summary reads out by default.
pub const DEFAULT_SPOKEN_OPTIONS: usize = 2;

/// Result of handling one utterance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum PipelineOutcome {
    /// No date was found; the user should be asked to restate it.
    NeedsDateClarification {
        /// Extracted or defaulted destination.
        destination: String,
    },
    /// Flights were found (or a fallback was synthesised).
    Results {
        /// Extracted or defaulted destination.
        destination: String,
        /// ISO travel date.
        date: String,
        /// Matching flights, cheapest first; never empty.
        flights: RankedFlights,
        /// Confirmation plus the cheapest options, ready for speech output.
        spoken_summary: String,
    },
}

impl PipelineOutcome {
    /// Sentence to speak for this outcome.
    pub fn speech(&self) -> String {
        match self {
            Self::NeedsDateClarification { destination } => {
                speech::clarification_prompt(destination)
            }
            Self::Results { spoken_summary, .. } => spoken_summary.clone(),
        }
    }

    /// Ranked flights, if this outcome carries any.
    pub fn flights(&self) -> Option<&RankedFlights> {
        match self {
            Self::NeedsDateClarification { .. } => None,
            Self::Results { flights, .. } => Some(flights),
        }
    }
}

/// Orchestrates extraction and catalog search for a single utterance.
#[derive(Debug, Clone)]
pub struct IntentPipeline {
    extractor: IntentExtractor,
    origin: String,
    spoken_options: usize,
}

impl IntentPipeline {
    /// Assemble a pipeline from its parts.
    pub fn new(extractor: IntentExtractor, origin: impl Into<String>, spoken_options: usize) -> Self {
        Self {
            extractor,
            origin: origin.into(),
            spoken_options,
        }
    }

    /// Pipeline with the built-in city list, origin, and summary length.
    ///
    /// # Errors
    ///
    /// Returns [`ExtractorError`] if an extractor pattern fails to compile.
    pub fn with_defaults() -> Result<Self, ExtractorError> {
        Ok(Self::new(
            IntentExtractor::with_defaults()?,
            DEFAULT_ORIGIN,
            DEFAULT_SPOKEN_OPTIONS,
        ))
    }

    /// Pipeline configured from the `[catalog]`, `[nlu]` and `[speech]` sections.
    ///
    /// # Errors
    ///
    /// Returns [`ExtractorError`] if an extractor pattern fails to compile.
    pub fn from_config(config: &Config) -> Result<Self, ExtractorError> {
        let extractor =
            IntentExtractor::new(config.nlu.cities.clone(), config.nlu.default_destination.clone())?;
        Ok(Self::new(
            extractor,
            config.catalog.origin.clone(),
            config.speech.spoken_options,
        ))
    }

    /// Origin city searches are filtered on.
    pub fn origin(&self) -> &str {
        &self.origin
    }

    /// Handle one utterance, resolving relative dates against `reference`.
    ///
    /// Never fails: a missing destination is defaulted, a missing date asks
    /// for clarification, and an empty search yields a fallback flight.
    pub fn handle(
        &self,
        utterance: &str,
        reference: NaiveDate,
        catalog: &[FlightRecord],
    ) -> PipelineOutcome {
        let intent = self.extractor.extract(utterance, reference);

        let Some(date) = intent.date else {
            info!(destination = %intent.destination, "no travel date, asking for clarification");
            return PipelineOutcome::NeedsDateClarification {
                destination: intent.destination,
            };
        };

        let flights = search_from(&self.origin, &intent.destination, &date, catalog);
        let spoken_summary = speech::results_summary(
            &self.origin,
            &intent.destination,
            &date,
            &flights,
            self.spoken_options,
        );

        info!(
            destination = %intent.destination,
            date = %date,
            count = flights.len(),
            "flight search complete"
        );

        PipelineOutcome::Results {
            destination: intent.destination,
            date,
            flights,
            spoken_summary,
        }
    }
}
