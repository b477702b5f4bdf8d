//! Voice booking: resolve "book the second one" against the current list.

use regex::Regex;
use serde::Serialize;
use tracing::debug;

use crate::catalog::FlightRecord;
use crate::extractors::ExtractorError;
use crate::speech;

/// A booked flight and the sentence confirming it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BookingConfirmation {
    /// The flight that was booked.
    pub flight: FlightRecord,
    /// Spoken confirmation.
    pub message: String,
}

impl BookingConfirmation {
    /// Confirm `flight`, whether chosen by voice or by direct selection.
    pub fn new(flight: FlightRecord) -> Self {
        let message = speech::booking_message(&flight);
        Self { flight, message }
    }
}

/// Maps ordinal booking commands onto a ranked flight list.
#[derive(Debug, Clone)]
pub struct BookingResolver {
    ordinal: Regex,
}

impl BookingResolver {
    /// Compile the command pattern.
    ///
    /// # Errors
    ///
    /// Returns [`ExtractorError::Pattern`] if the pattern fails to compile.
    pub fn new() -> Result<Self, ExtractorError> {
        Ok(Self {
            ordinal: Regex::new(r"book (?:the )?(first|second|third|1st|2nd|3rd)\b")?,
        })
    }

    /// Zero-based position named by an ordinal command, if any.
    pub fn ordinal_index(&self, utterance: &str) -> Option<usize> {
        let lower = utterance.to_lowercase();
        let caps = self.ordinal.captures(&lower)?;
        match caps.get(1)?.as_str() {
            "first" | "1st" => Some(0),
            "second" | "2nd" => Some(1),
            "third" | "3rd" => Some(2),
            _ => None,
        }
    }

    /// Pick the flight an utterance asks to book.
    ///
    /// An ordinal inside the list selects that flight. Otherwise any mention
    /// of "book" selects the cheapest. Anything else selects nothing.
    pub fn resolve<'a>(
        &self,
        utterance: &str,
        flights: &'a [FlightRecord],
    ) -> Option<&'a FlightRecord> {
        if let Some(flight) = self.ordinal_index(utterance).and_then(|i| flights.get(i)) {
            debug!(flight = %flight.flight_number, "ordinal booking command");
            return Some(flight);
        }

        if utterance.to_lowercase().contains("book") {
            let cheapest = flights.first();
            if let Some(flight) = cheapest {
                debug!(flight = %flight.flight_number, "booking cheapest flight");
            }
            return cheapest;
        }

        None
    }

    /// Resolve and confirm in one step.
    pub fn book(&self, utterance: &str, flights: &[FlightRecord]) -> Option<BookingConfirmation> {
        self.resolve(utterance, flights)
            .cloned()
            .map(BookingConfirmation::new)
    }
}
