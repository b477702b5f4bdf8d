//! One user's conversation with the assistant.
//!
//! The session is the caller of the pipeline: it keeps the most recent
//! ranked flight list so a follow-up "book the second one" has something to
//! resolve against. Nothing else carries over between utterances.

use std::sync::Arc;

use chrono::NaiveDate;
use serde::Serialize;
use tracing::{debug, info};

use crate::booking::{BookingConfirmation, BookingResolver};
use crate::catalog::{FlightRecord, RankedFlights};
use crate::pipeline::{IntentPipeline, PipelineOutcome};

/// What the assistant does in response to one transcript.
#[derive(Debug, Clone, Serialize)]
pub struct Reply {
    /// Sentence for speech output.
    pub speech: String,
    /// Pipeline outcome, absent when the utterance was a follow-up booking.
    pub outcome: Option<PipelineOutcome>,
    /// Booking made by this utterance, if any.
    pub booking: Option<BookingConfirmation>,
}

/// Conversation state over a shared, read-only catalog.
#[derive(Debug)]
pub struct Session {
    pipeline: IntentPipeline,
    resolver: BookingResolver,
    catalog: Arc<[FlightRecord]>,
    current: Option<RankedFlights>,
}

impl Session {
    /// Start a session with no flights on offer.
    pub fn new(
        pipeline: IntentPipeline,
        resolver: BookingResolver,
        catalog: Arc<[FlightRecord]>,
    ) -> Self {
        Self {
            pipeline,
            resolver,
            catalog,
            current: None,
        }
    }

    /// Flights currently on offer, from the last successful search.
    pub fn current_flights(&self) -> Option<&RankedFlights> {
        self.current.as_ref()
    }

    /// Respond to one transcript.
    ///
    /// A search replaces the flights on offer and may book straight away if
    /// the same utterance also says "book". An utterance without a date is
    /// first tried as a booking command against the flights already on
    /// offer, and only otherwise answered with a clarification prompt.
    pub fn respond(&mut self, transcript: &str, reference: NaiveDate) -> Reply {
        let transcript = transcript.trim();
        let outcome = self.pipeline.handle(transcript, reference, &self.catalog);

        match outcome {
            PipelineOutcome::Results { ref flights, .. } => {
                let booking = self.resolver.book(transcript, flights);
                self.current = Some(flights.clone());
                let speech = match &booking {
                    Some(confirmation) => confirmation.message.clone(),
                    None => outcome.speech(),
                };
                Reply {
                    speech,
                    outcome: Some(outcome),
                    booking,
                }
            }
            PipelineOutcome::NeedsDateClarification { .. } => {
                let follow_up = self
                    .current
                    .as_ref()
                    .and_then(|flights| self.resolver.book(transcript, flights));

                match follow_up {
                    Some(confirmation) => {
                        info!(flight = %confirmation.flight.flight_number, "follow-up booking");
                        Reply {
                            speech: confirmation.message.clone(),
                            outcome: None,
                            booking: Some(confirmation),
                        }
                    }
                    None => Reply {
                        speech: outcome.speech(),
                        outcome: Some(outcome),
                        booking: None,
                    },
                }
            }
        }
    }

    /// Book the flight at `index` in the current list, as a button click would.
    pub fn select(&self, index: usize) -> Option<BookingConfirmation> {
        let flight = self.current.as_ref()?.get(index)?.clone();
        debug!(index, flight = %flight.flight_number, "flight selected");
        Some(BookingConfirmation::new(flight))
    }

    /// Forget the flights on offer.
    pub fn clear(&mut self) {
        self.current = None;
    }
}
