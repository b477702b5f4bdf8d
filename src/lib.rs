//! Wayfarer — the core of a voice travel assistant.
//!
//! Takes one recognised utterance ("I want to fly to Goa next Friday"),
//! extracts a destination and date, searches a mock flight catalog, and
//! resolves follow-up voice commands ("book the second one") to a booking.
//! Speech recognition and synthesis stay outside: the crate consumes a
//! transcript and produces text to speak plus structured results.
//!
//! See `DESIGN.md` for architecture notes.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

/// Voice booking command resolution.
pub mod booking;
/// Flight records, catalog loading, and search.
pub mod catalog;
/// Configuration loading.
pub mod config;
/// Destination and date extraction.
pub mod extractors;
/// Structured logging setup.
pub mod logging;
/// Utterance-to-outcome orchestration.
pub mod pipeline;
/// Conversation state across utterances.
pub mod session;
/// Spoken response wording.
pub mod speech;
