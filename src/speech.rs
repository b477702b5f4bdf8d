//! Text handed to the speech-output collaborator.
//!
//! Every sentence the assistant says is built here so the pipeline, the
//! booking path, and the CLI stay worded identically.

use chrono::NaiveDate;

use crate::catalog::FlightRecord;

/// Render an ISO date the way it is spoken, e.g. `Fri, 5 Dec 2025`.
///
/// Strings that are not a real calendar date are returned unchanged.
pub fn pretty_date(iso: &str) -> String {
    match NaiveDate::parse_from_str(iso, "%Y-%m-%d") {
        Ok(date) => date.format("%a, %-d %b %Y").to_string(),
        Err(_) => iso.to_owned(),
    }
}

/// Ask the user to restate the travel date.
pub fn clarification_prompt(destination: &str) -> String {
    format!(
        "I heard you want to go to {destination}. What day should I check? \
         You can say \u{201c}next Friday\u{201d} or a date."
    )
}

/// Describe one flight as a spoken option.
pub fn describe_option(flight: &FlightRecord) -> String {
    format!(
        "{} {} at {}, price \u{20b9}{}",
        flight.airline, flight.flight_number, flight.depart_time, flight.price_inr
    )
}

/// Confirm the search and read out up to `max_options` of the cheapest flights.
pub fn results_summary(
    origin: &str,
    destination: &str,
    date: &str,
    flights: &[FlightRecord],
    max_options: usize,
) -> String {
    let options = flights
        .iter()
        .take(max_options)
        .map(describe_option)
        .collect::<Vec<String>>()
        .join("; ");
    let noun = if flights.len() == 1 { "option" } else { "options" };

    let mut summary = format!(
        "Searching flights from {origin} to {destination} on {}. I found {} {noun}.",
        pretty_date(date),
        flights.len()
    );
    if !options.is_empty() {
        summary.push_str(&format!(" For example: {options}."));
    }
    summary.push_str(" Say \u{201c}book the first one\u{201d} or pick a flight.");
    summary
}

/// Confirmation read out once a flight is booked.
pub fn booking_message(flight: &FlightRecord) -> String {
    format!(
        "Booking confirmed: {} {} from {} to {} on {}. Total \u{20b9}{}.",
        flight.airline,
        flight.flight_number,
        flight.origin,
        flight.destination,
        pretty_date(&flight.date),
        flight.price_inr
    )
}
