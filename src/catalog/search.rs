//! Flight search over an in-memory catalog.

use std::ops::Deref;

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::FlightRecord;

/// Origin every search is filtered on unless configured otherwise.
pub const DEFAULT_ORIGIN: &str = "Bengaluru";

/// Flights ordered by ascending price.
///
/// Equal prices keep their catalog order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RankedFlights(Vec<FlightRecord>);

impl RankedFlights {
    /// Rank `flights` by price with a stable sort.
    pub fn new(mut flights: Vec<FlightRecord>) -> Self {
        flights.sort_by_key(|f| f.price_inr);
        Self(flights)
    }

    /// The cheapest flight, if any.
    pub fn cheapest(&self) -> Option<&FlightRecord> {
        self.0.first()
    }

    /// Consume the list, returning the ranked records.
    pub fn into_vec(self) -> Vec<FlightRecord> {
        self.0
    }
}

impl Deref for RankedFlights {
    type Target = [FlightRecord];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

/// Search from [`DEFAULT_ORIGIN`]. See [`search_from`].
pub fn search(destination: &str, date: &str, catalog: &[FlightRecord]) -> RankedFlights {
    search_from(DEFAULT_ORIGIN, destination, date, catalog)
}

/// Find flights from `origin` to `destination` on `date`, cheapest first.
///
/// Destination matches case-insensitively; origin and date match exactly.
/// When nothing matches, the result holds a single
/// [`FlightRecord::fallback`] for the requested route, so it is never empty.
pub fn search_from(
    origin: &str,
    destination: &str,
    date: &str,
    catalog: &[FlightRecord],
) -> RankedFlights {
    let wanted = destination.to_lowercase();

    let mut matches: Vec<FlightRecord> = catalog
        .iter()
        .filter(|f| f.destination.to_lowercase() == wanted && f.date == date && f.origin == origin)
        .cloned()
        .collect();

    if matches.is_empty() {
        debug!(origin, destination, date, "no catalog match, offering fallback flight");
        matches.push(FlightRecord::fallback(origin, destination, date));
    }

    RankedFlights::new(matches)
}
