//! Mock flight catalog: record schema, one-shot loading, and search.
//!
//! The catalog is a flat JSON array of [`FlightRecord`]s read once per
//! process from a file or an HTTP URL, then shared read-only.

pub mod search;

use std::path::PathBuf;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tokio::sync::OnceCell;
use tracing::{debug, info};

pub use search::{search, search_from, RankedFlights, DEFAULT_ORIGIN};

/// One flight as stored in the catalog file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlightRecord {
    /// Departure city.
    pub origin: String,
    /// Arrival city.
    pub destination: String,
    /// Travel date, ISO `YYYY-MM-DD`.
    pub date: String,
    /// Operating airline name.
    pub airline: String,
    /// Carrier flight number (e.g. "6E-999").
    pub flight_number: String,
    /// Local departure time, `HH:MM`.
    pub depart_time: String,
    /// Local arrival time, `HH:MM`.
    pub arrive_time: String,
    /// Human-readable duration (e.g. "2h 50m").
    pub duration: String,
    /// Fare in Indian rupees.
    #[serde(rename = "priceINR")]
    pub price_inr: u32,
}

impl FlightRecord {
    /// Placeholder flight offered when the catalog has no match, so a search
    /// always yields at least one option.
    pub fn fallback(origin: &str, destination: &str, date: &str) -> Self {
        Self {
            origin: origin.to_owned(),
            destination: destination.to_owned(),
            date: date.to_owned(),
            airline: "IndiGo".to_owned(),
            flight_number: "6E-999".to_owned(),
            depart_time: "09:20".to_owned(),
            arrive_time: "12:10".to_owned(),
            duration: "2h 50m".to_owned(),
            price_inr: 6120,
        }
    }
}

/// Errors raised while loading the catalog.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    /// The catalog file could not be read.
    #[error("failed to read catalog {}: {source}", path.display())]
    Read {
        /// Path that was read.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// The catalog URL could not be fetched.
    #[error("failed to fetch catalog: {0}")]
    Fetch(#[from] reqwest::Error),

    /// The catalog body is not a JSON array of flight records.
    #[error("invalid catalog JSON: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Where the catalog is loaded from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogSource {
    /// Local JSON file.
    File(PathBuf),
    /// JSON document served over HTTP(S).
    Url(String),
}

impl CatalogSource {
    /// Interpret a configured location: `http://` and `https://` prefixes
    /// select a URL, anything else is a file path.
    pub fn from_location(location: &str) -> Self {
        if location.starts_with("http://") || location.starts_with("https://") {
            Self::Url(location.to_owned())
        } else {
            Self::File(PathBuf::from(location))
        }
    }
}

/// Parse a catalog document.
///
/// # Errors
///
/// Returns [`CatalogError::Parse`] if `json` is not an array of flight records.
pub fn parse_catalog(json: &str) -> Result<Vec<FlightRecord>, CatalogError> {
    Ok(serde_json::from_str(json)?)
}

/// Loads the catalog at most once and serves searches over it.
///
/// Concurrent callers of [`CatalogClient::flights`] share a single in-flight
/// load. A stalled fetch is not timed out.
#[derive(Debug)]
pub struct CatalogClient {
    source: Option<CatalogSource>,
    http: reqwest::Client,
    flights: OnceCell<Arc<[FlightRecord]>>,
}

impl CatalogClient {
    /// Create a client that loads lazily from `source`.
    pub fn new(source: CatalogSource) -> Self {
        Self {
            source: Some(source),
            http: reqwest::Client::new(),
            flights: OnceCell::new(),
        }
    }

    /// Create a client over records already in memory.
    pub fn from_records(records: Vec<FlightRecord>) -> Self {
        Self {
            source: None,
            http: reqwest::Client::new(),
            flights: OnceCell::new_with(Some(Arc::from(records))),
        }
    }

    /// Return the catalog, loading it on first use.
    ///
    /// # Errors
    ///
    /// Returns a [`CatalogError`] if the first load fails; a later call retries.
    pub async fn flights(&self) -> Result<Arc<[FlightRecord]>, CatalogError> {
        self.flights
            .get_or_try_init(|| self.load())
            .await
            .map(Arc::clone)
    }

    /// Search the catalog for flights from `origin` to `destination` on `date`.
    ///
    /// # Errors
    ///
    /// Returns a [`CatalogError`] if the catalog cannot be loaded.
    pub async fn search(
        &self,
        origin: &str,
        destination: &str,
        date: &str,
    ) -> Result<RankedFlights, CatalogError> {
        let flights = self.flights().await?;
        Ok(search_from(origin, destination, date, &flights))
    }

    async fn load(&self) -> Result<Arc<[FlightRecord]>, CatalogError> {
        let records = match &self.source {
            Some(CatalogSource::File(path)) => {
                debug!(path = %path.display(), "reading flight catalog");
                let body = tokio::fs::read_to_string(path).await.map_err(|source| {
                    CatalogError::Read {
                        path: path.clone(),
                        source,
                    }
                })?;
                parse_catalog(&body)?
            }
            Some(CatalogSource::Url(url)) => {
                debug!(url = %url, "fetching flight catalog");
                self.http
                    .get(url)
                    .send()
                    .await?
                    .error_for_status()?
                    .json::<Vec<FlightRecord>>()
                    .await?
            }
            None => Vec::new(),
        };

        info!(count = records.len(), "flight catalog loaded");
        Ok(Arc::from(records))
    }
}
