// crates/travelrec-core/src/error.rs

use thiserror::Error;

/// Failures raised while fetching or decoding the catalog.
///
/// Only transport and parsing problems surface as errors. Expected outcomes
/// of a search (empty query, no matches) are ordinary
/// [`SearchOutcome`](crate::search::SearchOutcome) values with a message
/// field and never take this path.
#[derive(Debug, Error)]
pub enum TravelError {
    /// The catalog endpoint answered with a non-success status.
    #[error("failed to fetch catalog ({code} {reason})")]
    Status { code: u16, reason: String },

    /// The request never completed (DNS, TLS, connection reset, ...).
    #[error("catalog transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The response body was not the expected JSON document.
    #[error("malformed catalog document: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, TravelError>;
