//! Dataset loading error types.

use crate::domain::InvalidStationId;
use crate::graph::GraphBuildError;

/// Errors that can occur while loading or rebuilding the station dataset.
#[derive(Debug, thiserror::Error)]
pub enum DatasetError {
    /// HTTP request failed
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Feed returned an error status
    #[error("feed error {status}: {message}")]
    Status { status: u16, message: String },

    /// Failed to parse the feed JSON
    #[error("JSON parse error: {message}")]
    Json { message: String },

    /// Failed to read a local dataset file
    #[error("failed to read {path}: {message}")]
    Io { path: String, message: String },

    /// A station key in the feed is not a usable identifier
    #[error("invalid station key {key:?}: {source}")]
    InvalidKey {
        key: String,
        source: InvalidStationId,
    },

    /// A relations entry is not a usable identifier
    #[error("invalid relation {target:?} on station {station}: {source}")]
    InvalidRelation {
        station: String,
        target: String,
        source: InvalidStationId,
    },

    /// The loaded stations do not form a valid graph
    #[error(transparent)]
    Build(#[from] GraphBuildError),
}
