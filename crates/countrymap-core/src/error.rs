// crates/countrymap-core/src/error.rs

//! Error type shared by every module of the crate.
//!
//! User-facing outcomes such as "No results found" or "no details found for
//! this country" are *values* (see [`crate::form::FormOutcome`] and
//! [`crate::restcountries::DetailsLookup`]), not errors. `GeoError` covers the
//! conditions that abort the current operation.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum GeoError {
    /// A dataset or resource could not be located.
    #[error("not found: {0}")]
    NotFound(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("GeoJSON error: {0}")]
    GeoJson(#[from] geojson::Error),

    #[error("cache encoding error: {0}")]
    Bincode(#[from] bincode::Error),

    /// Transport-level HTTP failure (connection refused, TLS, body read).
    #[error("HTTP error: {0}")]
    Http(String),

    /// Well-formed input that does not carry what we need.
    #[error("invalid data: {0}")]
    InvalidData(String),

    #[error("configuration error: {0}")]
    Config(String),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, GeoError>;

#[cfg(feature = "http")]
impl From<reqwest::Error> for GeoError {
    fn from(e: reqwest::Error) -> Self {
        GeoError::Http(e.to_string())
    }
}
