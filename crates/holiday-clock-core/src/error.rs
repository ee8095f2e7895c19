//! Core error types for holiday-clock-core.
//!
//! Upstream data sources (holiday API, geolocation providers) are
//! unreliable by design: their errors are typed here so callers can
//! decide between propagating and degrading to a safe default.

use thiserror::Error;

/// Core error type for holiday-clock-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Holiday data source errors
    #[error("Holiday data error: {0}")]
    Holiday(#[from] HolidayError),

    /// Geolocation provider errors
    #[error("Geolocation error: {0}")]
    Geo(#[from] GeoError),

    /// Serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic errors with context
    #[error("{0}")]
    Custom(String),
}

/// Errors from the public-holiday data source.
#[derive(Error, Debug)]
pub enum HolidayError {
    /// Request failed before a response arrived (connect, timeout, decode)
    #[error("Holiday service request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The service answered with a non-success status
    #[error("Holiday service returned HTTP {status}")]
    Status { status: reqwest::StatusCode },
}

/// Errors from the IP-geolocation providers.
#[derive(Error, Debug)]
pub enum GeoError {
    /// Request failed before a response arrived (connect, timeout, decode)
    #[error("Geolocation request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The provider answered with a non-success status
    #[error("Geolocation provider returned HTTP {status}")]
    Status { status: reqwest::StatusCode },

    /// The provider answered but could not locate the address
    #[error("Geolocation provider could not locate the address")]
    Unresolved,
}

/// Result type alias for CoreError
pub type Result<T, E = CoreError> = std::result::Result<T, E>;
