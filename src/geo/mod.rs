//! Public address resolution
//!
//! Asks an external geolocation service which public IP this machine is
//! currently seen as, along with where that IP is located.

pub mod ipinfo;

pub use ipinfo::{DEFAULT_ENDPOINT, IpInfoResolver, parse_observation};

use std::future::Future;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ResolutionError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Geolocation service returned status {0}")]
    Status(u16),

    #[error("Malformed response: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Missing required field: {0}")]
    MissingField(&'static str),
}

/// One observation of the public address
///
/// Only `ip` is guaranteed; the service may omit any of the other fields.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ObservationResult {
    pub ip: String,
    pub organization: Option<String>,
    /// "latitude,longitude" as reported by the service
    pub coordinates: Option<String>,
    pub city: Option<String>,
    pub country: Option<String>,
    pub region: Option<String>,
}

/// Source of observations
///
/// Implementations make a single attempt per call. Retrying is up to the
/// caller.
pub trait AddressResolver {
    fn resolve(&self) -> impl Future<Output = Result<ObservationResult, ResolutionError>> + Send;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolution_error_display() {
        let err = ResolutionError::Status(429);
        assert_eq!(err.to_string(), "Geolocation service returned status 429");

        let err = ResolutionError::MissingField("ip");
        assert_eq!(err.to_string(), "Missing required field: ip");
    }

    #[test]
    fn test_parse_error_converts() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: ResolutionError = json_err.into();
        assert!(matches!(err, ResolutionError::Parse(_)));
        assert!(err.to_string().starts_with("Malformed response:"));
    }
}
