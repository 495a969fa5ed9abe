//! ipinfo.io resolver
//!
//! A single unauthenticated GET against the JSON endpoint:
//!
//! | Field | Example | Maps to |
//! |-------|---------|---------|
//! | `ip` | `213.152.161.69` | `ip` |
//! | `org` | `AS49981 WorldStream B.V.` | `organization` |
//! | `loc` | `52.3740,4.8897` | `coordinates` |
//! | `city` | `Amsterdam` | `city` |
//! | `country` | `NL` | `country` |
//! | `region` | `North Holland` | `region` |

use super::{AddressResolver, ObservationResult, ResolutionError};
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;
use tracing::debug;

pub const DEFAULT_ENDPOINT: &str = "https://ipinfo.io/json";

#[derive(Debug, Deserialize)]
struct IpInfoResponse {
    ip: Option<String>,
    org: Option<String>,
    loc: Option<String>,
    city: Option<String>,
    country: Option<String>,
    region: Option<String>,
}

/// Treat empty strings the same as absent fields
fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Parse a response body into an observation
pub fn parse_observation(body: &str) -> Result<ObservationResult, ResolutionError> {
    let info: IpInfoResponse = serde_json::from_str(body)?;

    let ip = non_empty(info.ip).ok_or(ResolutionError::MissingField("ip"))?;

    Ok(ObservationResult {
        ip,
        organization: non_empty(info.org),
        coordinates: non_empty(info.loc),
        city: non_empty(info.city),
        country: non_empty(info.country),
        region: non_empty(info.region),
    })
}

pub struct IpInfoResolver {
    client: Client,
    endpoint: String,
}

impl IpInfoResolver {
    pub fn new(endpoint: impl Into<String>, timeout: Duration) -> Result<Self, ResolutionError> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            client,
            endpoint: endpoint.into(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl AddressResolver for IpInfoResolver {
    async fn resolve(&self) -> Result<ObservationResult, ResolutionError> {
        debug!("Querying {}", self.endpoint);

        let response = self
            .client
            .get(&self.endpoint)
            .header("Accept", "application/json")
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ResolutionError::Status(status.as_u16()));
        }

        let body = response.text().await?;
        debug!("Geolocation response: {}", body);

        parse_observation(&body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_response() {
        let body = r#"{
            "ip": "213.152.161.69",
            "city": "Amsterdam",
            "region": "North Holland",
            "country": "NL",
            "loc": "52.3740,4.8897",
            "org": "AS49981 WorldStream B.V.",
            "postal": "1012",
            "timezone": "Europe/Amsterdam"
        }"#;

        let obs = parse_observation(body).unwrap();
        assert_eq!(obs.ip, "213.152.161.69");
        assert_eq!(obs.organization.as_deref(), Some("AS49981 WorldStream B.V."));
        assert_eq!(obs.coordinates.as_deref(), Some("52.3740,4.8897"));
        assert_eq!(obs.city.as_deref(), Some("Amsterdam"));
        assert_eq!(obs.country.as_deref(), Some("NL"));
        assert_eq!(obs.region.as_deref(), Some("North Holland"));
    }

    #[test]
    fn test_parse_partial_response() {
        let body = r#"{"ip": "8.8.8.8", "country": "US", "city": null, "region": ""}"#;

        let obs = parse_observation(body).unwrap();
        assert_eq!(obs.ip, "8.8.8.8");
        assert_eq!(obs.country.as_deref(), Some("US"));
        assert_eq!(obs.city, None);
        assert_eq!(obs.region, None);
        assert_eq!(obs.organization, None);
        assert_eq!(obs.coordinates, None);
    }

    #[test]
    fn test_parse_missing_ip() {
        let result = parse_observation(r#"{"country": "US"}"#);
        assert!(matches!(result, Err(ResolutionError::MissingField("ip"))));

        let result = parse_observation(r#"{"ip": "  ", "country": "US"}"#);
        assert!(matches!(result, Err(ResolutionError::MissingField("ip"))));
    }

    #[test]
    fn test_parse_malformed_body() {
        assert!(matches!(
            parse_observation("<html>rate limited</html>"),
            Err(ResolutionError::Parse(_))
        ));
        assert!(matches!(
            parse_observation(r#"["8.8.8.8"]"#),
            Err(ResolutionError::Parse(_))
        ));
    }

    #[test]
    fn test_resolver_construction() {
        let resolver = IpInfoResolver::new(DEFAULT_ENDPOINT, Duration::from_secs(5)).unwrap();
        assert_eq!(resolver.endpoint(), "https://ipinfo.io/json");
    }

    #[tokio::test]
    async fn test_resolve_unreachable_endpoint() {
        // Port 9 on loopback refuses connections on any sane test host
        let resolver =
            IpInfoResolver::new("http://127.0.0.1:9/json", Duration::from_secs(2)).unwrap();
        let result = resolver.resolve().await;
        assert!(matches!(result, Err(ResolutionError::Http(_))));
    }
}
