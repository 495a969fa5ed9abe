//! Classification of an observation against the reference lists
//!
//! The classifier is a pure function over in-memory sets: it never fails
//! and carries no state between ticks.
//!
//! # Modes
//!
//! - Default: alert when the IP is not a known VPN/Tor exit, and optionally
//!   when the country is a SIGINT-alliance member.
//! - Country whitelist: alert only when the country is not whitelisted. The
//!   IP and flagged-country checks are skipped entirely in this mode.

pub mod lists;

use crate::geo::ObservationResult;
use std::collections::{BTreeSet, HashSet};
use std::fmt;
use std::sync::OnceLock;

/// Static sets an observation is checked against
#[derive(Debug, Clone, Default)]
pub struct ReferenceSets {
    pub trusted_ips: HashSet<String>,
    pub trusted_tor_ips: HashSet<String>,
    pub flagged_countries: HashSet<String>,
}

impl ReferenceSets {
    pub fn new<I, T, C>(trusted_ips: I, trusted_tor_ips: T, flagged_countries: C) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
        T: IntoIterator,
        T::Item: Into<String>,
        C: IntoIterator,
        C::Item: Into<String>,
    {
        Self {
            trusted_ips: trusted_ips.into_iter().map(Into::into).collect(),
            trusted_tor_ips: trusted_tor_ips.into_iter().map(Into::into).collect(),
            flagged_countries: flagged_countries.into_iter().map(Into::into).collect(),
        }
    }

    /// The built-in lists, initialised once per process
    pub fn builtin() -> &'static ReferenceSets {
        static BUILTIN: OnceLock<ReferenceSets> = OnceLock::new();
        BUILTIN.get_or_init(|| {
            ReferenceSets::new(
                lists::AIRVPN_2018_10_11
                    .iter()
                    .chain(lists::AIRVPN_2017_02_21)
                    .copied(),
                lists::TOR_EXITS_2017_02_21.iter().copied(),
                lists::FLAGGED_COUNTRIES.iter().copied(),
            )
        })
    }

    /// Whether the IP is a known VPN or Tor exit
    pub fn is_trusted(&self, ip: &str) -> bool {
        self.trusted_ips.contains(ip) || self.trusted_tor_ips.contains(ip)
    }

    pub fn is_flagged(&self, country: &str) -> bool {
        self.flagged_countries.contains(country)
    }
}

/// Per-run classification switches
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClassifyOptions {
    /// Also alert when the country is a SIGINT-alliance member
    pub warn_flagged_country: bool,
    /// When non-empty, the only criterion: the country must be listed
    pub country_whitelist: Option<BTreeSet<String>>,
}

impl ClassifyOptions {
    fn active_whitelist(&self) -> Option<&BTreeSet<String>> {
        self.country_whitelist.as_ref().filter(|w| !w.is_empty())
    }
}

/// Canonical form of a country code or name: trimmed, upper-cased
pub fn normalize_country(country: &str) -> String {
    country.trim().to_uppercase()
}

fn whitelist_contains(whitelist: &BTreeSet<String>, country: &str) -> bool {
    let country = normalize_country(country);
    whitelist.iter().any(|entry| normalize_country(entry) == country)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertKind {
    UnrecognizedIp,
    FlaggedCountry,
    CountryNotWhitelisted,
    ResolutionFailed,
}

/// A single user-facing warning
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlertEvent {
    pub kind: AlertKind,
    pub message: String,
    pub detail: Option<String>,
}

impl AlertEvent {
    pub fn unrecognized_ip(ip: &str) -> Self {
        Self {
            kind: AlertKind::UnrecognizedIp,
            message: "WARNING: IP not identified as AirVPN or Tor".to_string(),
            detail: Some(format!("IP: {}", ip)),
        }
    }

    pub fn flagged_country(ip: &str) -> Self {
        Self {
            kind: AlertKind::FlaggedCountry,
            message: "WARNING: IP in SIGINT country".to_string(),
            detail: Some(format!("IP: {}", ip)),
        }
    }

    pub fn country_not_whitelisted(country: Option<&str>, whitelist: &BTreeSet<String>) -> Self {
        let listed: Vec<&str> = whitelist.iter().map(String::as_str).collect();
        Self {
            kind: AlertKind::CountryNotWhitelisted,
            message: format!(
                "WARNING: country {} not in whitelist [{}]",
                country.unwrap_or("unknown"),
                listed.join(", ")
            ),
            detail: None,
        }
    }

    pub fn resolution_failed(reason: impl fmt::Display) -> Self {
        Self {
            kind: AlertKind::ResolutionFailed,
            message: "WARNING: error observing IP, unable to identify as secure".to_string(),
            detail: Some(reason.to_string()),
        }
    }
}

impl fmt::Display for AlertEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.detail {
            Some(detail) => write!(f, "{} ({})", self.message, detail),
            None => write!(f, "{}", self.message),
        }
    }
}

/// Classify one observation
///
/// Returns the alerts in evaluation order: the IP check comes before the
/// country check when both apply.
pub fn classify(
    result: &ObservationResult,
    refs: &ReferenceSets,
    options: &ClassifyOptions,
) -> Vec<AlertEvent> {
    let country = result.country.as_deref();

    // Whitelist mode replaces every other check, including VPN/Tor detection
    if let Some(whitelist) = options.active_whitelist() {
        let listed = country.is_some_and(|c| whitelist_contains(whitelist, c));
        return if listed {
            Vec::new()
        } else {
            vec![AlertEvent::country_not_whitelisted(country, whitelist)]
        };
    }

    let mut alerts = Vec::new();

    if !refs.is_trusted(&result.ip) {
        alerts.push(AlertEvent::unrecognized_ip(&result.ip));
    }

    if options.warn_flagged_country && country.is_some_and(|c| refs.is_flagged(c)) {
        alerts.push(AlertEvent::flagged_country(&result.ip));
    }

    alerts
}
