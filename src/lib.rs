//! pebcaw - monitor internet connection security
//!
//! Periodically looks up the public IP of this machine and warns, through
//! desktop notifications, when it is not a known VPN or Tor exit or when it
//! sits in a SIGINT-alliance country. It is an informational monitor only:
//! the geolocation service it trusts is unauthenticated.
//!
//! # Architecture
//!
//! - `geo`: Public address resolution (ipinfo.io)
//! - `classify`: Reference lists and alert classification
//! - `notify`: Desktop notifications (best-effort)
//! - `display`: Continuous terminal display
//! - `monitor`: The observation loop and restart timer
//! - `config`: Configuration file handling (TOML) and CLI overrides
//! - `signal`: Ctrl+C handling
//! - `platform`: Process re-execution for scheduled restarts
//!
//! # Usage
//!
//! ```bash
//! pebcaw --interval=60 --warn-sigint-country --display
//! pebcaw --countries-whitelist=CH,IS --restart-regularly
//! ```

pub mod classify;
pub mod config;
pub mod display;
pub mod geo;
pub mod monitor;
pub mod notify;
pub mod platform;
pub mod signal;

pub use classify::{AlertEvent, AlertKind, ClassifyOptions, ReferenceSets, classify};
pub use config::{Config, ConfigError, Overrides};
pub use geo::{AddressResolver, IpInfoResolver, ObservationResult, ResolutionError};
pub use monitor::{Monitor, MonitorSettings, RunOutcome};
pub use notify::{DesktopNotifier, NotificationError, Notifier};
pub use signal::ShutdownSignal;
