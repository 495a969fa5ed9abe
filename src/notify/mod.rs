//! Desktop notifications for alerts
//!
//! Delivery is best-effort. Every dispatch returns a `Result`, and callers
//! in the observation loop discard it explicitly: a missing notification
//! daemon must never take the monitor down.

#[cfg(target_os = "macos")]
mod mac;
#[cfg(target_os = "windows")]
mod windows;
#[cfg(not(any(target_os = "macos", target_os = "windows")))]
mod linux;

use crate::classify::AlertEvent;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum NotificationError {
    #[error("Failed to dispatch notification: {0}")]
    Dispatch(String),
}

/// Sink for user-facing alerts
pub trait Notifier {
    fn notify(&self, message: &str, detail: Option<&str>) -> Result<(), NotificationError>;

    fn notify_alert(&self, alert: &AlertEvent) -> Result<(), NotificationError> {
        self.notify(&alert.message, alert.detail.as_deref())
    }
}

impl<N: Notifier + ?Sized> Notifier for &N {
    fn notify(&self, message: &str, detail: Option<&str>) -> Result<(), NotificationError> {
        (**self).notify(message, detail)
    }
}

/// Notifier backed by the platform notification facility
#[derive(Debug, Clone)]
pub struct DesktopNotifier {
    app_name: String,
    icon: Option<PathBuf>,
}

impl DesktopNotifier {
    pub fn new(app_name: impl Into<String>) -> Self {
        Self {
            app_name: app_name.into(),
            icon: None,
        }
    }

    pub fn with_icon(mut self, icon: Option<PathBuf>) -> Self {
        self.icon = icon;
        self
    }

    /// Icon path, only if it points at an existing file
    fn icon(&self) -> Option<&Path> {
        self.icon.as_deref().filter(|p| p.is_file())
    }
}

impl Notifier for DesktopNotifier {
    fn notify(&self, message: &str, detail: Option<&str>) -> Result<(), NotificationError> {
        if message.is_empty() {
            return Ok(());
        }

        #[cfg(target_os = "macos")]
        return mac::show(&self.app_name, message, detail, self.icon());

        #[cfg(target_os = "windows")]
        return windows::show(&self.app_name, message, detail, self.icon());

        #[cfg(not(any(target_os = "macos", target_os = "windows")))]
        return linux::show(&self.app_name, message, detail, self.icon());
    }
}
