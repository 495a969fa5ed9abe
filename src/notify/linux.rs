//! Notifications over the freedesktop D-Bus interface
//!
//! Works with any running notification daemon (GNOME, KDE, dunst, mako).
//! With no daemon on the session bus, `show` fails and the caller drops it.

use super::NotificationError;
use notify_rust::{Notification, Urgency};
use std::path::Path;

pub fn show(
    app_name: &str,
    message: &str,
    detail: Option<&str>,
    icon: Option<&Path>,
) -> Result<(), NotificationError> {
    let mut notification = Notification::new();
    notification
        .appname(app_name)
        .summary(message)
        .urgency(Urgency::Critical);

    if let Some(detail) = detail {
        notification.body(detail);
    }
    if let Some(icon) = icon {
        notification.icon(&icon.to_string_lossy());
    }

    notification
        .show()
        .map(|_| ())
        .map_err(|e| NotificationError::Dispatch(e.to_string()))
}
