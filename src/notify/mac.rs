//! Notifications through the macOS user notification center
//!
//! macOS has no urgency levels, so alerts are delivered as regular banners.

use super::NotificationError;
use notify_rust::Notification;
use std::path::Path;

pub fn show(
    app_name: &str,
    message: &str,
    detail: Option<&str>,
    _icon: Option<&Path>,
) -> Result<(), NotificationError> {
    let mut notification = Notification::new();
    notification.appname(app_name).summary(message);

    if let Some(detail) = detail {
        notification.body(detail);
    }

    notification
        .show()
        .map(|_| ())
        .map_err(|e| NotificationError::Dispatch(e.to_string()))
}
