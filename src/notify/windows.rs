//! Native Windows toast notifications

use super::NotificationError;
use std::path::Path;
use tauri_winrt_notification::{Duration, IconCrop, Toast};

pub fn show(
    app_name: &str,
    message: &str,
    detail: Option<&str>,
    icon: Option<&Path>,
) -> Result<(), NotificationError> {
    // Unregistered binaries have to borrow PowerShell's AUMID to show toasts
    let mut toast = Toast::new(Toast::POWERSHELL_APP_ID)
        .title(app_name)
        .text1(message)
        .duration(Duration::Long);

    if let Some(detail) = detail {
        toast = toast.text2(detail);
    }
    if let Some(icon) = icon {
        toast = toast.icon(icon, IconCrop::Square, app_name);
    }

    toast
        .show()
        .map_err(|e| NotificationError::Dispatch(e.to_string()))
}
