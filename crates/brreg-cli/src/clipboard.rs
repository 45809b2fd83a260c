use brreg_core::Notification;

/// Best-effort copy; the outcome is only ever reported as a notification.
pub(crate) fn copy_text(text: &str) -> Notification {
    match arboard::Clipboard::new() {
        Ok(mut clipboard) => match clipboard.set_text(text) {
            Ok(()) => Notification::success("Copied", "Company data copied to clipboard"),
            Err(e) => Notification::error("Copy failed", format!("Clipboard error: {e}")),
        },
        Err(e) => Notification::error("Copy failed", format!("Clipboard unavailable: {e}")),
    }
}
