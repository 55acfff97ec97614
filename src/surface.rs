//! Seams to the display surface: toast notifications and clipboard hand-off.
//! The webview owns the actual rendering; the backend only emits events.

use serde::Serialize;
use tauri::{AppHandle, Emitter};
use tracing::warn;

/// Fire-and-forget transient messages for the user.
pub trait NotificationSink: Send + Sync {
    fn notify_error(&self, message: &str);
    fn notify_success(&self, message: &str);
}

/// Fire-and-forget copy of the current poem text.
pub trait ClipboardSink: Send + Sync {
    fn write_text(&self, text: &str) -> anyhow::Result<()>;
}

#[derive(Serialize, Clone)]
struct NotificationPayload<'a> {
    level: &'static str,
    message: &'a str,
}

/// Production sinks backed by Tauri events. The page listens for
/// `notification` (toast) and `clipboard` (navigator.clipboard write).
pub struct WebviewSurface {
    app: AppHandle,
}

impl WebviewSurface {
    pub fn new(app: AppHandle) -> Self {
        Self { app }
    }

    fn emit_notification(&self, level: &'static str, message: &str) {
        if let Err(err) = self
            .app
            .emit("notification", NotificationPayload { level, message })
        {
            warn!(error = %err, "failed to emit notification event");
        }
    }
}

impl NotificationSink for WebviewSurface {
    fn notify_error(&self, message: &str) {
        self.emit_notification("error", message);
    }

    fn notify_success(&self, message: &str) {
        self.emit_notification("success", message);
    }
}

impl ClipboardSink for WebviewSurface {
    fn write_text(&self, text: &str) -> anyhow::Result<()> {
        self.app.emit("clipboard", text)?;
        Ok(())
    }
}
