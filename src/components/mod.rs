//! The components module contains all views for the app.

mod app;
mod app_view;
mod library;
mod player;
mod settings;

pub use app::*;
pub use app_view::*;
pub use library::*;
pub use player::*;
pub use settings::*;

/// Blocking modal acknowledgment, used for every user-facing confirmation and
/// error report. Falls back to a log line when no window is available.
pub fn notify(message: &str) {
    #[cfg(target_arch = "wasm32")]
    if let Some(window) = web_sys::window() {
        let _ = window.alert_with_message(message);
        return;
    }
    tracing::info!("{message}");
}
