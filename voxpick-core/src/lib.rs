pub mod api;
pub mod app;
pub mod audio;
pub mod catalog;
pub mod clipboard;
pub mod settings;

// Public library API. The binary only goes through these, everything else is
// public for tests and tooling.
pub use api::{backend::TtsBackend, http::HttpBackend};
pub use app::{controller::Controller, error::AppError, events::AppEvent, state::AppState};
pub use catalog::{filter::FilterState, types::Voice};
pub use settings::{Settings, SettingsManager};
