pub mod controller;
pub mod error;
pub mod events;
pub mod state;

pub use controller::Controller;
pub use error::{AppError, ValidationError};
pub use events::AppEvent;
pub use state::{AppState, ResponseInfo, StatusKind, StatusMessage};
