pub mod backend;
pub mod error;
pub mod http;
pub mod mock;
pub mod types;

pub use backend::TtsBackend;
pub use error::ApiError;
pub use types::*;
