use thiserror::Error;

#[derive(Error, Debug)]
pub enum ApiError {
    /// Non-2xx response. `detail` is the backend's message when it sent one.
    #[error("HTTP {status}: {}", detail.as_deref().unwrap_or("no details"))]
    Status { status: u16, detail: Option<String> },

    #[error("Request timed out")]
    Timeout,

    #[error("Request failed: {0}")]
    Transport(reqwest::Error),

    #[error("Invalid response: {0}")]
    Decode(String),
}

impl ApiError {
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(source: reqwest::Error) -> Self {
        if source.is_timeout() {
            ApiError::Timeout
        } else if source.is_decode() {
            ApiError::Decode(source.to_string())
        } else {
            ApiError::Transport(source)
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(source: serde_json::Error) -> Self {
        ApiError::Decode(source.to_string())
    }
}
