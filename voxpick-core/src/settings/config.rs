use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

/// Persistent client configuration, stored as TOML.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Settings {
    /// Base URL of the TTS service, without the `/api` suffix.
    #[serde(default = "default_server_url")]
    pub server_url: String,

    /// Upper bound for every HTTP request, including synthesis.
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,

    /// Language code selected after the catalog loads.
    #[serde(default = "default_language")]
    pub default_language: String,

    /// Where downloads are written. Current directory when unset.
    #[serde(default)]
    pub download_dir: Option<PathBuf>,

    /// Start playback as soon as synthesis finishes.
    #[serde(default = "default_autoplay")]
    pub autoplay: bool,
}

fn default_server_url() -> String {
    "http://127.0.0.1:8000".to_string()
}

fn default_request_timeout_secs() -> u64 {
    60
}

fn default_language() -> String {
    "Russian".to_string()
}

fn default_autoplay() -> bool {
    true
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            server_url: default_server_url(),
            request_timeout_secs: default_request_timeout_secs(),
            default_language: default_language(),
            download_dir: None,
            autoplay: default_autoplay(),
        }
    }
}

impl Settings {
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs.max(1))
    }

    pub fn download_dir(&self) -> PathBuf {
        self.download_dir
            .clone()
            .unwrap_or_else(|| PathBuf::from("."))
    }
}
