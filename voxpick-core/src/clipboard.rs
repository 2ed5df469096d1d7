use std::io;
use std::sync::{Arc, Mutex};

use thiserror::Error;

use crate::api::types::SynthesisRequest;

/// Voice used in the example request when nothing is selected.
pub const EXAMPLE_FALLBACK_VOICE: &str = "ru-RU-SvetlanaNeural";

#[derive(Error, Debug)]
pub enum ClipboardError {
    #[error("Failed to write to clipboard: {0}")]
    Write(#[from] io::Error),
}

pub trait Clipboard: Send + Sync {
    fn copy(&self, text: &str) -> Result<(), ClipboardError>;
}

/// Ready-to-paste HTTP request for the synthesis endpoint.
pub fn example_request(selected_voice: Option<&str>) -> String {
    let body = SynthesisRequest {
        text: "Your text here".to_string(),
        voice: selected_voice.unwrap_or(EXAMPLE_FALLBACK_VOICE).to_string(),
        rate: 0,
        pitch: 0,
    };
    // A struct of strings and ints always serializes.
    let json = serde_json::to_string_pretty(&body).unwrap_or_default();
    format!("POST /api/tts\nContent-Type: application/json\n\n{json}")
}

/// Clipboard that keeps copied text in memory. Clones share contents.
#[derive(Clone, Default)]
pub struct MemoryClipboard {
    contents: Arc<Mutex<Option<String>>>,
    fail: Arc<Mutex<bool>>,
}

impl MemoryClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contents(&self) -> Option<String> {
        self.contents.lock().unwrap().clone()
    }

    pub fn set_failing(&self, fail: bool) {
        *self.fail.lock().unwrap() = fail;
    }
}

impl Clipboard for MemoryClipboard {
    fn copy(&self, text: &str) -> Result<(), ClipboardError> {
        if *self.fail.lock().unwrap() {
            return Err(ClipboardError::Write(io::Error::new(
                io::ErrorKind::PermissionDenied,
                "clipboard access denied",
            )));
        }
        *self.contents.lock().unwrap() = Some(text.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn example_uses_selected_voice() {
        let example = example_request(Some("en-US-GuyNeural"));
        assert!(example.starts_with("POST /api/tts\nContent-Type: application/json\n\n{"));
        assert!(example.contains(r#""voice": "en-US-GuyNeural""#));
        assert!(example.contains(r#""rate": 0"#));
        assert!(example.contains(r#""pitch": 0"#));
    }

    #[test]
    fn example_falls_back_to_default_voice() {
        let example = example_request(None);
        assert!(example.contains(EXAMPLE_FALLBACK_VOICE));
    }

    #[test]
    fn example_body_is_valid_json() {
        let example = example_request(None);
        let body = example.split("\n\n").nth(1).unwrap();
        let parsed: SynthesisRequest = serde_json::from_str(body).unwrap();
        assert_eq!(parsed.text, "Your text here");
    }
}
