use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Body of `POST /api/tts`. Rate is a percentage offset, pitch an offset in Hz.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SynthesisRequest {
    pub text: String,
    pub voice: String,
    pub rate: i32,
    pub pitch: i32,
}

/// Successful synthesis: the raw audio body and the status it came with.
#[derive(Debug, Clone)]
pub struct SynthesisResponse {
    pub status: u16,
    pub audio: Vec<u8>,
}

/// Error payload the backend attaches to non-2xx responses.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub detail: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthStatus {
    pub status: String,
    #[serde(default)]
    pub service: Option<String>,
    #[serde(default)]
    pub version: Option<String>,
    #[serde(default)]
    pub languages_count: u32,
    #[serde(default)]
    pub voices_count: u32,
    #[serde(default)]
    pub languages: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LanguageStats {
    pub total: u32,
    pub male: u32,
    pub female: u32,
    /// First few voice ids of the language.
    #[serde(default)]
    pub voices: Vec<String>,
}

/// `GET /api/stats`, keyed by language name.
pub type VoiceStats = BTreeMap<String, LanguageStats>;
