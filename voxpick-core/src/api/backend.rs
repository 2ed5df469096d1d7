use crate::api::error::ApiError;
use crate::api::types::{HealthStatus, SynthesisRequest, SynthesisResponse, VoiceStats};
use crate::catalog::types::{Language, Voice};

/// The TTS service the client talks to.
#[async_trait::async_trait]
pub trait TtsBackend: Send + Sync {
    fn name(&self) -> &'static str;

    async fn languages(&self) -> Result<Vec<Language>, ApiError>;

    async fn voices(&self) -> Result<Vec<Voice>, ApiError>;

    async fn synthesize(&self, request: SynthesisRequest) -> Result<SynthesisResponse, ApiError>;

    async fn voice_info(&self, voice_id: &str) -> Result<Voice, ApiError>;

    async fn health(&self) -> Result<HealthStatus, ApiError>;

    async fn stats(&self) -> Result<VoiceStats, ApiError>;
}
