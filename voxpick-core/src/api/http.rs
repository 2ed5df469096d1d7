use std::time::Duration;

use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use tracing::{debug, info, warn};

use crate::api::backend::TtsBackend;
use crate::api::error::ApiError;
use crate::api::types::{ErrorBody, HealthStatus, SynthesisRequest, SynthesisResponse, VoiceStats};
use crate::catalog::types::{Language, Voice};

/// `TtsBackend` over the service's JSON/HTTP API.
#[derive(Clone)]
pub struct HttpBackend {
    client: Client,
    base_url: String,
}

impl HttpBackend {
    /// Every request made through this backend is bounded by `timeout`.
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, ApiError> {
        let client = Client::builder().timeout(timeout).build()?;
        let base_url = base_url.into().trim_end_matches('/').to_string();

        Ok(Self { client, base_url })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        debug!(path, "GET");
        let response = self.client.get(self.url(path)).send().await?;
        let response = check_status(response).await?;
        let body = response.bytes().await?;
        Ok(serde_json::from_slice(&body)?)
    }
}

/// Turns a non-2xx response into `ApiError::Status`, pulling `detail` out of
/// the JSON body when the backend sent one.
async fn check_status(response: Response) -> Result<Response, ApiError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    let detail = serde_json::from_str::<ErrorBody>(&body)
        .ok()
        .and_then(|b| b.detail);
    warn!(status = status.as_u16(), ?detail, "backend returned error status");

    Err(ApiError::Status {
        status: status.as_u16(),
        detail,
    })
}

#[async_trait::async_trait]
impl TtsBackend for HttpBackend {
    fn name(&self) -> &'static str {
        "http"
    }

    async fn languages(&self) -> Result<Vec<Language>, ApiError> {
        self.get_json("/api/languages").await
    }

    async fn voices(&self) -> Result<Vec<Voice>, ApiError> {
        self.get_json("/api/voices").await
    }

    async fn synthesize(&self, request: SynthesisRequest) -> Result<SynthesisResponse, ApiError> {
        info!(
            voice = %request.voice,
            rate = request.rate,
            pitch = request.pitch,
            chars = request.text.chars().count(),
            "POST /api/tts"
        );

        let response = self
            .client
            .post(self.url("/api/tts"))
            .json(&request)
            .send()
            .await?;
        let response = check_status(response).await?;
        let status = response.status().as_u16();
        let audio = response.bytes().await?.to_vec();

        debug!(status, bytes = audio.len(), "synthesis response received");
        Ok(SynthesisResponse { status, audio })
    }

    async fn voice_info(&self, voice_id: &str) -> Result<Voice, ApiError> {
        self.get_json(&format!("/api/voices/{voice_id}")).await
    }

    async fn health(&self) -> Result<HealthStatus, ApiError> {
        self.get_json("/api/health").await
    }

    async fn stats(&self) -> Result<VoiceStats, ApiError> {
        self.get_json("/api/stats").await
    }
}
