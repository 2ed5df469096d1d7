use std::path::PathBuf;
use std::sync::Arc;
use std::time::{Duration, Instant};

use chrono::Utc;
use tracing::{error, info, warn};

use crate::api::backend::TtsBackend;
use crate::api::error::ApiError;
use crate::api::types::{SynthesisRequest, SynthesisResponse};
use crate::app::error::{AppError, ValidationError};
use crate::app::events::AppEvent;
use crate::app::state::{AppState, ResponseInfo, COPY_CONFIRMATION};
use crate::audio::download::save_audio;
use crate::audio::playback::{PlaybackError, Player};
use crate::audio::registry::AudioRegistry;
use crate::audio::slot::AudioSlot;
use crate::clipboard::{example_request, Clipboard};
use crate::settings::Settings;

/// Canned text sent by the API smoke test.
pub const API_TEST_TEXT: &str = "This is a test request to the TTS API.";

const SYNTHESIS_FALLBACK_MESSAGE: &str = "Speech generation failed";

/// Owns the application state and every side-effecting collaborator. The UI
/// reads `state()` to render and calls the operations below on input.
///
/// Network operations are split into `begin_*` (validate, mark busy, build
/// the request) and `complete_*` (apply the outcome) so an event loop can run
/// the request in between without holding the controller. The plain async
/// versions chain both for callers that can simply wait.
pub struct Controller {
    state: AppState,
    audio: AudioSlot,
    backend: Arc<dyn TtsBackend>,
    player: Box<dyn Player>,
    clipboard: Box<dyn Clipboard>,
    settings: Settings,
}

impl Controller {
    pub fn new(
        backend: Arc<dyn TtsBackend>,
        player: Box<dyn Player>,
        clipboard: Box<dyn Clipboard>,
        settings: Settings,
    ) -> Self {
        Self {
            state: AppState::new(),
            audio: AudioSlot::new(AudioRegistry::new()),
            backend,
            player,
            clipboard,
            settings,
        }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut AppState {
        &mut self.state
    }

    pub fn audio(&self) -> &AudioSlot {
        &self.audio
    }

    pub fn backend(&self) -> Arc<dyn TtsBackend> {
        self.backend.clone()
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn is_playing(&self) -> bool {
        self.player.is_playing()
    }

    /// Writes the error to the status line and hands it back.
    fn report<T>(&mut self, result: Result<T, AppError>) -> Result<T, AppError> {
        if let Err(ref e) = result {
            error!(error = %e, "operation failed");
            self.state.error(e.to_string());
        }
        result
    }

    /// Fetches languages and voices, then selects the configured default
    /// language (or the first one). On failure the catalog stays empty.
    pub async fn load(&mut self) -> Result<(), AppError> {
        let result = self.fetch_catalog().await;
        self.report(result)?;

        let default = self
            .state
            .language(&self.settings.default_language)
            .or_else(|| self.state.languages.first())
            .map(|l| l.code.clone());
        if let Some(code) = default {
            self.state.select_language(&code);
        }
        Ok(())
    }

    async fn fetch_catalog(&mut self) -> Result<(), AppError> {
        let languages = self.backend.languages().await.map_err(AppError::Load)?;
        let voices = self.backend.voices().await.map_err(AppError::Load)?;
        info!(
            backend = self.backend.name(),
            languages = languages.len(),
            voices = voices.len(),
            "catalog loaded"
        );
        self.state.set_catalog(languages, voices);
        Ok(())
    }

    /// Validates input and marks a synthesis as in flight. Nothing is sent
    /// when this fails, and no second synthesis can start until
    /// `complete_synthesis` runs.
    pub fn begin_synthesis(&mut self) -> Result<SynthesisRequest, AppError> {
        let result = self
            .state
            .synthesis_request()
            .map_err(AppError::Validation);
        let request = self.report(result)?;
        self.state.generating = true;
        self.state.info("Generating speech...");
        Ok(request)
    }

    pub fn complete_synthesis(
        &mut self,
        outcome: Result<SynthesisResponse, ApiError>,
        elapsed: Duration,
    ) -> Result<(), AppError> {
        self.state.generating = false;

        let response = match outcome {
            Ok(response) => response,
            Err(e) => {
                self.state.last_response = Some(ResponseInfo {
                    status: e.status(),
                    elapsed,
                    size: None,
                });
                let message = match e {
                    ApiError::Status {
                        detail: Some(detail),
                        ..
                    } => detail,
                    ApiError::Status { detail: None, .. } => SYNTHESIS_FALLBACK_MESSAGE.to_string(),
                    other => other.to_string(),
                };
                return self.report(Err(AppError::Synthesis(message)));
            }
        };

        self.state.last_response = Some(ResponseInfo {
            status: Some(response.status),
            elapsed,
            size: Some(response.audio.len()),
        });

        // The previous handle is revoked inside `replace` before the new one exists.
        self.player.stop();
        let handle = self.audio.replace(response.audio).handle.clone();
        info!(%handle, elapsed_ms = elapsed.as_millis() as u64, "speech generated");
        self.state.success("Speech generated successfully!");

        if self.settings.autoplay {
            if let Some(bytes) = self.audio.bytes() {
                if let Err(e) = self.player.play(bytes) {
                    info!(error = %e, "autoplay did not start");
                }
            }
        }
        Ok(())
    }

    /// Validate, send, and apply the result in one go.
    pub async fn generate_speech(&mut self) -> Result<(), AppError> {
        let request = self.begin_synthesis()?;
        let started = Instant::now();
        let outcome = self.backend.synthesize(request).await;
        self.complete_synthesis(outcome, started.elapsed())
    }

    pub fn play(&mut self) -> Result<(), AppError> {
        let result = match self.audio.bytes() {
            None => Err(AppError::Playback(PlaybackError::NoAudio)),
            Some(bytes) => self.player.play(bytes).map_err(AppError::Playback),
        };
        self.report(result)
    }

    /// Halts playback and rewinds. Safe to call when nothing is playing.
    pub fn stop(&mut self) {
        self.player.stop();
    }

    pub fn download(&mut self) -> Result<PathBuf, AppError> {
        let dir = self.settings.download_dir();
        let result = match self.audio.bytes() {
            None => Err(AppError::NoAudio),
            Some(bytes) => save_audio(&dir, &bytes, Utc::now()).map_err(AppError::Download),
        };
        let path = self.report(result)?;
        info!(?path, "audio saved");
        self.state.success(format!("Audio saved to {}", path.display()));
        Ok(path)
    }

    pub fn begin_api_test(&mut self) -> Result<SynthesisRequest, AppError> {
        let result = match self.state.selected_voice.clone() {
            None => Err(AppError::Validation(ValidationError::NoVoice)),
            Some(_) if self.state.testing_api => Err(AppError::Validation(ValidationError::Busy)),
            Some(voice) => Ok(SynthesisRequest {
                text: API_TEST_TEXT.to_string(),
                voice,
                rate: 0,
                pitch: 0,
            }),
        };
        let request = self.report(result)?;
        self.state.testing_api = true;
        self.state.info("Testing API...");
        Ok(request)
    }

    /// Returns whether the test passed.
    pub fn complete_api_test(&mut self, outcome: Result<SynthesisResponse, ApiError>) -> bool {
        self.state.testing_api = false;
        match outcome {
            Ok(_) => {
                self.state.success("API test passed");
                true
            }
            Err(e) => {
                let reason = match e {
                    ApiError::Status { status, .. } => format!("Status: {status}"),
                    other => other.to_string(),
                };
                warn!(%reason, "API test failed");
                self.state.error(format!("API test failed: {reason}"));
                false
            }
        }
    }

    pub async fn test_api(&mut self) -> Result<bool, AppError> {
        let request = self.begin_api_test()?;
        let outcome = self.backend.synthesize(request).await;
        Ok(self.complete_api_test(outcome))
    }

    /// Copies an example request for the selected voice and starts the
    /// confirmation window.
    pub fn copy_example(&mut self, now: Instant) -> Result<(), AppError> {
        let example = example_request(self.state.selected_voice.as_deref());
        let result = self.clipboard.copy(&example).map_err(AppError::Clipboard);
        self.report(result)?;
        self.state.copied_until = Some(now + COPY_CONFIRMATION);
        self.state.success("Example request copied to clipboard");
        Ok(())
    }

    /// Applies a background completion. Errors are already on the status line.
    pub fn handle_event(&mut self, event: AppEvent) {
        match event {
            AppEvent::SynthesisFinished { outcome, elapsed } => {
                let _ = self.complete_synthesis(outcome, elapsed);
            }
            AppEvent::ApiTestFinished { outcome } => {
                self.complete_api_test(outcome);
            }
        }
    }
}
