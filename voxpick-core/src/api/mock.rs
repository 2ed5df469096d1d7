use std::sync::{Arc, Mutex};

use crate::api::backend::TtsBackend;
use crate::api::error::ApiError;
use crate::api::types::{
    HealthStatus, LanguageStats, SynthesisRequest, SynthesisResponse, VoiceStats,
};
use crate::catalog::types::{Gender, Language, Voice};

/// Scripted behavior for `MockBackend`
#[derive(Debug, Clone, Default)]
pub enum MockBehavior {
    /// Every request succeeds
    #[default]
    Success,
    /// Reference data requests fail with the given status
    LoadFailure { status: u16 },
    /// Synthesis fails with a status and optional detail
    SynthesisFailure { status: u16, detail: Option<String> },
    /// Synthesis times out
    SynthesisTimeout,
    /// Pops one behavior per synthesis call, falls back to `Success` when empty
    BehaviorQueue { behaviors: Vec<MockBehavior> },
}

/// In-memory backend for tests. Clones share state so a test can keep one
/// handle and inspect what the controller sent through another.
#[derive(Clone)]
pub struct MockBackend {
    languages: Vec<Language>,
    voices: Vec<Voice>,
    behavior: Arc<Mutex<MockBehavior>>,
    captured_requests: Arc<Mutex<Vec<SynthesisRequest>>>,
    load_calls: Arc<Mutex<usize>>,
}

impl MockBackend {
    pub fn new(behavior: MockBehavior) -> Self {
        Self::with_catalog(sample_languages(), sample_voices(), behavior)
    }

    pub fn with_catalog(
        languages: Vec<Language>,
        voices: Vec<Voice>,
        behavior: MockBehavior,
    ) -> Self {
        Self {
            languages,
            voices,
            behavior: Arc::new(Mutex::new(behavior)),
            captured_requests: Arc::new(Mutex::new(Vec::new())),
            load_calls: Arc::new(Mutex::new(0)),
        }
    }

    pub fn set_behavior(&self, behavior: MockBehavior) {
        *self.behavior.lock().unwrap() = behavior;
    }

    pub fn captured_requests(&self) -> Vec<SynthesisRequest> {
        self.captured_requests.lock().unwrap().clone()
    }

    pub fn synthesis_calls(&self) -> usize {
        self.captured_requests.lock().unwrap().len()
    }

    pub fn load_calls(&self) -> usize {
        *self.load_calls.lock().unwrap()
    }

    fn next_synthesis_behavior(&self) -> MockBehavior {
        let mut guard = self.behavior.lock().unwrap();
        match &mut *guard {
            MockBehavior::BehaviorQueue { behaviors } => {
                if behaviors.is_empty() {
                    MockBehavior::Success
                } else {
                    behaviors.remove(0)
                }
            }
            other => other.clone(),
        }
    }

    fn check_load(&self) -> Result<(), ApiError> {
        *self.load_calls.lock().unwrap() += 1;
        match &*self.behavior.lock().unwrap() {
            MockBehavior::LoadFailure { status } => Err(ApiError::Status {
                status: *status,
                detail: None,
            }),
            _ => Ok(()),
        }
    }
}

#[async_trait::async_trait]
impl TtsBackend for MockBackend {
    fn name(&self) -> &'static str {
        "mock"
    }

    async fn languages(&self) -> Result<Vec<Language>, ApiError> {
        self.check_load()?;
        Ok(self.languages.clone())
    }

    async fn voices(&self) -> Result<Vec<Voice>, ApiError> {
        self.check_load()?;
        Ok(self.voices.clone())
    }

    async fn synthesize(&self, request: SynthesisRequest) -> Result<SynthesisResponse, ApiError> {
        self.captured_requests.lock().unwrap().push(request.clone());

        match self.next_synthesis_behavior() {
            MockBehavior::SynthesisFailure { status, detail } => {
                Err(ApiError::Status { status, detail })
            }
            MockBehavior::SynthesisTimeout => Err(ApiError::Timeout),
            _ => Ok(SynthesisResponse {
                status: 200,
                audio: format!("audio:{}:{}", request.voice, request.text).into_bytes(),
            }),
        }
    }

    async fn voice_info(&self, voice_id: &str) -> Result<Voice, ApiError> {
        self.voices
            .iter()
            .find(|v| v.id == voice_id)
            .cloned()
            .ok_or_else(|| ApiError::Status {
                status: 404,
                detail: Some("Voice not found".to_string()),
            })
    }

    async fn health(&self) -> Result<HealthStatus, ApiError> {
        Ok(HealthStatus {
            status: "ok".to_string(),
            service: Some("mock".to_string()),
            version: None,
            languages_count: self.languages.len() as u32,
            voices_count: self.voices.len() as u32,
            languages: self.languages.iter().map(|l| l.name.clone()).collect(),
        })
    }

    async fn stats(&self) -> Result<VoiceStats, ApiError> {
        let mut stats = VoiceStats::new();
        for language in &self.languages {
            let voices: Vec<&Voice> = self
                .voices
                .iter()
                .filter(|v| v.language == language.code)
                .collect();
            stats.insert(
                language.name.clone(),
                LanguageStats {
                    total: voices.len() as u32,
                    male: voices.iter().filter(|v| v.gender == Gender::Male).count() as u32,
                    female: voices.iter().filter(|v| v.gender == Gender::Female).count() as u32,
                    voices: voices.iter().take(5).map(|v| v.id.clone()).collect(),
                },
            );
        }
        Ok(stats)
    }
}

pub fn sample_languages() -> Vec<Language> {
    vec![
        Language {
            code: "English".to_string(),
            name: "English".to_string(),
            count: 3,
        },
        Language {
            code: "German".to_string(),
            name: "German".to_string(),
            count: 1,
        },
        Language {
            code: "Russian".to_string(),
            name: "Russian".to_string(),
            count: 2,
        },
    ]
}

pub fn sample_voices() -> Vec<Voice> {
    let voice = |id: &str, name: &str, language: &str, locale: &str, gender: Gender| Voice {
        id: id.to_string(),
        name: name.to_string(),
        language: language.to_string(),
        locale: locale.to_string(),
        gender,
        country: locale.split('-').nth(1).map(str::to_string),
    };

    vec![
        voice("ru-RU-SvetlanaNeural", "Svetlana - ru-RU (Female)", "Russian", "ru-RU", Gender::Female),
        voice("ru-RU-DmitryNeural", "Dmitry - ru-RU (Male)", "Russian", "ru-RU", Gender::Male),
        voice("en-US-GuyNeural", "Guy - en-US (Male)", "English", "en-US", Gender::Male),
        voice("en-US-AriaNeural", "Aria - en-US (Female)", "English", "en-US", Gender::Female),
        voice("en-GB-SoniaNeural", "Sonia - en-GB (Female)", "English", "en-GB", Gender::Female),
        voice("de-DE-KatjaNeural", "Katja - de-DE (Female)", "German", "de-DE", Gender::Female),
    ]
}
