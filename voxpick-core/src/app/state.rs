use std::ops::RangeInclusive;
use std::time::{Duration, Instant};

use tracing::debug;

use crate::api::types::SynthesisRequest;
use crate::app::error::ValidationError;
use crate::catalog::filter::{compare_names, filter_voices, FilterState, GenderFilter};
use crate::catalog::types::{Language, Voice};

pub const MAX_TEXT_CHARS: usize = 10_000;

pub const RATE_RANGE: RangeInclusive<i32> = -100..=100;
pub const RATE_STEP: i32 = 5;
pub const PITCH_RANGE: RangeInclusive<i32> = -50..=50;
pub const PITCH_STEP: i32 = 1;

/// How long the "Copied!" confirmation stays visible.
pub const COPY_CONFIRMATION: Duration = Duration::from_secs(2);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusMessage {
    pub kind: StatusKind,
    pub text: String,
}

/// Round-trip details of the last synthesis request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResponseInfo {
    /// HTTP status, absent when the request never got a response.
    pub status: Option<u16>,
    pub elapsed: Duration,
    /// Audio size in bytes on success.
    pub size: Option<usize>,
}

/// All client state. Updates go through the methods below; each recomputes
/// whatever it invalidates.
#[derive(Debug, Default)]
pub struct AppState {
    /// Sorted by name.
    pub languages: Vec<Language>,
    pub voices: Vec<Voice>,
    pub filter: FilterState,
    /// `voices` after `filter`, sorted by name. Rebuilt on every filter change.
    pub filtered: Vec<Voice>,
    pub selected_voice: Option<String>,
    pub text: String,
    pub rate: i32,
    pub pitch: i32,
    pub generating: bool,
    pub testing_api: bool,
    pub last_response: Option<ResponseInfo>,
    pub status: Option<StatusMessage>,
    pub copied_until: Option<Instant>,
    pub loaded: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_catalog(&mut self, mut languages: Vec<Language>, voices: Vec<Voice>) {
        languages.sort_by(|a, b| compare_names(&a.name, &b.name));
        self.languages = languages;
        self.voices = voices;
        self.loaded = true;
        self.refilter();
    }

    fn refilter(&mut self) {
        self.filtered = filter_voices(&self.voices, &self.filter);
        debug!(
            language = ?self.filter.language_code,
            gender = %self.filter.gender,
            query = %self.filter.search_query,
            visible = self.filtered.len(),
            "voice filter applied"
        );
    }

    /// Switches language and selects the first voice (by name) of the new
    /// list, or clears the selection when the list is empty.
    pub fn select_language(&mut self, code: &str) {
        self.filter.language_code = Some(code.to_string());
        self.refilter();

        match self.filtered.first().map(|v| v.id.clone()) {
            Some(first) => {
                self.select_voice(&first);
            }
            None => {
                self.selected_voice = None;
                let name = self
                    .language(code)
                    .map(|l| l.name.clone())
                    .unwrap_or_else(|| code.to_string());
                self.warn(format!("No voices available for {name}"));
            }
        }
    }

    pub fn set_gender_filter(&mut self, gender: GenderFilter) {
        self.filter.gender = gender;
        self.refilter();
        self.keep_selection_visible();
    }

    pub fn set_search_query(&mut self, query: impl Into<String>) {
        self.filter.search_query = query.into();
        self.refilter();
        self.keep_selection_visible();
    }

    /// The selection must stay in `filtered`: a voice filtered out of view is
    /// replaced by the first visible one, or cleared when nothing is visible.
    fn keep_selection_visible(&mut self) {
        if self.selected_voice.is_some() && self.selected_index().is_some() {
            return;
        }
        let first = self.filtered.first().map(|v| v.id.clone());
        debug!(previous = ?self.selected_voice, next = ?first, "selection re-picked after filter change");
        self.selected_voice = first;
    }

    /// Selects a voice from the catalog. Unknown ids are ignored.
    pub fn select_voice(&mut self, voice_id: &str) -> bool {
        if !self.voices.iter().any(|v| v.id == voice_id) {
            debug!(voice_id, "ignoring selection of unknown voice");
            return false;
        }
        self.selected_voice = Some(voice_id.to_string());
        self.success(format!("Voice selected: {voice_id}"));
        true
    }

    pub fn language(&self, code: &str) -> Option<&Language> {
        self.languages.iter().find(|l| l.code == code)
    }

    pub fn selected_language(&self) -> Option<&Language> {
        self.language(self.filter.language_code.as_deref()?)
    }

    pub fn selected(&self) -> Option<&Voice> {
        let id = self.selected_voice.as_deref()?;
        self.voices.iter().find(|v| v.id == id)
    }

    /// Row of the selected voice in `filtered`.
    pub fn selected_index(&self) -> Option<usize> {
        let id = self.selected_voice.as_deref()?;
        self.filtered.iter().position(|v| v.id == id)
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    pub fn char_count(&self) -> usize {
        text_length(&self.text)
    }

    pub fn adjust_rate(&mut self, steps: i32) {
        self.rate = (self.rate + steps * RATE_STEP).clamp(*RATE_RANGE.start(), *RATE_RANGE.end());
    }

    pub fn adjust_pitch(&mut self, steps: i32) {
        self.pitch =
            (self.pitch + steps * PITCH_STEP).clamp(*PITCH_RANGE.start(), *PITCH_RANGE.end());
    }

    /// Builds the synthesis request from the current input, or explains why
    /// it cannot be sent. The text is trimmed before counting.
    pub fn synthesis_request(&self) -> Result<SynthesisRequest, ValidationError> {
        if self.generating {
            return Err(ValidationError::Busy);
        }

        let text = self.text.trim();
        if text.is_empty() {
            return Err(ValidationError::EmptyText);
        }

        let voice = self.selected_voice.clone().ok_or(ValidationError::NoVoice)?;

        let len = text_length(text);
        if len > MAX_TEXT_CHARS {
            return Err(ValidationError::TextTooLong {
                len,
                max: MAX_TEXT_CHARS,
            });
        }

        Ok(SynthesisRequest {
            text: text.to_string(),
            voice,
            rate: self.rate,
            pitch: self.pitch,
        })
    }

    pub fn set_status(&mut self, kind: StatusKind, text: impl Into<String>) {
        self.status = Some(StatusMessage {
            kind,
            text: text.into(),
        });
    }

    pub fn info(&mut self, text: impl Into<String>) {
        self.set_status(StatusKind::Info, text);
    }

    pub fn success(&mut self, text: impl Into<String>) {
        self.set_status(StatusKind::Success, text);
    }

    pub fn warn(&mut self, text: impl Into<String>) {
        self.set_status(StatusKind::Warning, text);
    }

    pub fn error(&mut self, text: impl Into<String>) {
        self.set_status(StatusKind::Error, text);
    }

    pub fn status_text(&self) -> Option<&str> {
        self.status.as_ref().map(|s| s.text.as_str())
    }

    pub fn copy_confirmed(&self, now: Instant) -> bool {
        self.copied_until.is_some_and(|until| now < until)
    }
}

/// Length in UTF-16 code units, the unit the web front-end limit is
/// written in. Characters outside the BMP count twice.
fn text_length(text: &str) -> usize {
    text.encode_utf16().count()
}
