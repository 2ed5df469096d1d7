use thiserror::Error;

use crate::api::error::ApiError;
use crate::audio::playback::PlaybackError;
use crate::clipboard::ClipboardError;

/// Input problems caught before any request is sent.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Enter some text to synthesize")]
    EmptyText,

    #[error("Select a voice")]
    NoVoice,

    #[error("Text is too long ({len} characters, maximum {max})")]
    TextTooLong { len: usize, max: usize },

    #[error("Speech generation is already in progress")]
    Busy,
}

/// Everything an operation can report to the status line. None of these are
/// retried; each ends only the operation that raised it.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Failed to load data: {0}")]
    Load(ApiError),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Backend message verbatim when there was one.
    #[error("{0}")]
    Synthesis(String),

    #[error(transparent)]
    Playback(#[from] PlaybackError),

    #[error(transparent)]
    Clipboard(#[from] ClipboardError),

    #[error("Failed to save audio: {0}")]
    Download(std::io::Error),

    #[error("No audio to download")]
    NoAudio,
}
