use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PlaybackError {
    #[error("No audio to play")]
    NoAudio,

    #[error("Audio output is not available in this build (enable the `audio` feature)")]
    Unavailable,

    #[error("Audio device error: {0}")]
    Device(String),

    #[error("Could not decode audio: {0}")]
    Decode(String),
}

/// Audio output. `play` starts playback from the beginning, replacing
/// whatever was playing; `stop` halts and rewinds and is a no-op when idle.
pub trait Player: Send + Sync {
    fn play(&self, audio: Arc<[u8]>) -> Result<(), PlaybackError>;

    fn stop(&self);

    fn is_playing(&self) -> bool;
}

/// Player used when the crate is built without audio output.
pub struct SilentPlayer;

impl Player for SilentPlayer {
    fn play(&self, _audio: Arc<[u8]>) -> Result<(), PlaybackError> {
        Err(PlaybackError::Unavailable)
    }

    fn stop(&self) {}

    fn is_playing(&self) -> bool {
        false
    }
}

/// Test player that records what it was asked to do. Clones share state.
#[derive(Clone, Default)]
pub struct RecordingPlayer {
    played: Arc<Mutex<Vec<Arc<[u8]>>>>,
    stops: Arc<Mutex<usize>>,
    playing: Arc<AtomicBool>,
    failure: Arc<Mutex<Option<PlaybackError>>>,
}

impl RecordingPlayer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes every following `play` fail with `error`.
    pub fn fail_with(&self, error: PlaybackError) {
        *self.failure.lock().unwrap() = Some(error);
    }

    pub fn played(&self) -> Vec<Arc<[u8]>> {
        self.played.lock().unwrap().clone()
    }

    pub fn stop_count(&self) -> usize {
        *self.stops.lock().unwrap()
    }
}

impl Player for RecordingPlayer {
    fn play(&self, audio: Arc<[u8]>) -> Result<(), PlaybackError> {
        if let Some(error) = self.failure.lock().unwrap().clone() {
            return Err(error);
        }
        self.played.lock().unwrap().push(audio);
        self.playing.store(true, Ordering::SeqCst);
        Ok(())
    }

    fn stop(&self) {
        if self.playing.swap(false, Ordering::SeqCst) {
            *self.stops.lock().unwrap() += 1;
        }
    }

    fn is_playing(&self) -> bool {
        self.playing.load(Ordering::SeqCst)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn silent_player_reports_unavailable() {
        let player = SilentPlayer;
        assert_eq!(
            player.play(Arc::from(vec![0u8; 4])),
            Err(PlaybackError::Unavailable)
        );
        player.stop();
        assert!(!player.is_playing());
    }

    #[test]
    fn recording_player_stop_is_idempotent() {
        let player = RecordingPlayer::new();
        player.play(Arc::from(vec![1u8])).unwrap();
        player.stop();
        player.stop();
        assert_eq!(player.stop_count(), 1);
        assert!(!player.is_playing());
    }
}
