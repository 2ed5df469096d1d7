pub mod download;
pub mod playback;
pub mod registry;
#[cfg(feature = "audio")]
pub mod rodio_player;
pub mod slot;

pub use playback::{PlaybackError, Player, RecordingPlayer, SilentPlayer};
pub use registry::{AudioHandle, AudioRegistry};
pub use slot::{AudioResult, AudioSlot};

/// Player for this build: rodio when the `audio` feature is on, otherwise a
/// player that always reports output as unavailable.
pub fn default_player() -> Box<dyn Player> {
    #[cfg(feature = "audio")]
    {
        Box::new(rodio_player::RodioPlayer::new())
    }
    #[cfg(not(feature = "audio"))]
    {
        Box::new(SilentPlayer)
    }
}
