//! Audio output on a dedicated thread.
//!
//! rodio's `OutputStream` is `!Send`, so it lives on one OS thread that owns
//! the device and takes commands over a std channel. `play` waits for the
//! thread to confirm the stream decoded and started, so device and decode
//! errors come back to the caller.

use std::io::Cursor;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc;
use std::sync::Arc;
use std::time::Duration;

use rodio::{Decoder, OutputStream, Sink};
use tracing::{debug, error, warn};

use super::playback::{PlaybackError, Player};

enum AudioCommand {
    Play {
        data: Arc<[u8]>,
        reply: mpsc::Sender<Result<(), PlaybackError>>,
    },
    Stop,
    Shutdown,
}

pub struct RodioPlayer {
    cmd_tx: mpsc::Sender<AudioCommand>,
    playing: Arc<AtomicBool>,
}

impl RodioPlayer {
    pub fn new() -> Self {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let playing = Arc::new(AtomicBool::new(false));
        let thread_playing = playing.clone();

        if let Err(e) = std::thread::Builder::new()
            .name("audio-playback".into())
            .spawn(move || audio_thread(cmd_rx, thread_playing))
        {
            // Commands sent to a dead thread fail and surface as device errors.
            error!(error = ?e, "failed to spawn audio thread");
        }

        Self { cmd_tx, playing }
    }
}

impl Default for RodioPlayer {
    fn default() -> Self {
        Self::new()
    }
}

impl Player for RodioPlayer {
    fn play(&self, data: Arc<[u8]>) -> Result<(), PlaybackError> {
        let (reply, response) = mpsc::channel();
        self.cmd_tx
            .send(AudioCommand::Play { data, reply })
            .map_err(|_| PlaybackError::Device("audio thread is not running".into()))?;
        response
            .recv()
            .map_err(|_| PlaybackError::Device("audio thread exited".into()))?
    }

    fn stop(&self) {
        let _ = self.cmd_tx.send(AudioCommand::Stop);
    }

    fn is_playing(&self) -> bool {
        self.playing.load(Ordering::SeqCst)
    }
}

impl Drop for RodioPlayer {
    fn drop(&mut self) {
        let _ = self.cmd_tx.send(AudioCommand::Shutdown);
    }
}

fn audio_thread(cmd_rx: mpsc::Receiver<AudioCommand>, playing: Arc<AtomicBool>) {
    let output = match OutputStream::try_default() {
        Ok(output) => Some(output),
        Err(e) => {
            warn!(error = %e, "no audio output device");
            None
        }
    };

    let mut sink: Option<Sink> = None;

    loop {
        match cmd_rx.recv_timeout(Duration::from_millis(50)) {
            Ok(AudioCommand::Play { data, reply }) => {
                if let Some(ref s) = sink {
                    s.stop();
                }
                sink = None;

                let result = match output {
                    Some((ref _stream, ref handle)) => start(handle, data),
                    None => Err(PlaybackError::Device("no audio output device".into())),
                };

                match result {
                    Ok(new_sink) => {
                        sink = Some(new_sink);
                        playing.store(true, Ordering::SeqCst);
                        let _ = reply.send(Ok(()));
                    }
                    Err(e) => {
                        playing.store(false, Ordering::SeqCst);
                        let _ = reply.send(Err(e));
                    }
                }
            }

            Ok(AudioCommand::Stop) => {
                if let Some(s) = sink.take() {
                    s.stop();
                    debug!("playback stopped");
                }
                playing.store(false, Ordering::SeqCst);
            }

            Ok(AudioCommand::Shutdown) | Err(mpsc::RecvTimeoutError::Disconnected) => {
                if let Some(s) = sink.take() {
                    s.stop();
                }
                return;
            }

            Err(mpsc::RecvTimeoutError::Timeout) => {}
        }

        // Natural end of playback
        if sink.as_ref().is_some_and(|s| s.empty()) {
            sink = None;
            playing.store(false, Ordering::SeqCst);
        }
    }
}

fn start(handle: &rodio::OutputStreamHandle, data: Arc<[u8]>) -> Result<Sink, PlaybackError> {
    let sink = Sink::try_new(handle).map_err(|e| PlaybackError::Device(e.to_string()))?;
    let source =
        Decoder::new(Cursor::new(data.to_vec())).map_err(|e| PlaybackError::Decode(e.to_string()))?;
    sink.append(source);
    Ok(sink)
}
