use anyhow::Result;
use crossterm::{
    event::{
        Event as CrosstermEvent, EventStream, KeyEventKind, KeyboardEnhancementFlags,
        PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
    },
    execute,
    terminal::{
        disable_raw_mode, enable_raw_mode, supports_keyboard_enhancement, EnterAlternateScreen,
        LeaveAlternateScreen,
    },
};
use futures::StreamExt;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::mpsc;
use tracing::{debug, info};
use tui_textarea::TextArea;
use voxpick_core::audio::default_player;
use voxpick_core::{AppEvent, Controller, Settings, TtsBackend};

use super::input_handler::{configure_textarea, handle_key_event, TuiAction};
use super::state::{SessionInfo, TuiState};
use super::ui::{draw_ui, AudioView};
use crate::clipboard::TerminalClipboard;

pub struct TuiApp {
    terminal: Terminal<CrosstermBackend<io::Stdout>>,
    controller: Controller,
    event_tx: mpsc::UnboundedSender<AppEvent>,
    event_rx: mpsc::UnboundedReceiver<AppEvent>,
    state: TuiState,
    keyboard_enhanced: bool,
}

impl TuiApp {
    pub fn new(
        backend: Arc<dyn TtsBackend>,
        settings: Settings,
        session: SessionInfo,
    ) -> Result<Self> {
        let controller = Controller::new(
            backend,
            default_player(),
            Box::new(TerminalClipboard),
            settings,
        );
        let (event_tx, event_rx) = mpsc::unbounded_channel();

        // Setup terminal
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        // Lets terminals that support it report Ctrl+Enter distinctly.
        let keyboard_enhanced = matches!(supports_keyboard_enhancement(), Ok(true));
        if keyboard_enhanced {
            execute!(
                stdout,
                PushKeyboardEnhancementFlags(KeyboardEnhancementFlags::DISAMBIGUATE_ESCAPE_CODES)
            )?;
        }
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;

        Ok(Self {
            terminal,
            controller,
            event_tx,
            event_rx,
            state: TuiState::new(session),
            keyboard_enhanced,
        })
    }

    pub async fn run(&mut self) -> Result<()> {
        // Install panic hook to restore terminal on panic
        let original_hook = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |panic_info| {
            let _ = disable_raw_mode();
            let _ = execute!(io::stdout(), PopKeyboardEnhancementFlags, LeaveAlternateScreen);
            original_hook(panic_info);
        }));

        let mut textarea = TextArea::default();
        configure_textarea(&mut textarea);

        self.controller.state_mut().info("Loading voices...");
        self.draw(&mut textarea)?;
        // Failures are already on the status line; the UI stays usable.
        if self.controller.load().await.is_ok() {
            let state = self.controller.state();
            info!(
                languages = state.languages.len(),
                voices = state.voices.len(),
                "TUI ready"
            );
        }

        let tick_rate = Duration::from_millis(80);
        let mut crossterm_reader = EventStream::new();

        loop {
            self.draw(&mut textarea)?;

            if self.state.should_quit {
                break;
            }

            tokio::select! {
                // Completions of background requests
                Some(app_event) = self.event_rx.recv() => {
                    self.controller.handle_event(app_event);
                }

                // Poll crossterm events (async)
                Some(Ok(crossterm_event)) = crossterm_reader.next() => {
                    if let CrosstermEvent::Key(key) = crossterm_event {
                        if key.kind == KeyEventKind::Press {
                            let action = handle_key_event(
                                key,
                                &mut textarea,
                                &mut self.state,
                                self.controller.state_mut(),
                            );
                            self.dispatch(action);
                        }
                    }
                    // Resize and other events re-render on the next iteration
                }

                // Tick for the spinner and the copy confirmation timeout
                _ = tokio::time::sleep(tick_rate) => {
                    self.state.spinner_frame = self.state.spinner_frame.wrapping_add(1);
                }
            }
        }

        self.controller.stop();
        self.restore_terminal()?;

        Ok(())
    }

    fn draw(&mut self, textarea: &mut TextArea) -> Result<()> {
        let audio = AudioView {
            playing: self.controller.is_playing(),
            has_audio: self.controller.audio().current().is_some(),
        };
        let state = &self.state;
        let app = self.controller.state();
        self.terminal.draw(|frame| {
            draw_ui(frame, state, app, &audio, textarea);
        })?;
        Ok(())
    }

    /// Runs an action. Errors land on the status line inside the controller.
    fn dispatch(&mut self, action: TuiAction) {
        match action {
            TuiAction::Generate => self.spawn_synthesis(),
            TuiAction::TestApi => self.spawn_api_test(),
            TuiAction::Play => {
                let _ = self.controller.play();
            }
            TuiAction::Stop => self.controller.stop(),
            TuiAction::Download => {
                let _ = self.controller.download();
            }
            TuiAction::CopyExample => {
                let _ = self.controller.copy_example(Instant::now());
            }
            TuiAction::Quit => self.state.should_quit = true,
            TuiAction::None => {}
        }
    }

    fn spawn_synthesis(&mut self) {
        let Ok(request) = self.controller.begin_synthesis() else {
            return;
        };
        debug!(voice = %request.voice, chars = request.text.chars().count(), "synthesis started");
        let backend = self.controller.backend();
        let tx = self.event_tx.clone();
        tokio::task::spawn_local(async move {
            let started = Instant::now();
            let outcome = backend.synthesize(request).await;
            let _ = tx.send(AppEvent::SynthesisFinished {
                outcome,
                elapsed: started.elapsed(),
            });
        });
    }

    fn spawn_api_test(&mut self) {
        let Ok(request) = self.controller.begin_api_test() else {
            return;
        };
        let backend = self.controller.backend();
        let tx = self.event_tx.clone();
        tokio::task::spawn_local(async move {
            let outcome = backend.synthesize(request).await;
            let _ = tx.send(AppEvent::ApiTestFinished { outcome });
        });
    }

    fn restore_terminal(&mut self) -> Result<()> {
        disable_raw_mode()?;
        if self.keyboard_enhanced {
            execute!(self.terminal.backend_mut(), PopKeyboardEnhancementFlags)?;
            self.keyboard_enhanced = false;
        }
        execute!(self.terminal.backend_mut(), LeaveAlternateScreen)?;
        self.terminal.show_cursor()?;
        Ok(())
    }
}

impl Drop for TuiApp {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        if self.keyboard_enhanced {
            let _ = execute!(self.terminal.backend_mut(), PopKeyboardEnhancementFlags);
        }
        let _ = execute!(self.terminal.backend_mut(), LeaveAlternateScreen);
        let _ = self.terminal.show_cursor();
    }
}
