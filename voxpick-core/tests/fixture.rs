use std::sync::Arc;

use tempfile::TempDir;
use voxpick_core::{
    api::mock::{MockBehavior, MockBackend},
    audio::RecordingPlayer,
    clipboard::MemoryClipboard,
    Controller, Settings,
};

pub struct Fixture {
    pub controller: Controller,
    pub backend: MockBackend,
    pub player: RecordingPlayer,
    pub clipboard: MemoryClipboard,
    pub download_dir: TempDir,
}

impl Fixture {
    #[allow(dead_code)]
    pub fn new() -> Self {
        Self::with_behavior(MockBehavior::Success)
    }

    #[allow(dead_code)]
    pub fn with_behavior(behavior: MockBehavior) -> Self {
        let _ = tracing_subscriber::fmt().with_test_writer().try_init();

        let download_dir = TempDir::new().unwrap();
        let settings = Settings {
            download_dir: Some(download_dir.path().to_path_buf()),
            ..Settings::default()
        };

        // Clones share internal state, so the fixture keeps handles for assertions.
        let backend = MockBackend::new(behavior);
        let player = RecordingPlayer::new();
        let clipboard = MemoryClipboard::new();

        let controller = Controller::new(
            Arc::new(backend.clone()),
            Box::new(player.clone()),
            Box::new(clipboard.clone()),
            settings,
        );

        Fixture {
            controller,
            backend,
            player,
            clipboard,
            download_dir,
        }
    }

    /// Fixture with the catalog already loaded.
    #[allow(dead_code)]
    pub async fn loaded() -> Self {
        let mut fixture = Self::new();
        fixture.controller.load().await.unwrap();
        fixture
    }

    #[allow(dead_code)]
    pub fn status(&self) -> String {
        self.controller
            .state()
            .status_text()
            .unwrap_or_default()
            .to_string()
    }
}
