use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;
use voxpick_core::{HttpBackend, SettingsManager, TtsBackend};

mod clipboard;
mod oneshot;
mod tui;

use crate::oneshot::OneShotRequest;
use crate::tui::{SessionInfo, TuiApp};

#[derive(Parser, Debug)]
#[command(name = "voxpick")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Pick a voice, synthesize speech and play it from the terminal")]
struct Args {
    /// Base URL of the TTS service (overrides the settings file)
    #[arg(long, value_name = "URL")]
    server: Option<String>,

    /// Load settings from a specific profile
    #[arg(long, value_name = "NAME")]
    profile: Option<String>,

    /// Synthesize this text without starting the TUI
    #[arg(long)]
    text: Option<String>,

    /// Voice id for --text (defaults to the first voice of the default language)
    #[arg(long, value_name = "ID")]
    voice: Option<String>,

    /// Speech rate in percent
    #[arg(
        long,
        default_value_t = 0,
        allow_hyphen_values = true,
        value_parser = clap::value_parser!(i32).range(-100..=100)
    )]
    rate: i32,

    /// Pitch shift in Hz
    #[arg(
        long,
        default_value_t = 0,
        allow_hyphen_values = true,
        value_parser = clap::value_parser!(i32).range(-50..=50)
    )]
    pitch: i32,

    /// Where to write the audio for --text (defaults to the download directory)
    #[arg(long, value_name = "PATH", requires = "text")]
    output: Option<PathBuf>,

    /// Print the available languages and exit
    #[arg(long)]
    list_languages: bool,

    /// Print the available voices and exit
    #[arg(long)]
    list_voices: bool,

    /// Only list voices of this language (code or name)
    #[arg(long, requires = "list_voices")]
    language: Option<String>,

    /// Print details of one voice and exit
    #[arg(long, value_name = "ID")]
    voice_info: Option<String>,

    /// Print the service health report and exit
    #[arg(long)]
    health: bool,

    /// Print per-language voice statistics and exit
    #[arg(long)]
    stats: bool,
}

fn main() -> Result<()> {
    setup_tracing()?;

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;

    runtime.block_on(async {
        let local = tokio::task::LocalSet::new();
        local.run_until(async_main()).await
    })
}

async fn async_main() -> Result<()> {
    let args = Args::parse();

    let settings_manager = SettingsManager::from_settings_dir(
        SettingsManager::default_settings_dir()?,
        args.profile.as_deref(),
    )?;
    let mut settings = settings_manager.settings();
    if let Some(server) = args.server.clone() {
        settings.server_url = server;
    }

    info!(
        "CLI startup: server={}, profile={:?}, one_shot={}",
        settings.server_url,
        args.profile,
        args.text.is_some()
    );

    let backend: Arc<dyn TtsBackend> = Arc::new(
        HttpBackend::new(settings.server_url.clone(), settings.request_timeout())
            .context("Failed to create HTTP client")?,
    );

    if args.list_languages {
        return oneshot::list_languages(backend.as_ref()).await;
    }
    if args.list_voices {
        return oneshot::list_voices(backend.as_ref(), args.language.as_deref()).await;
    }
    if let Some(id) = args.voice_info.as_deref() {
        return oneshot::voice_info(backend.as_ref(), id).await;
    }
    if args.health {
        return oneshot::health(backend.as_ref()).await;
    }
    if args.stats {
        return oneshot::stats(backend.as_ref()).await;
    }
    if let Some(text) = args.text {
        let request = OneShotRequest {
            text,
            voice: args.voice,
            rate: args.rate,
            pitch: args.pitch,
            output: args.output,
        };
        return oneshot::synthesize(backend, settings, request).await;
    }

    let session = SessionInfo {
        server_url: settings.server_url.clone(),
        profile: settings_manager.current_profile().map(str::to_string),
    };
    let mut tui_app = TuiApp::new(backend, settings, session)?;
    tui_app.run().await?;

    Ok(())
}

fn setup_tracing() -> Result<()> {
    use std::fs;
    use tracing_subscriber::fmt;

    // The TUI owns the terminal, so logs only go to a file.
    let home = dirs::home_dir().unwrap_or_else(|| PathBuf::from("/tmp"));
    let trace_dir = home.join(".voxpick").join("trace");
    fs::create_dir_all(&trace_dir)?;

    let log_file = trace_dir.join("voxpick.log");
    let file = fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_file)?;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_writer(file)
                .with_ansi(false)
                .with_target(true)
                .with_thread_names(true)
                .with_file(true)
                .with_line_number(true),
        )
        .with(filter)
        .init();

    info!("Tracing initialized to {:?}", log_file);
    Ok(())
}
