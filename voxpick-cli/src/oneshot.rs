//! Non-interactive commands: listings, diagnostics and a single synthesis.

use anyhow::{bail, Context, Result};
use indicatif::{ProgressBar, ProgressStyle};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tracing::info;
use voxpick_core::audio::SilentPlayer;
use voxpick_core::catalog::{filter::compare_names, Language, Voice};
use voxpick_core::clipboard::MemoryClipboard;
use voxpick_core::{Controller, Settings, TtsBackend};

pub struct OneShotRequest {
    pub text: String,
    pub voice: Option<String>,
    pub rate: i32,
    pub pitch: i32,
    pub output: Option<PathBuf>,
}

pub async fn list_languages(backend: &dyn TtsBackend) -> Result<()> {
    let mut languages = backend
        .languages()
        .await
        .context("Failed to load languages")?;
    languages.sort_by(|a, b| compare_names(&a.name, &b.name));
    for language in &languages {
        println!("{}", format_language(language));
    }
    Ok(())
}

pub async fn list_voices(backend: &dyn TtsBackend, language: Option<&str>) -> Result<()> {
    let mut voices = backend.voices().await.context("Failed to load voices")?;
    if let Some(language) = language {
        voices.retain(|v| v.language.eq_ignore_ascii_case(language));
        if voices.is_empty() {
            bail!("No voices available for {language}");
        }
    }
    voices.sort_by(|a, b| compare_names(&a.name, &b.name));
    for voice in &voices {
        println!("{}", format_voice(voice));
    }
    Ok(())
}

pub async fn voice_info(backend: &dyn TtsBackend, id: &str) -> Result<()> {
    let voice = backend
        .voice_info(id)
        .await
        .with_context(|| format!("Failed to get voice {id}"))?;
    println!("Id:       {}", voice.id);
    println!("Name:     {}", voice.name);
    println!("Short:    {}", voice.short_name());
    println!("Language: {}", voice.language);
    println!("Locale:   {}", voice.locale);
    println!("Gender:   {}", voice.gender);
    if let Some(country) = &voice.country {
        println!("Country:  {country}");
    }
    Ok(())
}

pub async fn health(backend: &dyn TtsBackend) -> Result<()> {
    let health = backend.health().await.context("Health check failed")?;
    println!("Status:    {}", health.status);
    if let Some(service) = &health.service {
        match &health.version {
            Some(version) => println!("Service:   {service} v{version}"),
            None => println!("Service:   {service}"),
        }
    }
    println!("Languages: {}", health.languages_count);
    println!("Voices:    {}", health.voices_count);
    Ok(())
}

pub async fn stats(backend: &dyn TtsBackend) -> Result<()> {
    let stats = backend.stats().await.context("Failed to load statistics")?;
    println!("{:<24} {:>6} {:>6} {:>6}", "Language", "Total", "Male", "Female");
    for (language, counts) in &stats {
        println!(
            "{:<24} {:>6} {:>6} {:>6}",
            language, counts.total, counts.male, counts.female
        );
    }
    Ok(())
}

/// Runs one synthesis through the same controller the TUI uses, so input is
/// validated identically, then writes the audio to disk.
pub async fn synthesize(
    backend: Arc<dyn TtsBackend>,
    mut settings: Settings,
    request: OneShotRequest,
) -> Result<()> {
    settings.autoplay = false;
    let mut controller = Controller::new(
        backend,
        Box::new(SilentPlayer),
        Box::new(MemoryClipboard::new()),
        settings,
    );

    controller.load().await?;
    if let Some(voice) = request.voice.as_deref() {
        if !controller.state_mut().select_voice(voice) {
            bail!("Unknown voice: {voice}");
        }
    }

    let state = controller.state_mut();
    state.set_text(request.text);
    state.rate = request.rate;
    state.pitch = request.pitch;

    let spinner = ProgressBar::new_spinner();
    spinner.set_style(ProgressStyle::with_template("{spinner} {msg}")?);
    spinner.set_message(format!(
        "Generating speech with {}...",
        controller.state().selected_voice.as_deref().unwrap_or("?")
    ));
    spinner.enable_steady_tick(Duration::from_millis(100));

    let result = controller.generate_speech().await;
    spinner.finish_and_clear();
    result?;

    let path = match request.output {
        Some(path) => {
            let bytes = controller
                .audio()
                .bytes()
                .context("No audio to download")?;
            std::fs::write(&path, &bytes)
                .with_context(|| format!("Failed to write audio to {path:?}"))?;
            path
        }
        None => controller.download()?,
    };

    if let Some(response) = &controller.state().last_response {
        info!(?path, elapsed_ms = response.elapsed.as_millis() as u64, "one-shot synthesis done");
        println!(
            "Saved {} ({} ms)",
            path.display(),
            response.elapsed.as_millis()
        );
    }
    Ok(())
}

fn format_language(language: &Language) -> String {
    format!(
        "{:<24} {:<12} {:>3} voices",
        language.name, language.code, language.count
    )
}

fn format_voice(voice: &Voice) -> String {
    format!(
        "{:<32} {:<36} {:<8} {}",
        voice.id,
        voice.name,
        voice.gender.to_string(),
        voice.language
    )
}
