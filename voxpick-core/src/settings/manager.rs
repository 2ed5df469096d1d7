use crate::settings::config::Settings;
use anyhow::{Context, Result};
use std::fs;
use std::ops::DerefMut;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use tracing::warn;

/// Loads, holds and saves `Settings`. Each process works on its own copy;
/// changes reach disk only through `save`/`save_settings`.
#[derive(Clone)]
pub struct SettingsManager {
    settings_path: PathBuf,
    inner: Arc<Mutex<Settings>>,
}

impl SettingsManager {
    /// Create a new settings manager with default settings location
    pub fn new() -> Result<Self> {
        Self::from_settings_dir(Self::default_settings_dir()?, None)
    }

    /// `settings.toml` in `dir`, or `settings_<profile>.toml` when a profile
    /// is given.
    pub fn from_settings_dir(dir: PathBuf, profile: Option<&str>) -> Result<Self> {
        fs::create_dir_all(&dir).with_context(|| format!("Failed to create directory: {dir:?}"))?;
        Self::from_path(dir.join(Self::file_name_for(profile)))
    }

    /// Create a settings manager from a specific path
    pub fn from_path(path: PathBuf) -> Result<Self> {
        if !path.exists() {
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent)
                    .with_context(|| format!("Failed to create directory: {parent:?}"))?;
            }
            Self::write_settings(&path, &Settings::default())?;
        }

        let loaded = Self::load_from_file_with_backup(&path)?;

        Ok(Self {
            settings_path: path,
            inner: Arc::new(Mutex::new(loaded)),
        })
    }

    /// ~/.voxpick
    pub fn default_settings_dir() -> Result<PathBuf> {
        let home = dirs::home_dir().context("Failed to get home directory")?;
        Ok(home.join(".voxpick"))
    }

    fn file_name_for(profile: Option<&str>) -> String {
        match profile {
            Some(name) if !name.is_empty() => format!("settings_{name}.toml"),
            _ => "settings.toml".to_string(),
        }
    }

    fn write_settings(path: &Path, settings: &Settings) -> Result<()> {
        let contents =
            toml::to_string_pretty(settings).context("Failed to serialize settings")?;
        fs::write(path, contents).with_context(|| format!("Failed to write settings to {path:?}"))
    }

    /// Load settings from a TOML file with backup on parse failure
    fn load_from_file_with_backup(path: &Path) -> Result<Settings> {
        if !path.exists() {
            return Ok(Settings::default());
        }

        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read settings from {path:?}"))?;

        match toml::from_str(&contents) {
            Ok(settings) => Ok(settings),
            Err(e) => {
                let backup_path = path.with_extension("toml.backup");
                warn!(error = %e, ?backup_path, "settings file is corrupt, replacing with defaults");
                fs::rename(path, &backup_path).with_context(|| {
                    format!("Failed to backup corrupted settings to {backup_path:?}")
                })?;

                let default_settings = Settings::default();
                Self::write_settings(path, &default_settings)?;
                Ok(default_settings)
            }
        }
    }

    /// Get the in-memory settings
    pub fn settings(&self) -> Settings {
        self.inner.lock().unwrap().clone()
    }

    /// Update in-memory settings with a closure. Note: settings are not saved to disk
    pub fn update_setting<F>(&self, updater: F)
    where
        F: FnOnce(&mut Settings),
    {
        let mut guard = self.inner.lock().unwrap();
        updater(guard.deref_mut());
    }

    /// Save provided settings
    pub fn save_settings(&self, settings: Settings) -> Result<()> {
        if let Some(parent) = self.settings_path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {parent:?}"))?;
        }

        Self::write_settings(&self.settings_path, &settings)?;
        *self.inner.lock().unwrap() = settings;

        Ok(())
    }

    /// Explicitly persist in-memory settings to disk
    pub fn save(&self) -> Result<()> {
        self.save_settings(self.settings())
    }

    /// Get the settings file path
    pub fn path(&self) -> &Path {
        &self.settings_path
    }

    /// Profile name inferred from the file name (`settings_<name>.toml`).
    pub fn current_profile(&self) -> Option<&str> {
        let file_name = self.settings_path.file_name()?.to_str()?;
        let name = file_name
            .strip_prefix("settings_")?
            .strip_suffix(".toml")?;
        (!name.is_empty()).then_some(name)
    }
}
