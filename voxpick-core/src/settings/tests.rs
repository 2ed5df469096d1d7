use crate::settings::manager::SettingsManager;
use crate::settings::Settings;
use std::time::Duration;
use tempfile::TempDir;

#[test]
fn test_missing_file_is_created_with_defaults() {
    let temp_dir = TempDir::new().unwrap();
    let settings_path = temp_dir.path().join("settings.toml");

    let manager = SettingsManager::from_path(settings_path.clone()).unwrap();

    assert!(settings_path.exists());
    assert_eq!(manager.settings(), Settings::default());
}

#[test]
fn test_defaults() {
    let settings = Settings::default();
    assert_eq!(settings.server_url, "http://127.0.0.1:8000");
    assert_eq!(settings.default_language, "Russian");
    assert_eq!(settings.request_timeout(), Duration::from_secs(60));
    assert!(settings.autoplay);
    assert_eq!(settings.download_dir(), std::path::PathBuf::from("."));
}

#[test]
fn test_zero_timeout_is_clamped() {
    let settings = Settings {
        request_timeout_secs: 0,
        ..Settings::default()
    };
    assert_eq!(settings.request_timeout(), Duration::from_secs(1));
}

#[test]
fn test_partial_file_fills_defaults() {
    let temp_dir = TempDir::new().unwrap();
    let settings_path = temp_dir.path().join("settings.toml");
    std::fs::write(&settings_path, "server_url = \"http://tts.local:9000\"\n").unwrap();

    let manager = SettingsManager::from_path(settings_path).unwrap();
    let settings = manager.settings();

    assert_eq!(settings.server_url, "http://tts.local:9000");
    assert_eq!(settings.request_timeout_secs, 60);
    assert!(settings.autoplay);
}

#[test]
fn test_corrupt_file_is_backed_up() {
    let temp_dir = TempDir::new().unwrap();
    let settings_path = temp_dir.path().join("settings.toml");
    std::fs::write(&settings_path, "server_url = [not toml").unwrap();

    let manager = SettingsManager::from_path(settings_path.clone()).unwrap();

    assert_eq!(manager.settings(), Settings::default());
    let backup = temp_dir.path().join("settings.toml.backup");
    assert_eq!(
        std::fs::read_to_string(backup).unwrap(),
        "server_url = [not toml"
    );
}

#[test]
fn test_unknown_settings_ignored() {
    let temp_dir = TempDir::new().unwrap();
    let settings_path = temp_dir.path().join("settings.toml");

    let toml_content = r#"
default_language = "English"
unknown_field = "this should be ignored"

[unknown_section]
foo = "bar"
    "#;
    std::fs::write(&settings_path, toml_content).unwrap();

    let manager = SettingsManager::from_path(settings_path).unwrap();

    assert_eq!(manager.settings().default_language, "English");
}

#[test]
fn test_update_and_save_round_trip() {
    let temp_dir = TempDir::new().unwrap();
    let settings_path = temp_dir.path().join("settings.toml");

    let manager = SettingsManager::from_path(settings_path.clone()).unwrap();
    manager.update_setting(|s| {
        s.autoplay = false;
        s.download_dir = Some(temp_dir.path().join("downloads"));
    });
    manager.save().unwrap();

    let reloaded = SettingsManager::from_path(settings_path).unwrap();
    assert!(!reloaded.settings().autoplay);
    assert_eq!(
        reloaded.settings().download_dir(),
        temp_dir.path().join("downloads")
    );
}

#[test]
fn test_profile_from_settings_dir() {
    let temp_dir = TempDir::new().unwrap();

    let manager =
        SettingsManager::from_settings_dir(temp_dir.path().to_path_buf(), Some("dev")).unwrap();

    assert_eq!(manager.current_profile(), Some("dev"));
    assert!(temp_dir.path().join("settings_dev.toml").exists());
}

#[test]
fn test_infer_profile_from_default_settings() {
    let temp_dir = TempDir::new().unwrap();

    let manager = SettingsManager::from_settings_dir(temp_dir.path().to_path_buf(), None).unwrap();

    assert_eq!(manager.current_profile(), None);
    assert_eq!(manager.path(), temp_dir.path().join("settings.toml"));
}

#[test]
fn test_infer_profile_empty_name() {
    let temp_dir = TempDir::new().unwrap();
    let settings_path = temp_dir.path().join("settings_.toml");

    let manager = SettingsManager::from_path(settings_path).unwrap();

    assert_eq!(manager.current_profile(), None);
}

#[test]
fn test_infer_profile_wrong_prefix() {
    let temp_dir = TempDir::new().unwrap();
    let settings_path = temp_dir.path().join("config_dev.toml");

    let manager = SettingsManager::from_path(settings_path).unwrap();

    assert_eq!(manager.current_profile(), None);
}
