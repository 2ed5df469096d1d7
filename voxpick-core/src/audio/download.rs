use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};

/// `speech_<unix millis>.mp3`
pub fn download_file_name(now: DateTime<Utc>) -> String {
    format!("speech_{}.mp3", now.timestamp_millis())
}

/// Writes `audio` into `dir` under a timestamped name and returns the path.
pub fn save_audio(dir: &Path, audio: &[u8], now: DateTime<Utc>) -> io::Result<PathBuf> {
    fs::create_dir_all(dir)?;
    let path = dir.join(download_file_name(now));
    fs::write(&path, audio)?;
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use tempfile::TempDir;

    #[test]
    fn file_name_uses_millis() {
        let now = Utc.timestamp_millis_opt(1_700_000_000_123).unwrap();
        assert_eq!(download_file_name(now), "speech_1700000000123.mp3");
    }

    #[test]
    fn save_creates_directory() {
        let temp = TempDir::new().unwrap();
        let dir = temp.path().join("nested").join("out");
        let now = Utc.timestamp_millis_opt(42).unwrap();

        let path = save_audio(&dir, b"mp3", now).unwrap();

        assert_eq!(path, dir.join("speech_42.mp3"));
        assert_eq!(std::fs::read(&path).unwrap(), b"mp3");
    }
}
