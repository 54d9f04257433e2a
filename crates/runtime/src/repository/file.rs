//! File-backed JSON repositories.
//!
//! Records are stored as pretty-printed JSON under the data directory and
//! written via a temp file plus atomic rename, so a crash mid-write can
//! never leave a half-written store behind.

use std::fs;
use std::path::{Path, PathBuf};

use match_core::Settings;

use super::error::{RepositoryError, Result};
use super::traits::{HistoryRepository, SettingsRepository};
use crate::history::MatchRecord;

const SETTINGS_FILE: &str = "settings.json";
const HISTORY_FILE: &str = "match_history.json";

fn write_atomic(path: &Path, contents: &str) -> Result<()> {
    let temp_path = path.with_extension("json.tmp");
    fs::write(&temp_path, contents)?;
    fs::rename(&temp_path, path)?;
    Ok(())
}

/// Settings stored as a single JSON record.
pub struct FileSettingsRepository {
    path: PathBuf,
}

impl FileSettingsRepository {
    pub fn new(base_dir: impl AsRef<Path>) -> Result<Self> {
        let base_dir = base_dir.as_ref();
        fs::create_dir_all(base_dir)?;
        Ok(Self {
            path: base_dir.join(SETTINGS_FILE),
        })
    }
}

impl SettingsRepository for FileSettingsRepository {
    fn load(&self) -> Result<Option<Settings>> {
        if !self.path.exists() {
            return Ok(None);
        }

        let contents = fs::read_to_string(&self.path)?;
        let settings = serde_json::from_str(&contents)
            .map_err(|e| RepositoryError::Serialization(e.to_string()))?;

        tracing::debug!("loaded settings from {}", self.path.display());
        Ok(Some(settings))
    }

    fn save(&self, settings: &Settings) -> Result<()> {
        let contents = serde_json::to_string_pretty(settings)
            .map_err(|e| RepositoryError::Serialization(e.to_string()))?;
        write_atomic(&self.path, &contents)?;

        tracing::debug!("saved settings to {}", self.path.display());
        Ok(())
    }
}

/// Match history stored as a JSON list, newest first.
pub struct FileHistoryRepository {
    path: PathBuf,
}

impl FileHistoryRepository {
    pub fn new(base_dir: impl AsRef<Path>) -> Result<Self> {
        let base_dir = base_dir.as_ref();
        fs::create_dir_all(base_dir)?;
        Ok(Self {
            path: base_dir.join(HISTORY_FILE),
        })
    }
}

impl HistoryRepository for FileHistoryRepository {
    fn load(&self) -> Result<Vec<MatchRecord>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }

        let contents = fs::read_to_string(&self.path)?;
        let records = serde_json::from_str(&contents)
            .map_err(|e| RepositoryError::Serialization(e.to_string()))?;

        tracing::debug!("loaded match history from {}", self.path.display());
        Ok(records)
    }

    fn save(&self, records: &[MatchRecord]) -> Result<()> {
        let contents = serde_json::to_string_pretty(records)
            .map_err(|e| RepositoryError::Serialization(e.to_string()))?;
        write_atomic(&self.path, &contents)?;

        tracing::debug!(
            count = records.len(),
            "saved match history to {}",
            self.path.display()
        );
        Ok(())
    }

    fn clear(&self) -> Result<()> {
        if self.path.exists() {
            fs::remove_file(&self.path)?;
            tracing::debug!("cleared match history at {}", self.path.display());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn settings_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let repo = FileSettingsRepository::new(dir.path()).unwrap();

        assert!(repo.load().unwrap().is_none());

        let settings = Settings {
            sound_enabled: false,
            timer_duration: 60,
            ..Settings::default()
        };
        repo.save(&settings).unwrap();
        assert_eq!(repo.load().unwrap(), Some(settings));
    }

    #[test]
    fn settings_store_uses_camel_case_keys() {
        let dir = tempfile::tempdir().unwrap();
        let repo = FileSettingsRepository::new(dir.path()).unwrap();
        repo.save(&Settings::default()).unwrap();

        let contents = fs::read_to_string(dir.path().join(SETTINGS_FILE)).unwrap();
        assert!(contents.contains("\"soundEnabled\""));
        assert!(contents.contains("\"timerDuration\""));
        assert!(contents.contains("\"vibrationEnabled\""));
        assert!(contents.contains("\"default\""));
    }

    #[test]
    fn malformed_settings_surface_as_errors() {
        let dir = tempfile::tempdir().unwrap();
        let repo = FileSettingsRepository::new(dir.path()).unwrap();

        fs::write(dir.path().join(SETTINGS_FILE), "{not json").unwrap();
        assert!(matches!(
            repo.load(),
            Err(RepositoryError::Serialization(_))
        ));
    }

    #[test]
    fn missing_history_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let repo = FileHistoryRepository::new(dir.path()).unwrap();
        assert!(repo.load().unwrap().is_empty());
    }

    #[test]
    fn clear_removes_the_store() {
        let dir = tempfile::tempdir().unwrap();
        let repo = FileHistoryRepository::new(dir.path()).unwrap();

        repo.save(&[]).unwrap();
        assert!(dir.path().join(HISTORY_FILE).exists());

        repo.clear().unwrap();
        assert!(!dir.path().join(HISTORY_FILE).exists());
        assert!(repo.load().unwrap().is_empty());

        // Clearing an already-empty store is fine.
        repo.clear().unwrap();
    }
}
