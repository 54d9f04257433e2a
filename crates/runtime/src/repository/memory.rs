//! In-memory repository implementations for tests.

use std::sync::Mutex;

use match_core::Settings;

use super::error::Result;
use super::traits::{HistoryRepository, SettingsRepository};
use crate::history::MatchRecord;

/// Settings store backed by a mutex-guarded option.
#[derive(Default)]
pub struct MemorySettingsRepository {
    inner: Mutex<Option<Settings>>,
}

impl MemorySettingsRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_settings(settings: Settings) -> Self {
        Self {
            inner: Mutex::new(Some(settings)),
        }
    }
}

impl SettingsRepository for MemorySettingsRepository {
    fn load(&self) -> Result<Option<Settings>> {
        Ok(self.inner.lock().unwrap().clone())
    }

    fn save(&self, settings: &Settings) -> Result<()> {
        *self.inner.lock().unwrap() = Some(settings.clone());
        Ok(())
    }
}

/// History store backed by a mutex-guarded vector.
#[derive(Default)]
pub struct MemoryHistoryRepository {
    records: Mutex<Vec<MatchRecord>>,
}

impl MemoryHistoryRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

impl HistoryRepository for MemoryHistoryRepository {
    fn load(&self) -> Result<Vec<MatchRecord>> {
        Ok(self.records.lock().unwrap().clone())
    }

    fn save(&self, records: &[MatchRecord]) -> Result<()> {
        *self.records.lock().unwrap() = records.to_vec();
        Ok(())
    }

    fn clear(&self) -> Result<()> {
        self.records.lock().unwrap().clear();
        Ok(())
    }
}
