use match_core::Settings;

use super::error::Result;
use crate::history::MatchRecord;

/// Storage for the single user-settings record.
pub trait SettingsRepository: Send {
    /// Loads the stored settings. `Ok(None)` means nothing was stored yet;
    /// a malformed record is an error so the caller can fall back to
    /// defaults explicitly.
    fn load(&self) -> Result<Option<Settings>>;

    fn save(&self, settings: &Settings) -> Result<()>;
}

/// Storage for the match-history list, newest first.
pub trait HistoryRepository: Send {
    /// Loads all stored records. A missing store is an empty history.
    fn load(&self) -> Result<Vec<MatchRecord>>;

    /// Replaces the stored list wholesale.
    fn save(&self, records: &[MatchRecord]) -> Result<()>;

    /// Deletes every stored record.
    fn clear(&self) -> Result<()>;
}
