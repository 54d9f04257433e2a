//! Persistence layer for settings and match history.
//!
//! Follows a trait + implementations split: file-backed JSON repositories
//! for the real application and in-memory doubles for tests. The worker
//! receives boxed trait objects, so orchestration logic never touches the
//! filesystem directly.
mod error;
mod file;
mod memory;
mod traits;

pub use error::RepositoryError;
pub use file::{FileHistoryRepository, FileSettingsRepository};
pub use memory::{MemoryHistoryRepository, MemorySettingsRepository};
pub use traits::{HistoryRepository, SettingsRepository};

use std::path::PathBuf;

/// Platform-specific default data directory (e.g. `~/.local/share/raceboard`).
///
/// Falls back to a relative directory when the platform offers no home,
/// which keeps headless test environments working.
pub fn default_data_dir() -> PathBuf {
    directories::ProjectDirs::from("", "", "raceboard")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from(".raceboard"))
}
