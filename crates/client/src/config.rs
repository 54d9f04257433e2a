//! Client configuration for the terminal UI.
use std::env;
use std::path::PathBuf;

/// Terminal client configuration.
///
/// Environment variables:
/// - `RACEBOARD_DATA_DIR` - Directory for settings and history (default: platform data dir)
/// - `RACEBOARD_LOG_DIR` - Directory for log files (default: `<data dir>/logs`)
/// - `RACEBOARD_NOTICE_TTL_MS` - How long transient notices stay visible (default: 2500)
#[derive(Clone, Debug, Default)]
pub struct CliConfig {
    pub data_dir: Option<PathBuf>,
    pub log_dir: Option<PathBuf>,
    pub ui: UiConfig,
}

impl CliConfig {
    /// Construct client configuration from process environment variables.
    pub fn from_env() -> Self {
        let mut config = Self::default();

        config.data_dir = env::var("RACEBOARD_DATA_DIR").ok().map(PathBuf::from);
        config.log_dir = env::var("RACEBOARD_LOG_DIR").ok().map(PathBuf::from);

        if let Some(ttl) = read_env::<u64>("RACEBOARD_NOTICE_TTL_MS") {
            config.ui.notice_ttl_ms = ttl.max(250);
        }

        config
    }
}

/// UI timing and display configuration.
#[derive(Clone, Debug)]
pub struct UiConfig {
    /// How long a transient notice stays on screen, in milliseconds.
    pub notice_ttl_ms: u64,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self { notice_ttl_ms: 2500 }
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}
