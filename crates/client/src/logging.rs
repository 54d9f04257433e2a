//! File-backed logging setup.
//!
//! The TUI owns stdout, so logs go to a rolling file instead. The returned
//! guard must stay alive for the process lifetime or buffered lines are lost.

use anyhow::Result;
use tracing_appender::non_blocking::WorkerGuard;

use crate::config::CliConfig;

pub fn init(config: &CliConfig) -> Result<WorkerGuard> {
    let log_dir = config
        .log_dir
        .clone()
        .unwrap_or_else(|| runtime::repository::default_data_dir().join("logs"));

    let appender = tracing_appender::rolling::daily(log_dir, "raceboard.log");
    let (writer, guard) = tracing_appender::non_blocking(appender);

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(writer)
        .with_ansi(false)
        .init();

    Ok(guard)
}
