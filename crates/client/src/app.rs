//! Glue code tying the runtime, repositories, and terminal UI together.
use anyhow::Result;

use runtime::repository::{FileHistoryRepository, FileSettingsRepository, default_data_dir};
use runtime::{Runtime, RuntimeConfig, Topic};

use crate::config::CliConfig;
use crate::event::EventLoop;
use crate::presentation::terminal;

pub struct App {
    cli_config: CliConfig,
    runtime: Runtime,
}

impl App {
    /// Wires file-backed repositories into a fresh runtime.
    pub fn new(cli_config: CliConfig) -> Result<Self> {
        let data_dir = cli_config
            .data_dir
            .clone()
            .unwrap_or_else(default_data_dir);
        tracing::info!("using data dir {}", data_dir.display());

        let runtime = Runtime::new(
            Box::new(FileSettingsRepository::new(&data_dir)?),
            Box::new(FileHistoryRepository::new(&data_dir)?),
            RuntimeConfig::default(),
        );

        Ok(Self {
            cli_config,
            runtime,
        })
    }

    pub async fn run(self) -> Result<()> {
        let App {
            cli_config,
            runtime,
        } = self;

        let handle = runtime.handle();

        // Subscribe before the worker starts so load notices are observed.
        let subscriptions = handle.subscribe_multiple(&Topic::ALL);
        let runtime_task = tokio::spawn(runtime.run());

        let settings = handle.query_settings().await?;
        let history = handle.query_history().await?;

        let event_loop = EventLoop::new(subscriptions, handle, settings, history, &cli_config)?;

        // Initialize the terminal only once the runtime is answering queries,
        // so a bootstrap failure never leaves the terminal in raw mode.
        let mut terminal = terminal::init()?;
        let _guard = terminal::TerminalGuard;

        let result = event_loop.run(&mut terminal).await;

        runtime_task.abort();
        let _ = runtime_task.await;

        terminal::restore()?;
        tracing::info!("raceboard exiting");

        result
    }
}
