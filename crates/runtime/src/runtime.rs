//! High-level runtime orchestrator.
//!
//! The runtime wires the command channel, the event bus, and the session
//! worker together, and exposes a cloneable [`RuntimeHandle`] for clients.

use tokio::sync::mpsc;

use crate::events::EventBus;
use crate::handle::RuntimeHandle;
use crate::repository::{HistoryRepository, SettingsRepository};
use crate::worker::SessionWorker;

/// Runtime configuration shared across the orchestrator and worker.
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub event_buffer_size: usize,
    pub command_buffer_size: usize,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            event_buffer_size: 100,
            command_buffer_size: 32,
        }
    }
}

/// Owns the session worker; [`RuntimeHandle`] is the client-facing façade.
pub struct Runtime {
    handle: RuntimeHandle,
    worker: SessionWorker,
}

impl Runtime {
    /// Builds a runtime over the injected repositories.
    ///
    /// Stores are loaded when [`Runtime::run`] starts, so subscribe through
    /// the handle before spawning the run future to observe load notices.
    pub fn new(
        settings_repo: Box<dyn SettingsRepository>,
        history_repo: Box<dyn HistoryRepository>,
        config: RuntimeConfig,
    ) -> Self {
        let event_bus = EventBus::with_capacity(config.event_buffer_size);
        let (command_tx, command_rx) = mpsc::channel(config.command_buffer_size);

        let worker = SessionWorker::new(settings_repo, history_repo, command_rx, event_bus.clone());
        let handle = RuntimeHandle::new(command_tx, event_bus);

        Self { handle, worker }
    }

    /// Get a cloneable handle to this runtime.
    pub fn handle(&self) -> RuntimeHandle {
        self.handle.clone()
    }

    /// Runs the worker until every handle is dropped.
    pub async fn run(self) {
        self.worker.run().await;
    }
}
