//! Client-facing handle to interact with the runtime.

use std::collections::HashMap;

use tokio::sync::{broadcast, mpsc, oneshot};

use match_core::{MatchConfig, PlayerSlot, Settings};

use crate::error::{Result, RuntimeError};
use crate::events::{Event, EventBus, Topic};
use crate::history::MatchRecord;
use crate::session::{ScoreDelta, SessionSnapshot};
use crate::worker::Command;

/// Cloneable façade over the session worker.
///
/// Commands are fire-and-forget; queries round-trip through a oneshot
/// reply. State updates arrive on the event bus, not in command replies.
#[derive(Clone)]
pub struct RuntimeHandle {
    command_tx: mpsc::Sender<Command>,
    event_bus: EventBus,
}

impl RuntimeHandle {
    pub(crate) fn new(command_tx: mpsc::Sender<Command>, event_bus: EventBus) -> Self {
        Self {
            command_tx,
            event_bus,
        }
    }

    /// Begin a match from the setup payload.
    pub async fn start_match(&self, config: MatchConfig) -> Result<()> {
        self.send(Command::StartMatch { config }).await
    }

    /// Apply a score change for one player.
    pub async fn score(&self, slot: PlayerSlot, delta: ScoreDelta) -> Result<()> {
        self.send(Command::Score { slot, delta }).await
    }

    /// Save the completed match to the history (idempotent).
    pub async fn save_result(&self) -> Result<()> {
        self.send(Command::SaveResult).await
    }

    /// Zero the scores and play again with the same players and target.
    pub async fn play_again(&self) -> Result<()> {
        self.send(Command::PlayAgain).await
    }

    /// Discard the current match and return to setup.
    pub async fn abandon_match(&self) -> Result<()> {
        self.send(Command::AbandonMatch).await
    }

    /// Replace the settings; they are persisted best-effort.
    pub async fn update_settings(&self, settings: Settings) -> Result<()> {
        self.send(Command::UpdateSettings { settings }).await
    }

    /// Delete all stored match records.
    pub async fn clear_history(&self) -> Result<()> {
        self.send(Command::ClearHistory).await
    }

    /// Read the current session state, if a match is active.
    pub async fn query_snapshot(&self) -> Result<Option<SessionSnapshot>> {
        self.query(|reply| Command::QuerySnapshot { reply }).await
    }

    /// Read the current settings.
    pub async fn query_settings(&self) -> Result<Settings> {
        self.query(|reply| Command::QuerySettings { reply }).await
    }

    /// Read the match history, newest first.
    pub async fn query_history(&self) -> Result<Vec<MatchRecord>> {
        self.query(|reply| Command::QueryHistory { reply }).await
    }

    /// Subscribe to a single event topic.
    pub fn subscribe(&self, topic: Topic) -> broadcast::Receiver<Event> {
        self.event_bus.subscribe(topic)
    }

    /// Subscribe to several topics at once, keyed by topic.
    pub fn subscribe_multiple(
        &self,
        topics: &[Topic],
    ) -> HashMap<Topic, broadcast::Receiver<Event>> {
        self.event_bus.subscribe_multiple(topics)
    }

    async fn send(&self, cmd: Command) -> Result<()> {
        self.command_tx
            .send(cmd)
            .await
            .map_err(|_| RuntimeError::WorkerGone)
    }

    async fn query<T>(
        &self,
        make: impl FnOnce(oneshot::Sender<T>) -> Command,
    ) -> Result<T> {
        let (reply_tx, reply_rx) = oneshot::channel();
        self.send(make(reply_tx)).await?;
        reply_rx.await.map_err(|_| RuntimeError::ReplyDropped)
    }
}
