//! Session worker that owns the authoritative scoreboard state.
//!
//! Receives commands from [`RuntimeHandle`], drives the 1 Hz countdown
//! tick, and publishes events to the [`EventBus`]. The worker is the single
//! owner of the session, the settings, and the history cache, so no locking
//! is needed anywhere: all mutation happens inside this task in response to
//! discrete events.

use tokio::sync::{mpsc, oneshot};
use tokio::time::{self, Duration, Instant, MissedTickBehavior};
use tracing::{debug, warn};

use match_core::{MatchConfig, PlayerSlot, Settings};

use crate::events::{Event, EventBus, MatchEvent};
use crate::history::MatchRecord;
use crate::repository::{HistoryRepository, SettingsRepository};
use crate::session::{ScoreDelta, ScoreboardSession, SessionSnapshot};

/// Commands that can be sent to the session worker.
pub enum Command {
    /// Begin a match from the setup payload.
    StartMatch { config: MatchConfig },
    /// Apply a score change for one player.
    Score { slot: PlayerSlot, delta: ScoreDelta },
    /// Append the completed match to the history (at most once per match).
    SaveResult,
    /// Zero the scores and start over with the same players and target.
    PlayAgain,
    /// Discard the current match entirely (back to setup).
    AbandonMatch,
    /// Replace the settings and persist them.
    UpdateSettings { settings: Settings },
    /// Delete all stored match records.
    ClearHistory,
    /// Read the current session state, if a match is active.
    QuerySnapshot {
        reply: oneshot::Sender<Option<SessionSnapshot>>,
    },
    /// Read the current settings.
    QuerySettings { reply: oneshot::Sender<Settings> },
    /// Read the match history, newest first.
    QueryHistory {
        reply: oneshot::Sender<Vec<MatchRecord>>,
    },
}

/// Background task that processes scoreboard commands and countdown ticks.
pub struct SessionWorker {
    session: Option<ScoreboardSession>,
    settings: Settings,
    history: Vec<MatchRecord>,
    settings_repo: Box<dyn SettingsRepository>,
    history_repo: Box<dyn HistoryRepository>,
    command_rx: mpsc::Receiver<Command>,
    event_bus: EventBus,
}

impl SessionWorker {
    pub fn new(
        settings_repo: Box<dyn SettingsRepository>,
        history_repo: Box<dyn HistoryRepository>,
        command_rx: mpsc::Receiver<Command>,
        event_bus: EventBus,
    ) -> Self {
        Self {
            session: None,
            settings: Settings::default(),
            history: Vec::new(),
            settings_repo,
            history_repo,
            command_rx,
            event_bus,
        }
    }

    /// Main worker loop.
    ///
    /// The single interval here is the only periodic activity in the
    /// process. Restarting the turn timer resets the interval phase rather
    /// than arming a second one, so overlapping countdowns cannot exist.
    /// Exits when the last handle is dropped.
    pub async fn run(mut self) {
        self.load_stores();

        let mut ticker = time::interval_at(
            Instant::now() + Duration::from_secs(1),
            Duration::from_secs(1),
        );
        ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

        loop {
            tokio::select! {
                cmd = self.command_rx.recv() => match cmd {
                    Some(cmd) => {
                        if self.handle_command(cmd) {
                            // The countdown restarted; give the new turn a
                            // full first second.
                            ticker.reset();
                        }
                    }
                    None => break,
                },
                _ = ticker.tick() => self.handle_tick(),
            }
        }

        debug!("session worker stopped");
    }

    /// Loads persisted settings and history, falling back to defaults on
    /// malformed stores (never fatal).
    fn load_stores(&mut self) {
        match self.settings_repo.load() {
            Ok(Some(settings)) => self.settings = settings,
            Ok(None) => debug!("no stored settings, using defaults"),
            Err(e) => {
                warn!("failed to load settings, using defaults: {e}");
                self.event_bus.publish(Event::notice("Failed to load settings"));
            }
        }

        match self.history_repo.load() {
            Ok(records) => self.history = records,
            Err(e) => {
                warn!("failed to load match history, starting empty: {e}");
                self.event_bus
                    .publish(Event::notice("Failed to load match history"));
            }
        }
    }

    /// Handles one command. Returns true when the turn countdown restarted.
    fn handle_command(&mut self, cmd: Command) -> bool {
        match cmd {
            Command::StartMatch { config } => {
                debug!(?config, "starting match");
                let session = ScoreboardSession::new(config, &self.settings);
                self.event_bus.publish(Event::Match(MatchEvent::Started {
                    snapshot: session.snapshot(),
                }));
                self.session = Some(session);
                true
            }
            Command::Score { slot, delta } => self.handle_score(slot, delta),
            Command::SaveResult => {
                self.handle_save_result();
                false
            }
            Command::PlayAgain => match self.session.as_mut() {
                Some(session) => {
                    let events = session.play_again();
                    self.publish_all(events);
                    true
                }
                None => false,
            },
            Command::AbandonMatch => {
                self.session = None;
                self.event_bus.publish(Event::Match(MatchEvent::Abandoned));
                false
            }
            Command::UpdateSettings { settings } => {
                // Timer duration/enabled take effect with the next match;
                // sound, vibration, and theme apply immediately in clients.
                if let Err(e) = self.settings_repo.save(&settings) {
                    warn!("failed to persist settings: {e}");
                }
                self.settings = settings.clone();
                self.event_bus
                    .publish(Event::Match(MatchEvent::SettingsChanged { settings }));
                false
            }
            Command::ClearHistory => {
                self.history.clear();
                if let Err(e) = self.history_repo.clear() {
                    warn!("failed to clear match history store: {e}");
                }
                self.event_bus
                    .publish(Event::Match(MatchEvent::HistoryCleared));
                self.event_bus.publish(Event::notice("Match history cleared"));
                false
            }
            Command::QuerySnapshot { reply } => {
                let snapshot = self.session.as_ref().map(ScoreboardSession::snapshot);
                if reply.send(snapshot).is_err() {
                    debug!("QuerySnapshot reply channel closed (caller dropped)");
                }
                false
            }
            Command::QuerySettings { reply } => {
                if reply.send(self.settings.clone()).is_err() {
                    debug!("QuerySettings reply channel closed (caller dropped)");
                }
                false
            }
            Command::QueryHistory { reply } => {
                if reply.send(self.history.clone()).is_err() {
                    debug!("QueryHistory reply channel closed (caller dropped)");
                }
                false
            }
        }
    }

    fn handle_score(&mut self, slot: PlayerSlot, delta: ScoreDelta) -> bool {
        let Some(session) = self.session.as_mut() else {
            debug!("score command without an active match");
            return false;
        };

        match session.apply_score(slot, delta) {
            Ok(events) => {
                let restarted = !events.is_empty() && !session.is_over();
                self.publish_all(events);
                restarted
            }
            Err(e) => {
                // Controls are disabled once a winner exists; a straggling
                // command is harmless.
                debug!("score rejected: {e}");
                false
            }
        }
    }

    fn handle_save_result(&mut self) {
        let Some(session) = self.session.as_mut() else {
            debug!("save command without an active match");
            return;
        };

        let Some(snapshot) = session.claim_result() else {
            debug!("save skipped: no completed result to claim");
            return;
        };

        let Some(record) = MatchRecord::from_snapshot(&snapshot) else {
            warn!("claimed result had no winner; not saving");
            return;
        };

        self.history.insert(0, record.clone());
        match self.history_repo.save(&self.history) {
            Ok(()) => self.event_bus.publish(Event::notice("Match result saved!")),
            Err(e) => {
                warn!("failed to persist match result: {e}");
                self.event_bus
                    .publish(Event::notice("Failed to save match result"));
            }
        }

        self.event_bus
            .publish(Event::Match(MatchEvent::ResultSaved { record, snapshot }));
    }

    fn handle_tick(&mut self) {
        if let Some(session) = self.session.as_mut() {
            let events = session.tick();
            self.publish_all(events);
        }
    }

    fn publish_all(&self, events: Vec<Event>) {
        for event in events {
            self.event_bus.publish(event);
        }
    }
}
