//! Event loop orchestrating runtime events, user input, and rendering.
//!
//! This module coordinates three concerns:
//! - Runtime event consumption and app-state updates (snapshots, cues)
//! - Keyboard input processing, mapped per screen by [`InputHandler`]
//! - Rendering on change (runtime events, key presses, expiring transients)

use std::collections::HashMap;
use std::time::Duration;

use anyhow::{Context, Result};
use crossterm::event::{self as term_event, Event as TermEvent, KeyEventKind};
use tokio::sync::broadcast::{self, error::RecvError};
use tokio::time;

use match_core::Settings;
use runtime::{Event as RuntimeEvent, MatchEvent, RuntimeHandle, TimerEvent, Topic};

use crate::config::CliConfig;
use crate::cues::CuePlayer;
use crate::input::{InputHandler, KeyAction};
use crate::presentation::{terminal::Tui, ui};
use crate::state::{AppScreen, AppState};

const FRAME_INTERVAL_MS: u64 = 16;

/// Event loop owning the client-side application state.
pub struct EventLoop {
    match_rx: broadcast::Receiver<RuntimeEvent>,
    timer_rx: broadcast::Receiver<RuntimeEvent>,
    cue_rx: broadcast::Receiver<RuntimeEvent>,
    handle: RuntimeHandle,
    input: InputHandler,
    cues: CuePlayer,
    app_state: AppState,
}

impl EventLoop {
    pub fn new(
        mut subscriptions: HashMap<Topic, broadcast::Receiver<RuntimeEvent>>,
        handle: RuntimeHandle,
        settings: Settings,
        history: Vec<runtime::MatchRecord>,
        cli_config: &CliConfig,
    ) -> Result<Self> {
        let mut take = |topic: Topic| {
            subscriptions
                .remove(&topic)
                .with_context(|| format!("missing subscription for {topic:?}"))
        };

        Ok(Self {
            match_rx: take(Topic::Match)?,
            timer_rx: take(Topic::Timer)?,
            cue_rx: take(Topic::Cue)?,
            handle,
            input: InputHandler::new(),
            cues: CuePlayer::new(),
            app_state: AppState::new(
                settings,
                history,
                Duration::from_millis(cli_config.ui.notice_ttl_ms),
            ),
        })
    }

    pub async fn run(mut self, terminal: &mut Tui) -> Result<()> {
        self.render(terminal)?;

        loop {
            tokio::select! {
                result = self.match_rx.recv() => {
                    if self.handle_runtime_event(result, terminal)? {
                        break;
                    }
                }
                result = self.timer_rx.recv() => {
                    if self.handle_runtime_event(result, terminal)? {
                        break;
                    }
                }
                result = self.cue_rx.recv() => {
                    if self.handle_runtime_event(result, terminal)? {
                        break;
                    }
                }
                _ = time::sleep(Duration::from_millis(FRAME_INTERVAL_MS)) => {
                    if self.handle_input_tick(terminal).await? {
                        break;
                    }
                }
            }
        }

        Ok(())
    }

    /// Handle one runtime event. Returns true when the loop should exit.
    fn handle_runtime_event(
        &mut self,
        result: Result<RuntimeEvent, RecvError>,
        terminal: &mut Tui,
    ) -> Result<bool> {
        match result {
            Ok(event) => {
                self.apply_event(event);
                self.render(terminal)?;
                Ok(false)
            }
            Err(RecvError::Closed) => {
                tracing::warn!("event stream closed");
                Ok(true)
            }
            Err(RecvError::Lagged(skipped)) => {
                tracing::warn!("dropped {} stale events", skipped);
                Ok(false)
            }
        }
    }

    fn apply_event(&mut self, event: RuntimeEvent) {
        match event {
            RuntimeEvent::Match(event) => self.apply_match_event(event),
            RuntimeEvent::Timer(event) => {
                let (TimerEvent::Tick { snapshot }
                | TimerEvent::WarningStarted { snapshot }
                | TimerEvent::Expired { snapshot }) = event;
                self.app_state.snapshot = Some(snapshot);
            }
            RuntimeEvent::Cue(cue) => self.cues.play(cue, &mut self.app_state),
        }
    }

    fn apply_match_event(&mut self, event: MatchEvent) {
        match event {
            MatchEvent::Started { snapshot } => {
                self.app_state.snapshot = Some(snapshot);
                self.app_state.screen = AppScreen::Scoreboard;
            }
            MatchEvent::ScoreChanged { snapshot }
            | MatchEvent::WinnerDeclared { snapshot }
            | MatchEvent::Reset { snapshot } => {
                self.app_state.snapshot = Some(snapshot);
            }
            MatchEvent::Abandoned => {
                self.app_state.snapshot = None;
                if self.app_state.screen == AppScreen::Scoreboard {
                    self.app_state.screen = AppScreen::Setup;
                }
            }
            MatchEvent::ResultSaved { record, snapshot } => {
                self.app_state.history.insert(0, record);
                self.app_state.snapshot = Some(snapshot);
            }
            MatchEvent::HistoryCleared => {
                self.app_state.history.clear();
                self.app_state.history_scroll = 0;
            }
            MatchEvent::SettingsChanged { settings } => {
                self.app_state.settings = settings;
            }
            MatchEvent::Notice { text } => {
                self.app_state.set_notice(text);
            }
        }
    }

    /// Poll for keyboard input and expire transient UI state.
    async fn handle_input_tick(&mut self, terminal: &mut Tui) -> Result<bool> {
        let mut needs_render = self.app_state.expire_transients();

        if term_event::poll(Duration::from_millis(0))? {
            match term_event::read()? {
                TermEvent::Key(key) if key.kind == KeyEventKind::Press => {
                    let action = self.input.handle_key(key, self.app_state.screen);
                    if self.dispatch(action).await? {
                        return Ok(true);
                    }
                    needs_render = true;
                }
                TermEvent::Resize(_, _) => needs_render = true,
                _ => {}
            }
        }

        if needs_render {
            self.render(terminal)?;
        }
        Ok(false)
    }

    /// Apply one key action. Returns true when the application should quit.
    async fn dispatch(&mut self, action: KeyAction) -> Result<bool> {
        let state = &mut self.app_state;

        match action {
            KeyAction::Quit => return Ok(true),

            // Setup screen
            KeyAction::FocusNext => state.setup.focus_next(),
            KeyAction::FocusPrev => state.setup.focus_prev(),
            KeyAction::Insert(ch) => state.setup.push_char(ch),
            KeyAction::Backspace => state.setup.backspace(),
            KeyAction::CycleRaceTo(step) => state.setup.cycle_race_to(step),
            KeyAction::BeginMatch => {
                self.handle.start_match(state.setup.config()).await?;
            }
            KeyAction::OpenSettings => state.screen = AppScreen::Settings,
            KeyAction::OpenHistory => {
                state.history = self.handle.query_history().await?;
                state.history_scroll = 0;
                state.screen = AppScreen::History;
            }

            // Scoreboard screen
            KeyAction::Score { slot, delta } => {
                let over = state
                    .snapshot
                    .as_ref()
                    .is_none_or(|snapshot| snapshot.winner.is_some());
                if !over {
                    self.handle.score(slot, delta).await?;
                }
            }
            KeyAction::SaveResult => {
                let decided = state
                    .snapshot
                    .as_ref()
                    .is_some_and(|snapshot| snapshot.winner.is_some());
                if decided {
                    self.handle.save_result().await?;
                }
            }
            KeyAction::PlayAgain => self.handle.play_again().await?,
            KeyAction::NewGame => self.handle.abandon_match().await?,

            // Settings screen
            KeyAction::ToggleSound => {
                let mut settings = state.settings.clone();
                settings.sound_enabled = !settings.sound_enabled;
                self.handle.update_settings(settings).await?;
            }
            KeyAction::ToggleVibration => {
                let mut settings = state.settings.clone();
                settings.vibration_enabled = !settings.vibration_enabled;
                self.handle.update_settings(settings).await?;
            }
            KeyAction::ToggleTimer => {
                let mut settings = state.settings.clone();
                settings.timer_enabled = !settings.timer_enabled;
                self.handle.update_settings(settings).await?;
            }
            KeyAction::CycleTimerDuration => {
                let mut settings = state.settings.clone();
                settings.timer_duration = Settings::next_timer_duration(settings.timer_duration);
                self.handle.update_settings(settings).await?;
            }
            KeyAction::CycleTheme => {
                let mut settings = state.settings.clone();
                settings.theme = settings.theme.cycled();
                self.handle.update_settings(settings).await?;
            }

            // History screen
            KeyAction::RequestClear => {
                if state.history.is_empty() {
                    state.set_notice("No saved matches to clear");
                } else {
                    state.confirm_clear = true;
                }
            }
            KeyAction::ConfirmClear => {
                if state.confirm_clear {
                    state.confirm_clear = false;
                    self.handle.clear_history().await?;
                }
            }
            KeyAction::CancelClear => state.confirm_clear = false,
            KeyAction::ScrollUp => {
                state.history_scroll = state.history_scroll.saturating_sub(1);
            }
            KeyAction::ScrollDown => {
                let max = state.history.len().saturating_sub(1);
                state.history_scroll = (state.history_scroll + 1).min(max);
            }

            KeyAction::Back => {
                state.confirm_clear = false;
                state.screen = AppScreen::Setup;
            }

            KeyAction::None => {}
        }

        Ok(false)
    }

    fn render(&mut self, terminal: &mut Tui) -> Result<()> {
        ui::render(terminal, &self.app_state)
    }
}
