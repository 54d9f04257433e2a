//! Scoreboard session: the active-match orchestrator.
//!
//! [`ScoreboardSession`] wires the score tracker, the turn timer, and the
//! active-player flag into one state machine. Every mutation returns the
//! events to broadcast, so the session itself stays free of channels and
//! clocks and can be driven directly in tests.

use serde::{Deserialize, Serialize};

use match_core::{
    CueKind, MatchConfig, MatchState, PlayerSlot, ScoreError, Settings, TimerPhase, TimerSignal,
    TurnTimer,
};

use crate::events::{Event, MatchEvent, TimerEvent};

/// Direction of a score command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScoreDelta {
    Increment,
    Decrement,
}

/// Point-in-time view of the session, carried by every state event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionSnapshot {
    pub config: MatchConfig,
    pub player1_score: u32,
    pub player2_score: u32,
    pub player1_on_hill: bool,
    pub player2_on_hill: bool,
    pub winner: Option<PlayerSlot>,
    pub winner_name: Option<String>,
    pub active_player: PlayerSlot,
    pub timer_enabled: bool,
    pub timer_phase: TimerPhase,
    pub timer_remaining: u32,
    pub result_saved: bool,
}

impl SessionSnapshot {
    pub fn score(&self, slot: PlayerSlot) -> u32 {
        match slot {
            PlayerSlot::One => self.player1_score,
            PlayerSlot::Two => self.player2_score,
        }
    }

    pub fn on_hill(&self, slot: PlayerSlot) -> bool {
        match slot {
            PlayerSlot::One => self.player1_on_hill,
            PlayerSlot::Two => self.player2_on_hill,
        }
    }

    pub fn player_name(&self, slot: PlayerSlot) -> &str {
        match slot {
            PlayerSlot::One => &self.config.player1_name,
            PlayerSlot::Two => &self.config.player2_name,
        }
    }
}

/// State machine for one match on the scoreboard screen.
pub struct ScoreboardSession {
    state: MatchState,
    timer: TurnTimer,
    active_player: PlayerSlot,
    result_saved: bool,
}

impl ScoreboardSession {
    /// Starts a match. Player 1 opens, with a fresh countdown if the timer
    /// is enabled in `settings`.
    pub fn new(config: MatchConfig, settings: &Settings) -> Self {
        let timer = if settings.timer_enabled {
            TurnTimer::new(settings.timer_duration)
        } else {
            TurnTimer::disabled()
        };

        Self {
            state: MatchState::new(config),
            timer,
            active_player: PlayerSlot::One,
            result_saved: false,
        }
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            config: self.state.config().clone(),
            player1_score: self.state.score(PlayerSlot::One),
            player2_score: self.state.score(PlayerSlot::Two),
            player1_on_hill: self.state.on_hill(PlayerSlot::One),
            player2_on_hill: self.state.on_hill(PlayerSlot::Two),
            winner: self.state.winner(),
            winner_name: self.state.winner_name().map(str::to_string),
            active_player: self.active_player,
            timer_enabled: self.timer.enabled(),
            timer_phase: self.timer.phase(),
            timer_remaining: self.timer.remaining(),
            result_saved: self.result_saved,
        }
    }

    pub fn is_over(&self) -> bool {
        self.state.is_over()
    }

    pub fn active_player(&self) -> PlayerSlot {
        self.active_player
    }

    /// Applies a score command and returns the events to broadcast.
    ///
    /// Turn handling: a score by the active player restarts their countdown;
    /// a score by the inactive player makes them active (which also restarts
    /// the countdown). A win stops the clock for good.
    pub fn apply_score(
        &mut self,
        slot: PlayerSlot,
        delta: ScoreDelta,
    ) -> Result<Vec<Event>, ScoreError> {
        let change = match delta {
            ScoreDelta::Increment => self.state.increment(slot)?,
            ScoreDelta::Decrement => self.state.decrement(slot)?,
        };

        if !change.changed {
            return Ok(Vec::new());
        }

        let mut events = Vec::new();

        if delta == ScoreDelta::Increment {
            events.push(Event::cue(CueKind::Score, false));
        }
        if change.entered_hill {
            events.push(Event::cue(CueKind::TimeWarning, true));
        }

        if change.won {
            self.timer.stop();
            events.push(Event::cue(CueKind::TimeUp, false));
            events.push(Event::Match(MatchEvent::WinnerDeclared {
                snapshot: self.snapshot(),
            }));
            return Ok(events);
        }

        if slot != self.active_player {
            self.active_player = slot;
        }
        self.timer.restart();

        events.push(Event::Match(MatchEvent::ScoreChanged {
            snapshot: self.snapshot(),
        }));
        Ok(events)
    }

    /// Advances the countdown by one second.
    ///
    /// Expiry penalizes the player who ran out of time: the turn passes to
    /// the opponent and a fresh countdown starts for them. Once a winner
    /// exists the timer is already stopped, so this is a no-op.
    pub fn tick(&mut self) -> Vec<Event> {
        match self.timer.tick() {
            None => {
                if self.timer.is_running() {
                    vec![Event::Timer(TimerEvent::Tick {
                        snapshot: self.snapshot(),
                    })]
                } else {
                    Vec::new()
                }
            }
            Some(TimerSignal::WarningStarted) => vec![
                Event::cue(CueKind::TimeWarning, false),
                Event::Timer(TimerEvent::WarningStarted {
                    snapshot: self.snapshot(),
                }),
            ],
            Some(TimerSignal::Expired) => {
                self.active_player = self.active_player.opponent();
                self.timer.restart();

                let snapshot = self.snapshot();
                let notice = format!("Time's up! {}'s turn", snapshot.player_name(snapshot.active_player));
                vec![
                    Event::cue(CueKind::TimeUp, true),
                    Event::Timer(TimerEvent::Expired { snapshot }),
                    Event::notice(notice),
                ]
            }
        }
    }

    /// Claims the completed result for saving.
    ///
    /// Returns the final snapshot exactly once per completed match; `None`
    /// while the match is still running or after the result was already
    /// saved. This latch is what makes save-result idempotent.
    pub fn claim_result(&mut self) -> Option<SessionSnapshot> {
        if !self.state.is_over() || self.result_saved {
            return None;
        }
        self.result_saved = true;
        Some(self.snapshot())
    }

    /// "Play again": zero scores, clear the winner and saved latch, restart
    /// the countdown. Names and target are kept.
    pub fn play_again(&mut self) -> Vec<Event> {
        self.state.reset();
        self.result_saved = false;
        self.timer.restart();

        vec![Event::Match(MatchEvent::Reset {
            snapshot: self.snapshot(),
        })]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::CueEvent;

    fn session(race_to: u32) -> ScoreboardSession {
        let config = MatchConfig::new("Alice", "Bob", race_to);
        ScoreboardSession::new(config, &Settings::default())
    }

    fn cues(events: &[Event]) -> Vec<CueEvent> {
        events
            .iter()
            .filter_map(|e| match e {
                Event::Cue(cue) => Some(*cue),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn active_player_scoring_keeps_the_turn() {
        let mut s = session(7);
        assert_eq!(s.active_player(), PlayerSlot::One);

        s.apply_score(PlayerSlot::One, ScoreDelta::Increment).unwrap();
        assert_eq!(s.active_player(), PlayerSlot::One);
        assert_eq!(s.snapshot().timer_remaining, 30);
    }

    #[test]
    fn inactive_player_scoring_takes_the_turn() {
        let mut s = session(7);
        s.apply_score(PlayerSlot::Two, ScoreDelta::Increment).unwrap();
        assert_eq!(s.active_player(), PlayerSlot::Two);
    }

    #[test]
    fn expiry_switches_active_player_and_restarts() {
        let config = MatchConfig::default();
        let settings = Settings {
            timer_duration: 15,
            ..Settings::default()
        };
        let mut s = ScoreboardSession::new(config, &settings);

        let mut expiries = 0;
        for _ in 0..15 {
            let events = s.tick();
            expiries += events
                .iter()
                .filter(|e| matches!(e, Event::Timer(TimerEvent::Expired { .. })))
                .count();
        }

        assert_eq!(expiries, 1);
        assert_eq!(s.active_player(), PlayerSlot::Two);
        let snapshot = s.snapshot();
        assert_eq!(snapshot.timer_remaining, 15);
        assert_eq!(snapshot.timer_phase, TimerPhase::Running);
    }

    #[test]
    fn win_stops_the_clock_and_freezes_scores() {
        let mut s = session(5);
        for _ in 0..4 {
            s.apply_score(PlayerSlot::One, ScoreDelta::Increment).unwrap();
        }
        assert!(s.snapshot().player1_on_hill);

        let events = s.apply_score(PlayerSlot::One, ScoreDelta::Increment).unwrap();
        assert!(events
            .iter()
            .any(|e| matches!(e, Event::Match(MatchEvent::WinnerDeclared { .. }))));

        let snapshot = s.snapshot();
        assert_eq!(snapshot.winner_name.as_deref(), Some("Alice"));
        assert_eq!(snapshot.timer_phase, TimerPhase::Idle);

        assert!(s.apply_score(PlayerSlot::Two, ScoreDelta::Increment).is_err());
        assert!(s.tick().is_empty());
    }

    #[test]
    fn hill_cue_fires_once_on_entry() {
        let mut s = session(3);
        let first = s.apply_score(PlayerSlot::One, ScoreDelta::Increment).unwrap();
        assert_eq!(cues(&first).len(), 1); // score cue only

        let second = s.apply_score(PlayerSlot::One, ScoreDelta::Increment).unwrap();
        let second_cues = cues(&second);
        assert!(second_cues.iter().any(|c| c.kind == CueKind::TimeWarning && c.vibrate));
    }

    #[test]
    fn decrement_at_zero_emits_nothing() {
        let mut s = session(7);
        let events = s.apply_score(PlayerSlot::One, ScoreDelta::Decrement).unwrap();
        assert!(events.is_empty());
    }

    #[test]
    fn claim_result_is_idempotent() {
        let mut s = session(1);
        assert!(s.claim_result().is_none()); // not over yet

        s.apply_score(PlayerSlot::One, ScoreDelta::Increment).unwrap();
        assert!(s.claim_result().is_some());
        assert!(s.claim_result().is_none());

        // Play again re-arms the latch for the next completed match.
        s.play_again();
        assert!(s.claim_result().is_none());
        s.apply_score(PlayerSlot::Two, ScoreDelta::Increment).unwrap();
        assert!(s.claim_result().is_some());
    }

    #[test]
    fn play_again_keeps_names_and_target() {
        let mut s = session(2);
        s.apply_score(PlayerSlot::One, ScoreDelta::Increment).unwrap();
        s.apply_score(PlayerSlot::One, ScoreDelta::Increment).unwrap();
        assert!(s.is_over());

        s.play_again();
        let snapshot = s.snapshot();
        assert_eq!(snapshot.player1_score, 0);
        assert_eq!(snapshot.player2_score, 0);
        assert_eq!(snapshot.winner, None);
        assert!(!snapshot.result_saved);
        assert_eq!(snapshot.config.player1_name, "Alice");
        assert_eq!(snapshot.config.race_to, 2);
        assert_eq!(snapshot.timer_phase, TimerPhase::Running);
    }

    #[test]
    fn disabled_timer_never_ticks() {
        let settings = Settings {
            timer_enabled: false,
            ..Settings::default()
        };
        let mut s = ScoreboardSession::new(MatchConfig::default(), &settings);
        for _ in 0..100 {
            assert!(s.tick().is_empty());
        }
        assert_eq!(s.active_player(), PlayerSlot::One);
    }
}
