//! Typed events published by the session worker.

use serde::{Deserialize, Serialize};

use match_core::CueKind;

use crate::history::MatchRecord;
use crate::session::SessionSnapshot;

/// Match lifecycle and state-change events.
///
/// Every variant that reflects session state carries a full
/// [`SessionSnapshot`]: the state is small enough that snapshots are cheaper
/// to reason about than incremental deltas.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum MatchEvent {
    /// A new match started from the setup payload.
    Started { snapshot: SessionSnapshot },
    /// A score moved without deciding the match.
    ScoreChanged { snapshot: SessionSnapshot },
    /// A score reached the target; the match is over.
    WinnerDeclared { snapshot: SessionSnapshot },
    /// "Play again": scores zeroed, same players and target.
    Reset { snapshot: SessionSnapshot },
    /// "New game": the session was discarded; clients return to setup.
    Abandoned,
    /// The completed match was appended to the history.
    ResultSaved {
        record: MatchRecord,
        snapshot: SessionSnapshot,
    },
    /// All stored match records were deleted.
    HistoryCleared,
    /// Settings changed (and were persisted best-effort).
    SettingsChanged { settings: match_core::Settings },
    /// Transient user-facing notification.
    Notice { text: String },
}

/// Countdown events.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum TimerEvent {
    /// One second elapsed on a running countdown.
    Tick { snapshot: SessionSnapshot },
    /// The countdown entered its warning window.
    WarningStarted { snapshot: SessionSnapshot },
    /// The countdown reached zero; the active player switched.
    Expired { snapshot: SessionSnapshot },
}

/// Fire-and-forget feedback cue for the audio/vibration side channel.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct CueEvent {
    pub kind: CueKind,
    /// Whether this cue also requests haptic/visual feedback.
    pub vibrate: bool,
}

/// Event wrapper that carries the topic and typed event.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum Event {
    Match(MatchEvent),
    Timer(TimerEvent),
    Cue(CueEvent),
}

impl Event {
    pub fn topic(&self) -> super::Topic {
        match self {
            Event::Match(_) => super::Topic::Match,
            Event::Timer(_) => super::Topic::Timer,
            Event::Cue(_) => super::Topic::Cue,
        }
    }

    pub(crate) fn cue(kind: CueKind, vibrate: bool) -> Self {
        Event::Cue(CueEvent { kind, vibrate })
    }

    pub(crate) fn notice(text: impl Into<String>) -> Self {
        Event::Match(MatchEvent::Notice { text: text.into() })
    }
}
