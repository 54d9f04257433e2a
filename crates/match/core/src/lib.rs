//! Deterministic scoreboard logic shared across the runtime and clients.
//!
//! `match-core` defines the canonical rules of a two-player race-to-N match:
//! the score/win tracker, the turn-timer state machine, user settings, and
//! the cue vocabulary for the audio/vibration side channel. Everything here
//! is pure and synchronous; the runtime layers clocks, persistence, and
//! events on top of the types re-exported below.
pub mod config;
pub mod cue;
pub mod error;
pub mod score;
pub mod settings;
pub mod timer;

pub use config::MatchConfig;
pub use cue::CueKind;
pub use error::ScoreError;
pub use score::{MatchState, PlayerSlot, ScoreChange};
pub use settings::{Settings, Theme};
pub use timer::{TimerPhase, TimerSignal, TurnTimer};
