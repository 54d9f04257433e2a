//! Scoreboard runtime: session orchestration, events, and persistence.
//!
//! The runtime owns the background worker that drives an active match
//! (score commands, the 1 Hz countdown tick, save/reset actions) and
//! publishes typed events on a topic bus. Clients interact exclusively
//! through the cloneable [`RuntimeHandle`]; repositories are injected so the
//! orchestration logic stays testable with in-memory doubles.
pub mod error;
pub mod events;
pub mod handle;
pub mod history;
pub mod repository;
pub mod runtime;
pub mod session;
pub mod worker;

pub use error::{Result, RuntimeError};
pub use events::{CueEvent, Event, EventBus, MatchEvent, TimerEvent, Topic};
pub use handle::RuntimeHandle;
pub use history::MatchRecord;
pub use runtime::{Runtime, RuntimeConfig};
pub use session::{ScoreDelta, ScoreboardSession, SessionSnapshot};
pub use worker::Command;
