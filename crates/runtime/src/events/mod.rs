//! Topic-based event bus and event types.
mod bus;
mod types;

pub use bus::{EventBus, Topic};
pub use types::{CueEvent, Event, MatchEvent, TimerEvent};
