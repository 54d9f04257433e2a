//! Topic-based event bus implementation.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use tokio::sync::broadcast;

use super::types::Event;

/// Topics for event routing.
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq, Serialize, Deserialize)]
pub enum Topic {
    /// Match lifecycle, scores, settings, history, and notices.
    Match,
    /// Countdown ticks and transitions.
    Timer,
    /// Audio/vibration side-channel cues.
    Cue,
}

impl Topic {
    pub const ALL: [Topic; 3] = [Topic::Match, Topic::Timer, Topic::Cue];
}

/// Topic-based event bus.
///
/// Consumers subscribe to the topics they care about and only receive those
/// events. Publishing never blocks; events published with no subscribers are
/// dropped, and slow subscribers observe a lag error rather than stalling
/// the worker.
#[derive(Clone)]
pub struct EventBus {
    channels: HashMap<Topic, broadcast::Sender<Event>>,
}

impl EventBus {
    /// Creates a new event bus with the default capacity per topic.
    pub fn new() -> Self {
        Self::with_capacity(100)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        let channels = Topic::ALL
            .iter()
            .map(|&topic| (topic, broadcast::channel(capacity).0))
            .collect();
        Self { channels }
    }

    /// Subscribes to a single topic.
    pub fn subscribe(&self, topic: Topic) -> broadcast::Receiver<Event> {
        self.channels[&topic].subscribe()
    }

    /// Subscribes to several topics at once, keyed by topic.
    pub fn subscribe_multiple(
        &self,
        topics: &[Topic],
    ) -> HashMap<Topic, broadcast::Receiver<Event>> {
        topics
            .iter()
            .map(|&topic| (topic, self.subscribe(topic)))
            .collect()
    }

    /// Publishes an event to its topic channel.
    pub fn publish(&self, event: Event) {
        let topic = event.topic();
        // A send error only means nobody is subscribed right now.
        if self.channels[&topic].send(event).is_err() {
            tracing::trace!(?topic, "event published with no subscribers");
        }
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::MatchEvent;

    #[tokio::test]
    async fn events_are_routed_by_topic() {
        let bus = EventBus::new();
        let mut match_rx = bus.subscribe(Topic::Match);
        let mut timer_rx = bus.subscribe(Topic::Timer);

        bus.publish(Event::Match(MatchEvent::Abandoned));

        let event = match_rx.recv().await.unwrap();
        assert!(matches!(event, Event::Match(MatchEvent::Abandoned)));
        assert!(timer_rx.try_recv().is_err());
    }

    #[tokio::test]
    async fn publish_without_subscribers_is_harmless() {
        let bus = EventBus::new();
        bus.publish(Event::Match(MatchEvent::HistoryCleared));
    }
}
