//! Score/win tracker for a two-player race-to-N match.
//!
//! [`MatchState`] is the authoritative reducer for both scores. All
//! mutations flow through [`MatchState::increment`] / [`MatchState::decrement`],
//! which evaluate the hill and win conditions synchronously and report
//! edge-triggered transitions to the caller via [`ScoreChange`].

use crate::config::MatchConfig;
use crate::error::ScoreError;

/// One of the two players in a match.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PlayerSlot {
    One,
    Two,
}

impl PlayerSlot {
    pub fn opponent(self) -> Self {
        match self {
            PlayerSlot::One => PlayerSlot::Two,
            PlayerSlot::Two => PlayerSlot::One,
        }
    }

    fn index(self) -> usize {
        match self {
            PlayerSlot::One => 0,
            PlayerSlot::Two => 1,
        }
    }
}

/// Outcome of a single score mutation.
///
/// `entered_hill` and `won` are edge-triggered: they fire on the mutation
/// that crosses the threshold, never again while the score sits there.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScoreChange {
    pub slot: PlayerSlot,
    pub score: u32,
    /// The score actually moved (false for a decrement at 0).
    pub changed: bool,
    /// This mutation crossed into the hill (one point from winning).
    pub entered_hill: bool,
    /// This mutation reached the target and decided the match.
    pub won: bool,
}

/// Authoritative state of an in-progress match.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MatchState {
    config: MatchConfig,
    scores: [u32; 2],
    winner: Option<PlayerSlot>,
}

impl MatchState {
    pub fn new(config: MatchConfig) -> Self {
        Self {
            config,
            scores: [0, 0],
            winner: None,
        }
    }

    pub fn config(&self) -> &MatchConfig {
        &self.config
    }

    pub fn score(&self, slot: PlayerSlot) -> u32 {
        self.scores[slot.index()]
    }

    pub fn winner(&self) -> Option<PlayerSlot> {
        self.winner
    }

    /// Resolves the winner slot to the configured player name.
    pub fn winner_name(&self) -> Option<&str> {
        self.winner.map(|slot| self.player_name(slot))
    }

    pub fn player_name(&self, slot: PlayerSlot) -> &str {
        match slot {
            PlayerSlot::One => &self.config.player1_name,
            PlayerSlot::Two => &self.config.player2_name,
        }
    }

    pub fn is_over(&self) -> bool {
        self.winner.is_some()
    }

    /// Level query for display emphasis: exactly one point from winning.
    pub fn on_hill(&self, slot: PlayerSlot) -> bool {
        self.score(slot) == self.config.race_to.saturating_sub(1)
    }

    /// Adds one point to `slot`'s score.
    pub fn increment(&mut self, slot: PlayerSlot) -> Result<ScoreChange, ScoreError> {
        let current = self.score(slot);
        self.apply(slot, current + 1)
    }

    /// Removes one point from `slot`'s score. No-op at 0.
    pub fn decrement(&mut self, slot: PlayerSlot) -> Result<ScoreChange, ScoreError> {
        let current = self.score(slot);
        if current == 0 {
            self.guard_open()?;
            return Ok(ScoreChange {
                slot,
                score: 0,
                changed: false,
                entered_hill: false,
                won: false,
            });
        }
        self.apply(slot, current - 1)
    }

    /// Sets `slot`'s score, evaluating hill entry and the win condition.
    ///
    /// Ties are impossible: this runs synchronously on every mutation, so
    /// the first score to reach the target claims the winner slot.
    fn apply(&mut self, slot: PlayerSlot, new_score: u32) -> Result<ScoreChange, ScoreError> {
        self.guard_open()?;

        let old_score = self.score(slot);
        self.scores[slot.index()] = new_score;

        let hill = self.config.race_to.saturating_sub(1);
        let entered_hill = new_score == hill && old_score < hill;

        let won = new_score >= self.config.race_to;
        if won {
            self.winner = Some(slot);
        }

        Ok(ScoreChange {
            slot,
            score: new_score,
            changed: true,
            entered_hill,
            won,
        })
    }

    fn guard_open(&self) -> Result<(), ScoreError> {
        match self.winner {
            Some(winner) => Err(ScoreError::MatchOver { winner }),
            None => Ok(()),
        }
    }

    /// Play again: zero both scores and clear the winner, keeping the config.
    pub fn reset(&mut self) {
        self.scores = [0, 0];
        self.winner = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn race_to(n: u32) -> MatchState {
        MatchState::new(MatchConfig::new("Alice", "Bob", n))
    }

    #[test]
    fn hill_iff_one_point_from_target() {
        let mut state = race_to(5);
        for expected_score in 1..=4 {
            let change = state.increment(PlayerSlot::One).unwrap();
            assert_eq!(change.score, expected_score);
            assert_eq!(state.on_hill(PlayerSlot::One), expected_score == 4);
        }
        assert!(!state.on_hill(PlayerSlot::Two));
    }

    #[test]
    fn hill_entry_is_edge_triggered() {
        let mut state = race_to(3);
        assert!(!state.increment(PlayerSlot::One).unwrap().entered_hill);
        assert!(state.increment(PlayerSlot::One).unwrap().entered_hill);

        // Dropping off the hill and climbing back re-arms the edge.
        assert!(!state.decrement(PlayerSlot::One).unwrap().entered_hill);
        assert!(state.increment(PlayerSlot::One).unwrap().entered_hill);
    }

    #[test]
    fn reaching_target_declares_winner_once() {
        let mut state = race_to(5);
        for _ in 0..4 {
            state.increment(PlayerSlot::Two).unwrap();
        }
        assert!(state.on_hill(PlayerSlot::Two));

        let change = state.increment(PlayerSlot::Two).unwrap();
        assert!(change.won);
        assert_eq!(state.winner(), Some(PlayerSlot::Two));
        assert_eq!(state.winner_name(), Some("Bob"));

        // Terminal: every further mutation is rejected.
        assert_eq!(
            state.increment(PlayerSlot::One),
            Err(ScoreError::MatchOver {
                winner: PlayerSlot::Two
            })
        );
        assert_eq!(
            state.decrement(PlayerSlot::Two),
            Err(ScoreError::MatchOver {
                winner: PlayerSlot::Two
            })
        );
    }

    #[test]
    fn at_most_one_winner() {
        let mut state = race_to(1);
        state.increment(PlayerSlot::One).unwrap();
        assert!(state.increment(PlayerSlot::Two).is_err());
        assert_eq!(state.winner(), Some(PlayerSlot::One));
    }

    #[test]
    fn decrement_at_zero_is_a_noop() {
        let mut state = race_to(5);
        let change = state.decrement(PlayerSlot::One).unwrap();
        assert!(!change.changed);
        assert_eq!(state.score(PlayerSlot::One), 0);
    }

    #[test]
    fn reset_clears_scores_and_winner() {
        let mut state = race_to(2);
        state.increment(PlayerSlot::One).unwrap();
        state.increment(PlayerSlot::One).unwrap();
        assert!(state.is_over());

        state.reset();
        assert_eq!(state.score(PlayerSlot::One), 0);
        assert_eq!(state.score(PlayerSlot::Two), 0);
        assert_eq!(state.winner(), None);
        assert!(state.increment(PlayerSlot::Two).is_ok());
    }
}
