use crate::score::PlayerSlot;

/// Errors surfaced by score mutations.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ScoreError {
    /// The match already has a winner; scores are frozen until a reset.
    #[error("match is over, {winner:?} already won")]
    MatchOver { winner: PlayerSlot },
}
