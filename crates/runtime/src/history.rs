//! Immutable records of completed matches.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::session::SessionSnapshot;

/// One completed, explicitly saved match.
///
/// Records are append-only: they are prepended to the history (newest
/// first), never mutated, and removed only by clearing the whole history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchRecord {
    pub id: Uuid,
    pub player1_name: String,
    pub player2_name: String,
    pub player1_score: u32,
    pub player2_score: u32,
    pub winner: String,
    pub race_to: u32,
    pub finished_at: DateTime<Utc>,
}

impl MatchRecord {
    /// Builds a record from the final snapshot of a decided match.
    ///
    /// Returns `None` if the snapshot has no winner.
    pub fn from_snapshot(snapshot: &SessionSnapshot) -> Option<Self> {
        let winner = snapshot.winner_name.clone()?;

        Some(Self {
            id: Uuid::new_v4(),
            player1_name: snapshot.config.player1_name.clone(),
            player2_name: snapshot.config.player2_name.clone(),
            player1_score: snapshot.player1_score,
            player2_score: snapshot.player2_score,
            winner,
            race_to: snapshot.config.race_to,
            finished_at: Utc::now(),
        })
    }
}
