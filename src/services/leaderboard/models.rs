use crate::utils::types::{Rank, UserId};
use serde::{Deserialize, Serialize};

/// Structure for a single user score within a leaderboard snapshot.
/// This is also the JSON shape the backend serves the snapshot in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreEntry {
    /// The ID of the user this entry is for, stable across requests
    pub id: UserId,
    /// The display name of the user. Not guaranteed to be unique
    pub nickname: String,
    /// The number of correctly answered questions
    pub score: u32,
}

/// A score entry annotated with its position within the canonical
/// order. The rank always reflects the position in the full order,
/// not the position within whatever slice the entry is rendered in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RankedEntry {
    /// The 1-based position of this entry in the canonical order
    pub rank: Rank,
    /// The ID of the user this entry is for
    pub id: UserId,
    /// The display name of the user
    pub nickname: String,
    /// The number of correctly answered questions
    pub score: u32,
}

impl RankedEntry {
    pub(crate) fn new(rank: Rank, entry: ScoreEntry) -> Self {
        Self {
            rank,
            id: entry.id,
            nickname: entry.nickname,
            score: entry.score,
        }
    }
}
