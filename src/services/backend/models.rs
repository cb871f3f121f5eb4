//! Wire models for the quiz backend API

use crate::{services::leaderboard::models::ScoreEntry, utils::types::Rank};
use serde::Deserialize;

/// Rank payload returned by the rank endpoint. The backend reports a
/// user missing from the leaderboard with a non-positive value rather
/// than an error status.
#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(transparent)]
pub struct RankResponse(i64);

impl RankResponse {
    /// Converts the payload into an explicit rank. The backend "no
    /// rank" value maps to [None] here at the wire boundary so the
    /// rest of the app never has to treat zero as a sentinel.
    pub fn into_rank(self) -> Option<Rank> {
        if self.0 > 0 {
            Some(self.0 as Rank)
        } else {
            None
        }
    }
}

/// Data produced by a completed load: the score snapshot together
/// with the server computed rank for the active user
#[derive(Debug)]
pub struct LoadedData {
    /// The full score snapshot, in no particular order
    pub entries: Vec<ScoreEntry>,
    /// The rank the server computed for the active user
    pub server_rank: Option<Rank>,
}
