//! State for the rank screen, the view shown after the quiz where
//! the player sees the leaderboard and their own placement.
//!
//! Loading is split into two phases: an asynchronous load that
//! produces a [LoadedData] or fails, followed by synchronous pure
//! derivation of whatever the presentation layer wants to render.
//! Nothing in here reads ambient state; everything the derivations
//! need lives on the screen value itself.

use crate::{
    config::DisplayConfig,
    services::{
        backend::{models::LoadedData, BackendError},
        leaderboard::{models::RankedEntry, Rankings},
    },
    utils::types::Rank,
};
use log::{debug, error};

/// Load phase of the rank screen. Derivation only produces rows in
/// the [LoadState::Ready] phase, the other phases render placeholders.
pub enum LoadState {
    /// The snapshot and rank fetches are still in flight
    Loading,
    /// Both fetches completed
    Ready {
        /// Canonical order built from the snapshot
        rankings: Rankings,
        /// Rank the server computed for the active user. Kept apart
        /// from the client side locator, the two may disagree when
        /// the server breaks score ties differently
        server_rank: Option<Rank>,
    },
    /// The load failed. Recoverable, the player can retry
    Failed(BackendError),
}

/// State owned by a single visit to the rank screen
pub struct RankScreen {
    /// Nickname of the active player, the lookup key within the
    /// snapshot
    nickname: String,
    /// Number of correct answers from the finished quiz. Displayed
    /// in the summary header, never computed here
    correct_answers: u32,
    /// Display policy: window size and visible row cap
    display: DisplayConfig,
    /// Current load phase
    state: LoadState,
    /// Whether the windowed presentation mode is active. Starts on
    /// the full top list
    windowed: bool,
    /// Identifies the current view lifetime. Loads that finish under
    /// an older generation belong to a view that no longer exists
    /// and are discarded
    generation: u64,
}

impl RankScreen {
    pub fn new(nickname: String, correct_answers: u32, display: DisplayConfig) -> Self {
        Self {
            nickname,
            correct_answers,
            display,
            state: LoadState::Loading,
            windowed: false,
            generation: 0,
        }
    }

    pub fn nickname(&self) -> &str {
        &self.nickname
    }

    pub fn correct_answers(&self) -> u32 {
        self.correct_answers
    }

    pub fn windowed(&self) -> bool {
        self.windowed
    }

    pub fn state(&self) -> &LoadState {
        &self.state
    }

    /// Begins a new load returning the generation the caller must
    /// hand back to [Self::finish_load]. Any load still in flight is
    /// invalidated. Also used when the player retries, which ends the
    /// current snapshot lifetime.
    pub fn begin_load(&mut self) -> u64 {
        self.generation += 1;
        self.state = LoadState::Loading;
        self.generation
    }

    /// Applies a finished load. A result carrying a stale generation
    /// is dropped without touching the screen, the view it was
    /// started for is gone.
    pub fn finish_load(&mut self, generation: u64, result: Result<LoadedData, BackendError>) {
        if generation != self.generation {
            debug!(
                "Discarding stale load result (generation {} active {})",
                generation, self.generation
            );
            return;
        }

        self.state = match result {
            Ok(data) => LoadState::Ready {
                rankings: Rankings::new(data.entries),
                server_rank: data.server_rank,
            },
            Err(err) => {
                error!("Failed to load leaderboard: {}", err);
                LoadState::Failed(err)
            }
        };
    }

    /// The server computed rank for the summary header. [None] while
    /// not loaded or when the server had no rank for the player.
    pub fn server_rank(&self) -> Option<Rank> {
        match &self.state {
            LoadState::Ready { server_rank, .. } => *server_rank,
            _ => None,
        }
    }

    /// The players position within the canonical order, located
    /// client side. This is what the windowed mode centers on.
    pub fn located_rank(&self) -> Option<Rank> {
        match &self.state {
            LoadState::Ready { rankings, .. } => rankings.locate(&self.nickname),
            _ => None,
        }
    }

    /// Total number of users on the loaded leaderboard
    pub fn total(&self) -> usize {
        match &self.state {
            LoadState::Ready { rankings, .. } => rankings.len(),
            _ => 0,
        }
    }

    /// Flips between the full top list and the window centered on
    /// the player, returning the new mode. The visible rows are
    /// re-derived on the next [Self::visible_slice] call.
    pub fn toggle(&mut self) -> bool {
        self.windowed = !self.windowed;
        self.windowed
    }

    /// Derives the rows to render for the current mode. Always a
    /// fresh derivation from the snapshot and flag state, so an
    /// unchanged screen always derives the same rows.
    ///
    /// Rows carry their true canonical rank: in windowed mode the
    /// third row of the slice may well be global rank 47.
    pub fn visible_slice(&self) -> &[RankedEntry] {
        let rankings = match &self.state {
            LoadState::Ready { rankings, .. } => rankings,
            _ => return &[],
        };

        let rows = if self.windowed {
            rankings.window_around(
                rankings.locate(&self.nickname),
                self.display.window_before,
                self.display.window_after,
            )
        } else {
            rankings.top(self.display.max_rows)
        };

        // Both modes render at most max_rows rows. For the window
        // this only matters if the window policy ever outgrows it
        &rows[..rows.len().min(self.display.max_rows)]
    }
}
