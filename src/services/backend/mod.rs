//! Outbound client for the quiz backend API. The backend stores the
//! user scores and serves them precomputed; this module only fetches,
//! it never persists or recomputes anything.

use self::models::{LoadedData, RankResponse};
use crate::{config::BackendConfig, services::leaderboard::models::ScoreEntry, utils::types::Rank};
use log::debug;
use reqwest::StatusCode;
use thiserror::Error;

pub mod models;

/// Client for the backend API. Cheap to share, the underlying
/// [reqwest::Client] is already reference counted.
pub struct Backend {
    /// The base URL of the backend API
    url: String,
    /// The underlying HTTP client used for requests
    client: reqwest::Client,
}

/// Error type for failures while talking to the backend
#[derive(Debug, Error)]
pub enum BackendError {
    /// The request could not be sent or the response body could
    /// not be read or decoded
    #[error(transparent)]
    Request(#[from] reqwest::Error),
    /// The backend responded with an unexpected status code
    #[error("Backend responded with status {0}")]
    ErrorStatus(StatusCode),
}

impl Backend {
    /// Creates a new backend client from the provided config
    pub fn new(config: &BackendConfig) -> Self {
        Self {
            url: config.url.trim_end_matches('/').to_string(),
            client: reqwest::Client::new(),
        }
    }

    /// Requests the full rankings snapshot. The entries arrive in no
    /// guaranteed order; ordering is the callers concern.
    pub async fn fetch_rankings(&self) -> Result<Vec<ScoreEntry>, BackendError> {
        let url = format!("{}/api/users/rankings", self.url);
        debug!("Requesting rankings snapshot: {}", &url);

        let response = self.client.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(BackendError::ErrorStatus(status));
        }

        let entries: Vec<ScoreEntry> = response.json().await?;
        debug!("Loaded rankings snapshot ({} entries)", entries.len());
        Ok(entries)
    }

    /// Requests the server computed rank for the provided nickname.
    /// The backends "no rank" payload is mapped to [None] before it
    /// leaves this module.
    pub async fn fetch_rank(&self, nickname: &str) -> Result<Option<Rank>, BackendError> {
        let url = format!("{}/api/users/rank", self.url);
        debug!("Requesting rank for {}", nickname);

        let response = self
            .client
            .get(url)
            .query(&[("nickname", nickname)])
            .send()
            .await?;
        let status = response.status();
        if !status.is_success() {
            return Err(BackendError::ErrorStatus(status));
        }

        let value: RankResponse = response.json().await?;
        Ok(value.into_rank())
    }

    /// Loads everything the rank screen needs. The snapshot and rank
    /// requests have no ordering dependency so they are issued
    /// concurrently.
    pub async fn load(&self, nickname: &str) -> Result<LoadedData, BackendError> {
        let (entries, server_rank) =
            tokio::try_join!(self.fetch_rankings(), self.fetch_rank(nickname))?;

        Ok(LoadedData {
            entries,
            server_rank,
        })
    }
}
