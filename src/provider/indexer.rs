use std::time::Duration;

use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;

use super::StatsSource;
use crate::config::IndexerConfig;
use crate::core::{LeaderboardSnapshot, StatsSnapshot};

/// Read-only client for the game indexer's JSON API.
pub struct IndexerClient {
    base_url: String,
    client: Client,
    auth: Option<String>, // base64 encoded user:pass
}

impl IndexerClient {
    pub fn new(config: &IndexerConfig) -> Result<Self, IndexerError> {
        use base64::{Engine, engine::general_purpose::STANDARD};
        let auth = match (&config.api_user, &config.api_password) {
            (Some(user), Some(pass)) => Some(STANDARD.encode(format!("{user}:{pass}"))),
            _ => None,
        };
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs.max(1)))
            .build()
            .map_err(IndexerError::Http)?;
        Ok(Self {
            base_url: config.base_url.trim_end_matches('/').to_string(),
            client,
            auth,
        })
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, IndexerError> {
        let url = self.endpoint(path);
        let mut req = self.client.get(&url).header("Accept", "application/json");
        if let Some(auth) = &self.auth {
            req = req.header("Authorization", format!("Basic {auth}"));
        }

        let resp = req.send().await.map_err(IndexerError::Http)?;
        let status = resp.status();
        if !status.is_success() {
            return Err(IndexerError::Status { status, url });
        }

        let body = resp.text().await.map_err(IndexerError::Http)?;
        serde_json::from_str(&body).map_err(IndexerError::Decode)
    }

    /// Global counters, player count and activity metrics.
    pub async fn global_stats(&self) -> Result<StatsSnapshot, IndexerError> {
        self.get_json("stats/global").await
    }

    /// Harvest and kindness rankings plus the top-contributor picks.
    pub async fn leaderboard(&self) -> Result<LeaderboardSnapshot, IndexerError> {
        self.get_json("leaderboard").await
    }
}

impl StatsSource for IndexerClient {
    type Error = IndexerError;

    async fn fetch_stats(&self) -> Result<StatsSnapshot, IndexerError> {
        self.global_stats().await
    }

    async fn fetch_leaderboard(&self) -> Result<LeaderboardSnapshot, IndexerError> {
        self.leaderboard().await
    }
}

#[derive(Debug)]
pub enum IndexerError {
    Http(reqwest::Error),
    Status { status: StatusCode, url: String },
    Decode(serde_json::Error),
}

impl std::fmt::Display for IndexerError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IndexerError::Http(e) => write!(f, "HTTP error: {e}"),
            IndexerError::Status { status, url } => write!(f, "{url} returned {status}"),
            IndexerError::Decode(e) => write!(f, "Malformed response: {e}"),
        }
    }
}

impl std::error::Error for IndexerError {}
