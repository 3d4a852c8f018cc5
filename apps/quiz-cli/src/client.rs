//! HTTP client for the ranking backend.

use std::time::Duration;

use quiz_core::PlayerResult;
use serde::Deserialize;
use tracing::{debug, warn};

pub const DEFAULT_API_URL: &str = "http://localhost:3000";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(5);

/// Body returned by `POST /ranking`
#[derive(Debug, Clone, Deserialize)]
pub struct SubmitReply {
    pub message: String,
    pub outcome: String,
}

#[derive(Debug, Clone)]
pub struct RankingClient {
    http: reqwest::Client,
    base_url: String,
}

impl RankingClient {
    pub fn new(base_url: &str) -> Result<Self, reqwest::Error> {
        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()?;
        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    fn ranking_url(&self) -> String {
        format!("{}/ranking", self.base_url)
    }

    /// Current top ten. Any failure is logged and yields an empty list.
    pub async fn leaderboard(&self) -> Vec<PlayerResult> {
        match self.fetch_leaderboard().await {
            Ok(rows) => rows,
            Err(e) => {
                warn!(error = %e, url = %self.ranking_url(), "could not load ranking");
                Vec::new()
            }
        }
    }

    /// Send a finished game. `None` when the backend could not be reached or
    /// rejected the result; the game carries on either way.
    pub async fn submit(&self, result: &PlayerResult) -> Option<SubmitReply> {
        match self.post_result(result).await {
            Ok(reply) => {
                debug!(outcome = %reply.outcome, "result submitted");
                Some(reply)
            }
            Err(e) => {
                warn!(error = %e, url = %self.ranking_url(), "could not submit result");
                None
            }
        }
    }

    async fn fetch_leaderboard(&self) -> Result<Vec<PlayerResult>, reqwest::Error> {
        self.http
            .get(self.ranking_url())
            .send()
            .await?
            .error_for_status()?
            .json()
            .await
    }

    async fn post_result(&self, result: &PlayerResult) -> Result<SubmitReply, reqwest::Error> {
        self.http
            .post(self.ranking_url())
            .json(result)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await
    }
}
