//! OpenF1 data provider implementation.
//!
//! OpenF1 (<https://api.openf1.org/v1>) is the live-timing oriented source:
//! its schedule is lighter than Ergast's (no circuit metadata, rounds often
//! unreported) but it knows about sessions as they run. It sits behind
//! Ergast in the default chain.
//!
//! OpenF1 has no constructors endpoint; that query answers with an empty
//! list so the chain can fall through to a source that does.

mod models;

use async_trait::async_trait;
use chrono::{Datelike, Utc};
use log::debug;
use reqwest::Client;
use serde::de::DeserializeOwned;
use std::time::Duration;

use crate::errors::F1DataError;
use crate::models::{Constructor, Driver, Session};
use crate::provider::F1DataProvider;

use models::{DriverDto, SessionDto};

const BASE_URL: &str = "https://api.openf1.org/v1";
const PROVIDER_ID: &str = "OPENF1";

/// OpenF1 data provider.
pub struct OpenF1Provider {
    client: Client,
    base_url: String,
}

impl OpenF1Provider {
    pub fn new() -> Self {
        Self::with_base_url(BASE_URL.to_string())
    }

    /// Create a provider pointing at a non-default base URL. Used by tests.
    pub fn with_base_url(base_url: String) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(10))
            .build()
            .unwrap_or_else(|_| Client::new());

        Self { client, base_url }
    }

    async fn fetch_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, F1DataError> {
        let url = format!("{}{}", self.base_url, path);
        debug!("OpenF1 request: {}", url);

        let response = self.client.get(&url).send().await.map_err(|e| {
            if e.is_timeout() {
                F1DataError::Timeout {
                    provider: PROVIDER_ID.to_string(),
                }
            } else {
                F1DataError::ProviderError {
                    provider: PROVIDER_ID.to_string(),
                    message: e.to_string(),
                }
            }
        })?;

        let status = response.status();
        if !status.is_success() {
            return Err(F1DataError::HttpStatus {
                provider: PROVIDER_ID.to_string(),
                status: status.as_u16(),
            });
        }

        let text = response
            .text()
            .await
            .map_err(|e| F1DataError::ProviderError {
                provider: PROVIDER_ID.to_string(),
                message: e.to_string(),
            })?;

        serde_json::from_str(&text).map_err(|e| F1DataError::Parse {
            provider: PROVIDER_ID.to_string(),
            message: e.to_string(),
        })
    }

    /// Fetch the race sessions for one season, ordered by round.
    async fn season_races(&self, season: i32) -> Result<Vec<Session>, F1DataError> {
        let sessions: Vec<SessionDto> = self
            .fetch_json(&format!("/sessions?year={}", season))
            .await?;

        let mut races: Vec<Session> = sessions
            .into_iter()
            .filter(SessionDto::is_race)
            .map(|dto| dto.into_session(season))
            .collect();
        races.sort_by_key(|s| s.round);
        Ok(races)
    }
}

impl Default for OpenF1Provider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl F1DataProvider for OpenF1Provider {
    fn id(&self) -> &'static str {
        PROVIDER_ID
    }

    async fn current_season_races(&self) -> Result<Vec<Session>, F1DataError> {
        self.season_races(Utc::now().year()).await
    }

    async fn next_race(&self) -> Result<Option<Session>, F1DataError> {
        let races = self.current_season_races().await?;
        let now = Utc::now();
        Ok(races
            .into_iter()
            .find(|race| race.starts_at.is_some_and(|start| start >= now)))
    }

    async fn drivers(&self, _season: i32) -> Result<Vec<Driver>, F1DataError> {
        // OpenF1 keys drivers by session, not by season; "latest" is the
        // closest equivalent to the current grid.
        let drivers: Vec<DriverDto> = self.fetch_json("/drivers?session_key=latest").await?;
        Ok(drivers.into_iter().map(|d| d.into_driver()).collect())
    }

    async fn constructors(&self, _season: i32) -> Result<Vec<Constructor>, F1DataError> {
        debug!("OpenF1 has no constructors endpoint, answering with empty list");
        Ok(Vec::new())
    }

    async fn session(&self, season: i32, round: i32) -> Result<Option<Session>, F1DataError> {
        let races = self.season_races(season).await?;
        Ok(races.into_iter().find(|race| race.round == round))
    }
}
