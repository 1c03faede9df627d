//! Ergast F1 data provider implementation.
//!
//! Ergast (<https://ergast.com/api/f1>) carries the full historical record:
//! season schedules, driver and constructor rosters back to 1950. It is the
//! richer of the two sources and is ordered first in the default chain.
//!
//! Ergast has no "next race" or single-session endpoint; both are derived
//! from the season schedule.

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

use models::{ConstructorListResponse, DriverListResponse, RaceScheduleResponse};

const BASE_URL: &str = "https://ergast.com/api/f1";
const PROVIDER_ID: &str = "ERGAST";

/// Ergast F1 data provider.
pub struct ErgastProvider {
    client: Client,
    base_url: String,
}

impl ErgastProvider {
    pub fn new() -> Self {
        Self::with_base_url(BASE_URL.to_string())
    }

    /// Create a provider pointing at a non-default base URL. Used by tests
    /// and by deployments that front Ergast with a mirror.
    pub fn with_base_url(base_url: String) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(10))
            .build()
            .unwrap_or_else(|_| Client::new());

        Self { client, base_url }
    }

    async fn fetch_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, F1DataError> {
        let url = format!("{}{}", self.base_url, path);
        debug!("Ergast request: {}", url);

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

    /// Fetch the race schedule for one season, ordered by round.
    async fn season_races(&self, season: i32) -> Result<Vec<Session>, F1DataError> {
        let response: RaceScheduleResponse = self.fetch_json(&format!("/{}.json", season)).await?;

        let races = match response.mr_data.race_table {
            Some(table) => table.races,
            None => return Ok(Vec::new()),
        };

        let mut sessions: Vec<Session> = races
            .into_iter()
            .map(|race| race.into_session(season))
            .collect();
        sessions.sort_by_key(|s| s.round);
        Ok(sessions)
    }
}

impl Default for ErgastProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl F1DataProvider for ErgastProvider {
    fn id(&self) -> &'static str {
        PROVIDER_ID
    }

    fn priority(&self) -> u8 {
        5
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

    async fn drivers(&self, season: i32) -> Result<Vec<Driver>, F1DataError> {
        let response: DriverListResponse =
            self.fetch_json(&format!("/{}/drivers.json", season)).await?;

        let drivers = match response.mr_data.driver_table {
            Some(table) => table.drivers,
            None => return Ok(Vec::new()),
        };

        Ok(drivers.into_iter().map(|d| d.into_driver()).collect())
    }

    async fn constructors(&self, season: i32) -> Result<Vec<Constructor>, F1DataError> {
        let response: ConstructorListResponse = self
            .fetch_json(&format!("/{}/constructors.json", season))
            .await?;

        let constructors = match response.mr_data.constructor_table {
            Some(table) => table.constructors,
            None => return Ok(Vec::new()),
        };

        Ok(constructors
            .into_iter()
            .map(|c| c.into_constructor())
            .collect())
    }

    async fn session(&self, season: i32, round: i32) -> Result<Option<Session>, F1DataError> {
        let races = self.season_races(season).await?;
        Ok(races.into_iter().find(|race| race.round == round))
    }
}
