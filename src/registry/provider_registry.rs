//! Composite resolver over an ordered provider chain.
//!
//! The registry tries providers sequentially, in priority order, and returns
//! the first meaningful answer. Failures and empty answers are recorded and
//! the next provider is tried; results are never merged across providers.
//! When the chain is exhausted the caller still gets a well-typed value —
//! the query's empty sentinel — never an error.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use futures::future::BoxFuture;
use futures::FutureExt;
use log::{debug, info, warn};
use tokio::time::timeout;

use crate::errors::F1DataError;
use crate::models::{Constructor, Driver, Session};
use crate::provider::F1DataProvider;
use crate::service::F1DataService;

use super::diagnostics::FetchDiagnostics;
use super::meaningful::Meaningful;

const DEFAULT_PROVIDER_TIMEOUT: Duration = Duration::from_secs(5);

/// Composite resolver over multiple F1 data providers.
///
/// Provider order encodes trust: the chain is sorted by
/// [`priority()`](F1DataProvider::priority) once at construction (stable, so
/// equal priorities keep their given order) and never reordered afterwards.
/// Resolution is intentionally sequential — no speculative parallel calls.
pub struct ProviderRegistry {
    providers: Vec<Arc<dyn F1DataProvider>>,
    provider_timeout: Duration,
}

impl ProviderRegistry {
    /// Create a registry with the default per-provider timeout of 5 seconds.
    pub fn new(providers: Vec<Arc<dyn F1DataProvider>>) -> Self {
        Self::with_timeout(providers, DEFAULT_PROVIDER_TIMEOUT)
    }

    /// Create a registry with a custom per-provider timeout.
    ///
    /// A provider that exceeds the timeout is treated like one that failed:
    /// logged, recorded in the diagnostics, and skipped.
    pub fn with_timeout(mut providers: Vec<Arc<dyn F1DataProvider>>, timeout: Duration) -> Self {
        if providers.is_empty() {
            warn!("ProviderRegistry constructed with no providers, every query will come back empty");
        }
        providers.sort_by_key(|p| p.priority());

        Self {
            providers,
            provider_timeout: timeout,
        }
    }

    /// The providers in resolution order.
    pub fn providers(&self) -> &[Arc<dyn F1DataProvider>] {
        &self.providers
    }

    /// Race schedule for the current season, with per-attempt diagnostics.
    pub async fn current_season_races_with_diagnostics(
        &self,
    ) -> (Vec<Session>, FetchDiagnostics) {
        self.try_providers("current_season_races", |p| {
            async move { p.current_season_races().await }.boxed()
        })
        .await
    }

    /// Next upcoming race, with per-attempt diagnostics.
    pub async fn next_race_with_diagnostics(&self) -> (Option<Session>, FetchDiagnostics) {
        self.try_providers("next_race", |p| async move { p.next_race().await }.boxed())
            .await
    }

    /// Drivers for a season, with per-attempt diagnostics.
    pub async fn drivers_with_diagnostics(&self, season: i32) -> (Vec<Driver>, FetchDiagnostics) {
        self.try_providers("drivers", move |p| {
            async move { p.drivers(season).await }.boxed()
        })
        .await
    }

    /// Constructors for a season, with per-attempt diagnostics.
    pub async fn constructors_with_diagnostics(
        &self,
        season: i32,
    ) -> (Vec<Constructor>, FetchDiagnostics) {
        self.try_providers("constructors", move |p| {
            async move { p.constructors(season).await }.boxed()
        })
        .await
    }

    /// One race session by season and round, with per-attempt diagnostics.
    pub async fn session_with_diagnostics(
        &self,
        season: i32,
        round: i32,
    ) -> (Option<Session>, FetchDiagnostics) {
        self.try_providers("session", move |p| {
            async move { p.session(season, round).await }.boxed()
        })
        .await
    }

    /// Try each provider in order until one produces a meaningful result.
    ///
    /// Returns the first meaningful value, or `T::empty()` when the chain is
    /// exhausted, together with the record of every attempt.
    async fn try_providers<T, F>(&self, operation: &str, fetch: F) -> (T, FetchDiagnostics)
    where
        T: Meaningful,
        F: Fn(Arc<dyn F1DataProvider>) -> BoxFuture<'static, Result<T, F1DataError>>,
    {
        let mut diagnostics = FetchDiagnostics::new();

        for provider in &self.providers {
            let provider_id = provider.id();
            debug!("Trying provider '{}' for {}", provider_id, operation);

            match timeout(self.provider_timeout, fetch(Arc::clone(provider))).await {
                Ok(Ok(value)) if value.is_meaningful() => {
                    info!(
                        "Successfully fetched {} from provider '{}'",
                        operation, provider_id
                    );
                    diagnostics.record_success(provider_id);
                    return (value, diagnostics);
                }
                Ok(Ok(_)) => {
                    debug!(
                        "Provider '{}' returned no data for {}, trying next",
                        provider_id, operation
                    );
                    diagnostics.record_empty(provider_id);
                }
                Ok(Err(e)) => {
                    warn!(
                        "Provider '{}' failed for {}: {}. Trying next.",
                        provider_id, operation, e
                    );
                    diagnostics.record_error(provider_id, e.to_string());
                }
                Err(_) => {
                    let e = F1DataError::Timeout {
                        provider: provider_id.to_string(),
                    };
                    warn!(
                        "Provider '{}' exceeded {:?} for {}. Trying next.",
                        provider_id, self.provider_timeout, operation
                    );
                    diagnostics.record_error(provider_id, e.to_string());
                }
            }
        }

        warn!(
            "All providers exhausted for {}. Attempts: {}",
            operation,
            diagnostics.summary()
        );
        (T::empty(), diagnostics)
    }
}

#[async_trait]
impl F1DataService for ProviderRegistry {
    async fn current_season_races(&self) -> Vec<Session> {
        self.current_season_races_with_diagnostics().await.0
    }

    async fn next_race(&self) -> Option<Session> {
        self.next_race_with_diagnostics().await.0
    }

    async fn drivers(&self, season: i32) -> Vec<Driver> {
        self.drivers_with_diagnostics(season).await.0
    }

    async fn constructors(&self, season: i32) -> Vec<Constructor> {
        self.constructors_with_diagnostics(season).await.0
    }

    async fn session(&self, season: i32, round: i32) -> Option<Session> {
        self.session_with_diagnostics(season, round).await.0
    }
}
