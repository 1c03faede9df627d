//! Caching decorator for the F1 data surface.
//!
//! [`CachedF1Data`] wraps any [`F1DataService`] and memoizes each query type
//! in its own moka cache, so refresh frequency is decoupled from how often
//! callers ask. Entries age out purely by TTL at read time; there is no
//! invalidation API. Negative answers (`None`, empty lists) are cached for
//! the full TTL too — when no upcoming race exists, re-asking the upstream
//! every time would be wasted traffic.
//!
//! Concurrent misses for the same key collapse into one upstream fetch
//! (moka's `entry` API), so a cold cache does not produce a thundering herd
//! of provider calls.

use async_trait::async_trait;
use chrono::{Datelike, Utc};
use log::{debug, info};
use moka::future::Cache;
use std::sync::Arc;
use std::time::Duration;

use crate::models::{Constructor, Driver, Session};
use crate::service::F1DataService;

use super::keys;

/// Per-query-type time-to-live values.
///
/// Defaults match how quickly each data set actually changes: rosters are
/// stable for a day, the schedule for hours, a single session half an hour.
#[derive(Clone, Copy, Debug)]
pub struct CacheTtls {
    pub races: Duration,
    pub next_race: Duration,
    pub drivers: Duration,
    pub constructors: Duration,
    pub session: Duration,
}

impl Default for CacheTtls {
    fn default() -> Self {
        Self {
            races: Duration::from_secs(6 * 60 * 60),
            next_race: Duration::from_secs(60 * 60),
            drivers: Duration::from_secs(24 * 60 * 60),
            constructors: Duration::from_secs(24 * 60 * 60),
            session: Duration::from_secs(30 * 60),
        }
    }
}

/// Caching decorator over an [`F1DataService`].
///
/// Substitutable for the wrapped service: it implements the same trait, so
/// callers cannot tell whether caching is in play.
pub struct CachedF1Data {
    inner: Arc<dyn F1DataService>,
    races: Cache<String, Vec<Session>>,
    next_race: Cache<String, Option<Session>>,
    drivers: Cache<String, Vec<Driver>>,
    constructors: Cache<String, Vec<Constructor>>,
    sessions: Cache<String, Option<Session>>,
}

impl CachedF1Data {
    /// Wrap a service with the default TTLs.
    pub fn new(inner: Arc<dyn F1DataService>) -> Self {
        Self::with_ttls(inner, CacheTtls::default())
    }

    /// Wrap a service with custom TTLs. Tests use this with short durations.
    pub fn with_ttls(inner: Arc<dyn F1DataService>, ttls: CacheTtls) -> Self {
        Self {
            inner,
            races: Cache::builder()
                .time_to_live(ttls.races)
                .max_capacity(4)
                .build(),
            next_race: Cache::builder()
                .time_to_live(ttls.next_race)
                .max_capacity(1)
                .build(),
            drivers: Cache::builder()
                .time_to_live(ttls.drivers)
                .max_capacity(100)
                .build(),
            constructors: Cache::builder()
                .time_to_live(ttls.constructors)
                .max_capacity(100)
                .build(),
            sessions: Cache::builder()
                .time_to_live(ttls.session)
                .max_capacity(500)
                .build(),
        }
    }
}

/// Resolve one query through its cache, fetching on miss.
///
/// `moka`'s entry API guarantees the init future runs at most once per key
/// across concurrent callers, and that readers never observe a half-written
/// entry.
async fn get_or_fetch<V, F>(cache: &Cache<String, V>, key: String, fetch: F) -> V
where
    V: Clone + Send + Sync + 'static,
    F: std::future::Future<Output = V>,
{
    let log_key = key.clone();
    let entry = cache
        .entry(key)
        .or_insert_with(async move {
            info!("Cache miss for {}, fetching upstream", log_key);
            fetch.await
        })
        .await;

    if !entry.is_fresh() {
        debug!("Cache hit for {}", entry.key());
    }
    entry.into_value()
}

#[async_trait]
impl F1DataService for CachedF1Data {
    async fn current_season_races(&self) -> Vec<Session> {
        let key = keys::races_key(Utc::now().year());
        let inner = Arc::clone(&self.inner);
        get_or_fetch(&self.races, key, async move {
            inner.current_season_races().await
        })
        .await
    }

    async fn next_race(&self) -> Option<Session> {
        let inner = Arc::clone(&self.inner);
        get_or_fetch(&self.next_race, keys::next_race_key(), async move {
            inner.next_race().await
        })
        .await
    }

    async fn drivers(&self, season: i32) -> Vec<Driver> {
        let inner = Arc::clone(&self.inner);
        get_or_fetch(&self.drivers, keys::drivers_key(season), async move {
            inner.drivers(season).await
        })
        .await
    }

    async fn constructors(&self, season: i32) -> Vec<Constructor> {
        let inner = Arc::clone(&self.inner);
        get_or_fetch(
            &self.constructors,
            keys::constructors_key(season),
            async move { inner.constructors(season).await },
        )
        .await
    }

    async fn session(&self, season: i32, round: i32) -> Option<Session> {
        let inner = Arc::clone(&self.inner);
        get_or_fetch(
            &self.sessions,
            keys::session_key(season, round),
            async move { inner.session(season, round).await },
        )
        .await
    }
}
