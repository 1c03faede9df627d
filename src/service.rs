//! Caller-facing query surface.
//!
//! [`F1DataService`] is the contract the UI layer consumes. Both the
//! composite registry and the caching decorator implement it, so callers are
//! agnostic to whether caching or fallback is in play.

use async_trait::async_trait;
use std::sync::Arc;

use crate::models::{Constructor, Driver, Session};

/// Infallible F1 data query surface.
///
/// Implementations absorb upstream failures: every method returns a
/// well-typed value under all conditions, with total failure surfacing as an
/// empty collection or `None` rather than an error.
#[async_trait]
pub trait F1DataService: Send + Sync {
    /// Race schedule for the current season, ordered by round.
    async fn current_season_races(&self) -> Vec<Session>;

    /// The next upcoming race, if any.
    async fn next_race(&self) -> Option<Session>;

    /// Drivers competing in the given season.
    async fn drivers(&self, season: i32) -> Vec<Driver>;

    /// Constructors competing in the given season.
    async fn constructors(&self, season: i32) -> Vec<Constructor>;

    /// One race session by season and round.
    async fn session(&self, season: i32, round: i32) -> Option<Session>;
}

#[async_trait]
impl<S: F1DataService + ?Sized> F1DataService for Arc<S> {
    async fn current_season_races(&self) -> Vec<Session> {
        (**self).current_season_races().await
    }

    async fn next_race(&self) -> Option<Session> {
        (**self).next_race().await
    }

    async fn drivers(&self, season: i32) -> Vec<Driver> {
        (**self).drivers(season).await
    }

    async fn constructors(&self, season: i32) -> Vec<Constructor> {
        (**self).constructors(season).await
    }

    async fn session(&self, season: i32, round: i32) -> Option<Session> {
        (**self).session(season, round).await
    }
}
