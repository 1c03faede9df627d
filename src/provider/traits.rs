//! F1 data provider trait definition.
//!
//! Implement [`F1DataProvider`] to add support for a new upstream data
//! source. The composite registry uses the provider's priority to order it
//! within the fallback chain.

use async_trait::async_trait;

use crate::errors::F1DataError;
use crate::models::{Constructor, Driver, Session};

/// Trait for F1 data sources.
///
/// "No data" is never an error: a provider that has nothing for a query
/// answers with an empty `Vec` or `None`, and the registry moves on to the
/// next source. `Err` is reserved for transport, protocol, and parse
/// failures.
#[async_trait]
pub trait F1DataProvider: Send + Sync {
    /// Unique identifier for this provider.
    ///
    /// Should be a constant string like "ERGAST" or "OPENF1". Used for
    /// logging and failure diagnostics.
    fn id(&self) -> &'static str;

    /// Provider priority for ordering.
    ///
    /// Lower values = higher priority. Default is 10. The registry sorts
    /// providers by this value once, at construction.
    fn priority(&self) -> u8 {
        10
    }

    /// Fetch the race schedule for the current season, ordered by round.
    async fn current_season_races(&self) -> Result<Vec<Session>, F1DataError>;

    /// Fetch the next upcoming race, if the season has one left.
    async fn next_race(&self) -> Result<Option<Session>, F1DataError>;

    /// Fetch the drivers competing in the given season.
    async fn drivers(&self, season: i32) -> Result<Vec<Driver>, F1DataError>;

    /// Fetch the constructors competing in the given season.
    async fn constructors(&self, season: i32) -> Result<Vec<Constructor>, F1DataError>;

    /// Fetch one race session by season and round.
    async fn session(&self, season: i32, round: i32) -> Result<Option<Session>, F1DataError>;
}
