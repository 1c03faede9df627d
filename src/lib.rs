//! Pitwall — multi-source Formula 1 data fetching.
//!
//! This crate answers F1 domain queries (season schedule, next race, driver
//! and constructor rosters, single sessions) by combining multiple upstream
//! REST APIs with fallback-on-failure semantics and per-query-type caching.
//!
//! # Architecture
//!
//! ```text
//!                  +------------------+
//!     caller  -->  |   CachedF1Data   |  (per-query-type TTL memoization)
//!                  +------------------+
//!                           |  on miss
//!                           v
//!                  +------------------+
//!                  | ProviderRegistry |  (ordered fallback chain)
//!                  +------------------+
//!                    |              |
//!                    v              v
//!            +---------------+  +----------------+
//!            | ErgastProvider|  | OpenF1Provider |  (independent sources)
//!            +---------------+  +----------------+
//! ```
//!
//! The registry tries providers sequentially in priority order and returns
//! the first meaningful (non-empty, non-`None`) answer; a provider that
//! fails or has nothing is logged and skipped. When every provider is
//! exhausted the caller still receives a well-typed empty value, never an
//! error. The cache decorator memoizes whatever comes back — including
//! negative answers — under deterministic keys with per-query TTLs, and
//! collapses concurrent misses into a single upstream fetch.
//!
//! Both the registry and the cache implement [`F1DataService`], so callers
//! are agnostic to how their answer was produced.
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//! use pitwall::{
//!     CachedF1Data, ErgastProvider, F1DataProvider, F1DataService, OpenF1Provider,
//!     ProviderRegistry,
//! };
//!
//! # async fn run() {
//! let providers: Vec<Arc<dyn F1DataProvider>> = vec![
//!     Arc::new(ErgastProvider::new()),
//!     Arc::new(OpenF1Provider::new()),
//! ];
//! let registry = ProviderRegistry::new(providers);
//! let service = CachedF1Data::new(Arc::new(registry));
//!
//! let schedule = service.current_season_races().await;
//! let next = service.next_race().await;
//! # }
//! ```

pub mod cache;
pub mod errors;
pub mod health;
pub mod models;
pub mod provider;
pub mod registry;
pub mod service;

pub use cache::{CacheTtls, CachedF1Data};
pub use errors::F1DataError;
pub use health::{EndpointHealth, HealthChecker, HealthStatus};
pub use models::{Circuit, Constructor, Driver, Session, SessionKind};
pub use provider::{ErgastProvider, F1DataProvider, OpenF1Provider};
pub use registry::{AttemptOutcome, FetchDiagnostics, ProviderAttempt, ProviderRegistry};
pub use service::F1DataService;
