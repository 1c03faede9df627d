//! TTL-based caching for the F1 data surface.

mod cached_service;
pub mod keys;

pub use cached_service::{CacheTtls, CachedF1Data};
