//! Upstream data providers.
//!
//! Each submodule implements [`F1DataProvider`] for one external source.
//! Providers are independent: they share no state and each maps its own wire
//! format into the domain models.

pub mod ergast;
pub mod openf1;
mod traits;

pub use ergast::ErgastProvider;
pub use openf1::OpenF1Provider;
pub use traits::F1DataProvider;
