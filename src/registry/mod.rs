//! Composite resolution over an ordered provider chain.

mod diagnostics;
mod meaningful;
mod provider_registry;

pub use diagnostics::{AttemptOutcome, FetchDiagnostics, ProviderAttempt};
pub use meaningful::Meaningful;
pub use provider_registry::ProviderRegistry;
