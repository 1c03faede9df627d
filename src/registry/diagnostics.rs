//! Per-attempt failure tracking for provider resolution.

/// Outcome of one provider attempt during a resolution.
#[derive(Clone, Debug)]
pub enum AttemptOutcome {
    /// The provider answered with a meaningful result.
    Success,
    /// The provider answered, but with no data (empty list or `None`).
    Empty,
    /// The provider failed (transport, timeout, parse).
    Error(String),
}

/// Record of a single provider attempt.
#[derive(Clone, Debug)]
pub struct ProviderAttempt {
    pub provider_id: &'static str,
    pub outcome: AttemptOutcome,
}

/// Aggregated record of one resolution: every provider tried, in order,
/// with what happened. Never persisted; exists for logging and debugging
/// provider selection.
#[derive(Clone, Debug, Default)]
pub struct FetchDiagnostics {
    pub attempts: Vec<ProviderAttempt>,
}

impl FetchDiagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_success(&mut self, provider_id: &'static str) {
        self.attempts.push(ProviderAttempt {
            provider_id,
            outcome: AttemptOutcome::Success,
        });
    }

    pub fn record_empty(&mut self, provider_id: &'static str) {
        self.attempts.push(ProviderAttempt {
            provider_id,
            outcome: AttemptOutcome::Empty,
        });
    }

    pub fn record_error(&mut self, provider_id: &'static str, error: String) {
        self.attempts.push(ProviderAttempt {
            provider_id,
            outcome: AttemptOutcome::Error(error),
        });
    }

    /// Check if any provider produced a meaningful result.
    pub fn has_success(&self) -> bool {
        self.attempts
            .iter()
            .any(|a| matches!(a.outcome, AttemptOutcome::Success))
    }

    /// Errors from failed attempts, in attempt order.
    pub fn errors(&self) -> Vec<(&'static str, &str)> {
        self.attempts
            .iter()
            .filter_map(|a| match &a.outcome {
                AttemptOutcome::Error(e) => Some((a.provider_id, e.as_str())),
                _ => None,
            })
            .collect()
    }

    /// Summary for logging/debugging.
    pub fn summary(&self) -> String {
        self.attempts
            .iter()
            .map(|a| match &a.outcome {
                AttemptOutcome::Success => format!("{}: SUCCESS", a.provider_id),
                AttemptOutcome::Empty => format!("{}: EMPTY", a.provider_id),
                AttemptOutcome::Error(e) => format!("{}: ERROR ({})", a.provider_id, e),
            })
            .collect::<Vec<_>>()
            .join(" -> ")
    }
}
