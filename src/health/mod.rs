//! Upstream endpoint health checks.
//!
//! Probes each provider's cheapest endpoint with a short timeout, producing
//! per-endpoint availability plus an overall status. The overall check is
//! healthy as long as at least one upstream answers — the composite resolver
//! only needs one working source.

use chrono::{DateTime, Utc};
use log::warn;
use reqwest::Client;
use std::time::{Duration, Instant};

const CHECK_TIMEOUT: Duration = Duration::from_secs(5);

/// Availability of a single upstream endpoint.
#[derive(Clone, Debug)]
pub struct EndpointHealth {
    pub name: String,
    pub available: bool,
    pub latency: Duration,
    pub error: Option<String>,
    pub checked_at: DateTime<Utc>,
}

/// Overall upstream availability.
#[derive(Clone, Debug)]
pub struct HealthStatus {
    pub healthy: bool,
    pub message: String,
    pub checked_at: DateTime<Utc>,
}

/// Health checker for the upstream F1 APIs.
pub struct HealthChecker {
    client: Client,
    endpoints: Vec<(String, String)>,
}

impl HealthChecker {
    /// Create a checker for the default Ergast and OpenF1 endpoints.
    pub fn new() -> Self {
        Self::with_endpoints(vec![
            (
                "Ergast".to_string(),
                "https://ergast.com/api/f1/current.json".to_string(),
            ),
            (
                "OpenF1".to_string(),
                "https://api.openf1.org/v1/sessions?limit=1".to_string(),
            ),
        ])
    }

    /// Create a checker for a custom endpoint list.
    pub fn with_endpoints(endpoints: Vec<(String, String)>) -> Self {
        let client = Client::builder()
            .timeout(CHECK_TIMEOUT)
            .build()
            .unwrap_or_else(|_| Client::new());

        Self { client, endpoints }
    }

    /// Probe every endpoint, sequentially.
    pub async fn check_all(&self) -> Vec<EndpointHealth> {
        let mut results = Vec::with_capacity(self.endpoints.len());
        for (name, url) in &self.endpoints {
            results.push(self.check_endpoint(name, url).await);
        }
        results
    }

    /// Probe every endpoint and summarize.
    pub async fn check(&self) -> HealthStatus {
        let results = self.check_all().await;
        let available = results.iter().filter(|h| h.available).count();

        HealthStatus {
            healthy: available > 0,
            message: format!("{}/{} API endpoints available", available, results.len()),
            checked_at: Utc::now(),
        }
    }

    async fn check_endpoint(&self, name: &str, url: &str) -> EndpointHealth {
        let started = Instant::now();

        match self.client.get(url).send().await {
            Ok(response) => {
                let status = response.status();
                EndpointHealth {
                    name: name.to_string(),
                    available: status.is_success(),
                    latency: started.elapsed(),
                    error: (!status.is_success()).then(|| format!("HTTP {}", status)),
                    checked_at: Utc::now(),
                }
            }
            Err(e) => {
                warn!("Health check failed for {}: {}", name, e);
                EndpointHealth {
                    name: name.to_string(),
                    available: false,
                    latency: started.elapsed(),
                    error: Some(e.to_string()),
                    checked_at: Utc::now(),
                }
            }
        }
    }
}

impl Default for HealthChecker {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_no_endpoints_is_unhealthy() {
        let checker = HealthChecker::with_endpoints(Vec::new());
        let status = checker.check().await;

        assert!(!status.healthy);
        assert_eq!(status.message, "0/0 API endpoints available");
    }

    #[tokio::test]
    async fn test_unreachable_endpoint_reports_unavailable() {
        let checker = HealthChecker::with_endpoints(vec![(
            "Local".to_string(),
            "http://127.0.0.1:1/health".to_string(),
        )]);

        let results = checker.check_all().await;
        assert_eq!(results.len(), 1);
        assert!(!results[0].available);
        assert!(results[0].error.is_some());

        let status = checker.check().await;
        assert!(!status.healthy);
        assert_eq!(status.message, "0/1 API endpoints available");
    }
}
