//! Session and circuit models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Kind of an on-track session.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionKind {
    Practice,
    Qualifying,
    Sprint,
    Race,
}

/// A single scheduled or completed session (race weekends are modeled as
/// their race session in the season schedule).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Session {
    /// Source-assigned identifier, stable within one provider.
    pub session_id: String,
    /// Championship year.
    pub season: i32,
    /// Round within the season, 1-based. 0 when the source did not report it.
    pub round: i32,
    pub kind: SessionKind,
    pub race_name: String,
    pub circuit: Option<Circuit>,
    /// Scheduled start, UTC. `None` when the source only lists the event.
    pub starts_at: Option<DateTime<Utc>>,
    /// Whether the session is currently running, as far as the source knows.
    pub is_live: bool,
}

/// A racing circuit.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Circuit {
    pub circuit_id: String,
    pub circuit_name: String,
    pub locality: String,
    pub country: String,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub url: Option<String>,
}
