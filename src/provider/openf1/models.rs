//! Response structures for the OpenF1 API.
//!
//! OpenF1 returns flat JSON arrays with snake_case fields. Timestamps come
//! back either with an offset ("2024-03-02T15:00:00+00:00") or as naive UTC,
//! so they are carried as strings and parsed leniently.

use chrono::{DateTime, NaiveDateTime, TimeZone, Utc};
use serde::Deserialize;

use crate::models::{Driver, Session, SessionKind};

#[derive(Debug, Deserialize)]
pub(super) struct SessionDto {
    pub session_key: Option<i64>,
    pub session_name: Option<String>,
    pub session_type: Option<String>,
    pub date_start: Option<String>,
    pub date_end: Option<String>,
    #[serde(default)]
    pub round_number: Option<i32>,
}

#[derive(Debug, Deserialize)]
pub(super) struct DriverDto {
    pub driver_number: Option<i32>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub name_acronym: Option<String>,
    pub team_name: Option<String>,
}

/// Parse an OpenF1 timestamp, with or without an explicit offset.
pub(super) fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.with_timezone(&Utc))
        .ok()
        .or_else(|| {
            NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S")
                .ok()
                .map(|naive| Utc.from_utc_datetime(&naive))
        })
}

impl SessionDto {
    pub(super) fn is_race(&self) -> bool {
        self.session_type
            .as_deref()
            .is_some_and(|t| t.eq_ignore_ascii_case("race"))
    }

    pub(super) fn into_session(self, season: i32) -> Session {
        let starts_at = self.date_start.as_deref().and_then(parse_timestamp);
        let ends_at = self.date_end.as_deref().and_then(parse_timestamp);

        Session {
            session_id: self.session_key.map(|k| k.to_string()).unwrap_or_default(),
            season,
            round: self.round_number.unwrap_or(0),
            kind: SessionKind::Race,
            race_name: self.session_name.unwrap_or_else(|| "Unknown".to_string()),
            circuit: None,
            starts_at,
            is_live: ends_at.is_none_or(|end| end > Utc::now()),
        }
    }
}

impl DriverDto {
    pub(super) fn into_driver(self) -> Driver {
        Driver {
            driver_id: self
                .driver_number
                .map(|n| n.to_string())
                .unwrap_or_else(|| "0".to_string()),
            code: self.name_acronym.unwrap_or_default(),
            permanent_number: self
                .driver_number
                .map(|n| n.to_string())
                .unwrap_or_default(),
            given_name: self.first_name.unwrap_or_default(),
            family_name: self.last_name.unwrap_or_default(),
            date_of_birth: None,
            nationality: String::new(),
            team_id: self.team_name.unwrap_or_default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_sessions() {
        let json = r#"[
            {
                "session_key": 9472,
                "session_name": "Qualifying",
                "session_type": "Qualifying",
                "date_start": "2024-03-01T16:00:00+00:00",
                "date_end": "2024-03-01T17:00:00+00:00"
            },
            {
                "session_key": 9480,
                "session_name": "Race",
                "session_type": "Race",
                "date_start": "2024-03-02T15:00:00+00:00",
                "date_end": "2024-03-02T17:00:00+00:00",
                "round_number": 1
            }
        ]"#;

        let sessions: Vec<SessionDto> = serde_json::from_str(json).unwrap();
        assert_eq!(sessions.len(), 2);
        assert!(!sessions[0].is_race());
        assert!(sessions[1].is_race());

        let race = sessions
            .into_iter()
            .find(|s| s.is_race())
            .unwrap()
            .into_session(2024);
        assert_eq!(race.session_id, "9480");
        assert_eq!(race.round, 1);
        assert_eq!(race.race_name, "Race");
        assert!(!race.is_live);
        assert_eq!(
            race.starts_at.unwrap().to_rfc3339(),
            "2024-03-02T15:00:00+00:00"
        );
    }

    #[test]
    fn test_session_without_end_is_live() {
        let dto = SessionDto {
            session_key: Some(1),
            session_name: Some("Race".to_string()),
            session_type: Some("Race".to_string()),
            date_start: None,
            date_end: None,
            round_number: None,
        };
        let session = dto.into_session(2024);
        assert!(session.is_live);
        assert_eq!(session.round, 0);
    }

    #[test]
    fn test_parse_timestamp_without_offset() {
        let parsed = parse_timestamp("2024-03-02T15:00:00").unwrap();
        assert_eq!(parsed.to_rfc3339(), "2024-03-02T15:00:00+00:00");
        assert!(parse_timestamp("not a timestamp").is_none());
    }

    #[test]
    fn test_parse_drivers() {
        let json = r#"[{
            "driver_number": 1,
            "first_name": "Max",
            "last_name": "Verstappen",
            "name_acronym": "VER",
            "team_name": "Red Bull Racing",
            "team_colour": "3671C6"
        }]"#;

        let drivers: Vec<DriverDto> = serde_json::from_str(json).unwrap();
        let driver = drivers.into_iter().next().unwrap().into_driver();

        assert_eq!(driver.driver_id, "1");
        assert_eq!(driver.code, "VER");
        assert_eq!(driver.team_id, "Red Bull Racing");
        assert_eq!(driver.full_name(), "Max Verstappen");
    }
}
