//! Response structures for the Ergast API.
//!
//! Ergast wraps every payload in an `MRData` envelope and encodes numbers as
//! strings ("round": "1", "lat": "26.0325"). Conversions into the domain
//! models live here so the provider itself only deals in [`Session`],
//! [`Driver`], and [`Constructor`].

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, TimeZone, Utc};
use serde::Deserialize;

use crate::models::{Circuit, Constructor, Driver, Session, SessionKind};

/// Envelope for `/{season}.json`.
#[derive(Debug, Deserialize)]
pub(super) struct RaceScheduleResponse {
    #[serde(rename = "MRData")]
    pub mr_data: RaceScheduleData,
}

#[derive(Debug, Deserialize)]
pub(super) struct RaceScheduleData {
    #[serde(rename = "RaceTable")]
    pub race_table: Option<RaceTable>,
}

#[derive(Debug, Deserialize)]
pub(super) struct RaceTable {
    #[serde(rename = "Races", default)]
    pub races: Vec<RaceDto>,
}

#[derive(Debug, Deserialize)]
pub(super) struct RaceDto {
    pub round: String,
    #[serde(rename = "raceName")]
    pub race_name: String,
    #[serde(rename = "Circuit")]
    pub circuit: Option<CircuitDto>,
    pub date: Option<String>,
    pub time: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(super) struct CircuitDto {
    #[serde(rename = "circuitId")]
    pub circuit_id: String,
    #[serde(rename = "circuitName")]
    pub circuit_name: String,
    pub url: Option<String>,
    #[serde(rename = "Location")]
    pub location: Option<LocationDto>,
}

#[derive(Debug, Deserialize, Default)]
pub(super) struct LocationDto {
    pub lat: Option<String>,
    #[serde(rename = "long")]
    pub long: Option<String>,
    #[serde(default)]
    pub locality: String,
    #[serde(default)]
    pub country: String,
}

/// Envelope for `/{season}/drivers.json`.
#[derive(Debug, Deserialize)]
pub(super) struct DriverListResponse {
    #[serde(rename = "MRData")]
    pub mr_data: DriverListData,
}

#[derive(Debug, Deserialize)]
pub(super) struct DriverListData {
    #[serde(rename = "DriverTable")]
    pub driver_table: Option<DriverTable>,
}

#[derive(Debug, Deserialize)]
pub(super) struct DriverTable {
    #[serde(rename = "Drivers", default)]
    pub drivers: Vec<DriverDto>,
}

#[derive(Debug, Deserialize)]
pub(super) struct DriverDto {
    #[serde(rename = "driverId")]
    pub driver_id: String,
    pub code: Option<String>,
    #[serde(rename = "permanentNumber")]
    pub permanent_number: Option<String>,
    #[serde(rename = "givenName")]
    pub given_name: String,
    #[serde(rename = "familyName")]
    pub family_name: String,
    #[serde(rename = "dateOfBirth")]
    pub date_of_birth: Option<String>,
    #[serde(default)]
    pub nationality: String,
}

/// Envelope for `/{season}/constructors.json`.
#[derive(Debug, Deserialize)]
pub(super) struct ConstructorListResponse {
    #[serde(rename = "MRData")]
    pub mr_data: ConstructorListData,
}

#[derive(Debug, Deserialize)]
pub(super) struct ConstructorListData {
    #[serde(rename = "ConstructorTable")]
    pub constructor_table: Option<ConstructorTable>,
}

#[derive(Debug, Deserialize)]
pub(super) struct ConstructorTable {
    #[serde(rename = "Constructors", default)]
    pub constructors: Vec<ConstructorDto>,
}

#[derive(Debug, Deserialize)]
pub(super) struct ConstructorDto {
    #[serde(rename = "constructorId")]
    pub constructor_id: String,
    pub name: String,
    #[serde(default)]
    pub nationality: String,
    #[serde(default)]
    pub url: String,
}

/// Combine Ergast's separate date ("2024-03-02") and time ("15:00:00Z")
/// fields into a single UTC timestamp. A missing or unparsable time yields
/// midnight UTC; a missing date yields `None`.
pub(super) fn parse_start(date: Option<&str>, time: Option<&str>) -> Option<DateTime<Utc>> {
    let date = NaiveDate::parse_from_str(date?, "%Y-%m-%d").ok()?;
    let time = time
        .and_then(|t| NaiveTime::parse_from_str(t.trim_end_matches('Z'), "%H:%M:%S").ok())
        .unwrap_or(NaiveTime::MIN);
    Utc.from_utc_datetime(&NaiveDateTime::new(date, time)).into()
}

impl RaceDto {
    pub(super) fn into_session(self, season: i32) -> Session {
        let round = self.round.parse().unwrap_or(0);
        Session {
            session_id: format!("{}-{}", season, round),
            season,
            round,
            kind: SessionKind::Race,
            race_name: self.race_name,
            circuit: self.circuit.map(CircuitDto::into_circuit),
            starts_at: parse_start(self.date.as_deref(), self.time.as_deref()),
            is_live: false,
        }
    }
}

impl CircuitDto {
    fn into_circuit(self) -> Circuit {
        let location = self.location.unwrap_or_default();
        Circuit {
            circuit_id: self.circuit_id,
            circuit_name: self.circuit_name,
            locality: location.locality,
            country: location.country,
            latitude: location.lat.and_then(|v| v.parse().ok()),
            longitude: location.long.and_then(|v| v.parse().ok()),
            url: self.url,
        }
    }
}

impl DriverDto {
    pub(super) fn into_driver(self) -> Driver {
        Driver {
            driver_id: self.driver_id,
            code: self.code.unwrap_or_default(),
            permanent_number: self.permanent_number.unwrap_or_default(),
            given_name: self.given_name,
            family_name: self.family_name,
            date_of_birth: self
                .date_of_birth
                .and_then(|d| NaiveDate::parse_from_str(&d, "%Y-%m-%d").ok()),
            nationality: self.nationality,
            team_id: String::new(),
        }
    }
}

impl ConstructorDto {
    pub(super) fn into_constructor(self) -> Constructor {
        Constructor {
            constructor_id: self.constructor_id,
            name: self.name,
            nationality: self.nationality,
            url: self.url,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Datelike;

    const SCHEDULE_JSON: &str = r#"{
        "MRData": {
            "series": "f1",
            "RaceTable": {
                "season": "2024",
                "Races": [{
                    "season": "2024",
                    "round": "1",
                    "url": "https://en.wikipedia.org/wiki/2024_Bahrain_Grand_Prix",
                    "raceName": "Bahrain Grand Prix",
                    "Circuit": {
                        "circuitId": "bahrain",
                        "url": "http://en.wikipedia.org/wiki/Bahrain_International_Circuit",
                        "circuitName": "Bahrain International Circuit",
                        "Location": {
                            "lat": "26.0325",
                            "long": "50.5106",
                            "locality": "Sakhir",
                            "country": "Bahrain"
                        }
                    },
                    "date": "2024-03-02",
                    "time": "15:00:00Z"
                }]
            }
        }
    }"#;

    #[test]
    fn test_parse_race_schedule() {
        let response: RaceScheduleResponse = serde_json::from_str(SCHEDULE_JSON).unwrap();
        let table = response.mr_data.race_table.unwrap();
        assert_eq!(table.races.len(), 1);

        let session = table.races.into_iter().next().unwrap().into_session(2024);
        assert_eq!(session.session_id, "2024-1");
        assert_eq!(session.round, 1);
        assert_eq!(session.race_name, "Bahrain Grand Prix");
        assert_eq!(session.kind, SessionKind::Race);

        let circuit = session.circuit.unwrap();
        assert_eq!(circuit.circuit_id, "bahrain");
        assert_eq!(circuit.locality, "Sakhir");
        assert_eq!(circuit.latitude, Some(26.0325));

        let starts_at = session.starts_at.unwrap();
        assert_eq!(starts_at.to_rfc3339(), "2024-03-02T15:00:00+00:00");
    }

    #[test]
    fn test_parse_drivers() {
        let json = r#"{
            "MRData": {
                "DriverTable": {
                    "Drivers": [{
                        "driverId": "max_verstappen",
                        "permanentNumber": "33",
                        "code": "VER",
                        "url": "http://en.wikipedia.org/wiki/Max_Verstappen",
                        "givenName": "Max",
                        "familyName": "Verstappen",
                        "dateOfBirth": "1997-09-30",
                        "nationality": "Dutch"
                    }]
                }
            }
        }"#;

        let response: DriverListResponse = serde_json::from_str(json).unwrap();
        let drivers = response.mr_data.driver_table.unwrap().drivers;
        let driver = drivers.into_iter().next().unwrap().into_driver();

        assert_eq!(driver.driver_id, "max_verstappen");
        assert_eq!(driver.code, "VER");
        assert_eq!(driver.date_of_birth.unwrap().year(), 1997);
        assert_eq!(driver.full_name(), "Max Verstappen");
    }

    #[test]
    fn test_parse_constructors() {
        let json = r#"{
            "MRData": {
                "ConstructorTable": {
                    "Constructors": [{
                        "constructorId": "red_bull",
                        "url": "http://en.wikipedia.org/wiki/Red_Bull_Racing",
                        "name": "Red Bull",
                        "nationality": "Austrian"
                    }]
                }
            }
        }"#;

        let response: ConstructorListResponse = serde_json::from_str(json).unwrap();
        let constructors = response.mr_data.constructor_table.unwrap().constructors;
        let constructor = constructors.into_iter().next().unwrap().into_constructor();

        assert_eq!(constructor.constructor_id, "red_bull");
        assert_eq!(constructor.name, "Red Bull");
    }

    #[test]
    fn test_missing_table_is_none() {
        let response: RaceScheduleResponse =
            serde_json::from_str(r#"{"MRData": {"series": "f1"}}"#).unwrap();
        assert!(response.mr_data.race_table.is_none());
    }

    #[test]
    fn test_parse_start_without_time_defaults_to_midnight() {
        let starts_at = parse_start(Some("2024-03-02"), None).unwrap();
        assert_eq!(starts_at.to_rfc3339(), "2024-03-02T00:00:00+00:00");
        assert!(parse_start(None, Some("15:00:00Z")).is_none());
    }
}
