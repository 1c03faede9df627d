//! Driver model.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A Formula 1 driver.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Driver {
    /// Source-assigned identifier (slug or car number, depending on source).
    pub driver_id: String,
    /// Three-letter code, e.g. "VER". Empty when unknown.
    pub code: String,
    /// Permanent car number as displayed. Empty when unknown.
    pub permanent_number: String,
    pub given_name: String,
    pub family_name: String,
    pub date_of_birth: Option<NaiveDate>,
    pub nationality: String,
    /// Team identifier, when the source reports one.
    pub team_id: String,
}

impl Driver {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.given_name, self.family_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_name() {
        let driver = Driver {
            driver_id: "max_verstappen".to_string(),
            code: "VER".to_string(),
            permanent_number: "1".to_string(),
            given_name: "Max".to_string(),
            family_name: "Verstappen".to_string(),
            date_of_birth: NaiveDate::from_ymd_opt(1997, 9, 30),
            nationality: "Dutch".to_string(),
            team_id: String::new(),
        };
        assert_eq!(driver.full_name(), "Max Verstappen");
    }
}
