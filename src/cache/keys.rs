//! Cache key derivation.
//!
//! Keys are pure functions of the query type and its parameters. The only
//! wall-clock dependence is the current-season schedule, which is implicitly
//! "as of now" and keys off the current year.

pub fn races_key(year: i32) -> String {
    format!("races_{}", year)
}

pub fn next_race_key() -> String {
    "next_race".to_string()
}

pub fn drivers_key(season: i32) -> String {
    format!("drivers_{}", season)
}

pub fn constructors_key(season: i32) -> String {
    format!("constructors_{}", season)
}

pub fn session_key(season: i32, round: i32) -> String {
    format!("session_{}_{}", season, round)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keys_are_deterministic() {
        assert_eq!(drivers_key(2024), drivers_key(2024));
        assert_eq!(session_key(2024, 3), session_key(2024, 3));
        assert_eq!(next_race_key(), "next_race");
    }

    #[test]
    fn test_keys_distinguish_parameters() {
        assert_ne!(drivers_key(2024), drivers_key(2023));
        assert_ne!(session_key(2024, 1), session_key(2024, 2));
        assert_ne!(session_key(2024, 1), session_key(2023, 1));
    }

    #[test]
    fn test_keys_distinguish_query_types() {
        assert_ne!(drivers_key(2024), constructors_key(2024));
        assert_ne!(races_key(2024), drivers_key(2024));
    }
}
