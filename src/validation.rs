//! Boundary checks shared by the HTTP handlers. The engine itself never
//! rejects input; these run before a request reaches it.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

use crate::constants::{MAX_RATING, MIN_RATING, ONBOARDING_MAX_LEVEL, ONBOARDING_MIN_LEVEL};

/// Self-reported level on the onboarding form: finite and within 1-7
pub fn validate_onboarding_level(level: f64) -> Result<(), &'static str> {
    if !level.is_finite() {
        return Err("level must be a number");
    }
    if !(ONBOARDING_MIN_LEVEL..=ONBOARDING_MAX_LEVEL).contains(&level) {
        return Err("level must be between 1 and 7");
    }
    Ok(())
}

/// Ratings are whole stars from 1 to 5
pub fn is_valid_rating(value: f64) -> bool {
    value.fract() == 0.0 && (MIN_RATING..=MAX_RATING).contains(&value)
}

/// Record ids arrive from the caller's store; 1-128 chars, no whitespace
/// or control characters.
pub fn validate_record_id(id: &str) -> Result<(), &'static str> {
    if id.is_empty() {
        return Err("id must not be empty");
    }
    if id.chars().count() > 128 {
        return Err("id must be at most 128 characters");
    }
    if id.chars().any(|c| c.is_whitespace() || c.is_control()) {
        return Err("id must not contain whitespace");
    }
    Ok(())
}

/// Local wall-clock time from `YYYY-MM-DD` and `HH:MM` (seconds optional).
/// Returns `None` when either part does not parse.
pub fn parse_schedule(date: &str, time: &str) -> Option<NaiveDateTime> {
    let date = NaiveDate::parse_from_str(date.trim(), "%Y-%m-%d").ok()?;
    let time = time.trim();
    let time = NaiveTime::parse_from_str(time, "%H:%M")
        .or_else(|_| NaiveTime::parse_from_str(time, "%H:%M:%S"))
        .ok()?;
    Some(date.and_time(time))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn onboarding_level_bounds_are_inclusive() {
        assert!(validate_onboarding_level(1.0).is_ok());
        assert!(validate_onboarding_level(7.0).is_ok());
        assert!(validate_onboarding_level(4.5).is_ok());
    }

    #[test]
    fn onboarding_level_outside_range_rejected() {
        assert!(validate_onboarding_level(0.5).is_err());
        assert!(validate_onboarding_level(7.01).is_err());
        assert!(validate_onboarding_level(f64::NAN).is_err());
    }

    #[test]
    fn ratings_must_be_whole_stars() {
        assert!(is_valid_rating(1.0));
        assert!(is_valid_rating(5.0));
        assert!(!is_valid_rating(3.5));
        assert!(!is_valid_rating(0.0));
        assert!(!is_valid_rating(6.0));
        assert!(!is_valid_rating(f64::INFINITY));
    }

    #[test]
    fn record_id_accepts_store_ids() {
        assert!(validate_record_id("pair_u1_u2").is_ok());
        assert!(validate_record_id("3f1c2a9e-0f55-4c1e-9a55-2b8f1f0c7d10").is_ok());
    }

    #[test]
    fn record_id_rejects_blank_and_spaced() {
        assert!(validate_record_id("").is_err());
        assert!(validate_record_id("u 1").is_err());
        assert!(validate_record_id(&"x".repeat(129)).is_err());
    }

    #[test]
    fn schedule_parses_date_and_time() {
        let at = parse_schedule("2025-03-01", "09:05").unwrap();
        assert_eq!(at.to_string(), "2025-03-01 09:05:00");
        assert!(parse_schedule(" 2025-03-01 ", "09:05:30").is_some());
    }

    #[test]
    fn schedule_rejects_garbage() {
        assert!(parse_schedule("01/03/2025", "09:05").is_none());
        assert!(parse_schedule("2025-02-30", "09:05").is_none());
        assert!(parse_schedule("2025-03-01", "25:00").is_none());
        assert!(parse_schedule("2025-03-01", "").is_none());
    }
}
