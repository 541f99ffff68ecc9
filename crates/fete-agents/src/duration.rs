use std::fmt;

use chrono::{NaiveTime, Timelike};
use fete_models::TimeOfDay;

use crate::error::AgentError;

/// Derived timing details for a party, computed from "HH:MM" start/end times.
#[derive(Debug, Clone, PartialEq)]
pub struct PartyDuration {
    /// Signed hours between start and end. No wraparound: an end before the
    /// start on the same day yields a negative value.
    pub duration_hours: f64,
    /// Bucket derived solely from the start hour.
    pub time_of_day: TimeOfDay,
}

impl fmt::Display for PartyDuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Duration: {} hours, time of day: {}",
            self.duration_hours,
            self.time_of_day.as_str()
        )
    }
}

fn parse_hhmm(label: &str, value: &str) -> Result<NaiveTime, AgentError> {
    NaiveTime::parse_from_str(value, "%H:%M")
        .map_err(|e| AgentError::Format(format!("could not parse {label} '{value}' as HH:MM: {e}")))
}

/// Compute the party duration and time-of-day bucket from two same-day
/// wall-clock times. Parse failures are soft: the caller proceeds without
/// duration information instead of aborting the plan.
pub fn compute_duration(start_time: &str, end_time: &str) -> Result<PartyDuration, AgentError> {
    let start = parse_hhmm("start_time", start_time)?;
    let end = parse_hhmm("end_time", end_time)?;

    let duration_hours = (end - start).num_minutes() as f64 / 60.0;

    Ok(PartyDuration {
        duration_hours,
        time_of_day: TimeOfDay::from_hour(start.hour()),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn afternoon_party() {
        let d = compute_duration("14:00", "17:00").unwrap();
        assert_eq!(d.duration_hours, 3.0);
        assert_eq!(d.time_of_day, TimeOfDay::Afternoon);
    }

    #[test]
    fn morning_party_with_half_hour() {
        let d = compute_duration("09:00", "10:30").unwrap();
        assert_eq!(d.duration_hours, 1.5);
        assert_eq!(d.time_of_day, TimeOfDay::Morning);
    }

    #[test]
    fn evening_party() {
        let d = compute_duration("19:00", "20:00").unwrap();
        assert_eq!(d.duration_hours, 1.0);
        assert_eq!(d.time_of_day, TimeOfDay::Evening);
    }

    #[test]
    fn end_before_start_is_negative() {
        let d = compute_duration("17:00", "14:00").unwrap();
        assert_eq!(d.duration_hours, -3.0);
    }

    #[test]
    fn unparseable_start_is_a_format_error() {
        let err = compute_duration("bad", "17:00").unwrap_err();
        assert!(matches!(err, AgentError::Format(_)));
        assert!(err.to_string().contains("start_time"));
    }

    #[test]
    fn unparseable_end_is_a_format_error() {
        let err = compute_duration("14:00", "5pm").unwrap_err();
        assert!(matches!(err, AgentError::Format(_)));
        assert!(err.to_string().contains("end_time"));
    }

    #[test]
    fn display_renders_summary_line() {
        let d = compute_duration("14:00", "17:00").unwrap();
        assert_eq!(d.to_string(), "Duration: 3 hours, time of day: afternoon");
    }
}
