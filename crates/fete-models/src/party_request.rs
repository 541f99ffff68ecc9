use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Location {
    Indoor,
    Outdoor,
}

impl Location {
    pub fn as_str(&self) -> &'static str {
        match self {
            Location::Indoor => "indoor",
            Location::Outdoor => "outdoor",
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum TimeOfDay {
    Morning,
    Afternoon,
    Evening,
}

impl TimeOfDay {
    /// Bucket a 24h start hour: [0,12) morning, [12,18) afternoon, [18,24) evening.
    pub fn from_hour(hour: u32) -> Self {
        if hour < 12 {
            TimeOfDay::Morning
        } else if hour < 18 {
            TimeOfDay::Afternoon
        } else {
            TimeOfDay::Evening
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TimeOfDay::Morning => "morning",
            TimeOfDay::Afternoon => "afternoon",
            TimeOfDay::Evening => "evening",
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum GuestAges {
    Kids,
    Adults,
    Mixed,
}

impl GuestAges {
    pub fn as_str(&self) -> &'static str {
        match self {
            GuestAges::Kids => "kids",
            GuestAges::Adults => "adults",
            GuestAges::Mixed => "mixed",
        }
    }
}

/// An inbound party planning request. Only `occasion` and `planning_focus`
/// are mandatory; every other field is optional detail the specialists can use.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PartyRequest {
    pub occasion: String,
    pub planning_focus: String,
    pub guest_count: Option<u32>,
    pub location: Option<Location>,
    /// Wall-clock time of day, "HH:MM" 24-hour format.
    pub start_time: Option<String>,
    pub end_time: Option<String>,
    /// Explicit bucket; derived from `start_time` when absent.
    pub time_of_day: Option<TimeOfDay>,
    pub dietary_restrictions: Option<String>,
    pub guest_ages: Option<GuestAges>,
    pub special_requests: Option<String>,
}

impl PartyRequest {
    /// A request carrying only the two required fields.
    pub fn minimal(occasion: &str, planning_focus: &str) -> Self {
        Self {
            occasion: occasion.to_string(),
            planning_focus: planning_focus.to_string(),
            guest_count: None,
            location: None,
            start_time: None,
            end_time: None,
            time_of_day: None,
            dietary_restrictions: None,
            guest_ages: None,
            special_requests: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn roundtrip_party_request_full() {
        let request = PartyRequest {
            occasion: "birthday".to_string(),
            planning_focus: "food and games".to_string(),
            guest_count: Some(12),
            location: Some(Location::Outdoor),
            start_time: Some("14:00".to_string()),
            end_time: Some("17:00".to_string()),
            time_of_day: Some(TimeOfDay::Afternoon),
            dietary_restrictions: Some("two vegetarians, one nut allergy".to_string()),
            guest_ages: Some(GuestAges::Mixed),
            special_requests: Some("space theme".to_string()),
        };

        let json = serde_json::to_string(&request).unwrap();
        let deserialized: PartyRequest = serde_json::from_str(&json).unwrap();
        assert_eq!(request, deserialized);
    }

    #[test]
    fn minimal_json_deserializes_with_absent_optionals() {
        let json = r#"{"occasion":"birthday","planning_focus":"food"}"#;
        let request: PartyRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request, PartyRequest::minimal("birthday", "food"));
    }

    #[test]
    fn missing_occasion_is_rejected() {
        let json = r#"{"planning_focus":"food"}"#;
        let err = serde_json::from_str::<PartyRequest>(json).unwrap_err();
        assert!(err.to_string().contains("occasion"));
    }

    #[test]
    fn enum_serialization_is_snake_case() {
        assert_eq!(
            serde_json::to_string(&Location::Indoor).unwrap(),
            "\"indoor\""
        );
        assert_eq!(
            serde_json::to_string(&TimeOfDay::Afternoon).unwrap(),
            "\"afternoon\""
        );
        assert_eq!(serde_json::to_string(&GuestAges::Kids).unwrap(), "\"kids\"");
    }

    #[test]
    fn unknown_enum_value_is_rejected() {
        let json = r#"{"occasion":"bbq","planning_focus":"food","location":"rooftop"}"#;
        assert!(serde_json::from_str::<PartyRequest>(json).is_err());
    }

    #[test]
    fn time_of_day_buckets() {
        assert_eq!(TimeOfDay::from_hour(0), TimeOfDay::Morning);
        assert_eq!(TimeOfDay::from_hour(11), TimeOfDay::Morning);
        assert_eq!(TimeOfDay::from_hour(12), TimeOfDay::Afternoon);
        assert_eq!(TimeOfDay::from_hour(17), TimeOfDay::Afternoon);
        assert_eq!(TimeOfDay::from_hour(18), TimeOfDay::Evening);
        assert_eq!(TimeOfDay::from_hour(23), TimeOfDay::Evening);
    }
}
