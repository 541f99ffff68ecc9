use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Label reported in `specialist_used`. All specialists always run, so the
/// plan is always the merged, comprehensive one.
pub const SPECIALIST_COMPREHENSIVE: &str = "comprehensive";

/// The outbound plan. Created once per request, never persisted.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PartyPlanResponse {
    pub success: bool,
    pub plan: String,
    pub specialist_used: String,
    pub timestamp: DateTime<Utc>,
}

impl PartyPlanResponse {
    pub fn comprehensive(plan: String) -> Self {
        Self {
            success: true,
            plan,
            specialist_used: SPECIALIST_COMPREHENSIVE.to_string(),
            timestamp: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn roundtrip_party_plan_response() {
        let response = PartyPlanResponse::comprehensive("## FOOD\nSliders.".to_string());
        let json = serde_json::to_string(&response).unwrap();
        let deserialized: PartyPlanResponse = serde_json::from_str(&json).unwrap();
        assert_eq!(response, deserialized);
    }

    #[test]
    fn comprehensive_sets_success_and_label() {
        let response = PartyPlanResponse::comprehensive("plan".to_string());
        assert!(response.success);
        assert_eq!(response.specialist_used, SPECIALIST_COMPREHENSIVE);
    }

    #[test]
    fn timestamp_serializes_as_rfc3339() {
        let response = PartyPlanResponse::comprehensive("plan".to_string());
        let json = serde_json::to_value(&response).unwrap();
        let raw = json["timestamp"].as_str().unwrap();
        assert!(DateTime::parse_from_rfc3339(raw).is_ok());
    }
}
