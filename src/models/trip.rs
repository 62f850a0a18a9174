//! Trip request model as received from the client

use serde::{Deserialize, Deserializer, Serialize};

/// A traveller's request for recommendations
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct TripRequest {
    /// Destination city (free text)
    pub city: String,
    /// Interests in the order the traveller gave them
    pub interests: Vec<String>,
    /// Trip length in days
    pub duration: i64,
    /// Budget level; absent or `null` means "medium"
    #[serde(default = "default_budget", deserialize_with = "budget_or_default")]
    pub budget: String,
    /// Travel style; absent or `null` means "balanced"
    #[serde(default = "default_travel_style", deserialize_with = "style_or_default")]
    pub travel_style: String,
}

fn default_budget() -> String {
    "medium".to_string()
}

fn default_travel_style() -> String {
    "balanced".to_string()
}

fn budget_or_default<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_else(default_budget))
}

fn style_or_default<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_else(default_travel_style))
}

impl TripRequest {
    /// Create a request with default budget and travel style
    #[must_use]
    pub fn new(city: impl Into<String>, interests: Vec<String>, duration: i64) -> Self {
        Self {
            city: city.into(),
            interests,
            duration,
            budget: default_budget(),
            travel_style: default_travel_style(),
        }
    }

    /// Interests joined for display, e.g. `"food, art"`
    #[must_use]
    pub fn interests_display(&self) -> String {
        self.interests.join(", ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_applied_when_missing() {
        let request: TripRequest =
            serde_json::from_str(r#"{"city":"Paris","interests":["food"],"duration":3}"#).unwrap();
        assert_eq!(request.budget, "medium");
        assert_eq!(request.travel_style, "balanced");
        assert_eq!(request.interests_display(), "food");
    }

    #[test]
    fn test_explicit_values_kept() {
        let request: TripRequest = serde_json::from_str(
            r#"{"city":"Tokyo","interests":[],"duration":-1,"budget":"luxury","travel_style":"relaxed"}"#,
        )
        .unwrap();
        assert_eq!(request.duration, -1);
        assert_eq!(request.budget, "luxury");
        assert_eq!(request.travel_style, "relaxed");
        assert_eq!(request.interests_display(), "");
    }

    #[test]
    fn test_missing_required_field_rejected() {
        let result = serde_json::from_str::<TripRequest>(r#"{"city":"Paris","duration":3}"#);
        assert!(result.is_err());

        let result =
            serde_json::from_str::<TripRequest>(r#"{"city":"Paris","interests":[],"duration":"3"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_null_budget_and_style_take_defaults() {
        let request: TripRequest = serde_json::from_str(
            r#"{"city":"Rome","interests":["art"],"duration":2,"budget":null,"travel_style":null}"#,
        )
        .unwrap();
        assert_eq!(request.budget, "medium");
        assert_eq!(request.travel_style, "balanced");

        let result = serde_json::from_str::<TripRequest>(
            r#"{"city":"Rome","interests":[],"duration":2,"budget":3}"#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_fractional_duration_rejected() {
        let result =
            serde_json::from_str::<TripRequest>(r#"{"city":"Rome","interests":[],"duration":3.0}"#);
        assert!(result.is_err());
    }
}
