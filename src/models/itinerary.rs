//! Recommendation and itinerary models returned to the client

use serde::{Deserialize, Serialize};

/// A single place or experience to recommend
///
/// `category` is conventionally one of food/activity/culture/nightlife/nature/shopping
/// and `price_range` one of `$`, `$$`, `$$$` or `free`; neither is enforced.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Recommendation {
    pub name: String,
    pub category: String,
    pub description: String,
    /// Why it matches the traveller's interests
    pub reason: String,
    /// Human-readable time needed, e.g. "2-3 hours"
    pub estimated_time: String,
    pub price_range: String,
}

impl Recommendation {
    /// Build a recommendation from static string data
    #[must_use]
    pub fn from_static(
        name: &str,
        category: &str,
        description: &str,
        reason: &str,
        estimated_time: &str,
        price_range: &str,
    ) -> Self {
        Self {
            name: name.to_string(),
            category: category.to_string(),
            description: description.to_string(),
            reason: reason.to_string(),
            estimated_time: estimated_time.to_string(),
            price_range: price_range.to_string(),
        }
    }
}

/// Response body of `POST /recommendations`
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct ItineraryResponse {
    pub city: String,
    pub recommendations: Vec<Recommendation>,
    pub summary: String,
}
