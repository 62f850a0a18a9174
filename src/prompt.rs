//! Prompt rendering for the recommendation provider

use crate::models::TripRequest;

/// Render the provider instruction for `request`.
///
/// Output depends only on the request fields.
#[must_use]
pub fn build_prompt(request: &TripRequest) -> String {
    format!(
        r#"You are TripBud, an AI travel companion that curates authentic, personalized recommendations.

User wants to visit: {city}
Interests: {interests}
Trip duration: {duration} days
Budget: {budget}
Travel style: {style}

Please provide personalized recommendations including:
- Restaurants and cafes (focus on local favorites, not chains)
- Activities and experiences
- Hidden gems and local spots
- Museums or cultural sites if interested

For each recommendation, provide:
1. Name
2. Category (food/activity/culture/nightlife/nature)
3. Brief description
4. Why it matches their interests
5. Estimated time needed
6. Price range ($/$$/$$$/free)

Format your response as a JSON object with this structure:
{{
    "recommendations": [
        {{
            "name": "...",
            "category": "...",
            "description": "...",
            "reason": "...",
            "estimated_time": "...",
            "price_range": "..."
        }}
    ],
    "summary": "A brief overview of the trip plan"
}}

Focus on quality over quantity - 8-12 excellent recommendations total.
Prioritize authentic local experiences over tourist traps."#,
        city = request.city,
        interests = request.interests_display(),
        duration = request.duration,
        budget = request.budget,
        style = request.travel_style,
    )
}
