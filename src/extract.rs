//! Extraction of structured recommendations from free-text provider replies
//!
//! Replies are scanned for complete top-level JSON objects rather than taking
//! the span between the first `{` and the last `}`. Prose braces that do not
//! parse are skipped, and a reply carrying more than one candidate payload is
//! rejected instead of guessed at. A payload opening a ```` ```json ```` fence
//! takes precedence over the rest of the reply.

use serde::Deserialize;
use serde_json::{Map, Value};
use thiserror::Error;

use crate::models::{ItineraryResponse, Recommendation, TripRequest};

const PAYLOAD_KEY: &str = "recommendations";
const JSON_FENCE: &str = "```json";

/// Reasons a reply could not be turned into recommendations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ExtractionError {
    #[error("No JSON object found in reply")]
    NoPayload,

    #[error("No JSON object in reply has a `recommendations` key")]
    MissingRecommendations,

    #[error("Reply contains {0} candidate payloads")]
    Ambiguous(usize),

    #[error("Payload does not match the recommendation schema: {0}")]
    Schema(String),

    #[error("Payload contains no recommendations")]
    Empty,
}

impl ExtractionError {
    /// Short machine-readable label for diagnostics
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            ExtractionError::NoPayload => "no_payload",
            ExtractionError::MissingRecommendations => "missing_recommendations",
            ExtractionError::Ambiguous(_) => "ambiguous",
            ExtractionError::Schema(_) => "schema",
            ExtractionError::Empty => "empty",
        }
    }
}

/// Validated provider output
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItineraryPayload {
    pub recommendations: Vec<Recommendation>,
    pub summary: String,
}

impl ItineraryPayload {
    /// Keep at most `max` recommendations, preserving order
    pub fn truncate(&mut self, max: usize) {
        self.recommendations.truncate(max);
    }

    #[must_use]
    pub fn into_response(self, city: impl Into<String>) -> ItineraryResponse {
        ItineraryResponse {
            city: city.into(),
            recommendations: self.recommendations,
            summary: self.summary,
        }
    }
}

#[derive(Debug, Deserialize)]
struct RawPayload {
    recommendations: Vec<Recommendation>,
    #[serde(default)]
    summary: Option<String>,
}

/// Parse the recommendation payload embedded in `raw`.
///
/// A missing `summary` is replaced by one derived from `request`.
pub fn parse_recommendations(
    raw: &str,
    request: &TripRequest,
) -> Result<ItineraryPayload, ExtractionError> {
    let candidate = match fenced_payload(raw) {
        Some(object) => object,
        None => single_candidate(ObjectScanner::new(raw))?,
    };

    let payload: RawPayload = serde_json::from_value(Value::Object(candidate))
        .map_err(|e| ExtractionError::Schema(e.to_string()))?;

    if payload.recommendations.is_empty() {
        return Err(ExtractionError::Empty);
    }

    let summary = payload.summary.unwrap_or_else(|| {
        format!(
            "Personalized {}-day itinerary for {}",
            request.duration, request.city
        )
    });

    Ok(ItineraryPayload {
        recommendations: payload.recommendations,
        summary,
    })
}

/// First object after a ```` ```json ```` marker, if it carries the payload key.
///
/// The object is parsed in full before the closing fence is looked for, so
/// backticks inside string values do not cut it short.
fn fenced_payload(text: &str) -> Option<Map<String, Value>> {
    let start = text.find(JSON_FENCE)? + JSON_FENCE.len();
    ObjectScanner::new(&text[start..])
        .next()
        .filter(|object| object.contains_key(PAYLOAD_KEY))
}

/// The only object among `objects` carrying the payload key
fn single_candidate(
    objects: impl Iterator<Item = Map<String, Value>>,
) -> Result<Map<String, Value>, ExtractionError> {
    let mut seen_any = false;
    let mut candidates: Vec<Map<String, Value>> = objects
        .inspect(|_| seen_any = true)
        .filter(|object| object.contains_key(PAYLOAD_KEY))
        .collect();

    match candidates.len() {
        0 if !seen_any => Err(ExtractionError::NoPayload),
        0 => Err(ExtractionError::MissingRecommendations),
        1 => Ok(candidates.remove(0)),
        n => Err(ExtractionError::Ambiguous(n)),
    }
}

/// Yields every complete JSON object in a text that is not nested in another one
struct ObjectScanner<'a> {
    text: &'a str,
    pos: usize,
}

impl<'a> ObjectScanner<'a> {
    fn new(text: &'a str) -> Self {
        Self { text, pos: 0 }
    }
}

impl Iterator for ObjectScanner<'_> {
    type Item = Map<String, Value>;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(offset) = self.text[self.pos..].find('{') {
            let start = self.pos + offset;
            let mut stream =
                serde_json::Deserializer::from_str(&self.text[start..]).into_iter::<Value>();
            match stream.next() {
                Some(Ok(Value::Object(object))) => {
                    self.pos = start + stream.byte_offset();
                    return Some(object);
                }
                _ => self.pos = start + 1,
            }
        }
        self.pos = self.text.len();
        None
    }
}
