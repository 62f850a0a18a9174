//! `TripBud` - AI-powered travel companion backend
//!
//! This library turns a trip request into curated recommendations, either
//! generated by a language-model provider or taken from a built-in catalog.

pub mod api;
pub mod catalog;
pub mod config;
pub mod error;
pub mod extract;
pub mod fallback;
pub mod logging;
pub mod models;
pub mod prompt;
pub mod provider;
pub mod recommend;
pub mod web;

// Re-export core types for public API
pub use catalog::Catalog;
pub use config::TripBudConfig;
pub use error::TripBudError;
pub use extract::{ExtractionError, ItineraryPayload, parse_recommendations};
pub use fallback::{FallbackSynthesizer, synthesize_fallback};
pub use models::{ItineraryResponse, Recommendation, TripRequest};
pub use prompt::build_prompt;
pub use provider::{ProviderError, TextProvider};
pub use recommend::{GenerationOutcome, RecommendationService};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Core result type used throughout the library
pub type Result<T> = std::result::Result<T, TripBudError>;
