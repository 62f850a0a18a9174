//! Data models for the TripBud backend
//!
//! This module contains the domain models organized by concern:
//! - Trip: the inbound request
//! - Itinerary: recommendations and the response envelope
//! - Directory: static city and category listings

pub mod directory;
pub mod itinerary;
pub mod trip;

// Re-export all public types for convenient access
pub use directory::{Category, City};
pub use itinerary::{ItineraryResponse, Recommendation};
pub use trip::TripRequest;
