use std::sync::Arc;

use axum::{
    Router,
    extract::State,
    response::Json,
    routing::{get, post},
};
use serde::Serialize;
use serde_json::{Value, json};

use crate::{
    catalog::{CATEGORIES, CITIES},
    models::{Category, City, ItineraryResponse, TripRequest},
    recommend::RecommendationService,
};

pub type AppState = Arc<RecommendationService>;

#[derive(Serialize)]
pub struct CitiesResponse {
    pub cities: &'static [City],
}

#[derive(Serialize)]
pub struct CategoriesResponse {
    pub categories: &'static [Category],
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(get_root))
        .route("/health", get(get_health))
        .route("/cities", get(get_cities))
        .route("/categories", get(get_categories))
        .route("/recommendations", post(create_recommendations))
        .with_state(state)
}

async fn get_root() -> Json<Value> {
    Json(json!({
        "message": "Welcome to TripBud API!",
        "version": crate::VERSION,
        "endpoints": {
            "/recommendations": "POST - Get personalized travel recommendations",
            "/cities": "GET - Get available cities",
            "/categories": "GET - Get recommendation categories"
        }
    }))
}

async fn get_health(State(service): State<AppState>) -> Json<Value> {
    Json(json!({
        "status": "ok",
        "service": "tripbud",
        "version": crate::VERSION,
        "provider_configured": service.provider_configured()
    }))
}

async fn get_cities() -> Json<CitiesResponse> {
    Json(CitiesResponse { cities: &CITIES })
}

async fn get_categories() -> Json<CategoriesResponse> {
    Json(CategoriesResponse {
        categories: &CATEGORIES,
    })
}

// Body rejections (bad JSON, wrong types, missing fields) are answered by the
// `Json` extractor with a 4xx before this runs.
async fn create_recommendations(
    State(service): State<AppState>,
    Json(request): Json<TripRequest>,
) -> Json<ItineraryResponse> {
    Json(service.recommend(&request).await)
}
