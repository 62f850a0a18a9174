//! Anthropic provider and end-to-end pipeline tests against a local stub server

use std::sync::{Arc, Mutex};

use axum::{
    Json, Router,
    body::Body,
    extract::State,
    http::{HeaderMap, Request, StatusCode, header},
    routing::post,
};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tokio::net::TcpListener;
use tower::ServiceExt;
use tripbud::{
    GenerationOutcome, RecommendationService, TextProvider, TripBudConfig, TripRequest,
    build_prompt, parse_recommendations,
    provider::{AnthropicConfig, AnthropicProvider, ProviderError},
    web,
};

#[derive(Clone)]
struct Stub {
    status: StatusCode,
    reply: Value,
    seen: Arc<Mutex<Vec<(HeaderMap, Value)>>>,
}

async fn messages(
    State(stub): State<Stub>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> (StatusCode, Json<Value>) {
    stub.seen.lock().unwrap().push((headers, body));
    (stub.status, Json(stub.reply.clone()))
}

/// Serve `reply` with `status` on a random local port and return the base URL.
async fn spawn_stub(status: StatusCode, reply: Value) -> (String, Stub) {
    let stub = Stub {
        status,
        reply,
        seen: Arc::new(Mutex::new(Vec::new())),
    };
    let app = Router::new()
        .route("/v1/messages", post(messages))
        .with_state(stub.clone());

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    (format!("http://{addr}"), stub)
}

fn provider(base_url: &str) -> AnthropicProvider {
    AnthropicProvider::new(AnthropicConfig {
        api_key: "sk-test".to_string(),
        base_url: base_url.to_string(),
        model: "claude-sonnet-4-20250514".to_string(),
        max_tokens: 2000,
        timeout: None,
    })
    .unwrap()
}

fn text_reply(text: &str) -> Value {
    json!({
        "id": "msg_01",
        "type": "message",
        "role": "assistant",
        "content": [{"type": "text", "text": text}],
        "stop_reason": "end_turn"
    })
}

const PAYLOAD: &str = r#"{"recommendations":[{"name":"Park Güell","category":"nature","description":"Gaudí park","reason":"Architecture and views","estimated_time":"2 hours","price_range":"$$"}],"summary":"Gaudí weekend"}"#;

#[tokio::test]
async fn test_sends_single_user_message() {
    let (base_url, stub) = spawn_stub(StatusCode::OK, text_reply("hello")).await;

    let text = provider(&base_url).complete("plan my trip").await.unwrap();
    assert_eq!(text, "hello");

    let seen = stub.seen.lock().unwrap();
    assert_eq!(seen.len(), 1);
    let (headers, body) = &seen[0];
    assert_eq!(headers["x-api-key"], "sk-test");
    assert_eq!(headers["anthropic-version"], "2023-06-01");
    assert_eq!(
        body,
        &json!({
            "model": "claude-sonnet-4-20250514",
            "max_tokens": 2000,
            "messages": [{"role": "user", "content": "plan my trip"}]
        })
    );
}

#[tokio::test]
async fn test_error_statuses_are_classified() {
    let error = json!({"type": "error", "error": {"type": "x", "message": "m"}});

    let (url, _) = spawn_stub(StatusCode::UNAUTHORIZED, error.clone()).await;
    let err = provider(&url).complete("p").await.unwrap_err();
    assert_eq!(err.kind(), "unauthorized");

    let (url, _) = spawn_stub(StatusCode::TOO_MANY_REQUESTS, error.clone()).await;
    let err = provider(&url).complete("p").await.unwrap_err();
    assert_eq!(err.kind(), "rate_limited");

    let (url, _) = spawn_stub(StatusCode::INTERNAL_SERVER_ERROR, error).await;
    let err = provider(&url).complete("p").await.unwrap_err();
    assert!(matches!(err, ProviderError::Api { status: 500, .. }));
}

#[tokio::test]
async fn test_reply_without_text_is_invalid() {
    let (url, _) = spawn_stub(StatusCode::OK, json!({"content": []})).await;
    let err = provider(&url).complete("p").await.unwrap_err();
    assert!(matches!(err, ProviderError::InvalidResponse(_)));
}

#[tokio::test]
async fn test_unreachable_provider_is_network_error() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let err = provider(&format!("http://{addr}"))
        .complete("p")
        .await
        .unwrap_err();
    assert_eq!(err.kind(), "network");
}

#[tokio::test]
async fn test_configured_service_uses_live_reply() {
    let reply = format!("Here's a plan!\n```json\n{PAYLOAD}\n```");
    let (base_url, stub) = spawn_stub(StatusCode::OK, text_reply(&reply)).await;

    let mut config = TripBudConfig::default();
    config.provider.api_key = Some("sk-test".to_string());
    config.provider.base_url = base_url;
    let service = RecommendationService::from_config(&config).unwrap();

    let request = TripRequest::new("Barcelona", vec!["architecture".to_string()], 2);
    let (response, outcome) = service.generate(&request).await;
    assert_eq!(outcome, GenerationOutcome::Live { count: 1 });
    assert_eq!(response.recommendations[0].name, "Park Güell");
    assert_eq!(response.summary, "Gaudí weekend");

    let seen = stub.seen.lock().unwrap();
    let prompt = seen[0].1["messages"][0]["content"].as_str().unwrap();
    assert_eq!(prompt, build_prompt(&request));
}

#[tokio::test]
async fn test_provider_error_still_returns_ok() {
    let (base_url, _) = spawn_stub(StatusCode::UNAUTHORIZED, json!({})).await;

    let mut config = TripBudConfig::default();
    config.provider.api_key = Some("sk-bad".to_string());
    config.provider.base_url = base_url;
    let app = web::app(Arc::new(RecommendationService::from_config(&config).unwrap()));

    let request = Request::builder()
        .method("POST")
        .uri("/recommendations")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(
            json!({"city": "Paris", "interests": ["food"], "duration": 3}).to_string(),
        ))
        .unwrap();
    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body["recommendations"][0]["name"], "Le Comptoir du Relais");
}

#[test]
fn test_prompt_schema_round_trips_through_extraction() {
    let request = TripRequest::new("Kyoto", vec!["temples".to_string(), "tea".to_string()], 3);
    let prompt = build_prompt(&request);

    // Fill the schema example from the prompt with concrete values
    let start = prompt.find("{\n").unwrap();
    let end = prompt.rfind('}').unwrap();
    let template = &prompt[start..=end];
    let mut filled = template.to_string();
    for (field, value) in [
        ("name", "Fushimi Inari"),
        ("category", "culture"),
        ("description", "Thousands of torii gates"),
        ("reason", "Matches \\\"temples\\\" interest"),
        ("estimated_time", "3-4 hours"),
        ("price_range", "free"),
    ] {
        filled = filled.replacen(
            &format!("\"{field}\": \"...\""),
            &format!("\"{field}\": \"{value}\""),
            1,
        );
    }
    let reply = format!("Sure, here you go:\n{filled}\nEnjoy Kyoto!");

    let payload = parse_recommendations(&reply, &request).unwrap();
    let item = &payload.recommendations[0];
    assert_eq!(item.name, "Fushimi Inari");
    assert_eq!(item.category, "culture");
    assert_eq!(item.description, "Thousands of torii gates");
    assert_eq!(item.reason, "Matches \"temples\" interest");
    assert_eq!(item.estimated_time, "3-4 hours");
    assert_eq!(item.price_range, "free");
    assert_eq!(payload.summary, "A brief overview of the trip plan");
}
