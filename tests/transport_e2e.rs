// tests/transport_e2e.rs
//
// ApiClient against a small in-process axum backend with the same routes
// (and trailing-slash quirks) as the real one.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use serde_json::{json, Value};

use llm_catalog::aggregate::aggregate;
use llm_catalog::client::{ApiClient, ModelQuery};
use llm_catalog::types::*;

#[derive(Default)]
struct Backend {
    next_id: i64,
    models: Vec<Value>,
    /// Query string of the last web-source POST, and whether it had a body.
    web_source_query: Option<HashMap<String, String>>,
    web_source_body: Option<String>,
}

type Shared = Arc<Mutex<Backend>>;
type Reply = Result<Json<Value>, (StatusCode, Json<Value>)>;

fn not_found(what: &str) -> (StatusCode, Json<Value>) {
    (StatusCode::NOT_FOUND, Json(json!({ "detail": format!("{what} not found") })))
}

async fn list_models(State(db): State<Shared>, Query(q): Query<HashMap<String, String>>) -> Json<Value> {
    let db = db.lock().unwrap();
    let provider = q.get("provider_id").and_then(|v| v.parse::<i64>().ok());
    let rows: Vec<Value> = db
        .models
        .iter()
        .filter(|m| provider.is_none_or(|p| m["provider_id"].as_i64() == Some(p)))
        .cloned()
        .collect();
    Json(Value::Array(rows))
}

async fn create_model(State(db): State<Shared>, Json(mut body): Json<Value>) -> Json<Value> {
    let mut db = db.lock().unwrap();
    db.next_id += 1;
    body["id"] = json!(db.next_id);
    body["created_at"] = json!("2025-03-01T10:00:00");
    db.models.push(body.clone());
    Json(body)
}

async fn get_model(State(db): State<Shared>, Path(id): Path<i64>) -> Reply {
    let db = db.lock().unwrap();
    db.models
        .iter()
        .find(|m| m["id"].as_i64() == Some(id))
        .cloned()
        .map(Json)
        .ok_or_else(|| not_found("Model"))
}

async fn delete_model(State(db): State<Shared>, Path(id): Path<i64>) -> Reply {
    let mut db = db.lock().unwrap();
    let before = db.models.len();
    db.models.retain(|m| m["id"].as_i64() != Some(id));
    if db.models.len() == before {
        return Err(not_found("Model"));
    }
    Ok(Json(json!({ "message": "Model deleted successfully" })))
}

async fn list_providers() -> (StatusCode, &'static str) {
    (StatusCode::SERVICE_UNAVAILABLE, "upstream unavailable")
}

async fn current_pricing(Query(q): Query<HashMap<String, String>>) -> Json<Value> {
    let model_id: i64 = q.get("model_id").and_then(|v| v.parse().ok()).unwrap_or(1);
    Json(json!([{
        "id": 5,
        "model_id": model_id,
        "price_type": "input_tokens",
        "price": "0.0100",
        "currency": "USD",
        "unit": "per_1k_tokens",
        "valid_from": "2024-01-01",
        "valid_to": null,
        "created_at": "2024-01-01T00:00:00"
    }]))
}

async fn list_benchmarks(Query(q): Query<HashMap<String, String>>) -> Json<Value> {
    let model_id: i64 = q.get("model_id").and_then(|v| v.parse().ok()).unwrap_or(0);
    Json(json!([{
        "id": model_id * 10,
        "model_id": model_id,
        "benchmark_name": "MMLU",
        "score": 80 + model_id,
        "created_at": "2024-01-01T00:00:00"
    }]))
}

async fn get_comparison(Path(id): Path<i64>) -> Reply {
    if id != 1 {
        return Err(not_found("Comparison table"));
    }
    Ok(Json(json!({
        "id": 1,
        "name": "Frontier",
        "is_public": true,
        "created_at": "2024-01-01T00:00:00",
        "items": [
            { "id": 1, "comparison_table_id": 1, "model_id": 2, "display_order": 1, "created_at": "" },
            { "id": 2, "comparison_table_id": 1, "model_id": 1, "display_order": 0, "created_at": "" }
        ]
    })))
}

async fn scrape() -> Json<Value> {
    Json(json!({ "success": false, "error": "timeout" }))
}

async fn add_web_source(
    State(db): State<Shared>,
    Query(q): Query<HashMap<String, String>>,
    body: String,
) -> Json<Value> {
    let mut db = db.lock().unwrap();
    db.web_source_body = Some(body);
    let reply = json!({
        "id": 9,
        "url": q.get("url").cloned().unwrap_or_default(),
        "source_type": q.get("source_type").cloned().unwrap_or_default(),
        "is_active": true,
        "last_scraped": null,
        "scraping_interval_hours": 24,
        "created_at": "2024-01-01T00:00:00"
    });
    db.web_source_query = Some(q);
    Json(reply)
}

async fn spawn_backend() -> (ApiClient, Shared) {
    let db: Shared = Arc::new(Mutex::new(Backend::default()));
    let app = Router::new()
        .route("/api/models/", get(list_models).post(create_model))
        .route("/api/models/{id}", get(get_model).delete(delete_model))
        .route("/api/providers/", get(list_providers))
        .route("/api/pricing/current", get(current_pricing))
        .route("/api/benchmarks/", get(list_benchmarks))
        .route("/api/comparisons/{id}", get(get_comparison))
        .route("/api/scraper/scrape-url", post(scrape))
        .route("/api/scraper/web-sources", post(add_web_source))
        .with_state(db.clone());

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    let api = ApiClient::new(&format!("http://{addr}")).unwrap();
    (api, db)
}

fn gpt5() -> NewModel {
    NewModel {
        name: "GPT-5".into(),
        provider_id: 3,
        model_type: Some(ModelType::Multimodal),
        context_window: Some(200_000),
        ..NewModel::default()
    }
}

#[tokio::test]
async fn created_model_shows_up_in_filtered_list() {
    let (api, _db) = spawn_backend().await;

    let created = api.create_model(&gpt5()).await.unwrap();
    assert_eq!(created.name, "GPT-5");
    assert_eq!(created.provider_id, 3);
    assert_eq!(created.context_window, Some(200_000));
    assert_eq!(created.model_type, Some(ModelType::Multimodal));

    let other = NewModel { name: "Claude".into(), provider_id: 2, ..NewModel::default() };
    api.create_model(&other).await.unwrap();

    let q = ModelQuery { provider_id: Some(3), ..ModelQuery::default() };
    let listed = api.list_models(&q).await.unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].id, created.id);
    assert_eq!(listed[0].context_label().as_deref(), Some("200,000 tokens"));
}

#[tokio::test]
async fn listing_twice_gives_the_same_answer() {
    let (api, _db) = spawn_backend().await;
    api.create_model(&gpt5()).await.unwrap();

    let a = api.list_models(&ModelQuery::default()).await.unwrap();
    let b = api.list_models(&ModelQuery::default()).await.unwrap();
    assert_eq!(a, b);
}

#[tokio::test]
async fn not_found_carries_server_detail() {
    let (api, _db) = spawn_backend().await;
    let err = api.get_model(999).await.unwrap_err();
    assert!(err.is_not_found());
    assert_eq!(err.detail(), Some("Model not found"));
    assert_eq!(err.to_string(), "HTTP 404: Model not found");
}

#[tokio::test]
async fn plain_text_error_body_becomes_detail() {
    let (api, _db) = spawn_backend().await;
    let err = api.list_providers().await.unwrap_err();
    assert_eq!(err.status(), Some(503));
    assert_eq!(err.detail(), Some("upstream unavailable"));
}

#[tokio::test]
async fn delete_ignores_the_confirmation_body() {
    let (api, _db) = spawn_backend().await;
    let m = api.create_model(&gpt5()).await.unwrap();

    api.delete_model(m.id).await.unwrap();
    assert!(api.get_model(m.id).await.unwrap_err().is_not_found());
    assert!(api.delete_model(m.id).await.unwrap_err().is_not_found());
}

#[tokio::test]
async fn decimal_strings_decode_as_numbers() {
    let (api, _db) = spawn_backend().await;
    let rows = api.current_pricing(Some(4)).await.unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].model_id, 4);
    assert_eq!(rows[0].price, 0.01);
    assert_eq!(rows[0].price_label(), "$0.01 USD");
    assert!(rows[0].is_open_ended());
}

#[tokio::test]
async fn scrape_failure_payload_is_not_a_transport_error() {
    let (api, _db) = spawn_backend().await;
    let req = ScrapeRequest { url: "https://example.com".into(), ..ScrapeRequest::default() };
    let res = api.scrape_url(&req).await.unwrap();
    assert!(!res.success);
    assert_eq!(res.error.as_deref(), Some("timeout"));
}

#[tokio::test]
async fn web_source_is_added_through_query_parameters() {
    let (api, db) = spawn_backend().await;
    let src = api
        .add_web_source("https://example.com/pricing?tab=api", &SourceType::Pricing)
        .await
        .unwrap();
    assert_eq!(src.url, "https://example.com/pricing?tab=api");
    assert_eq!(src.source_type, SourceType::Pricing);

    let db = db.lock().unwrap();
    let q = db.web_source_query.as_ref().unwrap();
    assert_eq!(q.get("url").map(String::as_str), Some("https://example.com/pricing?tab=api"));
    assert_eq!(q.get("source_type").map(String::as_str), Some("pricing"));
    assert_eq!(db.web_source_body.as_deref(), Some(""));
}

#[tokio::test]
async fn comparison_aggregates_over_http() {
    let (api, _db) = spawn_backend().await;
    api.create_model(&NewModel { name: "A".into(), provider_id: 1, ..NewModel::default() })
        .await
        .unwrap();
    api.create_model(&NewModel { name: "B".into(), provider_id: 1, ..NewModel::default() })
        .await
        .unwrap();

    let detail = aggregate(&api, 1).await.unwrap();
    let pivot = detail.pivot();
    let names: Vec<_> = pivot.columns.iter().map(|c| c.model_name.as_str()).collect();
    assert_eq!(names, vec!["A", "B"]);
    assert_eq!(pivot.text_at("MMLU", 1), "81");
    assert_eq!(pivot.text_at("MMLU", 2), "82");
    assert_eq!(detail.pricing_for(2).len(), 1);

    assert!(aggregate(&api, 2).await.unwrap_err().is_not_found());
}
