// tests/pivot.rs
//
// Aggregation against an in-memory ComparisonSource. Call counters check
// what was (and wasn't) fetched.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use chrono::NaiveDate;

use llm_catalog::aggregate::{aggregate, gather_all, ComparisonSource};
use llm_catalog::error::TransportError;
use llm_catalog::types::*;

#[derive(Default)]
struct FakeSource {
    tables: HashMap<Id, ComparisonTable>,
    models: HashMap<Id, Model>,
    benchmarks: HashMap<Id, Vec<Benchmark>>,
    pricing: HashMap<Id, Vec<Pricing>>,
    /// Model ids whose benchmark fetch fails.
    broken: Vec<Id>,

    model_calls: AtomicUsize,
    bench_calls: AtomicUsize,
    price_calls: AtomicUsize,
}

fn not_found() -> TransportError {
    TransportError::Status { status: 404, detail: Some("Not found".into()) }
}

#[async_trait]
impl ComparisonSource for FakeSource {
    async fn comparison(&self, id: Id) -> Result<ComparisonTable, TransportError> {
        self.tables.get(&id).cloned().ok_or_else(not_found)
    }

    async fn model(&self, id: Id) -> Result<Model, TransportError> {
        self.model_calls.fetch_add(1, Ordering::SeqCst);
        self.models.get(&id).cloned().ok_or_else(not_found)
    }

    async fn benchmarks_for(&self, model_id: Id) -> Result<Vec<Benchmark>, TransportError> {
        self.bench_calls.fetch_add(1, Ordering::SeqCst);
        if self.broken.contains(&model_id) {
            return Err(TransportError::Status { status: 500, detail: None });
        }
        Ok(self.benchmarks.get(&model_id).cloned().unwrap_or_default())
    }

    async fn current_pricing_for(&self, model_id: Id) -> Result<Vec<Pricing>, TransportError> {
        self.price_calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.pricing.get(&model_id).cloned().unwrap_or_default())
    }
}

fn model(id: Id, name: &str) -> Model {
    Model { id, name: name.into(), provider_id: 1, ..Model::default() }
}

fn bench(id: Id, model_id: Id, name: &str, score: f64) -> Benchmark {
    Benchmark {
        id,
        model_id,
        benchmark_name: name.into(),
        score: Some(score),
        ..Benchmark::default()
    }
}

fn price(id: Id, model_id: Id, amount: f64) -> Pricing {
    Pricing {
        id,
        model_id,
        price_type: PriceType::InputTokens,
        price: amount,
        currency: Currency::Usd,
        unit: PriceUnit::Per1kTokens,
        valid_from: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
        valid_to: None,
        source_url: None,
        created_at: String::new(),
        updated_at: None,
    }
}

fn item(id: Id, table: Id, model_id: Id, order: i32) -> ComparisonItem {
    ComparisonItem {
        id,
        comparison_table_id: table,
        model_id,
        display_order: order,
        created_at: String::new(),
    }
}

fn table(id: Id, items: Vec<ComparisonItem>) -> ComparisonTable {
    ComparisonTable { id, name: format!("Table {id}"), items, ..ComparisonTable::default() }
}

/// Model A (MMLU=88) and model B (MMLU=91, GSM8K=95) in table 7.
fn two_model_source() -> FakeSource {
    let mut src = FakeSource::default();
    src.tables.insert(7, table(7, vec![item(1, 7, 10, 0), item(2, 7, 20, 1)]));
    src.models.insert(10, model(10, "A"));
    src.models.insert(20, model(20, "B"));
    src.benchmarks.insert(10, vec![bench(100, 10, "MMLU", 88.0)]);
    src.benchmarks.insert(20, vec![bench(200, 20, "MMLU", 91.0), bench(201, 20, "GSM8K", 95.0)]);
    src.pricing.insert(10, vec![price(1000, 10, 0.01)]);
    src
}

#[tokio::test]
async fn pivot_rows_are_sorted_union_with_dash_for_missing() {
    let src = two_model_source();
    let detail = aggregate(&src, 7).await.unwrap();
    let pivot = detail.pivot();

    assert_eq!(pivot.row_names(), vec!["GSM8K", "MMLU"]);
    assert_eq!(pivot.columns.len(), 2);
    assert_eq!(pivot.columns[0].model_name, "A");
    assert_eq!(pivot.columns[1].model_name, "B");

    assert_eq!(pivot.text_at("GSM8K", 20), "95");
    assert_eq!(pivot.text_at("GSM8K", 10), "-");
    assert_eq!(pivot.text_at("MMLU", 10), "88");
    assert_eq!(pivot.text_at("MMLU", 20), "91");

    assert_eq!(detail.pricing_for(10).len(), 1);
    assert!(detail.pricing_for(20).is_empty());
}

#[tokio::test]
async fn every_model_is_fetched_once() {
    let src = two_model_source();
    aggregate(&src, 7).await.unwrap();
    assert_eq!(src.model_calls.load(Ordering::SeqCst), 2);
    assert_eq!(src.bench_calls.load(Ordering::SeqCst), 2);
    assert_eq!(src.price_calls.load(Ordering::SeqCst), 2);
}

#[tokio::test]
async fn columns_follow_display_order() {
    let mut src = two_model_source();
    src.tables.insert(7, table(7, vec![item(1, 7, 10, 5), item(2, 7, 20, 1)]));

    let pivot = aggregate(&src, 7).await.unwrap().pivot();
    let names: Vec<_> = pivot.columns.iter().map(|c| c.model_name.as_str()).collect();
    assert_eq!(names, vec!["B", "A"]);
}

#[tokio::test]
async fn table_without_items_fetches_nothing_else() {
    let mut src = FakeSource::default();
    src.tables.insert(3, table(3, Vec::new()));

    let detail = aggregate(&src, 3).await.unwrap();
    assert!(detail.is_empty());
    assert!(detail.pivot().rows.is_empty());
    assert_eq!(src.model_calls.load(Ordering::SeqCst), 0);
    assert_eq!(src.bench_calls.load(Ordering::SeqCst), 0);
    assert_eq!(src.price_calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn any_failed_fetch_fails_the_whole_detail() {
    let mut src = two_model_source();
    src.broken.push(20);
    let err = aggregate(&src, 7).await.unwrap_err();
    assert_eq!(err.status(), Some(500));
}

#[tokio::test]
async fn missing_model_fails_before_benchmarks_are_fetched() {
    let mut src = two_model_source();
    src.models.remove(&20);
    let err = aggregate(&src, 7).await.unwrap_err();
    assert!(err.is_not_found());
    assert_eq!(src.bench_calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn unknown_table_is_not_found() {
    let src = FakeSource::default();
    let err = aggregate(&src, 99).await.unwrap_err();
    assert!(err.is_not_found());
    assert_eq!(err.detail(), Some("Not found"));
}

#[tokio::test]
async fn duplicate_benchmark_names_show_the_first() {
    let mut src = two_model_source();
    src.benchmarks.insert(10, vec![bench(100, 10, "MMLU", 88.0), bench(101, 10, "MMLU", 70.0)]);

    let detail = aggregate(&src, 7).await.unwrap();
    assert_eq!(detail.cell("MMLU", 10).map(|b| b.id), Some(100));
    assert_eq!(detail.pivot().text_at("MMLU", 10), "88");
    assert_eq!(detail.all_benchmark_names(), vec!["GSM8K", "MMLU"]);
}

#[tokio::test]
async fn score_units_are_shown_next_to_the_score() {
    let mut src = two_model_source();
    let mut b = bench(100, 10, "MMLU", 88.5);
    b.unit = Some("accuracy".into());
    src.benchmarks.insert(10, vec![b]);

    let pivot = aggregate(&src, 7).await.unwrap().pivot();
    assert_eq!(pivot.text_at("MMLU", 10), "88.5 (accuracy)");
}

#[tokio::test]
async fn gather_all_keeps_input_order() {
    let out: Result<Vec<u32>, String> = gather_all((1..=5u32).map(|n| async move {
        // later inputs finish first
        tokio::time::sleep(std::time::Duration::from_millis(u64::from(6 - n) * 5)).await;
        Ok::<u32, String>(n * 10)
    }))
    .await;
    assert_eq!(out.unwrap(), vec![10, 20, 30, 40, 50]);
}

#[tokio::test]
async fn gather_all_of_nothing_is_empty() {
    let out: Result<Vec<u32>, String> =
        gather_all(Vec::<std::future::Ready<Result<u32, String>>>::new()).await;
    assert_eq!(out.unwrap(), Vec::<u32>::new());
}

#[tokio::test]
async fn gather_all_returns_the_first_error() {
    let out: Result<Vec<u32>, String> = gather_all((1..=3u32).map(|n| async move {
        if n == 2 { Err(format!("boom {n}")) } else { Ok(n) }
    }))
    .await;
    assert_eq!(out.unwrap_err(), "boom 2");
}
