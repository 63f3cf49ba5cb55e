// tests/list_views.rs
//
// View state without any UI or network: results are handed in directly.

use llm_catalog::aggregate::ComparisonDetail;
use llm_catalog::error::TransportError;
use llm_catalog::types::*;
use llm_catalog::views::{ComparisonsView, DetailState, ModelsView, ScrapeOutcome, ScraperView};

fn provider(id: Id, name: &str) -> Provider {
    Provider { id, name: name.into(), ..Provider::default() }
}

fn model(id: Id, name: &str, provider_id: Id) -> Model {
    Model { id, name: name.into(), provider_id, ..Model::default() }
}

fn comparison(id: Id, name: &str) -> ComparisonTable {
    ComparisonTable { id, name: name.into(), ..ComparisonTable::default() }
}

fn source(id: Id, url: &str) -> WebSource {
    WebSource {
        id,
        url: url.into(),
        source_type: SourceType::Both,
        is_active: true,
        last_scraped: None,
        scraping_interval_hours: 24,
        created_at: String::new(),
        updated_at: None,
    }
}

fn server_error(status: u16, detail: Option<&str>) -> TransportError {
    TransportError::Status { status, detail: detail.map(String::from) }
}

fn loaded_models() -> ModelsView {
    let mut v = ModelsView::new();
    let t = v.begin_load();
    v.apply_models(t, Ok(vec![
        model(1, "GPT-4o", 1),
        model(2, "Claude 3.5 Sonnet", 2),
        model(3, "Gemini 1.5 Pro", 3),
    ]));
    let t = v.begin_providers_load();
    v.apply_providers(t, Ok(vec![
        provider(1, "OpenAI"),
        provider(2, "Anthropic"),
        provider(3, "Google"),
    ]));
    v
}

fn names(v: &ModelsView) -> Vec<&str> {
    v.visible().iter().map(|m| m.name.as_str()).collect()
}

/* ---------- models ---------- */

#[test]
fn search_matches_model_or_provider_name_ignoring_case() {
    let mut v = loaded_models();

    v.search = "gpt".into();
    assert_eq!(names(&v), vec!["GPT-4o"]);

    v.search = "ANTHROPIC".into();
    assert_eq!(names(&v), vec!["Claude 3.5 Sonnet"]);

    v.search = "o".into();
    assert_eq!(names(&v).len(), 3);
}

#[test]
fn search_never_changes_the_fetched_collection() {
    let mut v = loaded_models();

    v.search = "gemini".into();
    assert_eq!(names(&v), vec!["Gemini 1.5 Pro"]);
    assert_eq!(v.models().len(), 3);

    v.search.clear();
    assert_eq!(names(&v), vec!["GPT-4o", "Claude 3.5 Sonnet", "Gemini 1.5 Pro"]);
}

#[test]
fn embedded_provider_wins_over_provider_list() {
    let mut v = ModelsView::new();
    let mut m = model(1, "Llama 3", 9);
    m.provider = Some(provider(9, "Meta"));
    let t = v.begin_load();
    v.apply_models(t, Ok(vec![m]));

    v.search = "meta".into();
    assert_eq!(names(&v), vec!["Llama 3"]);
}

#[test]
fn server_filters_end_up_in_the_query() {
    let mut v = ModelsView::new();
    assert!(v.set_provider_filter(Some(3)));
    assert!(!v.set_provider_filter(Some(3)));
    assert!(v.set_type_filter(Some(ModelType::Multimodal)));

    let q = v.query();
    assert_eq!(q.provider_id, Some(3));
    assert_eq!(q.model_type, Some(ModelType::Multimodal));
}

#[test]
fn stale_model_load_is_discarded() {
    let mut v = ModelsView::new();
    let old = v.begin_load();
    let new = v.begin_load();

    v.apply_models(new, Ok(vec![model(2, "fresh", 1)]));
    v.apply_models(old, Ok(vec![model(1, "stale", 1)]));

    assert_eq!(v.models().len(), 1);
    assert_eq!(v.models()[0].name, "fresh");
    assert!(!v.is_loading());
}

#[test]
fn leaving_the_page_drops_in_flight_loads() {
    let mut v = ModelsView::new();
    let t = v.begin_load();
    v.leave();
    v.apply_models(t, Ok(vec![model(1, "late", 1)]));
    assert!(v.models().is_empty());
}

#[test]
fn failed_load_keeps_previous_models() {
    let mut v = loaded_models();
    let t = v.begin_load();
    v.apply_models(t, Err(server_error(500, None)));
    assert_eq!(v.models().len(), 3);
    assert!(v.error.is_some());
}

#[test]
fn model_delete_waits_for_confirmation() {
    let mut v = loaded_models();
    v.selected = Some(2);

    v.delete.request(2);
    v.delete.cancel();
    assert_eq!(v.delete.confirm(), None);
    assert_eq!(v.models().len(), 3);

    v.delete.request(2);
    let id = v.delete.confirm().unwrap();
    v.apply_deleted(id, Ok(()));
    assert_eq!(v.models().len(), 2);
    assert_eq!(v.selected, None);
}

#[test]
fn refused_model_delete_shows_server_detail() {
    let mut v = loaded_models();
    v.apply_deleted(1, Err(server_error(409, Some("Model is used by a comparison"))));
    assert_eq!(v.models().len(), 3);
    assert_eq!(v.error.as_deref(), Some("Model is used by a comparison"));
}

/* ---------- comparisons ---------- */

fn loaded_comparisons() -> ComparisonsView {
    let mut v = ComparisonsView::new();
    let t = v.begin_load();
    v.apply_tables(t, Ok(vec![comparison(1, "Frontier"), comparison(2, "Small models")]));
    v
}

fn ready_detail(id: Id) -> ComparisonDetail {
    ComparisonDetail { table: comparison(id, "Frontier"), ..ComparisonDetail::default() }
}

#[test]
fn selecting_a_table_shows_loading_then_detail() {
    let mut v = loaded_comparisons();
    let t = v.select(1);
    assert_eq!(v.detail(), &DetailState::Loading);

    v.apply_detail(t, Ok(ready_detail(1)));
    assert_eq!(v.detail().detail().map(|d| d.table.id), Some(1));
    assert_eq!(v.selected_table().map(|t| t.name.as_str()), Some("Frontier"));
}

#[test]
fn detail_of_a_previous_selection_is_ignored() {
    let mut v = loaded_comparisons();
    let first = v.select(1);
    let second = v.select(2);

    v.apply_detail(first, Ok(ready_detail(1)));
    assert_eq!(v.detail(), &DetailState::Loading);

    v.apply_detail(second, Ok(ready_detail(2)));
    assert_eq!(v.detail().detail().map(|d| d.table.id), Some(2));
}

#[test]
fn detail_failure_shows_one_generic_message() {
    let mut v = loaded_comparisons();
    let t = v.select(1);
    v.apply_detail(t, Err(server_error(500, Some("db down"))));
    assert_eq!(v.detail(), &DetailState::Failed("Failed to load comparison details".into()));
}

#[test]
fn deleting_the_selected_table_clears_the_detail() {
    let mut v = loaded_comparisons();
    let t = v.select(1);
    v.apply_detail(t, Ok(ready_detail(1)));

    v.delete.request(1);
    let id = v.delete.confirm().unwrap();
    v.apply_deleted(id, Ok(()));

    assert_eq!(v.tables().len(), 1);
    assert_eq!(v.selected(), None);
    assert_eq!(v.detail(), &DetailState::Idle);
}

#[test]
fn deleting_another_table_keeps_the_detail() {
    let mut v = loaded_comparisons();
    let t = v.select(1);
    v.apply_detail(t, Ok(ready_detail(1)));

    v.apply_deleted(2, Ok(()));
    assert_eq!(v.selected(), Some(1));
    assert!(v.detail().detail().is_some());
}

#[test]
fn detail_arriving_after_delete_is_dropped() {
    let mut v = loaded_comparisons();
    let t = v.select(1);
    v.apply_deleted(1, Ok(()));
    v.apply_detail(t, Ok(ready_detail(1)));
    assert_eq!(v.detail(), &DetailState::Idle);
}

/* ---------- scraper ---------- */

#[test]
fn scrape_without_url_is_rejected_locally() {
    let mut v = ScraperView::new();
    assert!(v.begin_scrape().is_err());
    assert!(!v.is_scraping());
}

#[test]
fn scrape_request_carries_the_draft() {
    let mut v = ScraperView::new();
    v.draft.url = "  https://example.com/pricing ".into();
    v.draft.data_type = ScrapeDataType::Pricing;
    v.draft.model_name = "GPT-4o".into();

    let req = v.begin_scrape().unwrap();
    assert!(v.is_scraping());
    assert_eq!(req.url, "https://example.com/pricing");
    assert_eq!(req.data_type, ScrapeDataType::Pricing);
    assert_eq!(req.model_name.as_deref(), Some("GPT-4o"));
    assert_eq!(req.provider_name, None);
}

#[test]
fn scrape_reported_failure_shows_its_error_and_refetches() {
    let mut v = ScraperView::new();
    v.draft.url = "https://example.com".into();
    v.begin_scrape().unwrap();

    let payload = ScrapeResult { success: false, error: Some("timeout".into()), ..ScrapeResult::default() };
    assert!(v.finish_scrape(Ok(payload)));
    assert_eq!(v.outcome(), Some(&ScrapeOutcome::Failed("timeout".into())));
    assert!(!v.is_scraping());
}

#[test]
fn scrape_transport_failure_shows_fallback_and_skips_refetch() {
    let mut v = ScraperView::new();
    v.draft.url = "https://example.com".into();
    v.begin_scrape().unwrap();

    assert!(!v.finish_scrape(Err(server_error(502, None))));
    assert_eq!(
        v.outcome(),
        Some(&ScrapeOutcome::Failed(
            "Failed to scrape URL. Please check the URL and try again.".into()
        ))
    );
}

#[test]
fn scrape_success_pretty_prints_raw_response() {
    let mut v = ScraperView::new();
    v.draft.url = "https://example.com".into();
    v.begin_scrape().unwrap();

    let payload = ScrapeResult {
        success: true,
        data: Some(serde_json::json!({ "raw_response": "{\"price\":1}" })),
        ..ScrapeResult::default()
    };
    assert!(v.finish_scrape(Ok(payload)));
    match v.outcome() {
        Some(ScrapeOutcome::Succeeded(Some(text))) => {
            assert!(text.contains("\"price\": 1"));
        }
        other => panic!("unexpected outcome {other:?}"),
    }
}

#[test]
fn web_source_delete_removes_only_that_row() {
    let mut v = ScraperView::new();
    let t = v.begin_sources_load();
    v.apply_sources(t, Ok(vec![source(1, "https://a.example"), source(2, "https://b.example")]));

    v.delete.request(1);
    let id = v.delete.confirm().unwrap();
    v.apply_deleted(id, Ok(()));

    let urls: Vec<_> = v.sources().iter().map(|s| s.url.as_str()).collect();
    assert_eq!(urls, vec!["https://b.example"]);
}

#[test]
fn tracked_url_defaults_to_both() {
    let mut v = ScraperView::new();
    assert!(v.new_source().is_err());

    v.new_source_url = "https://example.com/models".into();
    let (url, kind) = v.new_source().unwrap();
    assert_eq!(url, "https://example.com/models");
    assert_eq!(kind, SourceType::Both);

    // the list comes from the next fetch, not from the POST reply
    assert!(v.apply_source_added(Ok(source(5, "https://example.com/models"))));
    assert!(v.sources().is_empty());
    assert!(v.new_source_url.is_empty());

    let t = v.begin_sources_load();
    v.apply_sources(t, Ok(vec![source(5, "https://example.com/models")]));
    assert_eq!(v.sources().len(), 1);
}

#[test]
fn failed_source_add_keeps_input_and_skips_refetch() {
    let mut v = ScraperView::new();
    v.new_source_url = "https://example.com/models".into();

    assert!(!v.apply_source_added(Err(server_error(400, Some("URL already tracked")))));
    assert_eq!(v.new_source_url, "https://example.com/models");
    assert_eq!(v.error.as_deref(), Some("URL already tracked"));
}
