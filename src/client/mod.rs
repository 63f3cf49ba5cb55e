// src/client/mod.rs
//! Typed client for the catalog backend. One method per entity and verb, one
//! round trip each. No retries; errors surface to the caller unchanged.

pub mod query;

use async_trait::async_trait;
use reqwest::{Client, Url};
use serde::{de::DeserializeOwned, Serialize};

use crate::aggregate::ComparisonSource;
use crate::config::options::ApiOptions;
use crate::core::net;
use crate::error::TransportError;
use crate::types::*;

pub use query::{BenchmarkQuery, ComparisonQuery, ModelQuery, PricingQuery};

type Result<T> = std::result::Result<T, TransportError>;

/// Cheap to clone; clones share the connection pool.
#[derive(Clone, Debug)]
pub struct ApiClient {
    http: Client,
    root: Url,
}

impl ApiClient {
    /// `origin` is the backend origin without the `/api` prefix.
    pub fn new(origin: &str) -> Result<Self> {
        let root = net::api_root(origin)?;
        let http = Client::builder()
            .user_agent(concat!("llm_catalog/", env!("CARGO_PKG_VERSION")))
            .build()?;
        logd!("API root: {root}");
        Ok(Self { http, root })
    }

    pub fn from_options(opts: &ApiOptions) -> Result<Self> {
        Self::new(&opts.base_url)
    }

    pub fn root(&self) -> &Url {
        &self.root
    }

    /* ---------- plumbing ---------- */

    async fn get<T: DeserializeOwned>(&self, path: &str, query: &[(&str, Option<String>)]) -> Result<T> {
        let url = net::endpoint(&self.root, path, query)?;
        logd!("GET {url}");
        net::read_json(self.http.get(url).send().await?).await
    }

    async fn post<B: Serialize + ?Sized, T: DeserializeOwned>(&self, path: &str, body: &B) -> Result<T> {
        let url = net::endpoint(&self.root, path, &[])?;
        logd!("POST {url}");
        net::read_json(self.http.post(url).json(body).send().await?).await
    }

    async fn put<B: Serialize + ?Sized, T: DeserializeOwned>(&self, path: &str, body: &B) -> Result<T> {
        let url = net::endpoint(&self.root, path, &[])?;
        logd!("PUT {url}");
        net::read_json(self.http.put(url).json(body).send().await?).await
    }

    /// The response body (a confirmation message) is ignored.
    async fn delete(&self, path: &str) -> Result<()> {
        let url = net::endpoint(&self.root, path, &[])?;
        logd!("DELETE {url}");
        net::check(self.http.delete(url).send().await?).await.map(|_| ())
    }

    /* ---------- providers ---------- */

    pub async fn list_providers(&self) -> Result<Vec<Provider>> {
        self.get("providers/", &[]).await
    }

    pub async fn get_provider(&self, id: Id) -> Result<Provider> {
        self.get(&format!("providers/{id}"), &[]).await
    }

    pub async fn create_provider(&self, new: &NewProvider) -> Result<Provider> {
        self.post("providers/", new).await
    }

    pub async fn update_provider(&self, id: Id, patch: &ProviderUpdate) -> Result<Provider> {
        self.put(&format!("providers/{id}"), patch).await
    }

    pub async fn delete_provider(&self, id: Id) -> Result<()> {
        self.delete(&format!("providers/{id}")).await
    }

    /* ---------- models ---------- */

    pub async fn list_models(&self, q: &ModelQuery) -> Result<Vec<Model>> {
        self.get("models/", &q.pairs()).await
    }

    pub async fn get_model(&self, id: Id) -> Result<Model> {
        self.get(&format!("models/{id}"), &[]).await
    }

    pub async fn create_model(&self, new: &NewModel) -> Result<Model> {
        self.post("models/", new).await
    }

    pub async fn update_model(&self, id: Id, patch: &ModelUpdate) -> Result<Model> {
        self.put(&format!("models/{id}"), patch).await
    }

    pub async fn delete_model(&self, id: Id) -> Result<()> {
        self.delete(&format!("models/{id}")).await
    }

    /* ---------- benchmarks ---------- */

    pub async fn list_benchmarks(&self, q: &BenchmarkQuery) -> Result<Vec<Benchmark>> {
        self.get("benchmarks/", &q.pairs()).await
    }

    pub async fn get_benchmark(&self, id: Id) -> Result<Benchmark> {
        self.get(&format!("benchmarks/{id}"), &[]).await
    }

    pub async fn create_benchmark(&self, new: &NewBenchmark) -> Result<Benchmark> {
        self.post("benchmarks/", new).await
    }

    pub async fn update_benchmark(&self, id: Id, patch: &BenchmarkUpdate) -> Result<Benchmark> {
        self.put(&format!("benchmarks/{id}"), patch).await
    }

    pub async fn delete_benchmark(&self, id: Id) -> Result<()> {
        self.delete(&format!("benchmarks/{id}")).await
    }

    /* ---------- pricing ---------- */

    pub async fn list_pricing(&self, q: &PricingQuery) -> Result<Vec<Pricing>> {
        self.get("pricing/", &q.pairs()).await
    }

    /// Rows the server considers valid today, optionally for one model.
    pub async fn current_pricing(&self, model_id: Option<Id>) -> Result<Vec<Pricing>> {
        self.get("pricing/current", &[("model_id", model_id.map(|id| id.to_string()))]).await
    }

    pub async fn get_pricing(&self, id: Id) -> Result<Pricing> {
        self.get(&format!("pricing/{id}"), &[]).await
    }

    pub async fn create_pricing(&self, new: &NewPricing) -> Result<Pricing> {
        self.post("pricing/", new).await
    }

    pub async fn update_pricing(&self, id: Id, patch: &PricingUpdate) -> Result<Pricing> {
        self.put(&format!("pricing/{id}"), patch).await
    }

    pub async fn delete_pricing(&self, id: Id) -> Result<()> {
        self.delete(&format!("pricing/{id}")).await
    }

    /* ---------- comparisons ---------- */

    pub async fn list_comparisons(&self, q: &ComparisonQuery) -> Result<Vec<ComparisonTable>> {
        self.get("comparisons/", &q.pairs()).await
    }

    /// Includes the table's items.
    pub async fn get_comparison(&self, id: Id) -> Result<ComparisonTable> {
        self.get(&format!("comparisons/{id}"), &[]).await
    }

    pub async fn create_comparison(&self, new: &NewComparison) -> Result<ComparisonTable> {
        self.post("comparisons/", new).await
    }

    pub async fn update_comparison(&self, id: Id, patch: &ComparisonUpdate) -> Result<ComparisonTable> {
        self.put(&format!("comparisons/{id}"), patch).await
    }

    pub async fn delete_comparison(&self, id: Id) -> Result<()> {
        self.delete(&format!("comparisons/{id}")).await
    }

    pub async fn add_comparison_item(&self, table_id: Id, model_id: Id, display_order: i32) -> Result<ComparisonItem> {
        let body = NewComparisonItem { comparison_table_id: table_id, model_id, display_order };
        self.post(&format!("comparisons/{table_id}/items"), &body).await
    }

    pub async fn remove_comparison_item(&self, table_id: Id, item_id: Id) -> Result<()> {
        self.delete(&format!("comparisons/{table_id}/items/{item_id}")).await
    }

    /* ---------- scraper ---------- */

    /// Starts a server-side scrape. A `success: false` payload is still `Ok`.
    pub async fn scrape_url(&self, req: &ScrapeRequest) -> Result<ScrapeResult> {
        self.post("scraper/scrape-url", req).await
    }

    pub async fn list_web_sources(&self) -> Result<Vec<WebSource>> {
        self.get("scraper/web-sources", &[]).await
    }

    /// The route reads `url` and `source_type` from the query string.
    pub async fn add_web_source(&self, url: &str, source_type: &SourceType) -> Result<WebSource> {
        let target = net::endpoint(
            &self.root,
            "scraper/web-sources",
            &[("url", Some(s!(url))), ("source_type", Some(source_type.to_string()))],
        )?;
        logd!("POST {target}");
        net::read_json(self.http.post(target).send().await?).await
    }

    pub async fn delete_web_source(&self, id: Id) -> Result<()> {
        self.delete(&format!("scraper/web-sources/{id}")).await
    }
}

#[async_trait]
impl ComparisonSource for ApiClient {
    async fn comparison(&self, id: Id) -> Result<ComparisonTable> {
        self.get_comparison(id).await
    }

    async fn model(&self, id: Id) -> Result<Model> {
        self.get_model(id).await
    }

    async fn benchmarks_for(&self, model_id: Id) -> Result<Vec<Benchmark>> {
        self.list_benchmarks(&BenchmarkQuery::for_model(model_id)).await
    }

    async fn current_pricing_for(&self, model_id: Id) -> Result<Vec<Pricing>> {
        self.current_pricing(Some(model_id)).await
    }
}
