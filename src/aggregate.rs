// src/aggregate.rs
//! Joins a comparison table with its models, their benchmarks and their
//! current pricing, and pivots the result into benchmark rows x model columns.

use std::collections::{BTreeSet, HashMap};
use std::future::Future;

use async_trait::async_trait;
use futures::future::try_join_all;

use crate::config::consts::NO_DATA;
use crate::error::TransportError;
use crate::types::{Benchmark, ComparisonTable, Id, Model, Pricing};

/// The four reads aggregation needs. `ApiClient` is the real one.
#[async_trait]
pub trait ComparisonSource: Send + Sync {
    /// Table detail, including its items.
    async fn comparison(&self, id: Id) -> Result<ComparisonTable, TransportError>;
    async fn model(&self, id: Id) -> Result<Model, TransportError>;
    async fn benchmarks_for(&self, model_id: Id) -> Result<Vec<Benchmark>, TransportError>;
    async fn current_pricing_for(&self, model_id: Id) -> Result<Vec<Pricing>, TransportError>;
}

/// Run a batch concurrently and collect the results in input order.
///
/// The first error fails the whole batch and is returned as soon as it
/// arrives; fetches still in flight are dropped and their results never
/// observed. An empty batch resolves immediately to an empty vec.
pub async fn gather_all<I, F, T, E>(batch: I) -> Result<Vec<T>, E>
where
    I: IntoIterator<Item = F>,
    F: Future<Output = Result<T, E>>,
{
    try_join_all(batch).await
}

/// Everything a pivot render needs, fetched in one go.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ComparisonDetail {
    pub table: ComparisonTable,
    /// Column order: item `display_order`, then server order.
    pub models: Vec<Model>,
    pub benchmarks_by_model: HashMap<Id, Vec<Benchmark>>,
    pub pricing_by_model: HashMap<Id, Vec<Pricing>>,
}

/// Fetch and join one comparison table.
///
/// 1. table detail (no items: stop here, nothing else is fetched)
/// 2. every item's model, concurrently
/// 3. benchmarks and current pricing per model, both batches concurrently
///
/// Columns are stably sorted by item `display_order`. The web frontend shows
/// items in server order instead; ties here keep server order.
///
/// Any failure aborts the whole thing; there is no partial detail.
pub async fn aggregate<S>(source: &S, table_id: Id) -> Result<ComparisonDetail, TransportError>
where
    S: ComparisonSource + ?Sized,
{
    let table = source.comparison(table_id).await?;
    if table.items.is_empty() {
        logd!("comparison {table_id}: no items");
        return Ok(ComparisonDetail { table, ..Default::default() });
    }

    let mut items = table.items.clone();
    items.sort_by_key(|it| it.display_order);

    let models = gather_all(items.iter().map(|it| source.model(it.model_id))).await?;

    let (benchmarks, pricing) = futures::try_join!(
        gather_all(models.iter().map(|m| source.benchmarks_for(m.id))),
        gather_all(models.iter().map(|m| source.current_pricing_for(m.id)))
    )?;

    let benchmarks_by_model = models.iter().map(|m| m.id).zip(benchmarks).collect();
    let pricing_by_model = models.iter().map(|m| m.id).zip(pricing).collect();

    logd!("comparison {table_id}: {} models joined", models.len());
    Ok(ComparisonDetail { table, models, benchmarks_by_model, pricing_by_model })
}

impl ComparisonDetail {
    /// Union of benchmark names over every model, deduplicated and sorted.
    pub fn all_benchmark_names(&self) -> Vec<String> {
        let names: BTreeSet<&str> = self
            .benchmarks_by_model
            .values()
            .flatten()
            .map(|b| b.benchmark_name.as_str())
            .collect();
        names.into_iter().map(str::to_string).collect()
    }

    /// First benchmark named `name` in the model's list; `None` means no data.
    /// Later duplicates of the same name are never shown.
    pub fn cell(&self, name: &str, model_id: Id) -> Option<&Benchmark> {
        self.benchmarks_by_model
            .get(&model_id)?
            .iter()
            .find(|b| b.benchmark_name == name)
    }

    pub fn pricing_for(&self, model_id: Id) -> &[Pricing] {
        self.pricing_by_model.get(&model_id).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn is_empty(&self) -> bool {
        self.models.is_empty()
    }

    pub fn pivot(&self) -> PivotTable {
        let columns = self
            .models
            .iter()
            .map(|m| PivotColumn {
                model_id: m.id,
                model_name: m.name.clone(),
                provider_name: m.provider_name().map(str::to_string),
            })
            .collect();

        let rows = self
            .all_benchmark_names()
            .into_iter()
            .map(|name| {
                let cells = self
                    .models
                    .iter()
                    .map(|m| self.cell(&name, m.id).map(Benchmark::score_label))
                    .collect();
                PivotRow { name, cells }
            })
            .collect();

        PivotTable { columns, rows }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct PivotTable {
    pub columns: Vec<PivotColumn>,
    pub rows: Vec<PivotRow>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct PivotColumn {
    pub model_id: Id,
    pub model_name: String,
    pub provider_name: Option<String>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct PivotRow {
    pub name: String,
    /// One per column; `None` is no data.
    pub cells: Vec<Option<String>>,
}

impl PivotRow {
    pub fn cell_text(&self, col: usize) -> &str {
        self.cells.get(col).and_then(|c| c.as_deref()).unwrap_or(NO_DATA)
    }
}

impl PivotTable {
    pub fn row_names(&self) -> Vec<&str> {
        self.rows.iter().map(|r| r.name.as_str()).collect()
    }

    pub fn column_index(&self, model_id: Id) -> Option<usize> {
        self.columns.iter().position(|c| c.model_id == model_id)
    }

    /// Cell text by benchmark name and model; "-" when either is absent.
    pub fn text_at(&self, name: &str, model_id: Id) -> &str {
        match (self.rows.iter().find(|r| r.name == name), self.column_index(model_id)) {
            (Some(row), Some(col)) => row.cell_text(col),
            _ => NO_DATA,
        }
    }
}
