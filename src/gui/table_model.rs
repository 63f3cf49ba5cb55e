// src/gui/table_model.rs
//! TableData: string cells ready for `data_table::draw`.
//!
//! Each constructor projects one view's entities into display rows and keeps
//! the entity id of every row in `keys`, so clicks map back to ids without
//! the table knowing what it shows. Filtering has already happened in the
//! view; this only formats.

use crate::types::{display_date, Id, Model, Pricing};
use crate::views::{ComparisonsView, ModelsView, ScraperView};

#[derive(Clone, Debug, Default)]
pub struct TableData {
    pub headers: Vec<&'static str>,
    pub rows: Vec<Vec<String>>,
    /// Entity id per row.
    pub keys: Vec<Id>,
    /// Starting column widths.
    pub widths: Vec<f32>,
    /// Columns drawn centered.
    pub numeric: Vec<usize>,
}

fn or_dash(v: Option<String>) -> String {
    v.unwrap_or_else(|| s!("-"))
}

impl TableData {
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn ncols(&self) -> usize {
        self.headers.len()
    }

    pub fn nrows(&self) -> usize {
        self.rows.len()
    }

    /// The searched subset of the models view.
    pub fn models(view: &ModelsView) -> Self {
        let visible = view.visible();
        let mut t = Self {
            headers: vec!["Model", "Provider", "Type", "Context", "Released", "Benchmarks", "Pricing"],
            widths: vec![200.0, 130.0, 90.0, 130.0, 90.0, 80.0, 70.0],
            numeric: vec![5, 6],
            ..Self::default()
        };
        for m in visible {
            t.keys.push(m.id);
            t.rows.push(vec![
                m.name.clone(),
                or_dash(view.provider_name(m).map(str::to_string)),
                or_dash(m.model_type.as_ref().map(|x| s!(x.label()))),
                or_dash(m.context_label()),
                or_dash(m.release_date.map(|d| d.to_string())),
                m.benchmarks.len().to_string(),
                m.pricing.len().to_string(),
            ]);
        }
        t
    }

    pub fn comparisons(view: &ComparisonsView) -> Self {
        let mut t = Self {
            headers: vec!["Name", "Visibility", "Created"],
            widths: vec![180.0, 70.0, 90.0],
            ..Self::default()
        };
        for c in view.tables() {
            t.keys.push(c.id);
            t.rows.push(vec![
                c.name.clone(),
                s!(c.visibility_label()),
                display_date(&c.created_at),
            ]);
        }
        t
    }

    pub fn web_sources(view: &ScraperView) -> Self {
        let mut t = Self {
            headers: vec!["URL", "Type", "Active", "Last scraped", "Every (h)"],
            widths: vec![320.0, 80.0, 60.0, 100.0, 70.0],
            numeric: vec![2, 4],
            ..Self::default()
        };
        for s in view.sources() {
            t.keys.push(s.id);
            t.rows.push(vec![
                s.url.clone(),
                s!(s.source_type.label()),
                s!(if s.is_active { "yes" } else { "no" }),
                s.last_scraped.as_deref().map(display_date).unwrap_or_else(|| s!("Never")),
                s.scraping_interval_hours.to_string(),
            ]);
        }
        t
    }

    /// Benchmark rows embedded in one model record.
    pub fn model_benchmarks(m: &Model) -> Self {
        let mut t = Self {
            headers: vec!["Benchmark", "Score", "Unit", "Tested"],
            widths: vec![120.0, 70.0, 90.0, 90.0],
            numeric: vec![1],
            ..Self::default()
        };
        for b in &m.benchmarks {
            t.keys.push(m.id);
            t.rows.push(vec![
                b.benchmark_name.clone(),
                or_dash(b.score.map(crate::types::fmt_number)),
                or_dash(b.unit.clone()),
                or_dash(b.test_date.map(|d| d.to_string())),
            ]);
        }
        t
    }

    /// Pricing rows embedded in one model record.
    pub fn model_pricing(m: &Model) -> Self {
        let mut t = Self {
            headers: vec!["Type", "Price", "Unit", "From", "To"],
            widths: vec![110.0, 90.0, 110.0, 90.0, 90.0],
            numeric: vec![1],
            ..Self::default()
        };
        for p in &m.pricing {
            t.keys.push(m.id);
            t.rows.push(vec![
                s!(p.price_type.label()),
                format!("{} {}", crate::types::fmt_number(p.price), p.currency),
                s!(p.unit.label()),
                p.valid_from.to_string(),
                or_dash(p.valid_to.map(|d| d.to_string())),
            ]);
        }
        t
    }

    /// Current pricing of one comparison column.
    pub fn current_pricing(model_id: Id, rows: &[Pricing]) -> Self {
        let mut t = Self {
            headers: vec!["Type", "Price", "Unit"],
            widths: vec![110.0, 100.0, 110.0],
            numeric: vec![1],
            ..Self::default()
        };
        for p in rows {
            t.keys.push(model_id);
            t.rows.push(vec![s!(p.price_type.label()), p.price_label(), s!(p.unit.label())]);
        }
        t
    }
}
