// src/forms/benchmark.rs
use crate::error::ValidationError;
use crate::types::{Id, NewBenchmark};

use super::{optional_date, optional_number, optional_text, required, Draft};

#[derive(Clone, Debug, Default, PartialEq)]
pub struct BenchmarkDraft {
    pub model_id: Option<Id>,
    /// Free text; `COMMON_BENCHMARKS` are offered as suggestions.
    pub benchmark_name: String,
    pub score: String,
    pub unit: String,
    pub test_date: String,
    pub source_url: String,
    pub notes: String,
}

impl BenchmarkDraft {
    /// Draft opened from a model's row.
    pub fn for_model(model_id: Id) -> Self {
        Self { model_id: Some(model_id), ..Self::default() }
    }
}

impl Draft for BenchmarkDraft {
    type Request = NewBenchmark;
    const FAILURE: &'static str = "Failed to create benchmark";

    fn validate(&self) -> Result<NewBenchmark, ValidationError> {
        let model_id = self.model_id.ok_or(ValidationError::Missing("Model"))?;
        let benchmark_name = required("Benchmark name", &self.benchmark_name)?;
        Ok(NewBenchmark {
            model_id,
            benchmark_name: s!(benchmark_name),
            score: optional_number("Score", &self.score)?,
            unit: optional_text(&self.unit),
            test_date: optional_date("Test date", &self.test_date)?,
            source_url: optional_text(&self.source_url),
            notes: optional_text(&self.notes),
        })
    }
}
