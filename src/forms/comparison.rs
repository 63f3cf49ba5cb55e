// src/forms/comparison.rs
use crate::config::consts::MIN_COMPARISON_MODELS;
use crate::error::ValidationError;
use crate::types::{Id, NewComparison};

use super::{optional_text, required, Draft};

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ComparisonDraft {
    pub name: String,
    pub description: String,
    pub is_public: bool,
    /// Staged models, in the order they were added. Never holds duplicates.
    staged: Vec<Id>,
}

impl ComparisonDraft {
    pub fn staged(&self) -> &[Id] {
        &self.staged
    }

    /// Returns false if the model was already staged.
    pub fn stage(&mut self, model_id: Id) -> bool {
        if self.staged.contains(&model_id) {
            return false;
        }
        self.staged.push(model_id);
        true
    }

    pub fn unstage(&mut self, model_id: Id) {
        self.staged.retain(|&id| id != model_id);
    }

    pub fn is_staged(&self, model_id: Id) -> bool {
        self.staged.contains(&model_id)
    }
}

impl Draft for ComparisonDraft {
    type Request = NewComparison;
    const FAILURE: &'static str = "Failed to create comparison";

    /// The model count is checked before anything else.
    fn validate(&self) -> Result<NewComparison, ValidationError> {
        if self.staged.len() < MIN_COMPARISON_MODELS {
            return Err(ValidationError::TooFewModels { staged: self.staged.len() });
        }
        let name = required("Comparison name", &self.name)?;
        Ok(NewComparison {
            name: s!(name),
            description: optional_text(&self.description),
            model_ids: self.staged.clone(),
            is_public: self.is_public,
        })
    }
}
