// src/forms/model.rs
use crate::error::{TransportError, ValidationError};
use crate::types::{Id, ModelType, NewModel, NewProvider, Provider};

use super::{optional_date, optional_text, required, Draft, FormState};

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ModelDraft {
    pub name: String,
    pub provider_id: Option<Id>,
    pub model_type: Option<ModelType>,
    pub description: String,
    pub release_date: String,
    pub context_window: String,

    /// Inline "new provider" field.
    pub new_provider_name: String,
    pub creating_provider: bool,
}

impl Draft for ModelDraft {
    type Request = NewModel;
    const FAILURE: &'static str = "Failed to create model";

    fn validate(&self) -> Result<NewModel, ValidationError> {
        let name = required("Model name", &self.name)?;
        let provider_id = self.provider_id.ok_or(ValidationError::Missing("Provider"))?;
        let release_date = optional_date("Release date", &self.release_date)?;
        let context_window = match self.context_window.trim() {
            "" => None,
            v => match v.parse::<u64>() {
                Ok(0) => return Err(ValidationError::OutOfRange("Context window")),
                Ok(n) => Some(n),
                Err(_) => return Err(ValidationError::NotANumber("Context window")),
            },
        };
        Ok(NewModel {
            name: s!(name),
            provider_id,
            model_type: self.model_type.clone(),
            description: optional_text(&self.description),
            release_date,
            context_window,
        })
    }
}

impl FormState<ModelDraft> {
    /// Validate the inline provider name and mark the provider as being
    /// created. The rest of the draft is not touched.
    pub fn begin_provider(&mut self) -> Result<NewProvider, ValidationError> {
        let name = required("Provider name", &self.draft.new_provider_name)?;
        self.draft.creating_provider = true;
        Ok(NewProvider { name: s!(name), ..NewProvider::default() })
    }

    /// The inline provider came back: pre-select it and hand it to the caller
    /// so the provider list can show it. On failure the form shows why.
    pub fn finish_provider(&mut self, result: Result<Provider, TransportError>) -> Option<Provider> {
        self.draft.creating_provider = false;
        match result {
            Ok(p) => {
                logf!("created provider {} ({})", p.name, p.id);
                self.draft.provider_id = Some(p.id);
                self.draft.new_provider_name.clear();
                Some(p)
            }
            Err(e) => {
                loge!("Error creating provider: {e}");
                let msg = e.detail().map(str::to_string).unwrap_or_else(|| s!("Failed to create provider"));
                self.set_error(msg);
                None
            }
        }
    }
}
