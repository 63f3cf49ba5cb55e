// src/views/models.rs
use crate::client::ModelQuery;
use crate::error::TransportError;
use crate::types::{Id, Model, ModelType, Provider};

use super::{contains_ci, LoadSlot, PendingDelete, Ticket};

/// Models page state: the fetched models and providers, the server-side
/// filters that shape the fetch, and a client-side search over the result.
#[derive(Clone, Debug, Default)]
pub struct ModelsView {
    models: Vec<Model>,
    providers: Vec<Provider>,

    provider_filter: Option<Id>,
    type_filter: Option<ModelType>,
    /// Client-side only; never re-queries.
    pub search: String,

    pub selected: Option<Id>,
    pub delete: PendingDelete<Id>,
    pub error: Option<String>,

    load: LoadSlot,
    providers_load: LoadSlot,
}

impl ModelsView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn models(&self) -> &[Model] {
        &self.models
    }

    pub fn providers(&self) -> &[Provider] {
        &self.providers
    }

    pub fn is_loading(&self) -> bool {
        self.load.is_loading()
    }

    pub fn provider_filter(&self) -> Option<Id> {
        self.provider_filter
    }

    pub fn type_filter(&self) -> Option<&ModelType> {
        self.type_filter.as_ref()
    }

    /// Returns true when the filter changed and the list must be re-fetched.
    pub fn set_provider_filter(&mut self, provider: Option<Id>) -> bool {
        let changed = self.provider_filter != provider;
        self.provider_filter = provider;
        changed
    }

    pub fn set_type_filter(&mut self, model_type: Option<ModelType>) -> bool {
        let changed = self.type_filter != model_type;
        self.type_filter = model_type;
        changed
    }

    /// The list request for the current server-side filters.
    pub fn query(&self) -> ModelQuery {
        ModelQuery {
            provider_id: self.provider_filter,
            model_type: self.type_filter.clone(),
            ..ModelQuery::default()
        }
    }

    pub fn begin_load(&mut self) -> Ticket {
        self.load.begin()
    }

    pub fn begin_providers_load(&mut self) -> Ticket {
        self.providers_load.begin()
    }

    /// Page left: whatever is still in flight gets dropped on arrival.
    pub fn leave(&mut self) {
        self.load.invalidate();
        self.providers_load.invalidate();
    }

    /// Replace the collection wholesale. Stale results are ignored.
    pub fn apply_models(&mut self, ticket: Ticket, result: Result<Vec<Model>, TransportError>) {
        if !self.load.accept(ticket) {
            return;
        }
        match result {
            Ok(models) => {
                self.models = models;
                self.error = None;
                if let Some(sel) = self.selected {
                    if !self.models.iter().any(|m| m.id == sel) {
                        self.selected = None;
                    }
                }
            }
            Err(e) => {
                loge!("Error fetching models: {e}");
                self.error = Some(format!("Failed to load models: {e}"));
            }
        }
    }

    pub fn apply_providers(&mut self, ticket: Ticket, result: Result<Vec<Provider>, TransportError>) {
        if !self.providers_load.accept(ticket) {
            return;
        }
        match result {
            Ok(providers) => self.providers = providers,
            Err(e) => {
                loge!("Error fetching providers: {e}");
                self.error = Some(format!("Failed to load providers: {e}"));
            }
        }
    }

    /// A provider created inline by the model form.
    pub fn add_provider(&mut self, provider: Provider) {
        self.providers.retain(|p| p.id != provider.id);
        self.providers.push(provider);
    }

    /// Provider name for a model: embedded record first, then the provider list.
    pub fn provider_name<'a>(&'a self, m: &'a Model) -> Option<&'a str> {
        m.provider_name().or_else(|| {
            self.providers
                .iter()
                .find(|p| p.id == m.provider_id)
                .map(|p| p.name.as_str())
        })
    }

    /// Indices into `models()` that pass the search box.
    pub fn visible_ix(&self) -> Vec<usize> {
        let needle = self.search.trim().to_lowercase();
        self.models
            .iter()
            .enumerate()
            .filter(|(_, m)| {
                needle.is_empty()
                    || contains_ci(&m.name, &needle)
                    || self.provider_name(m).is_some_and(|p| contains_ci(p, &needle))
            })
            .map(|(i, _)| i)
            .collect()
    }

    /// The searched subset. The fetched collection is left untouched.
    pub fn visible(&self) -> Vec<&Model> {
        self.visible_ix().into_iter().map(|i| &self.models[i]).collect()
    }

    /// Server confirmed the delete (or refused it).
    pub fn apply_deleted(&mut self, id: Id, result: Result<(), TransportError>) {
        match result {
            Ok(()) => {
                self.models.retain(|m| m.id != id);
                if self.selected == Some(id) {
                    self.selected = None;
                }
            }
            Err(e) => {
                loge!("Error deleting model {id}: {e}");
                self.error = Some(e.detail().map(str::to_string).unwrap_or_else(|| s!("Failed to delete model")));
            }
        }
    }
}
