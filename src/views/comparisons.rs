// src/views/comparisons.rs
use crate::aggregate::ComparisonDetail;
use crate::config::consts::DETAILS_FALLBACK_ERROR;
use crate::error::TransportError;
use crate::types::{ComparisonTable, Id};

use super::{LoadSlot, PendingDelete, Ticket};

/// The detail pane next to the table list.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum DetailState {
    #[default]
    Idle,
    Loading,
    Ready(Box<ComparisonDetail>),
    Failed(String),
}

impl DetailState {
    pub fn detail(&self) -> Option<&ComparisonDetail> {
        match self {
            DetailState::Ready(d) => Some(d),
            _ => None,
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct ComparisonsView {
    tables: Vec<ComparisonTable>,
    selected: Option<Id>,
    detail: DetailState,

    pub delete: PendingDelete<Id>,
    pub error: Option<String>,

    load: LoadSlot,
    detail_load: LoadSlot,
}

impl ComparisonsView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn tables(&self) -> &[ComparisonTable] {
        &self.tables
    }

    pub fn selected(&self) -> Option<Id> {
        self.selected
    }

    pub fn selected_table(&self) -> Option<&ComparisonTable> {
        let id = self.selected?;
        self.tables.iter().find(|t| t.id == id)
    }

    pub fn detail(&self) -> &DetailState {
        &self.detail
    }

    pub fn is_loading(&self) -> bool {
        self.load.is_loading()
    }

    pub fn begin_load(&mut self) -> Ticket {
        self.load.begin()
    }

    pub fn apply_tables(&mut self, ticket: Ticket, result: Result<Vec<ComparisonTable>, TransportError>) {
        if !self.load.accept(ticket) {
            return;
        }
        match result {
            Ok(tables) => {
                self.tables = tables;
                self.error = None;
                if let Some(sel) = self.selected {
                    if !self.tables.iter().any(|t| t.id == sel) {
                        self.clear_selection();
                    }
                }
            }
            Err(e) => {
                loge!("Error fetching comparisons: {e}");
                self.error = Some(format!("Failed to load comparisons: {e}"));
            }
        }
    }

    /// Select a table and start loading its detail. The previous pivot is
    /// cleared right away.
    pub fn select(&mut self, id: Id) -> Ticket {
        self.selected = Some(id);
        self.detail = DetailState::Loading;
        self.detail_load.begin()
    }

    /// Page left: drop in-flight loads and the detail pane with them.
    pub fn leave(&mut self) {
        self.load.invalidate();
        self.clear_selection();
    }

    pub fn clear_selection(&mut self) {
        self.selected = None;
        self.detail = DetailState::Idle;
        self.detail_load.invalidate();
    }

    /// Any aggregation failure shows one generic message; no partial pivot.
    pub fn apply_detail(&mut self, ticket: Ticket, result: Result<ComparisonDetail, TransportError>) {
        if !self.detail_load.accept(ticket) {
            return;
        }
        self.detail = match result {
            Ok(detail) => DetailState::Ready(Box::new(detail)),
            Err(e) => {
                loge!("Error fetching comparison details: {e}");
                DetailState::Failed(s!(DETAILS_FALLBACK_ERROR))
            }
        };
    }

    /// Server confirmed the delete (or refused it). Deleting the selected
    /// table clears the detail pane.
    pub fn apply_deleted(&mut self, id: Id, result: Result<(), TransportError>) {
        match result {
            Ok(()) => {
                self.tables.retain(|t| t.id != id);
                if self.selected == Some(id) {
                    self.clear_selection();
                }
            }
            Err(e) => {
                loge!("Error deleting comparison {id}: {e}");
                self.error = Some(e.detail().map(str::to_string).unwrap_or_else(|| s!("Failed to delete comparison")));
            }
        }
    }
}
