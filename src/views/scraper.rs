// src/views/scraper.rs
use crate::config::consts::SCRAPE_FALLBACK_ERROR;
use crate::error::{TransportError, ValidationError};
use crate::types::{Id, ScrapeDataType, ScrapeRequest, ScrapeResult, SourceType, WebSource};

use super::{LoadSlot, PendingDelete, Ticket};

/// The scrape form as typed.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ScrapeDraft {
    pub url: String,
    pub data_type: ScrapeDataType,
    pub model_name: String,
    pub provider_name: String,
}

impl ScrapeDraft {
    pub fn to_request(&self) -> Result<ScrapeRequest, ValidationError> {
        let url = self.url.trim();
        if url.is_empty() {
            return Err(ValidationError::Missing("URL"));
        }
        Ok(ScrapeRequest {
            url: s!(url),
            data_type: self.data_type,
            model_name: non_empty(&self.model_name),
            provider_name: non_empty(&self.provider_name),
        })
    }
}

fn non_empty(s: &str) -> Option<String> {
    let s = s.trim();
    (!s.is_empty()).then(|| s.to_string())
}

/// What the last scrape attempt produced.
#[derive(Clone, Debug, PartialEq)]
pub enum ScrapeOutcome {
    /// Pretty-printed `raw_response`, if the payload carried one.
    Succeeded(Option<String>),
    Failed(String),
}

#[derive(Clone, Debug, Default)]
pub struct ScraperView {
    pub draft: ScrapeDraft,
    scraping: bool,
    outcome: Option<ScrapeOutcome>,

    sources: Vec<WebSource>,
    sources_load: LoadSlot,

    /// "Track a URL" row under the source list.
    pub new_source_url: String,
    pub new_source_type: Option<SourceType>,

    pub delete: PendingDelete<Id>,
    pub error: Option<String>,
}

impl ScraperView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_scraping(&self) -> bool {
        self.scraping
    }

    pub fn outcome(&self) -> Option<&ScrapeOutcome> {
        self.outcome.as_ref()
    }

    pub fn sources(&self) -> &[WebSource] {
        &self.sources
    }

    pub fn sources_loading(&self) -> bool {
        self.sources_load.is_loading()
    }

    /// Validate the draft and mark a scrape as running. The previous outcome
    /// is cleared.
    pub fn begin_scrape(&mut self) -> Result<ScrapeRequest, ValidationError> {
        let req = self.draft.to_request()?;
        self.scraping = true;
        self.outcome = None;
        Ok(req)
    }

    /// Record the scrape result. Returns true when the source list should be
    /// re-fetched (the call reached the server).
    pub fn finish_scrape(&mut self, result: Result<ScrapeResult, TransportError>) -> bool {
        self.scraping = false;
        match result {
            Ok(r) if r.success => {
                self.outcome = Some(ScrapeOutcome::Succeeded(r.raw_response_text()));
                true
            }
            Ok(r) => {
                let msg = r.error.unwrap_or_else(|| s!("Scrape failed"));
                logf!("scrape reported failure: {msg}");
                self.outcome = Some(ScrapeOutcome::Failed(msg));
                true
            }
            Err(e) => {
                loge!("Error scraping URL: {e}");
                self.outcome = Some(ScrapeOutcome::Failed(s!(SCRAPE_FALLBACK_ERROR)));
                false
            }
        }
    }

    pub fn begin_sources_load(&mut self) -> Ticket {
        self.sources_load.begin()
    }

    /// Page left. A running scrape still reports back; the list load doesn't.
    pub fn leave(&mut self) {
        self.sources_load.invalidate();
    }

    pub fn apply_sources(&mut self, ticket: Ticket, result: Result<Vec<WebSource>, TransportError>) {
        if !self.sources_load.accept(ticket) {
            return;
        }
        match result {
            Ok(sources) => {
                self.sources = sources;
                self.error = None;
            }
            Err(e) => {
                loge!("Error fetching web sources: {e}");
                self.error = Some(format!("Failed to load web sources: {e}"));
            }
        }
    }

    /// Validated input of the "track a URL" row.
    pub fn new_source(&self) -> Result<(String, SourceType), ValidationError> {
        let url = self.new_source_url.trim();
        if url.is_empty() {
            return Err(ValidationError::Missing("URL"));
        }
        let kind = self.new_source_type.clone().unwrap_or(SourceType::Both);
        Ok((s!(url), kind))
    }

    /// Returns true when the source list should be re-fetched.
    pub fn apply_source_added(&mut self, result: Result<WebSource, TransportError>) -> bool {
        match result {
            Ok(src) => {
                logd!("web source {} added", src.id);
                self.new_source_url.clear();
                self.error = None;
                true
            }
            Err(e) => {
                loge!("Error adding web source: {e}");
                self.error = Some(e.detail().map(str::to_string).unwrap_or_else(|| s!("Failed to add web source")));
                false
            }
        }
    }

    /// Server confirmed the delete; drop it locally.
    pub fn apply_deleted(&mut self, id: Id, result: Result<(), TransportError>) {
        match result {
            Ok(()) => self.sources.retain(|s| s.id != id),
            Err(e) => {
                loge!("Error deleting web source {id}: {e}");
                self.error = Some(e.detail().map(str::to_string).unwrap_or_else(|| s!("Failed to delete web source")));
            }
        }
    }
}
