// src/forms/mod.rs
//
// Create-entity forms. A form is a draft (strings as typed) plus a little
// lifecycle: open -> submit (validate) -> finish (server answer) -> closed.
// A failed submit keeps the form open with the draft intact.

pub mod benchmark;
pub mod comparison;
pub mod model;
pub mod pricing;

pub use benchmark::BenchmarkDraft;
pub use comparison::ComparisonDraft;
pub use model::ModelDraft;
pub use pricing::PricingDraft;

use chrono::NaiveDate;

use crate::error::{TransportError, ValidationError};

pub type ModelForm = FormState<ModelDraft>;
pub type BenchmarkForm = FormState<BenchmarkDraft>;
pub type PricingForm = FormState<PricingDraft>;
pub type ComparisonForm = FormState<ComparisonDraft>;

/// A draft that can be turned into a creation request.
pub trait Draft: Default {
    /// What gets posted.
    type Request;

    /// Shown when the server rejects the request without a detail message.
    const FAILURE: &'static str;

    fn validate(&self) -> Result<Self::Request, ValidationError>;
}

#[derive(Clone, Debug, Default)]
pub struct FormState<D: Draft> {
    open: bool,
    pub draft: D,
    submitting: bool,
    error: Option<String>,
}

impl<D: Draft> FormState<D> {
    /// Open with a fresh draft.
    pub fn open(&mut self) {
        self.open_with(D::default());
    }

    pub fn open_with(&mut self, draft: D) {
        self.open = true;
        self.draft = draft;
        self.submitting = false;
        self.error = None;
    }

    pub fn close(&mut self) {
        self.open = false;
        self.submitting = false;
        self.error = None;
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn set_error(&mut self, msg: impl Into<String>) {
        self.error = Some(msg.into());
    }

    /// Validate the draft. On success the form is marked as submitting and
    /// the request is handed to the caller to send.
    pub fn submit(&mut self) -> Result<D::Request, ValidationError> {
        match self.draft.validate() {
            Ok(req) => {
                self.error = None;
                self.submitting = true;
                Ok(req)
            }
            Err(e) => {
                self.error = Some(e.to_string());
                Err(e)
            }
        }
    }

    /// Apply the server's answer. Success runs `on_success` (the caller's
    /// refresh) and closes; failure shows the server detail or the form's
    /// generic message. Returns whether the create went through.
    pub fn finish<T>(&mut self, result: Result<T, TransportError>, on_success: impl FnOnce(T)) -> bool {
        self.submitting = false;
        match result {
            Ok(created) => {
                on_success(created);
                self.close();
                true
            }
            Err(e) => {
                loge!("{}: {e}", D::FAILURE);
                self.error = Some(e.detail().map(str::to_string).unwrap_or_else(|| s!(D::FAILURE)));
                false
            }
        }
    }
}

/* ---------- field parsing shared by the drafts ---------- */

pub(crate) fn required<'a>(field: &'static str, v: &'a str) -> Result<&'a str, ValidationError> {
    let v = v.trim();
    if v.is_empty() { Err(ValidationError::Missing(field)) } else { Ok(v) }
}

pub(crate) fn optional_text(v: &str) -> Option<String> {
    let v = v.trim();
    (!v.is_empty()).then(|| v.to_string())
}

pub(crate) fn optional_date(field: &'static str, v: &str) -> Result<Option<NaiveDate>, ValidationError> {
    let v = v.trim();
    if v.is_empty() {
        return Ok(None);
    }
    NaiveDate::parse_from_str(v, "%Y-%m-%d")
        .map(Some)
        .map_err(|_| ValidationError::BadDate(field))
}

pub(crate) fn optional_number(field: &'static str, v: &str) -> Result<Option<f64>, ValidationError> {
    let v = v.trim();
    if v.is_empty() {
        return Ok(None);
    }
    match v.parse::<f64>() {
        Ok(n) if n.is_finite() => Ok(Some(n)),
        _ => Err(ValidationError::NotANumber(field)),
    }
}

pub(crate) fn today() -> String {
    chrono::Local::now().date_naive().format("%Y-%m-%d").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn field_helpers() {
        assert_eq!(required("Name", "  "), Err(ValidationError::Missing("Name")));
        assert_eq!(required("Name", " x "), Ok("x"));
        assert_eq!(optional_text("  "), None);
        assert_eq!(optional_date("Date", "2024-13-01"), Err(ValidationError::BadDate("Date")));
        assert_eq!(optional_number("Score", "85.7"), Ok(Some(85.7)));
        assert_eq!(optional_number("Score", "abc"), Err(ValidationError::NotANumber("Score")));
        assert_eq!(optional_number("Score", "NaN"), Err(ValidationError::NotANumber("Score")));
    }
}
