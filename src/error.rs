// src/error.rs
use thiserror::Error;

/// Anything that went wrong talking to the backend.
#[derive(Debug, Error)]
pub enum TransportError {
    /// Non-2xx response. `detail` is the server's explanation when it sent one.
    #[error("HTTP {status}{}", .detail.as_deref().map(|d| format!(": {d}")).unwrap_or_default())]
    Status { status: u16, detail: Option<String> },

    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("unexpected response body: {0}")]
    Decode(String),

    #[error("invalid URL: {0}")]
    InvalidUrl(String),
}

impl TransportError {
    /// Server-supplied detail text, if any.
    pub fn detail(&self) -> Option<&str> {
        match self {
            TransportError::Status { detail, .. } => detail.as_deref(),
            _ => None,
        }
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            TransportError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }
}

/// Client-side form rejections. The field name is the label shown to the user.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{0} is required")]
    Missing(&'static str),

    #[error("{0} must be a number")]
    NotANumber(&'static str),

    #[error("{0} is out of range")]
    OutOfRange(&'static str),

    #[error("{0} must be a date (YYYY-MM-DD)")]
    BadDate(&'static str),

    #[error("Please select at least 2 models to compare (selected {staged})")]
    TooFewModels { staged: usize },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_message_includes_detail() {
        let e = TransportError::Status { status: 404, detail: Some(s!("Model not found")) };
        assert_eq!(e.to_string(), "HTTP 404: Model not found");
        assert_eq!(e.detail(), Some("Model not found"));
        assert!(e.is_not_found());

        let bare = TransportError::Status { status: 500, detail: None };
        assert_eq!(bare.to_string(), "HTTP 500");
    }
}
