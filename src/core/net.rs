// src/core/net.rs
// URL building and response handling shared by every API call.

use reqwest::{Response, Url};
use serde::de::DeserializeOwned;

use crate::config::consts::API_PREFIX;
use crate::error::TransportError;

/// Resolve the backend origin to the API root, always ending in `/`.
/// `http://host:8000` and `http://host:8000/` both become `http://host:8000/api/`.
pub fn api_root(origin: &str) -> Result<Url, TransportError> {
    let mut url = Url::parse(origin.trim())
        .map_err(|e| TransportError::InvalidUrl(format!("{origin}: {e}")))?;
    if url.cannot_be_a_base() {
        return Err(TransportError::InvalidUrl(s!(origin)));
    }
    let path = format!("{}{}/", url.path().trim_end_matches('/'), API_PREFIX);
    url.set_path(&path);
    url.set_query(None);
    Ok(url)
}

/// `root` + relative `path`, plus the query pairs whose value is present.
pub fn endpoint(root: &Url, path: &str, query: &[(&str, Option<String>)]) -> Result<Url, TransportError> {
    let mut url = root
        .join(path.trim_start_matches('/'))
        .map_err(|e| TransportError::InvalidUrl(format!("{path}: {e}")))?;

    let present: Vec<(&str, &str)> = query
        .iter()
        .filter_map(|(k, v)| v.as_deref().map(|v| (*k, v)))
        .collect();
    if !present.is_empty() {
        url.query_pairs_mut().extend_pairs(present);
    }
    Ok(url)
}

/// Pass 2xx through, turn anything else into `TransportError::Status`.
pub async fn check(resp: Response) -> Result<Response, TransportError> {
    let status = resp.status();
    if status.is_success() {
        return Ok(resp);
    }
    let body = resp.text().await.unwrap_or_default();
    let detail = detail_from_body(&body);
    logd!("HTTP {} detail={:?}", status.as_u16(), detail);
    Err(TransportError::Status { status: status.as_u16(), detail })
}

/// Check the status, then decode the JSON body.
pub async fn read_json<T: DeserializeOwned>(resp: Response) -> Result<T, TransportError> {
    let resp = check(resp).await?;
    let bytes = resp.bytes().await?;
    serde_json::from_slice(&bytes).map_err(|e| TransportError::Decode(e.to_string()))
}

/// The server's explanation for an error response: a JSON `detail` string,
/// else the body text itself when it isn't JSON.
pub fn detail_from_body(body: &str) -> Option<String> {
    let body = body.trim();
    if body.is_empty() {
        return None;
    }
    match serde_json::from_str::<serde_json::Value>(body) {
        Ok(v) => v.get("detail").and_then(|d| d.as_str()).map(str::to_string),
        Err(_) => Some(s!(body)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_root_normalizes_trailing_slash() {
        let a = api_root("http://localhost:8000").unwrap();
        let b = api_root("http://localhost:8000/").unwrap();
        assert_eq!(a.as_str(), "http://localhost:8000/api/");
        assert_eq!(a, b);
        assert!(api_root("not a url").is_err());
    }

    #[test]
    fn absent_query_values_are_omitted() {
        let root = api_root("http://localhost:8000").unwrap();
        let url = endpoint(
            &root,
            "models/",
            &[("provider_id", Some(s!("3"))), ("model_type", None), ("limit", Some(s!("100")))],
        )
        .unwrap();
        assert_eq!(url.as_str(), "http://localhost:8000/api/models/?provider_id=3&limit=100");

        let bare = endpoint(&root, "models/7", &[("x", None)]).unwrap();
        assert_eq!(bare.as_str(), "http://localhost:8000/api/models/7");
    }

    #[test]
    fn detail_prefers_json_detail_string() {
        assert_eq!(detail_from_body(r#"{"detail":"Model not found"}"#).as_deref(), Some("Model not found"));
        assert_eq!(detail_from_body(r#"{"detail":[{"loc":["body"]}]}"#), None);
        assert_eq!(detail_from_body("Internal Server Error").as_deref(), Some("Internal Server Error"));
        assert_eq!(detail_from_body("  "), None);
    }
}
