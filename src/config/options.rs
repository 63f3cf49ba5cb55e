// src/config/options.rs
use super::consts::*;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppOptions {
    pub api: ApiOptions,
    pub log_level: String,
}

impl Default for AppOptions {
    fn default() -> Self {
        Self {
            api: ApiOptions::default(),
            log_level: s!(DEFAULT_LOG),
        }
    }
}

impl AppOptions {
    /// Build options from the environment, falling back to defaults.
    pub fn from_env() -> Self {
        Self {
            api: ApiOptions { base_url: env_or(ENV_API_URL, DEFAULT_API_URL) },
            log_level: env_or(ENV_LOG, DEFAULT_LOG),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PageKind {
    Models,
    Comparisons,
    Scraper,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiOptions {
    /// Backend origin, e.g. `http://localhost:8000` (no `/api` suffix).
    pub base_url: String,
}

impl Default for ApiOptions {
    fn default() -> Self {
        Self { base_url: s!(DEFAULT_API_URL) }
    }
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .unwrap_or_else(|| s!(default))
}
