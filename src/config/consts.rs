// src/config/consts.rs

// Net config
pub const DEFAULT_API_URL: &str = "http://localhost:8000";
pub const ENV_API_URL: &str = "LLM_CATALOG_API_URL";
pub const API_PREFIX: &str = "/api";

// Logging
pub const ENV_LOG: &str = "LLM_CATALOG_LOG";
pub const DEFAULT_LOG: &str = "info";
pub const LOG_DIR: &str = ".store";
pub const LOG_FILE: &str = "debug.log";

// Comparisons
pub const MIN_COMPARISON_MODELS: usize = 2;

// Scraper
pub const SCRAPE_FALLBACK_ERROR: &str =
    "Failed to scrape URL. Please check the URL and try again.";
pub const DETAILS_FALLBACK_ERROR: &str = "Failed to load comparison details";

// Rendering
pub const NO_DATA: &str = "-";
