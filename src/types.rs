// src/types.rs
//! Wire shapes shared by the transport, the views and the forms.
//!
//! Entities are server-owned; everything here is a transient copy that a view
//! replaces wholesale on the next fetch. Creation shapes (`New*`) are what the
//! forms post; update shapes (`*Update`) serialize only the fields that are set,
//! so a PUT is always partial.

use chrono::{DateTime, Local, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

pub type Id = i64;

/* ---------------- open enums ---------------- */

open_enum! {
    /// Model modality. The backend stores free text.
    pub enum ModelType {
        Text       => ("text", "Text"),
        Multimodal => ("multimodal", "Multimodal"),
        Image      => ("image", "Image"),
        Audio      => ("audio", "Audio"),
        Video      => ("video", "Video"),
    }
}

open_enum! {
    /// What a price row charges for.
    pub enum PriceType {
        InputTokens  => ("input_tokens", "Input tokens"),
        OutputTokens => ("output_tokens", "Output tokens"),
        Requests     => ("requests", "Requests"),
        Images       => ("images", "Images"),
        AudioMinutes => ("audio_minutes", "Audio minutes"),
        VideoMinutes => ("video_minutes", "Video minutes"),
    }
}

open_enum! {
    pub enum PriceUnit {
        Per1kTokens      => ("per_1k_tokens", "per 1K tokens"),
        PerMillionTokens => ("per_million_tokens", "per 1M tokens"),
        PerRequest       => ("per_request", "per request"),
        PerImage         => ("per_image", "per image"),
        PerMinute        => ("per_minute", "per minute"),
        PerHour          => ("per_hour", "per hour"),
    }
}

open_enum! {
    pub enum Currency {
        Usd => ("USD", "USD"),
        Eur => ("EUR", "EUR"),
        Gbp => ("GBP", "GBP"),
        Jpy => ("JPY", "JPY"),
        Cny => ("CNY", "CNY"),
    }
}

open_enum! {
    /// What a web source is tracked for.
    pub enum SourceType {
        Pricing   => ("pricing", "Pricing"),
        Benchmark => ("benchmark", "Benchmark"),
        Both      => ("both", "Both"),
    }
}

/// What a scrape job should extract. Closed: the backend rejects anything else.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScrapeDataType {
    Pricing,
    Benchmark,
    #[default]
    Both,
}

impl ScrapeDataType {
    pub const ALL: [ScrapeDataType; 3] =
        [ScrapeDataType::Both, ScrapeDataType::Pricing, ScrapeDataType::Benchmark];

    pub fn as_str(self) -> &'static str {
        match self {
            ScrapeDataType::Pricing => "pricing",
            ScrapeDataType::Benchmark => "benchmark",
            ScrapeDataType::Both => "both",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ScrapeDataType::Both => "Both pricing & benchmarks",
            ScrapeDataType::Pricing => "Pricing only",
            ScrapeDataType::Benchmark => "Benchmarks only",
        }
    }
}

impl From<ScrapeDataType> for SourceType {
    fn from(d: ScrapeDataType) -> Self {
        SourceType::from(d.as_str())
    }
}

/// Suggestions offered by the benchmark form (free text is still accepted).
pub const COMMON_BENCHMARKS: &[&str] = &[
    "MMLU", "HellaSwag", "TruthfulQA", "GSM8K", "HumanEval",
    "MATH", "BBH", "ARC-C", "WinoGrande", "DROP",
];

pub const COMMON_SCORE_UNITS: &[&str] = &[
    "accuracy", "percentage", "score", "F1", "BLEU", "ROUGE-L", "pass@1",
];

/* ---------------- decimals ---------------- */

/// The backend serializes `Decimal` columns as JSON strings; older builds
/// send plain numbers. Accept both.
mod decimal {
    use serde::{de::Error, Deserialize, Deserializer};

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum NumOrStr {
        Num(f64),
        Str(String),
    }

    fn to_f64<E: Error>(v: NumOrStr) -> Result<f64, E> {
        match v {
            NumOrStr::Num(n) => Ok(n),
            NumOrStr::Str(s) => s
                .trim()
                .parse::<f64>()
                .map_err(|_| E::custom(format!("not a decimal: {s:?}"))),
        }
    }

    pub fn required<'de, D: Deserializer<'de>>(d: D) -> Result<f64, D::Error> {
        to_f64(NumOrStr::deserialize(d)?)
    }

    pub fn optional<'de, D: Deserializer<'de>>(d: D) -> Result<Option<f64>, D::Error> {
        match Option::<NumOrStr>::deserialize(d)? {
            Some(v) => to_f64(v).map(Some),
            None => Ok(None),
        }
    }
}

/* ---------------- entities ---------------- */

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Provider {
    pub id: Id,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub website_url: Option<String>,
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub updated_at: Option<String>,
}

/// A model as returned by the model endpoints. List and get-by-id embed the
/// provider plus the model's benchmark and pricing rows; create/update
/// responses leave those empty.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Model {
    pub id: Id,
    pub name: String,
    pub provider_id: Id,
    #[serde(default)]
    pub model_type: Option<ModelType>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub release_date: Option<NaiveDate>,
    #[serde(default)]
    pub context_window: Option<u64>,
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub updated_at: Option<String>,

    #[serde(default)]
    pub provider: Option<Provider>,
    #[serde(default)]
    pub benchmarks: Vec<NewBenchmark>,
    #[serde(default)]
    pub pricing: Vec<NewPricing>,
}

impl Model {
    pub fn provider_name(&self) -> Option<&str> {
        self.provider.as_ref().map(|p| p.name.as_str())
    }

    /// "200,000 tokens"
    pub fn context_label(&self) -> Option<String> {
        self.context_window.map(|n| format!("{} tokens", group_thousands(n)))
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Benchmark {
    pub id: Id,
    pub model_id: Id,
    pub benchmark_name: String,
    #[serde(default, deserialize_with = "decimal::optional")]
    pub score: Option<f64>,
    #[serde(default)]
    pub unit: Option<String>,
    #[serde(default)]
    pub test_date: Option<NaiveDate>,
    #[serde(default)]
    pub source_url: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub updated_at: Option<String>,
}

impl Benchmark {
    /// "88.5 (accuracy)"; "?" when the row has no score.
    pub fn score_label(&self) -> String {
        let score = self.score.map(fmt_number).unwrap_or_else(|| s!("?"));
        match self.unit.as_deref().filter(|u| !u.is_empty()) {
            Some(u) => format!("{score} ({u})"),
            None => score,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Pricing {
    pub id: Id,
    pub model_id: Id,
    pub price_type: PriceType,
    #[serde(deserialize_with = "decimal::required")]
    pub price: f64,
    pub currency: Currency,
    pub unit: PriceUnit,
    pub valid_from: NaiveDate,
    #[serde(default)]
    pub valid_to: Option<NaiveDate>,
    #[serde(default)]
    pub source_url: Option<String>,
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub updated_at: Option<String>,
}

impl Pricing {
    /// No `valid_to` means the row is still valid.
    pub fn is_open_ended(&self) -> bool {
        self.valid_to.is_none()
    }

    /// "$0.01 USD"
    pub fn price_label(&self) -> String {
        format!("${} {}", fmt_number(self.price), self.currency)
    }
}

/// A comparison table. The get-by-id endpoint fills `items`; the list
/// endpoint leaves it empty.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ComparisonTable {
    pub id: Id,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub created_by: Option<String>,
    #[serde(default)]
    pub is_public: bool,
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub updated_at: Option<String>,
    #[serde(default)]
    pub items: Vec<ComparisonItem>,
}

impl ComparisonTable {
    pub fn visibility_label(&self) -> &'static str {
        if self.is_public { "Public" } else { "Private" }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ComparisonItem {
    pub id: Id,
    pub comparison_table_id: Id,
    pub model_id: Id,
    #[serde(default)]
    pub display_order: i32,
    #[serde(default)]
    pub created_at: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct WebSource {
    pub id: Id,
    pub url: String,
    pub source_type: SourceType,
    #[serde(default)]
    pub is_active: bool,
    #[serde(default)]
    pub last_scraped: Option<String>,
    #[serde(default)]
    pub scraping_interval_hours: u32,
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub updated_at: Option<String>,
}

/* ---------------- creation shapes ---------------- */

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct NewProvider {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website_url: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct NewModel {
    pub name: String,
    pub provider_id: Id,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model_type: Option<ModelType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub release_date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub context_window: Option<u64>,
}

/// Also the shape of the benchmark rows embedded in a model response.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct NewBenchmark {
    pub model_id: Id,
    pub benchmark_name: String,
    #[serde(
        default,
        deserialize_with = "decimal::optional",
        skip_serializing_if = "Option::is_none"
    )]
    pub score: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub test_date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// Also the shape of the pricing rows embedded in a model response.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NewPricing {
    pub model_id: Id,
    pub price_type: PriceType,
    #[serde(deserialize_with = "decimal::required")]
    pub price: f64,
    pub currency: Currency,
    pub unit: PriceUnit,
    pub valid_from: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub valid_to: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_url: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct NewComparison {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub model_ids: Vec<Id>,
    pub is_public: bool,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct NewComparisonItem {
    pub comparison_table_id: Id,
    pub model_id: Id,
    pub display_order: i32,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ScrapeRequest {
    pub url: String,
    pub data_type: ScrapeDataType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub provider_name: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ScrapeResult {
    pub success: bool,
    #[serde(default)]
    pub data: Option<serde_json::Value>,
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub extracted_info: Option<serde_json::Value>,
}

impl ScrapeResult {
    /// `data.raw_response` for display: pretty-printed when it is (or holds)
    /// JSON, the raw string otherwise. `None` when the payload has none.
    pub fn raw_response_text(&self) -> Option<String> {
        let raw = self.data.as_ref()?.get("raw_response")?;
        Some(pretty_json_or_raw(raw))
    }
}

fn pretty_json_or_raw(v: &serde_json::Value) -> String {
    match v {
        serde_json::Value::String(text) => match serde_json::from_str::<serde_json::Value>(text) {
            Ok(parsed) => serde_json::to_string_pretty(&parsed).unwrap_or_else(|_| text.clone()),
            Err(_) => text.clone(),
        },
        other => serde_json::to_string_pretty(other).unwrap_or_else(|_| other.to_string()),
    }
}

/* ---------------- update shapes ---------------- */

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct ProviderUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub website_url: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct ModelUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub provider_id: Option<Id>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model_type: Option<ModelType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub release_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context_window: Option<u64>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct BenchmarkUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model_id: Option<Id>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub benchmark_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub score: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub test_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct PricingUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model_id: Option<Id>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price_type: Option<PriceType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<Currency>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit: Option<PriceUnit>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub valid_from: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub valid_to: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_url: Option<String>,
}

/// Membership is edited through the item endpoints, never here.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct ComparisonUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_public: Option<bool>,
}

/* ---------------- display helpers ---------------- */

/// Render a server timestamp as a local calendar date. Accepts RFC 3339,
/// naive `YYYY-MM-DDTHH:MM:SS[.f]`, or a bare date; anything else verbatim.
pub fn display_date(ts: &str) -> String {
    let ts = ts.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(ts) {
        return dt.with_timezone(&Local).format("%Y-%m-%d").to_string();
    }
    for fmt in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M:%S%.f"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(ts, fmt) {
            return dt.format("%Y-%m-%d").to_string();
        }
    }
    if let Ok(d) = NaiveDate::parse_from_str(ts, "%Y-%m-%d") {
        return d.to_string();
    }
    s!(ts)
}

/// Trim trailing zeros: 0.010000 -> "0.01", 91.0 -> "91".
pub fn fmt_number(v: f64) -> String {
    if v.fract() == 0.0 && v.abs() < 1e15 {
        return format!("{}", v as i64);
    }
    let text = format!("{v:.6}");
    text.trim_end_matches('0').trim_end_matches('.').to_string()
}

fn group_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn open_enum_keeps_unknown_text() {
        let t: ModelType = serde_json::from_value(json!("embedding")).unwrap();
        assert_eq!(t, ModelType::Other(s!("embedding")));
        assert_eq!(serde_json::to_value(&t).unwrap(), json!("embedding"));

        let u: PriceUnit = serde_json::from_value(json!("per_million_tokens")).unwrap();
        assert_eq!(u, PriceUnit::PerMillionTokens);
        assert!(u.is_known());
    }

    #[test]
    fn decimals_decode_from_strings_and_numbers() {
        let p: Pricing = serde_json::from_value(json!({
            "id": 1, "model_id": 2, "price_type": "input_tokens", "price": "0.010000",
            "currency": "USD", "unit": "per_1k_tokens", "valid_from": "2024-01-01",
            "created_at": "2024-01-01T00:00:00"
        }))
        .unwrap();
        assert_eq!(p.price, 0.01);
        assert!(p.is_open_ended());
        assert_eq!(p.price_label(), "$0.01 USD");

        let b: Benchmark = serde_json::from_value(json!({
            "id": 1, "model_id": 2, "benchmark_name": "MMLU", "score": 88
        }))
        .unwrap();
        assert_eq!(b.score, Some(88.0));
        assert_eq!(b.score_label(), "88");
    }

    #[test]
    fn model_with_details_embeds_base_rows() {
        let m: Model = serde_json::from_value(json!({
            "id": 7, "name": "GPT-5", "provider_id": 3, "model_type": "text",
            "context_window": 200000,
            "provider": {"id": 3, "name": "OpenAI"},
            "benchmarks": [{"model_id": 7, "benchmark_name": "MMLU", "score": "91.2"}],
            "pricing": []
        }))
        .unwrap();
        assert_eq!(m.provider_name(), Some("OpenAI"));
        assert_eq!(m.benchmarks[0].score, Some(91.2));
        assert_eq!(m.context_label().as_deref(), Some("200,000 tokens"));
    }

    #[test]
    fn raw_response_is_pretty_printed_when_json() {
        let r = ScrapeResult {
            success: true,
            data: Some(json!({"raw_response": "{\"a\":1}"})),
            ..Default::default()
        };
        assert_eq!(r.raw_response_text().unwrap(), "{\n  \"a\": 1\n}");

        let r = ScrapeResult {
            success: true,
            data: Some(json!({"raw_response": "not json"})),
            ..Default::default()
        };
        assert_eq!(r.raw_response_text().unwrap(), "not json");
    }

    #[test]
    fn update_shapes_only_send_set_fields() {
        let u = ComparisonUpdate { is_public: Some(true), ..Default::default() };
        assert_eq!(serde_json::to_value(&u).unwrap(), json!({"is_public": true}));
    }

    #[test]
    fn dates_render_as_calendar_days() {
        assert_eq!(display_date("2024-05-01T10:11:12.123456"), "2024-05-01");
        assert_eq!(display_date("2024-05-01"), "2024-05-01");
        assert_eq!(display_date("yesterday"), "yesterday");
    }
}
