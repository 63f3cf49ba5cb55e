// src/client/query.rs
//! Optional list filters. Unset fields never reach the URL.

use chrono::NaiveDate;

use crate::types::{Id, ModelType, PriceType};

pub(crate) type Pairs = Vec<(&'static str, Option<String>)>;

fn opt<T: ToString>(v: &Option<T>) -> Option<String> {
    v.as_ref().map(|x| x.to_string())
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ModelQuery {
    pub provider_id: Option<Id>,
    pub model_type: Option<ModelType>,
    pub skip: Option<u32>,
    pub limit: Option<u32>,
}

impl ModelQuery {
    pub(crate) fn pairs(&self) -> Pairs {
        vec![
            ("provider_id", opt(&self.provider_id)),
            ("model_type", opt(&self.model_type)),
            ("skip", opt(&self.skip)),
            ("limit", opt(&self.limit)),
        ]
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BenchmarkQuery {
    pub model_id: Option<Id>,
    pub benchmark_name: Option<String>,
    pub skip: Option<u32>,
    pub limit: Option<u32>,
}

impl BenchmarkQuery {
    pub fn for_model(model_id: Id) -> Self {
        Self { model_id: Some(model_id), ..Self::default() }
    }

    pub(crate) fn pairs(&self) -> Pairs {
        vec![
            ("model_id", opt(&self.model_id)),
            ("benchmark_name", self.benchmark_name.clone()),
            ("skip", opt(&self.skip)),
            ("limit", opt(&self.limit)),
        ]
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PricingQuery {
    pub model_id: Option<Id>,
    pub price_type: Option<PriceType>,
    /// Only rows valid on this day.
    pub valid_date: Option<NaiveDate>,
    pub skip: Option<u32>,
    pub limit: Option<u32>,
}

impl PricingQuery {
    pub(crate) fn pairs(&self) -> Pairs {
        vec![
            ("model_id", opt(&self.model_id)),
            ("price_type", opt(&self.price_type)),
            ("valid_date", opt(&self.valid_date)),
            ("skip", opt(&self.skip)),
            ("limit", opt(&self.limit)),
        ]
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ComparisonQuery {
    pub is_public: Option<bool>,
    pub skip: Option<u32>,
    pub limit: Option<u32>,
}

impl ComparisonQuery {
    pub(crate) fn pairs(&self) -> Pairs {
        vec![
            ("is_public", opt(&self.is_public)),
            ("skip", opt(&self.skip)),
            ("limit", opt(&self.limit)),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pairs_render_wire_strings() {
        let q = ModelQuery { provider_id: Some(3), model_type: Some(ModelType::Multimodal), ..Default::default() };
        let p = q.pairs();
        assert_eq!(p[0], ("provider_id", Some(s!("3"))));
        assert_eq!(p[1], ("model_type", Some(s!("multimodal"))));
        assert_eq!(p[2], ("skip", None));

        let d = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
        let q = PricingQuery { valid_date: Some(d), ..Default::default() };
        assert!(q.pairs().contains(&("valid_date", Some(s!("2024-03-01")))));
    }
}
