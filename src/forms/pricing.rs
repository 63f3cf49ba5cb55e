// src/forms/pricing.rs
use crate::error::ValidationError;
use crate::types::{Currency, Id, NewPricing, PriceType, PriceUnit};

use super::{optional_date, optional_text, required, today, Draft};

#[derive(Clone, Debug, PartialEq)]
pub struct PricingDraft {
    pub model_id: Option<Id>,
    pub price_type: Option<PriceType>,
    pub price: String,
    pub currency: Currency,
    pub unit: Option<PriceUnit>,
    /// Defaults to today.
    pub valid_from: String,
    pub valid_to: String,
    pub source_url: String,
}

impl Default for PricingDraft {
    fn default() -> Self {
        Self {
            model_id: None,
            price_type: None,
            price: String::new(),
            currency: Currency::Usd,
            unit: None,
            valid_from: today(),
            valid_to: String::new(),
            source_url: String::new(),
        }
    }
}

impl PricingDraft {
    pub fn for_model(model_id: Id) -> Self {
        Self { model_id: Some(model_id), ..Self::default() }
    }
}

impl Draft for PricingDraft {
    type Request = NewPricing;
    const FAILURE: &'static str = "Failed to create pricing";

    fn validate(&self) -> Result<NewPricing, ValidationError> {
        let model_id = self.model_id.ok_or(ValidationError::Missing("Model"))?;
        let price_type = self.price_type.clone().ok_or(ValidationError::Missing("Price type"))?;

        let price = required("Price", &self.price)?
            .parse::<f64>()
            .ok()
            .filter(|p| p.is_finite())
            .ok_or(ValidationError::NotANumber("Price"))?;
        if price < 0.0 {
            return Err(ValidationError::OutOfRange("Price"));
        }

        let unit = self.unit.clone().ok_or(ValidationError::Missing("Unit"))?;
        let valid_from = optional_date("Valid from", &self.valid_from)?
            .ok_or(ValidationError::Missing("Valid from"))?;
        let valid_to = optional_date("Valid to", &self.valid_to)?;
        if valid_to.is_some_and(|to| to < valid_from) {
            return Err(ValidationError::OutOfRange("Valid to"));
        }

        Ok(NewPricing {
            model_id,
            price_type,
            price,
            currency: self.currency.clone(),
            unit,
            valid_from,
            valid_to,
            source_url: optional_text(&self.source_url),
        })
    }
}
