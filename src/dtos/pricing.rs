// src/dtos/pricing.rs
use serde::{Deserialize, Serialize};

use crate::pricing::MarginBand;

/// Body for PUT /products/{id}/price. Exactly one field drives the change;
/// the other must be absent.
#[derive(Debug, Deserialize)]
pub struct UpdatePriceRequest {
    pub selling_price: Option<f64>,
    pub target_margin: Option<f64>,
}

#[derive(Debug, Serialize)]
pub struct MarginPreset {
    pub margin: f64,
    pub selling_price: f64,
}

#[derive(Debug, Serialize)]
pub struct PricingResponse {
    pub product_id: i64,
    pub product_name: String,
    pub purchase_price: f64,
    pub selling_price: f64,
    pub margin: f64,
    pub profit_per_unit: f64,
    pub band: MarginBand,
    pub presets: Vec<MarginPreset>,
}
