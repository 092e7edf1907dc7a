// src/dtos/settings.rs
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct UpdateSettingsRequest {
    pub store_name: Option<String>,
    pub address: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub currency_code: Option<String>,
    pub tax_percent: Option<f64>,
    pub receipt_footer: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct SettingsResponse {
    pub store_name: String,
    pub address: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub currency_code: String,
    pub tax_percent: f64,
    pub receipt_footer: Option<String>,
    pub updated_at: Option<String>,
}

impl From<crate::models::settings::StoreSettings> for SettingsResponse {
    fn from(s: crate::models::settings::StoreSettings) -> Self {
        Self {
            store_name: s.store_name,
            address: s.address,
            phone: s.phone,
            email: s.email,
            currency_code: s.currency_code,
            tax_percent: s.tax_percent,
            receipt_footer: s.receipt_footer,
            updated_at: s.updated_at.map(|dt| dt.to_rfc3339()),
        }
    }
}
