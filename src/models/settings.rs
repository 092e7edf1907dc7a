use sqlx::FromRow;
use chrono::{DateTime, Utc};

// Singleton row, id fixed at 1.
#[derive(Debug, FromRow)]
pub struct StoreSettings {
    pub id: i64,
    pub store_name: String,
    pub address: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub currency_code: String,
    pub tax_percent: f64,
    pub receipt_footer: Option<String>,
    pub updated_at: Option<DateTime<Utc>>,
}
