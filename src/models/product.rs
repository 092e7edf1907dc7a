use sqlx::FromRow;
use chrono::{DateTime, Utc};

use crate::pricing::ProductSnapshot;

#[derive(Debug, FromRow)]
pub struct Product {
    pub id: i64,
    pub name: String,
    pub purchase_price: f64,
    pub selling_price: f64,
    pub created_at: Option<DateTime<Utc>>,
}

impl Product {
    pub fn snapshot(&self) -> ProductSnapshot {
        ProductSnapshot {
            id: self.id,
            purchase_price: self.purchase_price,
            selling_price: self.selling_price,
        }
    }
}
