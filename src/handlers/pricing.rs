// src/handlers/pricing.rs
//
// Pricing panel data and price-change commits. A commit runs through a
// PriceDraft so the same validation applies here as in the dialog.
use axum::{
    extract::{Path, State},
    Json,
};
use sqlx::PgPool;
use tracing::{info, instrument};

use crate::dtos::pricing::{MarginPreset, PricingResponse, UpdatePriceRequest};
use crate::error::AppError;
use crate::handlers::product::fetch_product;
use crate::models::product::Product;
use crate::pricing::{
    compute_margin, compute_profit, round2, selling_price_from_margin, MarginBand, PriceDraft,
    SubmitError, UpdateSellingPrice, QUICK_MARGIN_PRESETS,
};
use crate::state::AppState;

/// Writes the committed price back to the products table.
pub struct PgPriceUpdater {
    pool: PgPool,
}

impl PgPriceUpdater {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

impl UpdateSellingPrice for PgPriceUpdater {
    type Error = sqlx::Error;

    async fn update_selling_price(&self, product_id: i64, new_price: f64) -> Result<(), sqlx::Error> {
        let result = sqlx::query("UPDATE products SET selling_price = $1 WHERE id = $2")
            .bind(new_price)
            .bind(product_id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(sqlx::Error::RowNotFound);
        }
        Ok(())
    }
}

fn pricing_response(product: &Product) -> PricingResponse {
    let margin = compute_margin(product.purchase_price, product.selling_price);
    let presets = QUICK_MARGIN_PRESETS
        .iter()
        .filter_map(|&m| {
            selling_price_from_margin(product.purchase_price, m)
                .ok()
                .map(|price| MarginPreset {
                    margin: m,
                    selling_price: round2(price),
                })
        })
        .collect();

    PricingResponse {
        product_id: product.id,
        product_name: product.name.clone(),
        purchase_price: product.purchase_price,
        selling_price: product.selling_price,
        margin: round2(margin),
        profit_per_unit: round2(compute_profit(product.purchase_price, product.selling_price)),
        band: MarginBand::classify(margin),
        presets,
    }
}

// GET /products/:id/pricing - Margin, profit, band and preset prices
#[instrument(skip(state), fields(id))]
pub async fn get_pricing(
    Path(id): Path<i64>,
    State(state): State<AppState>,
) -> Result<Json<PricingResponse>, AppError> {
    let product = fetch_product(&state, id).await?;
    Ok(Json(pricing_response(&product)))
}

// PUT /products/:id/price - Commit a new selling price
#[instrument(skip(state, payload), fields(id))]
pub async fn update_price(
    Path(id): Path<i64>,
    State(state): State<AppState>,
    Json(payload): Json<UpdatePriceRequest>,
) -> Result<Json<PricingResponse>, AppError> {
    let product = fetch_product(&state, id).await?;

    let mut draft = PriceDraft::open(product.snapshot());
    match (payload.selling_price, payload.target_margin) {
        (Some(price), None) => draft.set_selling_price(price.to_string()),
        (None, Some(margin)) => draft.set_target_margin(margin.to_string()),
        _ => {
            return Err(AppError::validation(
                "Provide exactly one of selling_price or target_margin",
            ))
        }
    }

    let updater = PgPriceUpdater::new(state.db_pool.clone());
    let committed = match draft.submit(&updater).await {
        Ok(price) => price,
        Err(SubmitError::InvalidPrice) => {
            return Err(AppError::validation("Selling price must be a positive number"))
        }
        Err(SubmitError::InvalidMargin) => {
            return Err(AppError::validation("Target margin must be below 100%"))
        }
        Err(SubmitError::NotEditing) => {
            return Err(AppError::validation("Price change already submitted"))
        }
        Err(SubmitError::Rejected(e)) => return Err(e.into()),
    };

    info!(product_id = id, price = committed, "Selling price updated");

    let updated = fetch_product(&state, id).await?;
    Ok(Json(pricing_response(&updated)))
}
