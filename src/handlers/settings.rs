// src/handlers/settings.rs
use axum::{extract::State, Json};
use tracing::instrument;

use crate::dtos::settings::{SettingsResponse, UpdateSettingsRequest};
use crate::error::AppError;
use crate::models::settings::StoreSettings;
use crate::state::AppState;

const SETTINGS_COLUMNS: &str =
    "id, store_name, address, phone, email, currency_code,
     tax_percent::FLOAT8 AS tax_percent, receipt_footer, updated_at";

// GET /settings - Store profile, created with defaults on first read
#[instrument(skip(state))]
pub async fn get_settings(
    State(state): State<AppState>,
) -> Result<Json<SettingsResponse>, AppError> {
    let existing = sqlx::query_as::<_, StoreSettings>(&format!(
        "SELECT {} FROM store_settings WHERE id = 1",
        SETTINGS_COLUMNS
    ))
    .fetch_optional(&state.db_pool)
    .await?;

    let settings = match existing {
        Some(s) => s,
        None => {
            sqlx::query_as::<_, StoreSettings>(&format!(
                "INSERT INTO store_settings (id, store_name, currency_code, tax_percent)
                 VALUES (1, 'My Store', 'USD', 0)
                 ON CONFLICT (id) DO UPDATE SET id = store_settings.id
                 RETURNING {}",
                SETTINGS_COLUMNS
            ))
            .fetch_one(&state.db_pool)
            .await?
        }
    };

    Ok(Json(SettingsResponse::from(settings)))
}

// PUT /settings - Partial update of the store profile
#[instrument(skip(state, payload))]
pub async fn update_settings(
    State(state): State<AppState>,
    Json(payload): Json<UpdateSettingsRequest>,
) -> Result<Json<SettingsResponse>, AppError> {
    if let Some(name) = &payload.store_name {
        if name.trim().is_empty() {
            return Err(AppError::validation("Store name cannot be empty"));
        }
    }
    if let Some(tax) = payload.tax_percent {
        if !(0.0..=100.0).contains(&tax) {
            return Err(AppError::validation("Tax percent must be between 0 and 100"));
        }
    }

    let settings = sqlx::query_as::<_, StoreSettings>(&format!(
        "UPDATE store_settings SET
         store_name     = COALESCE($1, store_name),
         address        = COALESCE($2, address),
         phone          = COALESCE($3, phone),
         email          = COALESCE($4, email),
         currency_code  = COALESCE($5, currency_code),
         tax_percent    = COALESCE($6, tax_percent),
         receipt_footer = COALESCE($7, receipt_footer),
         updated_at     = NOW()
         WHERE id = 1 RETURNING {}",
        SETTINGS_COLUMNS
    ))
    .bind(payload.store_name.map(|s| s.trim().to_string()))
    .bind(payload.address)
    .bind(payload.phone)
    .bind(payload.email)
    .bind(payload.currency_code)
    .bind(payload.tax_percent)
    .bind(payload.receipt_footer)
    .fetch_optional(&state.db_pool)
    .await?
    .ok_or_else(|| AppError::not_found("Store settings not initialized"))?;

    Ok(Json(SettingsResponse::from(settings)))
}
