// src/handlers/notifications.rs
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use std::collections::HashMap;
use tracing::instrument;

use crate::dtos::common::{CountResponse, MessageResponse};
use crate::dtos::notification::{CreateNotificationRequest, NotificationResponse};
use crate::error::AppError;
use crate::models::notification::{Notification, NOTIFICATION_CATEGORIES};
use crate::state::AppState;

// GET /notifications - Newest first, ?unread=true filters to unread only
#[instrument(skip(state))]
pub async fn list_notifications(
    State(state): State<AppState>,
    Query(params): Query<HashMap<String, String>>,
) -> Result<Json<Vec<NotificationResponse>>, AppError> {
    let unread_only = params
        .get("unread")
        .map(|v| v == "true")
        .unwrap_or(false);

    let query = if unread_only {
        "SELECT id, title, body, category, read, created_at
         FROM notifications WHERE read = FALSE
         ORDER BY created_at DESC, id DESC"
    } else {
        "SELECT id, title, body, category, read, created_at
         FROM notifications
         ORDER BY created_at DESC, id DESC"
    };

    let notifications = sqlx::query_as::<_, Notification>(query)
        .fetch_all(&state.db_pool)
        .await?;

    Ok(Json(
        notifications
            .into_iter()
            .map(NotificationResponse::from)
            .collect(),
    ))
}

// GET /notifications/unread-count
#[instrument(skip(state))]
pub async fn unread_count(
    State(state): State<AppState>,
) -> Result<Json<CountResponse>, AppError> {
    let (count,): (i64,) =
        sqlx::query_as("SELECT COUNT(*) FROM notifications WHERE read = FALSE")
            .fetch_one(&state.db_pool)
            .await?;

    Ok(Json(CountResponse { count }))
}

// POST /notifications - Create a notification
#[instrument(skip(state, payload))]
pub async fn create_notification(
    State(state): State<AppState>,
    Json(payload): Json<CreateNotificationRequest>,
) -> Result<(StatusCode, Json<NotificationResponse>), AppError> {
    if payload.title.trim().is_empty() {
        return Err(AppError::validation("Notification title is required"));
    }

    let category = payload.category.as_deref().unwrap_or("info");
    if !NOTIFICATION_CATEGORIES.contains(&category) {
        return Err(AppError::validation(format!(
            "Category must be one of: {}",
            NOTIFICATION_CATEGORIES.join(", ")
        )));
    }

    let notification = sqlx::query_as::<_, Notification>(
        "INSERT INTO notifications (title, body, category, read)
         VALUES ($1, $2, $3, FALSE)
         RETURNING id, title, body, category, read, created_at",
    )
    .bind(payload.title.trim())
    .bind(&payload.body)
    .bind(category)
    .fetch_one(&state.db_pool)
    .await?;

    Ok((
        StatusCode::CREATED,
        Json(NotificationResponse::from(notification)),
    ))
}

// PUT /notifications/:id/read - Mark one notification read
#[instrument(skip(state), fields(id))]
pub async fn mark_read(
    Path(id): Path<i64>,
    State(state): State<AppState>,
) -> Result<Json<NotificationResponse>, AppError> {
    let notification = sqlx::query_as::<_, Notification>(
        "UPDATE notifications SET read = TRUE WHERE id = $1
         RETURNING id, title, body, category, read, created_at",
    )
    .bind(id)
    .fetch_optional(&state.db_pool)
    .await?
    .ok_or_else(|| AppError::not_found("Notification not found"))?;

    Ok(Json(NotificationResponse::from(notification)))
}

// PUT /notifications/read-all - Mark everything read
#[instrument(skip(state))]
pub async fn mark_all_read(
    State(state): State<AppState>,
) -> Result<Json<CountResponse>, AppError> {
    let result = sqlx::query("UPDATE notifications SET read = TRUE WHERE read = FALSE")
        .execute(&state.db_pool)
        .await?;

    Ok(Json(CountResponse {
        count: result.rows_affected() as i64,
    }))
}

// DELETE /notifications/:id
#[instrument(skip(state), fields(id))]
pub async fn delete_notification(
    Path(id): Path<i64>,
    State(state): State<AppState>,
) -> Result<Json<MessageResponse>, AppError> {
    let result = sqlx::query("DELETE FROM notifications WHERE id = $1")
        .bind(id)
        .execute(&state.db_pool)
        .await?;

    if result.rows_affected() == 0 {
        return Err(AppError::not_found("Notification not found"));
    }

    Ok(Json(MessageResponse::new("Notification deleted")))
}
