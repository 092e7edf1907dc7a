use sqlx::FromRow;
use chrono::{DateTime, Utc};

#[derive(Debug, FromRow)]
pub struct Notification {
    pub id: i64,
    pub title: String,
    pub body: String,
    pub category: String,
    pub read: bool,
    pub created_at: Option<DateTime<Utc>>,
}

/// Categories the notification dropdown knows how to render.
pub const NOTIFICATION_CATEGORIES: [&str; 4] = ["info", "success", "warning", "error"];
