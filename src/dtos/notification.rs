// src/dtos/notification.rs
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct CreateNotificationRequest {
    pub title: String,
    pub body: String,
    pub category: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct NotificationResponse {
    pub id: i64,
    pub title: String,
    pub body: String,
    pub category: String,
    pub read: bool,
    pub created_at: Option<String>,
}

impl From<crate::models::notification::Notification> for NotificationResponse {
    fn from(n: crate::models::notification::Notification) -> Self {
        Self {
            id: n.id,
            title: n.title,
            body: n.body,
            category: n.category,
            read: n.read,
            created_at: n.created_at.map(|dt| dt.to_rfc3339()),
        }
    }
}
