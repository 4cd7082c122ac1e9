use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationLevel {
    Info,
    Error,
}

/// A short-lived message for the user. Never blocks the screen.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Notification {
    pub level: NotificationLevel,
    pub message: String,
    pub created_at: DateTime<Utc>,
}

impl Notification {
    pub fn info(message: &str) -> Self {
        Notification {
            level: NotificationLevel::Info,
            message: message.to_string(),
            created_at: Utc::now(),
        }
    }

    pub fn error(message: &str) -> Self {
        Notification {
            level: NotificationLevel::Error,
            message: message.to_string(),
            created_at: Utc::now(),
        }
    }
}
