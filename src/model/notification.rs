//! Domain models for notification data.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A one-way message record delivered to a specific user.
#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    /// Unique identifier for the notification.
    pub id: i32,
    /// Id of the target recipient, immutable.
    pub user_id: i32,
    /// Message text shown to the recipient.
    pub message: String,
    /// Whether the recipient has read the notification.
    pub is_read: bool,
    /// Timestamp set once at creation.
    pub timestamp: DateTime<Utc>,
}

impl Notification {
    /// Converts an entity model to a notification domain model at the repository boundary.
    ///
    /// # Arguments
    /// - `entity` - The entity model from the database
    ///
    /// # Returns
    /// - `Notification` - The converted notification domain model
    pub fn from_entity(entity: entity::notification::Model) -> Self {
        Self {
            id: entity.id,
            user_id: entity.user_id,
            message: entity.message,
            is_read: entity.is_read,
            timestamp: entity.timestamp,
        }
    }

    pub fn into_dto(self) -> NotificationDto {
        NotificationDto {
            id: self.id,
            message: self.message,
            is_read: self.is_read,
            timestamp: self.timestamp,
        }
    }
}

/// Parameters for creating a single notification.
#[derive(Debug, Clone)]
pub struct CreateNotificationParams {
    /// Id of the target recipient.
    pub user_id: i32,
    /// Message text.
    pub message: String,
}

/// Parameters for an admin broadcast.
///
/// Exactly one targeting mode is expected: `send_to_all` or a non-empty
/// `user_ids` list. When both are supplied, `send_to_all` wins.
#[derive(Debug, Clone, Default)]
pub struct BroadcastNotificationParams {
    /// Message text, required non-empty.
    pub message: Option<String>,
    /// Target every user with the customer role.
    pub send_to_all: bool,
    /// Target the customers among the given user ids.
    pub user_ids: Option<Vec<i32>>,
}

/// Notification as exposed over the API.
///
/// The recipient is implied by the authenticated caller and not serialized.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NotificationDto {
    pub id: i32,
    pub message: String,
    pub is_read: bool,
    pub timestamp: DateTime<Utc>,
}

/// Request body for the admin single-target notification.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateNotificationDto {
    pub user_id: i32,
    pub message: String,
}

/// Request body for the admin broadcast.
#[derive(Debug, Clone, Deserialize)]
pub struct BroadcastNotificationDto {
    pub message: Option<String>,
    #[serde(default)]
    pub send_to_all: bool,
    pub user_ids: Option<Vec<i32>>,
}

/// Response body for the admin broadcast, reporting how many notifications
/// were created.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BroadcastResultDto {
    pub created: u64,
}
