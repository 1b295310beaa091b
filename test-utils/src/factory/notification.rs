//! Notification factory for creating test notification entities.

use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

use crate::factory::helpers::next_id;

/// Factory for creating test notifications with customizable fields.
pub struct NotificationFactory<'a> {
    db: &'a DatabaseConnection,
    user_id: i32,
    message: String,
    is_read: bool,
    timestamp: DateTime<Utc>,
}

impl<'a> NotificationFactory<'a> {
    /// Creates a new NotificationFactory with default values.
    ///
    /// Defaults:
    /// - message: `"Notification {id}"` where id is auto-incremented
    /// - is_read: `false`
    /// - timestamp: now
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `user_id` - Id of the target recipient
    ///
    /// # Returns
    /// - `NotificationFactory` - New factory instance with defaults
    pub fn new(db: &'a DatabaseConnection, user_id: i32) -> Self {
        Self {
            db,
            user_id,
            message: format!("Notification {}", next_id()),
            is_read: false,
            timestamp: Utc::now(),
        }
    }

    /// Sets the message text.
    ///
    /// # Arguments
    /// - `message` - Message text shown to the recipient
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// Sets the read flag.
    ///
    /// # Arguments
    /// - `is_read` - Whether the notification starts read
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn is_read(mut self, is_read: bool) -> Self {
        self.is_read = is_read;
        self
    }

    /// Sets the creation timestamp.
    ///
    /// Useful for tests asserting newest-first ordering, which need distinct
    /// timestamps.
    ///
    /// # Arguments
    /// - `timestamp` - Creation timestamp
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn timestamp(mut self, timestamp: DateTime<Utc>) -> Self {
        self.timestamp = timestamp;
        self
    }

    /// Builds and inserts the notification entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::notification::Model)` - Created notification entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::notification::Model, DbErr> {
        entity::notification::ActiveModel {
            user_id: ActiveValue::Set(self.user_id),
            message: ActiveValue::Set(self.message),
            is_read: ActiveValue::Set(self.is_read),
            timestamp: ActiveValue::Set(self.timestamp),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a notification for a recipient with default values.
///
/// Shorthand for `NotificationFactory::new(db, user_id).build().await`.
///
/// # Arguments
/// - `db` - Database connection
/// - `user_id` - Id of the target recipient
///
/// # Returns
/// - `Ok(entity::notification::Model)` - Created notification entity
/// - `Err(DbErr)` - Database error during insert
pub async fn create_notification(
    db: &DatabaseConnection,
    user_id: i32,
) -> Result<entity::notification::Model, DbErr> {
    NotificationFactory::new(db, user_id).build().await
}
