//! Notification data repository for database operations.
//!
//! This module provides the `NotificationRepository` for managing notification records.
//! It handles single and bulk creation, recipient-scoped queries, and read-state
//! updates, converting between entity models and domain models at the infrastructure
//! boundary.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

use crate::model::notification::{CreateNotificationParams, Notification};

/// Repository providing database operations for notification management.
pub struct NotificationRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> NotificationRepository<'a> {
    /// Creates a new NotificationRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `NotificationRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a single unread notification.
    ///
    /// The timestamp is stamped with the current time and the read flag starts false.
    ///
    /// # Arguments
    /// - `params` - Target recipient id and message text
    ///
    /// # Returns
    /// - `Ok(Notification)` - The created notification
    /// - `Err(DbErr)` - Database error during insert
    pub async fn create(&self, params: CreateNotificationParams) -> Result<Notification, DbErr> {
        let entity = entity::notification::ActiveModel {
            user_id: ActiveValue::Set(params.user_id),
            message: ActiveValue::Set(params.message),
            is_read: ActiveValue::Set(false),
            timestamp: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Notification::from_entity(entity))
    }

    /// Creates one unread notification per recipient in a single bulk insert.
    ///
    /// All notifications share the same message and timestamp. No ordering is
    /// guaranteed between the inserted rows and concurrent single creations.
    ///
    /// # Arguments
    /// - `user_ids` - Recipient ids, one notification each
    /// - `message` - Message text shared by every notification
    ///
    /// # Returns
    /// - `Ok(count)` - Number of notifications created (returns early with 0 if the
    ///   slice is empty)
    /// - `Err(DbErr)` - Database error during bulk insert
    pub async fn create_many(&self, user_ids: &[i32], message: &str) -> Result<u64, DbErr> {
        if user_ids.is_empty() {
            return Ok(0);
        }

        let now = Utc::now();
        let notifications: Vec<entity::notification::ActiveModel> = user_ids
            .iter()
            .map(|user_id| entity::notification::ActiveModel {
                user_id: ActiveValue::Set(*user_id),
                message: ActiveValue::Set(message.to_string()),
                is_read: ActiveValue::Set(false),
                timestamp: ActiveValue::Set(now),
                ..Default::default()
            })
            .collect();

        entity::prelude::Notification::insert_many(notifications)
            .exec(self.db)
            .await?;

        Ok(user_ids.len() as u64)
    }

    /// Finds a notification by its id.
    ///
    /// # Arguments
    /// - `id` - Notification id
    ///
    /// # Returns
    /// - `Ok(Some(Notification))` - Notification found
    /// - `Ok(None)` - No notification with that id
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_id(&self, id: i32) -> Result<Option<Notification>, DbErr> {
        let entity = entity::prelude::Notification::find_by_id(id)
            .one(self.db)
            .await?;

        Ok(entity.map(Notification::from_entity))
    }

    /// Gets all notifications for a recipient, newest-timestamp-first.
    ///
    /// # Arguments
    /// - `user_id` - Id of the recipient
    ///
    /// # Returns
    /// - `Ok(Vec<Notification>)` - The recipient's notifications (empty if none exist)
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_by_user(&self, user_id: i32) -> Result<Vec<Notification>, DbErr> {
        let entities = entity::prelude::Notification::find()
            .filter(entity::notification::Column::UserId.eq(user_id))
            .order_by_desc(entity::notification::Column::Timestamp)
            .all(self.db)
            .await?;

        Ok(entities
            .into_iter()
            .map(Notification::from_entity)
            .collect())
    }

    /// Marks a notification as read.
    ///
    /// Sets the read flag unconditionally, so repeated calls succeed and leave
    /// the flag true.
    ///
    /// # Arguments
    /// - `id` - Notification id
    ///
    /// # Returns
    /// - `Ok(Some(Notification))` - The updated notification with is_read = true
    /// - `Ok(None)` - No notification with that id
    /// - `Err(DbErr)` - Database error during query or update
    pub async fn mark_read(&self, id: i32) -> Result<Option<Notification>, DbErr> {
        let Some(entity) = entity::prelude::Notification::find_by_id(id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active: entity::notification::ActiveModel = entity.into();
        active.is_read = ActiveValue::Set(true);

        let entity = active.update(self.db).await?;

        Ok(Some(Notification::from_entity(entity)))
    }
}
