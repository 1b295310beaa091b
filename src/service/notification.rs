//! Notification dispatcher service.
//!
//! This module provides the `NotificationService` for creating and reading
//! notifications: the system-triggered status-change message, admin-authored
//! single notifications, broadcasts, recipient-scoped listing, and read-state
//! updates. The status-change handler is invoked directly by the order service
//! rather than through a signal registry, so there is exactly one handler and
//! no ordering ambiguity.

use sea_orm::DatabaseConnection;

use crate::{
    data::{notification::NotificationRepository, user::UserRepository},
    error::AppError,
    model::{
        notification::{BroadcastNotificationParams, CreateNotificationParams, Notification},
        order::OrderStatusChanged,
    },
};

/// Service providing business logic for notification dispatch and read state.
pub struct NotificationService<'a> {
    pub db: &'a DatabaseConnection,
}

impl<'a> NotificationService<'a> {
    /// Creates a new NotificationService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `NotificationService` - New service instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Handles an order status-change event.
    ///
    /// Creates exactly one notification for the order's customer with a message
    /// interpolating the customer's display name, the order id, and the new
    /// status. No deduplication happens here; the order service emits the event
    /// exactly once per status update.
    ///
    /// # Arguments
    /// - `event` - The status-change event from the order service
    ///
    /// # Returns
    /// - `Ok(Notification)` - The created notification for the order's customer
    /// - `Err(AppError::NotFound)` - The order's customer no longer resolves
    /// - `Err(AppError::DbErr)` - Database error during insert
    pub async fn handle_order_status_changed(
        &self,
        event: &OrderStatusChanged,
    ) -> Result<Notification, AppError> {
        let user_repo = UserRepository::new(self.db);

        let Some(customer) = user_repo.find_by_id(event.customer_id).await? else {
            return Err(AppError::NotFound(format!(
                "Customer {} for order {} not found",
                event.customer_id, event.order_id
            )));
        };

        let message = format!(
            "Hi {}, your order #{} status has been updated to '{}'.",
            customer.name,
            event.order_id,
            event.status.as_str()
        );

        let repo = NotificationRepository::new(self.db);
        let notification = repo
            .create(CreateNotificationParams {
                user_id: customer.id,
                message,
            })
            .await?;

        Ok(notification)
    }

    /// Lists a recipient's notifications, newest-timestamp-first.
    ///
    /// # Arguments
    /// - `user_id` - Id of the recipient
    ///
    /// # Returns
    /// - `Ok(Vec<Notification>)` - The recipient's notifications
    /// - `Err(AppError::DbErr)` - Database error during query
    pub async fn list_for_user(&self, user_id: i32) -> Result<Vec<Notification>, AppError> {
        let repo = NotificationRepository::new(self.db);
        let notifications = repo.get_by_user(user_id).await?;

        Ok(notifications)
    }

    /// Marks a notification as read.
    ///
    /// Idempotent: the read flag is set unconditionally, so marking an
    /// already-read notification succeeds and leaves it read.
    ///
    /// # Arguments
    /// - `id` - Notification id
    ///
    /// # Returns
    /// - `Ok(Some(Notification))` - The notification with is_read = true
    /// - `Ok(None)` - No notification with that id
    /// - `Err(AppError::DbErr)` - Database error during update
    pub async fn mark_read(&self, id: i32) -> Result<Option<Notification>, AppError> {
        let repo = NotificationRepository::new(self.db);
        let notification = repo.mark_read(id).await?;

        Ok(notification)
    }

    /// Creates a single admin-authored notification.
    ///
    /// The staff/admin capability check happens at the controller via the auth
    /// guard. The target user id must resolve; a missing target is a validation
    /// failure, not a 404, because the id arrives in the request body.
    ///
    /// # Arguments
    /// - `params` - Target recipient id and message text
    ///
    /// # Returns
    /// - `Ok(Notification)` - The created unread notification
    /// - `Err(AppError::BadRequest)` - Empty message or unresolvable target user id
    /// - `Err(AppError::DbErr)` - Database error during insert
    pub async fn create(&self, params: CreateNotificationParams) -> Result<Notification, AppError> {
        if params.message.trim().is_empty() {
            return Err(AppError::BadRequest(
                "Message field is required.".to_string(),
            ));
        }

        let user_repo = UserRepository::new(self.db);
        if user_repo.find_by_id(params.user_id).await?.is_none() {
            return Err(AppError::BadRequest(format!(
                "Target user {} does not exist.",
                params.user_id
            )));
        }

        let repo = NotificationRepository::new(self.db);
        let notification = repo.create(params).await?;

        Ok(notification)
    }

    /// Broadcasts a notification to customers.
    ///
    /// Resolves the recipient set from the targeting mode: `send_to_all` reaches
    /// every user with the customer role, otherwise a non-empty `user_ids` list
    /// reaches the customers among the given ids (ids resolving to admins or to
    /// nobody are dropped). When both modes are supplied, `send_to_all` wins.
    /// All notifications are inserted in one bulk operation; nothing is created
    /// when validation fails.
    ///
    /// # Arguments
    /// - `params` - Message and targeting mode
    ///
    /// # Returns
    /// - `Ok(count)` - Number of notifications created
    /// - `Err(AppError::BadRequest)` - Missing/empty message, or neither targeting
    ///   mode supplied
    /// - `Err(AppError::DbErr)` - Database error during bulk insert
    pub async fn broadcast(&self, params: BroadcastNotificationParams) -> Result<u64, AppError> {
        let message = match &params.message {
            Some(message) if !message.trim().is_empty() => message.as_str(),
            _ => {
                return Err(AppError::BadRequest(
                    "Message field is required.".to_string(),
                ))
            }
        };

        let user_repo = UserRepository::new(self.db);

        let recipients = if params.send_to_all {
            user_repo.get_customers().await?
        } else if let Some(user_ids) = params.user_ids.as_deref().filter(|ids| !ids.is_empty()) {
            user_repo.get_customers_by_ids(user_ids).await?
        } else {
            return Err(AppError::BadRequest(
                "Provide either 'user_ids' (list) or set 'send_to_all' to true.".to_string(),
            ));
        };

        let recipient_ids: Vec<i32> = recipients.iter().map(|user| user.id).collect();

        let repo = NotificationRepository::new(self.db);
        let created = repo.create_many(&recipient_ids, message).await?;

        Ok(created)
    }
}
