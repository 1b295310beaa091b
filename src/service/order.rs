//! Order service for business logic.
//!
//! This module provides the `OrderService` for managing the order lifecycle:
//! creation, visibility scoping, partial updates, deletion, and the restricted
//! status transition that feeds the notification dispatcher.

use rust_decimal::Decimal;
use sea_orm::DatabaseConnection;

use crate::{
    data::order::OrderRepository,
    error::AppError,
    model::{
        order::{CreateOrderParams, Order, OrderStatus, OrderStatusChanged, UpdateOrderParams},
        user::User,
    },
    service::notification::NotificationService,
};

/// Service providing business logic for order management.
pub struct OrderService<'a> {
    pub db: &'a DatabaseConnection,
}

impl<'a> OrderService<'a> {
    /// Creates a new OrderService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `OrderService` - New service instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists the orders visible to the caller, newest-created-first.
    ///
    /// Admin callers see every order in the system; other callers see only the
    /// orders they own.
    ///
    /// # Arguments
    /// - `caller` - The authenticated caller
    ///
    /// # Returns
    /// - `Ok(Vec<Order>)` - Orders visible to the caller
    /// - `Err(AppError::DbErr)` - Database error during query
    pub async fn list_for_caller(&self, caller: &User) -> Result<Vec<Order>, AppError> {
        let repo = OrderRepository::new(self.db);

        let orders = if caller.is_admin() {
            repo.get_all().await?
        } else {
            repo.get_by_customer(caller.id).await?
        };

        Ok(orders)
    }

    /// Creates a new order owned by the caller.
    ///
    /// The owner is always the caller identity; any customer value supplied in
    /// the request input never reaches this method. Status starts at pending.
    ///
    /// # Arguments
    /// - `caller` - The authenticated caller, becomes the order's customer
    /// - `params` - Validated-type creation parameters
    ///
    /// # Returns
    /// - `Ok(Order)` - The created order with status pending
    /// - `Err(AppError::BadRequest)` - Empty address field or negative price
    /// - `Err(AppError::DbErr)` - Database error during insert
    pub async fn create(&self, caller: &User, params: CreateOrderParams) -> Result<Order, AppError> {
        Self::validate_addresses(&params.pickup_address, &params.delivery_address)?;
        Self::validate_price(params.total_price)?;

        let repo = OrderRepository::new(self.db);
        let order = repo.create(caller.id, params).await?;

        Ok(order)
    }

    /// Retrieves a single order by id.
    ///
    /// # Arguments
    /// - `id` - Order id
    ///
    /// # Returns
    /// - `Ok(Some(Order))` - Order found
    /// - `Ok(None)` - No order with that id
    /// - `Err(AppError::DbErr)` - Database error during query
    pub async fn get_by_id(&self, id: i32) -> Result<Option<Order>, AppError> {
        let repo = OrderRepository::new(self.db);
        let order = repo.find_by_id(id).await?;

        Ok(order)
    }

    /// Applies a partial update to an order's non-status fields.
    ///
    /// Refreshes updated_at but never emits a status-change event: only the
    /// restricted status operation does that.
    ///
    /// # Arguments
    /// - `id` - Order id
    /// - `params` - Optional new values for the mutable non-status fields
    ///
    /// # Returns
    /// - `Ok(Some(Order))` - The updated order
    /// - `Ok(None)` - No order with that id
    /// - `Err(AppError::BadRequest)` - A provided address is empty or the price is negative
    /// - `Err(AppError::DbErr)` - Database error during update
    pub async fn update(
        &self,
        id: i32,
        params: UpdateOrderParams,
    ) -> Result<Option<Order>, AppError> {
        if let Some(pickup_address) = &params.pickup_address {
            Self::validate_address(pickup_address, "pickup_address")?;
        }
        if let Some(delivery_address) = &params.delivery_address {
            Self::validate_address(delivery_address, "delivery_address")?;
        }
        if let Some(total_price) = params.total_price {
            Self::validate_price(total_price)?;
        }

        let repo = OrderRepository::new(self.db);
        let order = repo.update(id, params).await?;

        Ok(order)
    }

    /// Deletes an order by id.
    ///
    /// # Arguments
    /// - `id` - Order id
    ///
    /// # Returns
    /// - `Ok(true)` - The order existed and was deleted
    /// - `Ok(false)` - No order with that id
    /// - `Err(AppError::DbErr)` - Database error during delete
    pub async fn delete(&self, id: i32) -> Result<bool, AppError> {
        let repo = OrderRepository::new(self.db);
        let deleted = repo.delete(id).await?;

        Ok(deleted)
    }

    /// Sets the status of an order and dispatches the status-change notification.
    ///
    /// On success, constructs an `OrderStatusChanged` event and hands it
    /// synchronously to the notification dispatcher. The event fires exactly once
    /// per successful status update. A dispatch failure does not fail the status
    /// update: it is logged at warn level and the updated order is still returned.
    ///
    /// The role check for this operation happens at the controller via the auth
    /// guard; no transition validation happens anywhere, so any status may follow
    /// any other.
    ///
    /// # Arguments
    /// - `id` - Order id
    /// - `status` - The status to set
    ///
    /// # Returns
    /// - `Ok(Some(Order))` - The order with its new status
    /// - `Ok(None)` - No order with that id
    /// - `Err(AppError::DbErr)` - Database error during update
    pub async fn update_status(
        &self,
        id: i32,
        status: OrderStatus,
    ) -> Result<Option<Order>, AppError> {
        let repo = OrderRepository::new(self.db);

        let Some(order) = repo.update_status(id, status).await? else {
            return Ok(None);
        };

        let event = OrderStatusChanged {
            order_id: order.id,
            customer_id: order.customer_id,
            status,
        };

        let dispatcher = NotificationService::new(self.db);
        if let Err(err) = dispatcher.handle_order_status_changed(&event).await {
            tracing::warn!(
                "Failed to dispatch status notification for order {}: {}",
                order.id,
                err
            );
        }

        Ok(Some(order))
    }

    fn validate_addresses(pickup_address: &str, delivery_address: &str) -> Result<(), AppError> {
        Self::validate_address(pickup_address, "pickup_address")?;
        Self::validate_address(delivery_address, "delivery_address")
    }

    fn validate_address(address: &str, field: &str) -> Result<(), AppError> {
        if address.trim().is_empty() {
            return Err(AppError::BadRequest(format!(
                "Field '{}' must not be empty.",
                field
            )));
        }
        Ok(())
    }

    fn validate_price(total_price: Decimal) -> Result<(), AppError> {
        if total_price < Decimal::ZERO {
            return Err(AppError::BadRequest(
                "Field 'total_price' must not be negative.".to_string(),
            ));
        }
        Ok(())
    }
}
