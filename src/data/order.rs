//! Order data repository for database operations.
//!
//! This module provides the `OrderRepository` for managing order records in the database.
//! It handles order creation, queries scoped by owner, partial updates, status updates,
//! and deletion, converting between entity models and domain models at the
//! infrastructure boundary.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

use crate::model::order::{CreateOrderParams, Order, OrderStatus, UpdateOrderParams};

/// Repository providing database operations for order management.
pub struct OrderRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> OrderRepository<'a> {
    /// Creates a new OrderRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `OrderRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a new order owned by the given customer.
    ///
    /// Status is initialized to pending and both timestamps are stamped with the
    /// current time. The owner is fixed at creation and never changes afterwards.
    ///
    /// # Arguments
    /// - `customer_id` - Id of the owning customer
    /// - `params` - Order creation parameters
    ///
    /// # Returns
    /// - `Ok(Order)` - The created order
    /// - `Err(DbErr)` - Database error during insert
    pub async fn create(
        &self,
        customer_id: i32,
        params: CreateOrderParams,
    ) -> Result<Order, DbErr> {
        let now = Utc::now();

        let entity = entity::order::ActiveModel {
            customer_id: ActiveValue::Set(customer_id),
            service_type: ActiveValue::Set(params.service_type.as_str().to_string()),
            status: ActiveValue::Set(OrderStatus::Pending.as_str().to_string()),
            pickup_address: ActiveValue::Set(params.pickup_address),
            delivery_address: ActiveValue::Set(params.delivery_address),
            total_price: ActiveValue::Set(params.total_price),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Order::from_entity(entity)
    }

    /// Finds an order by its id.
    ///
    /// # Arguments
    /// - `id` - Order id
    ///
    /// # Returns
    /// - `Ok(Some(Order))` - Order found
    /// - `Ok(None)` - No order with that id
    /// - `Err(DbErr)` - Database error during query or entity conversion
    pub async fn find_by_id(&self, id: i32) -> Result<Option<Order>, DbErr> {
        let entity = entity::prelude::Order::find_by_id(id).one(self.db).await?;

        entity.map(Order::from_entity).transpose()
    }

    /// Gets all orders, newest-created-first.
    ///
    /// Used for the admin view of the order book.
    ///
    /// # Returns
    /// - `Ok(Vec<Order>)` - All orders (empty if none exist)
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_all(&self) -> Result<Vec<Order>, DbErr> {
        let entities = entity::prelude::Order::find()
            .order_by_desc(entity::order::Column::CreatedAt)
            .all(self.db)
            .await?;

        entities.into_iter().map(Order::from_entity).collect()
    }

    /// Gets all orders owned by a customer, newest-created-first.
    ///
    /// # Arguments
    /// - `customer_id` - Id of the owning customer
    ///
    /// # Returns
    /// - `Ok(Vec<Order>)` - The customer's orders (empty if none exist)
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_by_customer(&self, customer_id: i32) -> Result<Vec<Order>, DbErr> {
        let entities = entity::prelude::Order::find()
            .filter(entity::order::Column::CustomerId.eq(customer_id))
            .order_by_desc(entity::order::Column::CreatedAt)
            .all(self.db)
            .await?;

        entities.into_iter().map(Order::from_entity).collect()
    }

    /// Applies a partial update to an order.
    ///
    /// Only fields provided in the parameters are changed; updated_at is refreshed.
    /// Status is never touched by this method.
    ///
    /// # Arguments
    /// - `id` - Order id
    /// - `params` - Optional new values for the mutable non-status fields
    ///
    /// # Returns
    /// - `Ok(Some(Order))` - The updated order
    /// - `Ok(None)` - No order with that id
    /// - `Err(DbErr)` - Database error during query or update
    pub async fn update(
        &self,
        id: i32,
        params: UpdateOrderParams,
    ) -> Result<Option<Order>, DbErr> {
        let Some(entity) = entity::prelude::Order::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let mut active: entity::order::ActiveModel = entity.into();

        if let Some(service_type) = params.service_type {
            active.service_type = ActiveValue::Set(service_type.as_str().to_string());
        }
        if let Some(pickup_address) = params.pickup_address {
            active.pickup_address = ActiveValue::Set(pickup_address);
        }
        if let Some(delivery_address) = params.delivery_address {
            active.delivery_address = ActiveValue::Set(delivery_address);
        }
        if let Some(total_price) = params.total_price {
            active.total_price = ActiveValue::Set(total_price);
        }
        active.updated_at = ActiveValue::Set(Utc::now());

        let entity = active.update(self.db).await?;

        Order::from_entity(entity).map(Some)
    }

    /// Sets the status of an order.
    ///
    /// Updates the status column and refreshes updated_at. No transition
    /// validation happens here; any status may follow any other.
    ///
    /// # Arguments
    /// - `id` - Order id
    /// - `status` - The status to set
    ///
    /// # Returns
    /// - `Ok(Some(Order))` - The updated order
    /// - `Ok(None)` - No order with that id
    /// - `Err(DbErr)` - Database error during query or update
    pub async fn update_status(
        &self,
        id: i32,
        status: OrderStatus,
    ) -> Result<Option<Order>, DbErr> {
        let Some(entity) = entity::prelude::Order::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let mut active: entity::order::ActiveModel = entity.into();
        active.status = ActiveValue::Set(status.as_str().to_string());
        active.updated_at = ActiveValue::Set(Utc::now());

        let entity = active.update(self.db).await?;

        Order::from_entity(entity).map(Some)
    }

    /// Deletes an order by its id.
    ///
    /// # Arguments
    /// - `id` - Order id
    ///
    /// # Returns
    /// - `Ok(true)` - The order existed and was deleted
    /// - `Ok(false)` - No order with that id
    /// - `Err(DbErr)` - Database error during delete
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Order::delete_by_id(id).exec(self.db).await?;

        Ok(result.rows_affected > 0)
    }
}
