//! Order factory for creating test order entities.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test orders with customizable fields.
///
/// The owning customer must exist before building the order; pass its id to
/// `new()`.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::order::OrderFactory;
///
/// let order = OrderFactory::new(&db, customer.id)
///     .service_type("dry_clean")
///     .status("washing")
///     .build()
///     .await?;
/// ```
pub struct OrderFactory<'a> {
    db: &'a DatabaseConnection,
    customer_id: i32,
    service_type: String,
    status: String,
    pickup_address: String,
    delivery_address: String,
    total_price: Decimal,
    created_at: DateTime<Utc>,
}

impl<'a> OrderFactory<'a> {
    /// Creates a new OrderFactory with default values.
    ///
    /// Defaults:
    /// - service_type: `"wash"`
    /// - status: `"pending"`
    /// - pickup_address / delivery_address: `"1 Main St"`
    /// - total_price: `12.50`
    /// - created_at: now (updated_at is always stamped with created_at)
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `customer_id` - Id of the owning customer
    ///
    /// # Returns
    /// - `OrderFactory` - New factory instance with defaults
    pub fn new(db: &'a DatabaseConnection, customer_id: i32) -> Self {
        Self {
            db,
            customer_id,
            service_type: "wash".to_string(),
            status: "pending".to_string(),
            pickup_address: "1 Main St".to_string(),
            delivery_address: "1 Main St".to_string(),
            total_price: Decimal::new(1250, 2),
            created_at: Utc::now(),
        }
    }

    /// Sets the service type for the order.
    ///
    /// # Arguments
    /// - `service_type` - Service type string (wash, dry_clean, iron, fold)
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn service_type(mut self, service_type: impl Into<String>) -> Self {
        self.service_type = service_type.into();
        self
    }

    /// Sets the status for the order.
    ///
    /// # Arguments
    /// - `status` - Status string (pending, picked_up, washing, ironing, delivered)
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.status = status.into();
        self
    }

    /// Sets the pickup address for the order.
    ///
    /// # Arguments
    /// - `pickup_address` - Free-text pickup address
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn pickup_address(mut self, pickup_address: impl Into<String>) -> Self {
        self.pickup_address = pickup_address.into();
        self
    }

    /// Sets the delivery address for the order.
    ///
    /// # Arguments
    /// - `delivery_address` - Free-text delivery address
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn delivery_address(mut self, delivery_address: impl Into<String>) -> Self {
        self.delivery_address = delivery_address.into();
        self
    }

    /// Sets the total price for the order.
    ///
    /// # Arguments
    /// - `total_price` - Price as a decimal
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn total_price(mut self, total_price: Decimal) -> Self {
        self.total_price = total_price;
        self
    }

    /// Sets the creation timestamp for the order.
    ///
    /// Useful for tests asserting newest-first ordering, which need distinct
    /// creation times.
    ///
    /// # Arguments
    /// - `created_at` - Creation timestamp
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self
    }

    /// Builds and inserts the order entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::order::Model)` - Created order entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::order::Model, DbErr> {
        entity::order::ActiveModel {
            customer_id: ActiveValue::Set(self.customer_id),
            service_type: ActiveValue::Set(self.service_type),
            status: ActiveValue::Set(self.status),
            pickup_address: ActiveValue::Set(self.pickup_address),
            delivery_address: ActiveValue::Set(self.delivery_address),
            total_price: ActiveValue::Set(self.total_price),
            created_at: ActiveValue::Set(self.created_at),
            updated_at: ActiveValue::Set(self.created_at),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates an order for a customer with default values.
///
/// Shorthand for `OrderFactory::new(db, customer_id).build().await`.
///
/// # Arguments
/// - `db` - Database connection
/// - `customer_id` - Id of the owning customer
///
/// # Returns
/// - `Ok(entity::order::Model)` - Created order entity
/// - `Err(DbErr)` - Database error during insert
pub async fn create_order(
    db: &DatabaseConnection,
    customer_id: i32,
) -> Result<entity::order::Model, DbErr> {
    OrderFactory::new(db, customer_id).build().await
}
