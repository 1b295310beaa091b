//! Domain models for laundry orders.
//!
//! Defines the order domain model, the service-type and status vocabularies,
//! parameter types for order operations, and the status-change event consumed
//! by the notification dispatcher.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sea_orm::DbErr;
use serde::{Deserialize, Serialize};

/// Laundry service requested for an order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServiceType {
    Wash,
    DryClean,
    Iron,
    Fold,
}

impl ServiceType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ServiceType::Wash => "wash",
            ServiceType::DryClean => "dry_clean",
            ServiceType::Iron => "iron",
            ServiceType::Fold => "fold",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "wash" => Some(ServiceType::Wash),
            "dry_clean" => Some(ServiceType::DryClean),
            "iron" => Some(ServiceType::Iron),
            "fold" => Some(ServiceType::Fold),
            _ => None,
        }
    }
}

/// Lifecycle status of an order.
///
/// The variants form the usual progression (pending → picked_up → washing →
/// ironing → delivered), but transitions are not validated: an admin may set
/// any status after any other.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderStatus {
    Pending,
    PickedUp,
    Washing,
    Ironing,
    Delivered,
}

impl OrderStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "pending",
            OrderStatus::PickedUp => "picked_up",
            OrderStatus::Washing => "washing",
            OrderStatus::Ironing => "ironing",
            OrderStatus::Delivered => "delivered",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "pending" => Some(OrderStatus::Pending),
            "picked_up" => Some(OrderStatus::PickedUp),
            "washing" => Some(OrderStatus::Washing),
            "ironing" => Some(OrderStatus::Ironing),
            "delivered" => Some(OrderStatus::Delivered),
            _ => None,
        }
    }
}

/// A single laundry service request with lifecycle status.
#[derive(Debug, Clone, PartialEq)]
pub struct Order {
    /// Unique identifier for the order.
    pub id: i32,
    /// Id of the owning customer, set once at creation.
    pub customer_id: i32,
    /// Requested laundry service.
    pub service_type: ServiceType,
    /// Current lifecycle status.
    pub status: OrderStatus,
    /// Free-text pickup address.
    pub pickup_address: String,
    /// Free-text delivery address.
    pub delivery_address: String,
    /// Price supplied at creation, never recomputed.
    pub total_price: Decimal,
    /// Timestamp when the order was created.
    pub created_at: DateTime<Utc>,
    /// Timestamp refreshed on every mutation.
    pub updated_at: DateTime<Utc>,
}

impl Order {
    /// Converts an entity model to an order domain model at the repository boundary.
    ///
    /// # Arguments
    /// - `entity` - The entity model from the database
    ///
    /// # Returns
    /// - `Ok(Order)` - The converted order domain model
    /// - `Err(DbErr)` - A stored service_type or status string is not recognized
    pub fn from_entity(entity: entity::order::Model) -> Result<Self, DbErr> {
        let service_type = ServiceType::parse(&entity.service_type).ok_or_else(|| {
            DbErr::Custom(format!(
                "Unknown service type '{}' stored for order {}",
                entity.service_type, entity.id
            ))
        })?;
        let status = OrderStatus::parse(&entity.status).ok_or_else(|| {
            DbErr::Custom(format!(
                "Unknown status '{}' stored for order {}",
                entity.status, entity.id
            ))
        })?;

        Ok(Self {
            id: entity.id,
            customer_id: entity.customer_id,
            service_type,
            status,
            pickup_address: entity.pickup_address,
            delivery_address: entity.delivery_address,
            total_price: entity.total_price,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        })
    }

    pub fn into_dto(self) -> OrderDto {
        OrderDto {
            id: self.id,
            customer_id: self.customer_id,
            service_type: self.service_type.as_str().to_string(),
            status: self.status.as_str().to_string(),
            pickup_address: self.pickup_address,
            delivery_address: self.delivery_address,
            total_price: self.total_price,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

/// Parameters for creating a new order.
///
/// The owning customer is not part of the parameters: it is always taken from
/// the caller identity.
#[derive(Debug, Clone)]
pub struct CreateOrderParams {
    /// Requested laundry service.
    pub service_type: ServiceType,
    /// Free-text pickup address, must be non-empty.
    pub pickup_address: String,
    /// Free-text delivery address, must be non-empty.
    pub delivery_address: String,
    /// Price supplied by the caller, must not be negative.
    pub total_price: Decimal,
}

/// Parameters for updating an existing order.
///
/// All fields are optional - only provided fields will be updated. Status is
/// deliberately absent: status changes go through the restricted admin-only
/// operation so the status-change event fires exactly once per update.
#[derive(Debug, Clone, Default)]
pub struct UpdateOrderParams {
    /// New requested laundry service.
    pub service_type: Option<ServiceType>,
    /// New pickup address.
    pub pickup_address: Option<String>,
    /// New delivery address.
    pub delivery_address: Option<String>,
    /// New price.
    pub total_price: Option<Decimal>,
}

/// Event emitted after a successful admin status update.
///
/// Constructed by the order service and handed synchronously to the
/// notification dispatcher. Emitted exactly once per status update, never for
/// non-status edits and never on creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OrderStatusChanged {
    /// Id of the updated order.
    pub order_id: i32,
    /// Id of the order's owning customer.
    pub customer_id: i32,
    /// The status the order was set to.
    pub status: OrderStatus,
}

/// Order as exposed over the API.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderDto {
    pub id: i32,
    pub customer_id: i32,
    pub service_type: String,
    pub status: String,
    pub pickup_address: String,
    pub delivery_address: String,
    pub total_price: Decimal,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Request body for creating an order.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateOrderDto {
    pub service_type: String,
    pub pickup_address: String,
    pub delivery_address: String,
    pub total_price: Decimal,
    /// Accepted but ignored: orders always belong to the caller.
    #[serde(default)]
    pub customer_id: Option<i32>,
}

/// Request body for a partial order update.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateOrderDto {
    pub service_type: Option<String>,
    pub pickup_address: Option<String>,
    pub delivery_address: Option<String>,
    pub total_price: Option<Decimal>,
}

/// Request body for the admin-only status update.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateOrderStatusDto {
    pub status: String,
}
