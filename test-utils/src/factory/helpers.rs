//! Shared helper utilities for factory methods.
//!
//! This module provides common utilities used across all factory modules,
//! including ID generation and convenience methods for creating entities
//! with their dependencies.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique IDs in tests.
///
/// This atomic counter ensures each factory-created entity gets a unique
/// identifier to prevent collisions in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// This function provides monotonically increasing values for use in
/// generating unique test identifiers across all factories.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a customer together with a bearer token for them.
///
/// Convenience method for authentication tests that need a resolvable
/// credential without caring about the token value.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok((user, token))` - The created customer and their token
/// - `Err(DbErr)` - Database error during creation
pub async fn create_customer_with_token(
    db: &DatabaseConnection,
) -> Result<(entity::user::Model, entity::auth_token::Model), DbErr> {
    let user = crate::factory::user::create_customer(db).await?;
    let token = crate::factory::auth_token::create_token(db, user.id).await?;

    Ok((user, token))
}

/// Creates an order together with its owning customer.
///
/// Convenience method for tests exercising order operations that need an
/// existing order without caring about the owner's details.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok((user, order))` - The created customer and their order
/// - `Err(DbErr)` - Database error during creation
pub async fn create_order_with_owner(
    db: &DatabaseConnection,
) -> Result<(entity::user::Model, entity::order::Model), DbErr> {
    let user = crate::factory::user::create_customer(db).await?;
    let order = crate::factory::order::create_order(db, user.id).await?;

    Ok((user, order))
}
