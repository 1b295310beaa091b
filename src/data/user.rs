//! User data repository for database operations.
//!
//! This module provides the `UserRepository` for reading user records. User rows are
//! written by the external identity service; this backend only queries them to resolve
//! callers and notification recipients.

use sea_orm::{ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder};

use crate::model::user::{Role, User};

/// Repository providing read access to user records.
pub struct UserRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserRepository<'a> {
    /// Creates a new UserRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `UserRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Finds a user by their id.
    ///
    /// # Arguments
    /// - `id` - User id
    ///
    /// # Returns
    /// - `Ok(Some(User))` - User found with full data
    /// - `Ok(None)` - No user found with that id
    /// - `Err(DbErr)` - Database error during query or entity conversion
    pub async fn find_by_id(&self, id: i32) -> Result<Option<User>, DbErr> {
        let entity = entity::prelude::User::find_by_id(id).one(self.db).await?;

        entity.map(User::from_entity).transpose()
    }

    /// Gets all users with the customer role.
    ///
    /// Used by broadcast targeting to resolve the full recipient set. Results are
    /// ordered alphabetically by name.
    ///
    /// # Returns
    /// - `Ok(Vec<User>)` - Vector of all customers (empty if none exist)
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_customers(&self) -> Result<Vec<User>, DbErr> {
        let entities = entity::prelude::User::find()
            .filter(entity::user::Column::Role.eq(Role::Customer.as_str()))
            .order_by_asc(entity::user::Column::Name)
            .all(self.db)
            .await?;

        entities.into_iter().map(User::from_entity).collect()
    }

    /// Gets the users with the customer role among the given ids.
    ///
    /// Ids that do not resolve, or that resolve to non-customer users, are silently
    /// dropped from the result.
    ///
    /// # Arguments
    /// - `ids` - Slice of user ids to look up
    ///
    /// # Returns
    /// - `Ok(Vec<User>)` - Customers among the given ids (returns early if the slice is empty)
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_customers_by_ids(&self, ids: &[i32]) -> Result<Vec<User>, DbErr> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let entities = entity::prelude::User::find()
            .filter(entity::user::Column::Id.is_in(ids.iter().copied()))
            .filter(entity::user::Column::Role.eq(Role::Customer.as_str()))
            .order_by_asc(entity::user::Column::Name)
            .all(self.db)
            .await?;

        entities.into_iter().map(User::from_entity).collect()
    }
}
