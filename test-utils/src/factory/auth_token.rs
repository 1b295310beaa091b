//! Auth token factory for creating test bearer tokens.
//!
//! Tokens are normally issued by the external identity service; in tests they
//! are inserted directly so the auth guard has something to resolve.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test auth tokens with customizable fields.
pub struct AuthTokenFactory<'a> {
    db: &'a DatabaseConnection,
    token: String,
    user_id: i32,
}

impl<'a> AuthTokenFactory<'a> {
    /// Creates a new AuthTokenFactory with default values.
    ///
    /// Defaults:
    /// - token: `"token-{id}"` where id is auto-incremented
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `user_id` - Id of the user the token is issued to
    ///
    /// # Returns
    /// - `AuthTokenFactory` - New factory instance with defaults
    pub fn new(db: &'a DatabaseConnection, user_id: i32) -> Self {
        Self {
            db,
            token: format!("token-{}", next_id()),
            user_id,
        }
    }

    /// Sets the token string.
    ///
    /// # Arguments
    /// - `token` - Opaque token value
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn token(mut self, token: impl Into<String>) -> Self {
        self.token = token.into();
        self
    }

    /// Builds and inserts the auth token entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::auth_token::Model)` - Created auth token entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::auth_token::Model, DbErr> {
        entity::auth_token::ActiveModel {
            token: ActiveValue::Set(self.token),
            user_id: ActiveValue::Set(self.user_id),
            issued_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await
    }
}

/// Creates an auth token for a user with default values.
///
/// Shorthand for `AuthTokenFactory::new(db, user_id).build().await`.
///
/// # Arguments
/// - `db` - Database connection
/// - `user_id` - Id of the user the token is issued to
///
/// # Returns
/// - `Ok(entity::auth_token::Model)` - Created auth token entity
/// - `Err(DbErr)` - Database error during insert
pub async fn create_token(
    db: &DatabaseConnection,
    user_id: i32,
) -> Result<entity::auth_token::Model, DbErr> {
    AuthTokenFactory::new(db, user_id).build().await
}
