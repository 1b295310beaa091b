//! Auth token repository for bearer-token resolution.
//!
//! Tokens are issued by the external identity service and stored in the shared
//! database; this repository only resolves them to users when authenticating
//! requests.

use sea_orm::{DatabaseConnection, DbErr, EntityTrait};

use crate::model::user::User;

/// Repository resolving opaque bearer tokens to users.
pub struct AuthTokenRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AuthTokenRepository<'a> {
    /// Creates a new AuthTokenRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `AuthTokenRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Resolves a bearer token to the user it was issued to.
    ///
    /// # Arguments
    /// - `token` - Opaque token string from the Authorization header
    ///
    /// # Returns
    /// - `Ok(Some(User))` - Token is valid and resolves to this user
    /// - `Ok(None)` - Token is unknown, or its user no longer exists
    /// - `Err(DbErr)` - Database error during query or entity conversion
    pub async fn find_user_by_token(&self, token: &str) -> Result<Option<User>, DbErr> {
        let Some(token) = entity::prelude::AuthToken::find_by_id(token.to_string())
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let entity = entity::prelude::User::find_by_id(token.user_id)
            .one(self.db)
            .await?;

        entity.map(User::from_entity).transpose()
    }
}
