use axum::http::{header, HeaderMap};
use sea_orm::DatabaseConnection;

use crate::{
    data::auth_token::AuthTokenRepository,
    error::{auth::AuthError, AppError},
    model::user::{Role, User},
};

/// Capability required by an operation, checked against the caller's attributes.
pub enum Permission {
    /// Caller must have the admin role.
    Admin,
    /// Caller must have the staff flag or the admin role.
    Staff,
}

/// Per-request authentication guard.
///
/// Resolves the caller from the request's bearer token and enforces the
/// capabilities an operation requires. Any identity carrying an id and a role
/// satisfies the guard; there is no type-level distinction between customers
/// and admins.
pub struct AuthGuard<'a> {
    db: &'a DatabaseConnection,
    headers: &'a HeaderMap,
}

impl<'a> AuthGuard<'a> {
    pub fn new(db: &'a DatabaseConnection, headers: &'a HeaderMap) -> Self {
        Self { db, headers }
    }

    /// Resolves the caller and checks the required permissions.
    ///
    /// Extracts the bearer token from the Authorization header, resolves it to a
    /// user through the identity store, then verifies each required capability
    /// against the user's role and staff attributes.
    ///
    /// # Arguments
    /// - `permissions` - Capabilities the operation requires (empty for plain
    ///   authentication)
    ///
    /// # Returns
    /// - `Ok(User)` - The authenticated caller satisfying all permissions
    /// - `Err(AuthError::MissingToken)` - No bearer token on the request
    /// - `Err(AuthError::InvalidToken)` - Token does not resolve to a user
    /// - `Err(AuthError::AccessDenied)` - Caller lacks a required capability
    pub async fn require(&self, permissions: &[Permission]) -> Result<User, AppError> {
        let Some(token) = self.bearer_token() else {
            return Err(AuthError::MissingToken.into());
        };

        let token_repo = AuthTokenRepository::new(self.db);
        let Some(user) = token_repo.find_user_by_token(token).await? else {
            return Err(AuthError::InvalidToken.into());
        };

        for permission in permissions {
            match permission {
                Permission::Admin => {
                    if user.role != Role::Admin {
                        return Err(AuthError::AccessDenied(
                            user.id,
                            "User attempted an admin-only operation without the admin role"
                                .to_string(),
                        )
                        .into());
                    }
                }
                Permission::Staff => {
                    if user.role != Role::Admin && !user.staff {
                        return Err(AuthError::AccessDenied(
                            user.id,
                            "User attempted to author notifications without staff or admin status"
                                .to_string(),
                        )
                        .into());
                    }
                }
            }
        }

        Ok(user)
    }

    fn bearer_token(&self) -> Option<&str> {
        self.headers
            .get(header::AUTHORIZATION)?
            .to_str()
            .ok()?
            .strip_prefix("Bearer ")
    }
}
