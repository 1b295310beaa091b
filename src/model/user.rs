//! Domain models for user identity data.
//!
//! User records are written by the external identity service; this backend
//! only reads them to resolve callers and notification targets.

use sea_orm::DbErr;
use serde::{Deserialize, Serialize};

/// Role assigned to a user at registration time.
///
/// Roles are immutable once assigned; there is no role-change flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Customer,
    Admin,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Customer => "customer",
            Role::Admin => "admin",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "customer" => Some(Role::Customer),
            "admin" => Some(Role::Admin),
            _ => None,
        }
    }
}

/// Authenticated user identity with role and contact details.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    /// Unique identifier for the user.
    pub id: i32,
    /// Display name, unique across all users.
    pub name: String,
    /// Contact email address.
    pub email: String,
    /// Optional contact phone number.
    pub phone_number: Option<String>,
    /// Role assigned at registration (customer or admin).
    pub role: Role,
    /// Staff flag granting notification-authoring capability without the
    /// full admin role.
    pub staff: bool,
}

impl User {
    /// Converts an entity model to a user domain model at the repository boundary.
    ///
    /// # Arguments
    /// - `entity` - The entity model from the database
    ///
    /// # Returns
    /// - `Ok(User)` - The converted user domain model
    /// - `Err(DbErr)` - The stored role string is not a recognized role
    pub fn from_entity(entity: entity::user::Model) -> Result<Self, DbErr> {
        let role = Role::parse(&entity.role).ok_or_else(|| {
            DbErr::Custom(format!(
                "Unknown role '{}' stored for user {}",
                entity.role, entity.id
            ))
        })?;

        Ok(Self {
            id: entity.id,
            name: entity.name,
            email: entity.email,
            phone_number: entity.phone_number,
            role,
            staff: entity.staff,
        })
    }

    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }

    pub fn into_dto(self) -> UserDto {
        UserDto {
            id: self.id,
            name: self.name,
            email: self.email,
            phone_number: self.phone_number,
            role: self.role.as_str().to_string(),
            staff: self.staff,
        }
    }
}

/// User identity as exposed over the API.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserDto {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub phone_number: Option<String>,
    pub role: String,
    pub staff: bool,
}
