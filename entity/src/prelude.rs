pub use super::auth_token::Entity as AuthToken;
pub use super::notification::Entity as Notification;
pub use super::order::Entity as Order;
pub use super::user::Entity as User;
