//! HTTP request handlers: access control and DTO conversion.

pub mod auth;
pub mod notification;
pub mod order;
