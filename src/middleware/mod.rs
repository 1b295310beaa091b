//! Request authentication guards.

pub mod auth;

#[cfg(test)]
mod test;
