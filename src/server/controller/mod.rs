//! HTTP request handlers.
//!
//! Each handler opens one database transaction, resolves the principal through
//! [`AuthGuard`](crate::server::middleware::auth::AuthGuard) where the route is protected,
//! validates the request DTO, calls the matching service and commits. Returning early with
//! `?` drops the transaction, which rolls back every write made during the request.

pub mod auth;
pub mod campaign;
pub mod character;
pub mod dice;
pub mod dice_log;
pub mod dice_set;
pub mod health;
pub mod user;

#[cfg(test)]
mod test;
