//! Request guards and route layers.
//!
//! - `auth` resolves the bearer token of a request to the acting user.
//! - `rate_limit` builds per-client-IP token bucket layers for route tiers.

pub mod auth;
pub mod rate_limit;

#[cfg(test)]
mod test;
