//! Request and response DTOs exchanged over the HTTP API.
//!
//! Every request DTO exposes `validate()`, which controllers call before handing the
//! payload to a service so shape and range violations are answered with 400 up front.

pub mod api;
pub mod auth;
pub mod campaign;
pub mod character;
pub mod dice;
pub mod dice_log;
pub mod dice_set;
pub mod user;
