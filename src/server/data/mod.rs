//! Database repository layer for all domain entities.
//!
//! This module contains repository structs that handle database operations for each
//! table. Repositories use SeaORM entity models internally and return domain models to
//! maintain separation between the data layer and business logic layer.
//!
//! Every repository is generic over `ConnectionTrait`, so the same code runs against
//! the pool in tests and against the per-request transaction in handlers.

pub mod campaign;
pub mod character;
pub mod dice;
pub mod dice_log;
pub mod dice_set;
pub mod user;

#[cfg(test)]
mod test;
