//! Domain models and operation parameters for the service layer.
//!
//! Repositories convert SeaORM entity models into these types at the data boundary and
//! controllers convert them into DTOs on the way out. Parameter types carry validated
//! request data plus the principal's id into services.

pub mod campaign;
pub mod character;
pub mod dice;
pub mod dice_log;
pub mod dice_set;
pub mod page;
pub mod user;
