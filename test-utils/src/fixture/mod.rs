//! Test fixtures providing reusable test data without database insertion.
//!
//! Unlike factories, fixtures do NOT insert data into the database. They provide the
//! default values factories start from and in-memory models for conversion tests.
//!
//! # Example
//!
//! ```rust,ignore
//! use test_utils::fixture;
//!
//! let campaign = fixture::campaign::entity();
//! let custom = fixture::campaign::entity_builder().title("Custom").build();
//! ```

pub mod campaign;
pub mod character;

pub use campaign::{entity as campaign_entity, entity_builder as campaign_entity_builder};
pub use character::{entity as character_entity, entity_builder as character_entity_builder};
