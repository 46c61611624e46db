//! Factory methods for creating test data.
//!
//! This module provides factory methods for creating test entities with sensible defaults,
//! reducing boilerplate in tests. Factories take the parent ids they hang off, so a test
//! builds the ownership tree top-down: user, campaign, character, dice set, dice log.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     // Create with defaults
//!     let user = factory::user::create_user(&db).await?;
//!     let campaign = factory::campaign::create_campaign(&db, user.id).await?;
//!
//!     // Create a character with all dependencies
//!     let (user, campaign, character) =
//!         factory::helpers::create_character_with_dependencies(&db).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Customization
//!
//! ```rust,ignore
//! let user = factory::user::UserFactory::new(&db)
//!     .user_name("ada")
//!     .email("ada@x.io")
//!     .build()
//!     .await?;
//! ```

pub mod campaign;
pub mod character;
pub mod dice;
pub mod dice_log;
pub mod dice_set;
pub mod helpers;
pub mod user;

pub use campaign::create_campaign;
pub use character::create_character;
pub use dice::{create_catalog, create_dice};
pub use dice_log::create_dice_log;
pub use dice_set::create_dice_set;
pub use user::create_user;
