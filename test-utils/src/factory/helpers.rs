//! Shared helper utilities for factory methods.
//!
//! This module provides common utilities used across all factory modules,
//! including ID generation and convenience methods for creating entities
//! with their dependencies.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique names in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a user owning one campaign with one character.
///
/// All entities are created with default values. Use the individual
/// factories if you need to customize specific entities.
///
/// # Returns
/// - `Ok((user, campaign, character))` - Tuple of all created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_character_with_dependencies(
    db: &DatabaseConnection,
) -> Result<
    (
        entity::user::Model,
        entity::campaign::Model,
        entity::character::Model,
    ),
    DbErr,
> {
    let user = crate::factory::user::create_user(db).await?;
    let campaign = crate::factory::campaign::create_campaign(db, user.id).await?;
    let character =
        crate::factory::character::create_character(db, user.id, campaign.id).await?;

    Ok((user, campaign, character))
}

/// Creates a full ownership chain down to a dice set holding one d6.
///
/// Creates:
/// 1. User
/// 2. Campaign
/// 3. Character
/// 4. A `d6` catalog dice
/// 5. Dice set containing that dice once
///
/// # Returns
/// - `Ok((user, campaign, character, dice_set))` - Tuple of all created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_dice_set_with_dependencies(
    db: &DatabaseConnection,
) -> Result<
    (
        entity::user::Model,
        entity::campaign::Model,
        entity::character::Model,
        entity::dice_set::Model,
    ),
    DbErr,
> {
    let (user, campaign, character) = create_character_with_dependencies(db).await?;
    let d6 = crate::factory::dice::DiceFactory::new(db)
        .name(format!("d6-{}", next_id()))
        .sides(6)
        .build()
        .await?;
    let dice_set = crate::factory::dice_set::DiceSetFactory::new(db, &character)
        .dice(d6.id, 1)
        .build()
        .await?;

    Ok((user, campaign, character, dice_set))
}
