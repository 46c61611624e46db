//! Dice set factory for creating sets with their join rows.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating a dice set owned by a character.
///
/// Join rows are inserted in the order `dice()` is called; each call becomes one row
/// with the given quantity.
///
/// # Example
///
/// ```rust,ignore
/// let set = DiceSetFactory::new(&db, &character)
///     .name("Attack")
///     .dice(d20.id, 1)
///     .dice(d6.id, 2)
///     .build()
///     .await?;
/// ```
pub struct DiceSetFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    user_id: i32,
    campaign_id: i32,
    character_id: i32,
    dices: Vec<(i32, i32)>,
}

impl<'a> DiceSetFactory<'a> {
    pub fn new(db: &'a DatabaseConnection, character: &entity::character::Model) -> Self {
        Self {
            db,
            name: format!("Set {}", next_id()),
            user_id: character.user_id,
            campaign_id: character.campaign_id,
            character_id: character.id,
            dices: Vec::new(),
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Appends a join row for `dice_id` with the given quantity.
    pub fn dice(mut self, dice_id: i32, quantity: i32) -> Self {
        self.dices.push((dice_id, quantity));
        self
    }

    pub async fn build(self) -> Result<entity::dice_set::Model, DbErr> {
        let dice_set = entity::dice_set::ActiveModel {
            name: ActiveValue::Set(self.name),
            user_id: ActiveValue::Set(self.user_id),
            campaign_id: ActiveValue::Set(self.campaign_id),
            character_id: ActiveValue::Set(self.character_id),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        for (position, (dice_id, quantity)) in self.dices.into_iter().enumerate() {
            entity::dice_set_dice::ActiveModel {
                dice_set_id: ActiveValue::Set(dice_set.id),
                dice_id: ActiveValue::Set(dice_id),
                quantity: ActiveValue::Set(quantity),
                position: ActiveValue::Set(position as i32),
            }
            .insert(self.db)
            .await?;
        }

        Ok(dice_set)
    }
}

/// Creates an empty dice set for the character.
pub async fn create_dice_set(
    db: &DatabaseConnection,
    character: &entity::character::Model,
) -> Result<entity::dice_set::Model, DbErr> {
    DiceSetFactory::new(db, character).build().await
}
