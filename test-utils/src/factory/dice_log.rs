//! Dice log factory for seeding roll history.

use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating a roll history entry for a character.
pub struct DiceLogFactory<'a> {
    db: &'a DatabaseConnection,
    user_id: i32,
    campaign_id: i32,
    character_id: i32,
    diceset_id: Option<i32>,
    roll: String,
    result: i64,
    timestamp: DateTime<Utc>,
}

impl<'a> DiceLogFactory<'a> {
    pub fn new(db: &'a DatabaseConnection, character: &entity::character::Model) -> Self {
        Self {
            db,
            user_id: character.user_id,
            campaign_id: character.campaign_id,
            character_id: character.id,
            diceset_id: None,
            roll: "d6".to_string(),
            result: 1,
            timestamp: Utc::now(),
        }
    }

    pub fn diceset_id(mut self, diceset_id: Option<i32>) -> Self {
        self.diceset_id = diceset_id;
        self
    }

    pub fn roll(mut self, roll: impl Into<String>) -> Self {
        self.roll = roll.into();
        self
    }

    pub fn result(mut self, result: i64) -> Self {
        self.result = result;
        self
    }

    pub fn timestamp(mut self, timestamp: DateTime<Utc>) -> Self {
        self.timestamp = timestamp;
        self
    }

    pub async fn build(self) -> Result<entity::dice_log::Model, DbErr> {
        entity::dice_log::ActiveModel {
            user_id: ActiveValue::Set(self.user_id),
            campaign_id: ActiveValue::Set(self.campaign_id),
            character_id: ActiveValue::Set(self.character_id),
            diceset_id: ActiveValue::Set(self.diceset_id),
            roll: ActiveValue::Set(self.roll),
            result: ActiveValue::Set(self.result),
            timestamp: ActiveValue::Set(self.timestamp),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a single-dice roll log entry stamped now.
pub async fn create_dice_log(
    db: &DatabaseConnection,
    character: &entity::character::Model,
) -> Result<entity::dice_log::Model, DbErr> {
    DiceLogFactory::new(db, character).build().await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{builder::TestBuilder, factory};

    #[tokio::test]
    async fn creates_log_for_character_chain() -> Result<(), DbErr> {
        let test = TestBuilder::new().with_all_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let (user, campaign, character) =
            factory::helpers::create_character_with_dependencies(db).await?;
        let log = DiceLogFactory::new(db, &character).result(17).build().await?;

        assert_eq!(log.user_id, user.id);
        assert_eq!(log.campaign_id, campaign.id);
        assert_eq!(log.character_id, character.id);
        assert_eq!(log.result, 17);
        assert!(log.diceset_id.is_none());

        Ok(())
    }
}
