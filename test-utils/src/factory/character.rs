//! Character factory for creating test character entities.

use crate::factory::helpers::next_id;
use crate::fixture;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test characters inside a campaign.
pub struct CharacterFactory<'a> {
    db: &'a DatabaseConnection,
    entity: entity::character::Model,
}

impl<'a> CharacterFactory<'a> {
    /// Creates a new CharacterFactory for the given owner and campaign.
    pub fn new(db: &'a DatabaseConnection, user_id: i32, campaign_id: i32) -> Self {
        let id = next_id();
        let entity = fixture::character::entity_builder()
            .user_id(user_id)
            .campaign_id(campaign_id)
            .name(format!("Character {}", id))
            .build();

        Self { db, entity }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.entity.name = name.into();
        self
    }

    pub fn race(mut self, race: impl Into<String>) -> Self {
        self.entity.race = race.into();
        self
    }

    pub fn skills(mut self, skills: serde_json::Value) -> Self {
        self.entity.skills = skills;
        self
    }

    /// Builds and inserts the character entity into the database.
    pub async fn build(self) -> Result<entity::character::Model, DbErr> {
        entity::character::ActiveModel {
            name: ActiveValue::Set(self.entity.name),
            race: ActiveValue::Set(self.entity.race),
            skills: ActiveValue::Set(self.entity.skills),
            notes: ActiveValue::Set(self.entity.notes),
            inventory: ActiveValue::Set(self.entity.inventory),
            campaign_id: ActiveValue::Set(self.entity.campaign_id),
            user_id: ActiveValue::Set(self.entity.user_id),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a character with default values.
pub async fn create_character(
    db: &DatabaseConnection,
    user_id: i32,
    campaign_id: i32,
) -> Result<entity::character::Model, DbErr> {
    CharacterFactory::new(db, user_id, campaign_id).build().await
}
