//! Bottom-up deletion of ownership subtrees.
//!
//! Each routine removes dependents before their parents so no foreign key is ever left
//! dangling, and runs entirely on the caller's connection, which in handlers is the
//! request transaction. Every step first counts the rows it is about to remove; if the
//! delete then affects a different number of rows the tree changed underneath us and
//! the cascade fails with `InternalError::CascadeIntegrity`, rolling back the request.
//!
//! Order per target:
//! - dice set: logs of the set, composition rows, set
//! - character: logs, composition rows of its sets, sets, character
//! - campaign: logs, composition rows, sets, characters, campaign
//! - user: logs, composition rows, sets, characters, campaigns, user

use sea_orm::ConnectionTrait;

use crate::server::{
    data::{
        campaign::CampaignRepository, character::CharacterRepository,
        dice_log::DiceLogRepository, dice_set::DiceSetRepository, user::UserRepository,
    },
    error::{internal::InternalError, AppError},
};

pub struct CascadeService<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> CascadeService<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn delete_dice_set(&self, set_id: i32) -> Result<(), AppError> {
        let logs = DiceLogRepository::new(self.db);

        let expected = logs.count_by_dice_set(set_id).await?;
        let deleted = logs.delete_by_dice_set(set_id).await?;
        step("dice_log", set_id, expected, deleted)?;

        self.delete_sets(set_id, &[set_id]).await
    }

    pub async fn delete_character(&self, character_id: i32) -> Result<(), AppError> {
        let logs = DiceLogRepository::new(self.db);

        let expected = logs.count_by_character(character_id).await?;
        let deleted = logs.delete_by_character(character_id).await?;
        step("dice_log", character_id, expected, deleted)?;

        let set_ids = DiceSetRepository::new(self.db)
            .ids_by_character(character_id)
            .await?;
        self.delete_sets(character_id, &set_ids).await?;

        let deleted = CharacterRepository::new(self.db)
            .delete(character_id)
            .await?;
        step("character", character_id, 1, deleted)
    }

    pub async fn delete_campaign(&self, campaign_id: i32) -> Result<(), AppError> {
        let logs = DiceLogRepository::new(self.db);
        let characters = CharacterRepository::new(self.db);

        let expected = logs.count_by_campaign(campaign_id).await?;
        let deleted = logs.delete_by_campaign(campaign_id).await?;
        step("dice_log", campaign_id, expected, deleted)?;

        let set_ids = DiceSetRepository::new(self.db)
            .ids_by_campaign(campaign_id)
            .await?;
        self.delete_sets(campaign_id, &set_ids).await?;

        let expected = characters.count_by_campaign(campaign_id).await?;
        let deleted = characters.delete_by_campaign(campaign_id).await?;
        step("character", campaign_id, expected, deleted)?;

        let deleted = CampaignRepository::new(self.db)
            .delete(campaign_id)
            .await?;
        step("campaign", campaign_id, 1, deleted)
    }

    pub async fn delete_user(&self, user_id: i32) -> Result<(), AppError> {
        let logs = DiceLogRepository::new(self.db);
        let characters = CharacterRepository::new(self.db);
        let campaigns = CampaignRepository::new(self.db);

        let expected = logs.count_by_user(user_id).await?;
        let deleted = logs.delete_by_user(user_id).await?;
        step("dice_log", user_id, expected, deleted)?;

        let set_ids = DiceSetRepository::new(self.db).ids_by_user(user_id).await?;
        self.delete_sets(user_id, &set_ids).await?;

        let expected = characters.count_by_user(user_id).await?;
        let deleted = characters.delete_by_user(user_id).await?;
        step("character", user_id, expected, deleted)?;

        let expected = campaigns.count_by_user(user_id).await?;
        let deleted = campaigns.delete_by_user(user_id).await?;
        step("campaign", user_id, expected, deleted)?;

        let deleted = UserRepository::new(self.db).delete(user_id).await?;
        step("user", user_id, 1, deleted)
    }

    /// Removes composition rows and then the sets themselves.
    async fn delete_sets(&self, parent_id: i32, set_ids: &[i32]) -> Result<(), AppError> {
        let sets = DiceSetRepository::new(self.db);

        let expected = sets.count_dices(set_ids).await?;
        let deleted = sets.delete_dices(set_ids).await?;
        step("dice_set_dice", parent_id, expected, deleted)?;

        let deleted = sets.delete_many(set_ids).await?;
        step("dice_set", parent_id, set_ids.len() as u64, deleted)
    }
}

fn step(table: &'static str, parent_id: i32, expected: u64, deleted: u64) -> Result<(), AppError> {
    tracing::debug!(
        "Cascade under {} deleted {} of {} {} rows",
        parent_id,
        deleted,
        expected,
        table
    );

    if deleted != expected {
        return Err(InternalError::CascadeIntegrity { table, parent_id }.into());
    }

    Ok(())
}
