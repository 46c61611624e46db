//! Catalog reads and single-dice rolls.

use sea_orm::ConnectionTrait;

use crate::server::{
    data::dice::DiceRepository,
    error::AppError,
    model::{
        dice::{Dice, DiceRoll, RollTarget},
        dice_log::NewDiceLog,
        page::Page,
        user::User,
    },
    service::{character::CharacterService, dice_log::DiceLogService, roller::DiceRoller},
};

pub struct DiceService<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> DiceService<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn get(&self, id: i32) -> Result<Dice, AppError> {
        DiceRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Dice not found".to_string()))
    }

    pub async fn list(&self, page: Page) -> Result<Vec<Dice>, AppError> {
        Ok(DiceRepository::new(self.db).list(page).await?)
    }

    /// Rolls one catalog dice, logging the result when a target is given.
    ///
    /// # Arguments
    /// - `target` - Campaign and character to log under; both must belong to the principal
    ///
    /// # Returns
    /// - `Ok(DiceRoll)` - The draw, `1 <= result <= sides`
    /// - `Err(AppError::NotFound)` - Unknown dice or character
    /// - `Err(AppError::Forbidden)` - Character owned by someone else
    /// - `Err(AppError::BadRequest)` - Character is not in the given campaign
    pub async fn roll(
        &self,
        id: i32,
        principal: &User,
        target: Option<RollTarget>,
        roller: &dyn DiceRoller,
    ) -> Result<DiceRoll, AppError> {
        let dice = self.get(id).await?;

        if let Some(target) = target {
            self.check_target(target, principal).await?;
        }

        let roll = DiceRoll {
            dice_id: dice.id,
            name: dice.name,
            sides: dice.sides,
            result: roller.roll(dice.sides),
        };

        if let Some(target) = target {
            DiceLogService::new(self.db)
                .record(NewDiceLog {
                    user_id: principal.id,
                    campaign_id: target.campaign_id,
                    character_id: target.character_id,
                    diceset_id: None,
                    roll: roll.name.clone(),
                    result: roll.result as i64,
                })
                .await?;
        }

        tracing::info!(
            "User {} rolled {} for {}",
            principal.id,
            roll.name,
            roll.result
        );

        Ok(roll)
    }

    /// Checks the principal owns the character and the character sits in the campaign.
    async fn check_target(&self, target: RollTarget, principal: &User) -> Result<(), AppError> {
        let character = CharacterService::new(self.db)
            .get(target.character_id, principal)
            .await?;

        if character.campaign_id != target.campaign_id {
            tracing::warn!(
                "Character {} is not part of campaign {}",
                character.id,
                target.campaign_id
            );
            return Err(AppError::BadRequest(
                "Character does not belong to campaign".to_string(),
            ));
        }

        Ok(())
    }
}
