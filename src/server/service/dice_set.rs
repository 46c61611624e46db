//! Dice set management and whole-set rolls.

use std::collections::HashSet;

use sea_orm::ConnectionTrait;

use crate::server::{
    data::{dice::DiceRepository, dice_set::DiceSetRepository},
    error::AppError,
    model::{
        dice::{DiceRoll, RollTarget},
        dice_log::NewDiceLog,
        dice_set::{
            CreateDiceSetParams, DiceSet, DiceSetFilter, DiceSetRoll, NewDiceSet,
            UpdateDiceSetParams, MAX_DICE_SETS_PER_CHARACTER,
        },
        page::Page,
        user::User,
    },
    service::{
        cascade::CascadeService, character::CharacterService, dice_log::DiceLogService,
        ensure_owner, roller::DiceRoller,
    },
};

const EMPTY_OR_MISSING: &str = "Dice set not found or has no dices";

pub struct DiceSetService<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> DiceSetService<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a set for one of the principal's characters.
    ///
    /// # Returns
    /// - `Err(AppError::NotFound)` - Character or one of the dice does not exist
    /// - `Err(AppError::Forbidden)` - Character owned by someone else
    /// - `Err(AppError::Conflict)` - "limit reached", the character already has 5 sets
    pub async fn create(
        &self,
        params: CreateDiceSetParams,
        principal: &User,
    ) -> Result<DiceSet, AppError> {
        let character = CharacterService::new(self.db)
            .get(params.character_id, principal)
            .await?;
        let repo = DiceSetRepository::new(self.db);

        let count = repo.count_by_character(character.id).await?;
        if count >= MAX_DICE_SETS_PER_CHARACTER {
            tracing::warn!(
                "Character {} already holds {} dice sets",
                character.id,
                count
            );
            return Err(AppError::limit_reached());
        }

        self.check_dices_exist(&params.dices).await?;

        let set = repo
            .create(NewDiceSet {
                name: params.name,
                user_id: principal.id,
                campaign_id: character.campaign_id,
                character_id: character.id,
                dices: params.dices,
            })
            .await?;

        tracing::info!(
            "User {} created dice set {} for character {}",
            principal.id,
            set.id,
            character.id
        );

        Ok(set)
    }

    pub async fn get(&self, id: i32, principal: &User) -> Result<DiceSet, AppError> {
        let set = DiceSetRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Dice set not found".to_string()))?;

        ensure_owner("dice set", id, set.user_id, principal)?;

        Ok(set)
    }

    pub async fn list(&self, filter: DiceSetFilter, page: Page) -> Result<Vec<DiceSet>, AppError> {
        Ok(DiceSetRepository::new(self.db).list(filter, page).await?)
    }

    /// Renames a set and/or replaces its composition.
    pub async fn update(
        &self,
        id: i32,
        principal: &User,
        params: UpdateDiceSetParams,
    ) -> Result<DiceSet, AppError> {
        let set = self.get(id, principal).await?;
        let repo = DiceSetRepository::new(self.db);

        if let Some(name) = params.name {
            repo.rename(set.id, name).await?;
        }
        if let Some(dices) = params.dices {
            self.check_dices_exist(&dices).await?;
            repo.replace_dices(set.id, &dices).await?;
        }

        let set = self.get(set.id, principal).await?;

        tracing::info!("User {} updated dice set {}", principal.id, set.id);

        Ok(set)
    }

    /// Deletes a set with its composition and the logs that reference it.
    pub async fn delete(&self, id: i32, principal: &User) -> Result<(), AppError> {
        let set = self.get(id, principal).await?;

        CascadeService::new(self.db).delete_dice_set(set.id).await?;

        tracing::info!("User {} deleted dice set {}", principal.id, set.id);

        Ok(())
    }

    /// Rolls every dice of a set and records one history entry for the total.
    ///
    /// Draws follow the set's composition order, each dice repeated `quantity` times.
    /// When `target` is given it must name the set's own campaign and character.
    ///
    /// # Returns
    /// - `Ok(DiceSetRoll)` - Individual results and their sum
    /// - `Err(AppError::NotFound)` - Set missing or empty
    /// - `Err(AppError::Forbidden)` - Set owned by someone else
    /// - `Err(AppError::BadRequest)` - Target does not match the set
    pub async fn roll(
        &self,
        id: i32,
        principal: &User,
        target: Option<RollTarget>,
        roller: &dyn DiceRoller,
    ) -> Result<DiceSetRoll, AppError> {
        let set = DiceSetRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(EMPTY_OR_MISSING.to_string()))?;

        ensure_owner("dice set", id, set.user_id, principal)?;

        if set.dices.is_empty() {
            return Err(AppError::NotFound(EMPTY_OR_MISSING.to_string()));
        }

        if let Some(target) = target {
            if target.campaign_id != set.campaign_id || target.character_id != set.character_id {
                tracing::warn!(
                    "Roll target {:?} does not match dice set {}",
                    target,
                    set.id
                );
                return Err(AppError::BadRequest(
                    "Dice set does not belong to the given campaign and character".to_string(),
                ));
            }
        }

        let results: Vec<DiceRoll> = set
            .draws()
            .map(|dice| DiceRoll {
                dice_id: dice.id,
                name: dice.name.clone(),
                sides: dice.sides,
                result: roller.roll(dice.sides),
            })
            .collect();
        let total = results.iter().map(|r| r.result as i64).sum::<i64>();

        let roll = DiceSetRoll {
            diceset_id: set.id,
            name: set.name.clone(),
            results,
            total,
        };

        DiceLogService::new(self.db)
            .record(NewDiceLog {
                user_id: principal.id,
                campaign_id: set.campaign_id,
                character_id: set.character_id,
                diceset_id: Some(set.id),
                roll: roll.label(),
                result: roll.total,
            })
            .await?;

        tracing::info!(
            "User {} rolled dice set {} for {}",
            principal.id,
            set.id,
            roll.total
        );

        Ok(roll)
    }

    async fn check_dices_exist(&self, dices: &[(i32, i32)]) -> Result<(), AppError> {
        let ids: Vec<i32> = dices.iter().map(|(id, _)| *id).collect();
        let found: HashSet<i32> = DiceRepository::new(self.db)
            .find_many(&ids)
            .await?
            .into_iter()
            .map(|dice| dice.id)
            .collect();

        if let Some(missing) = ids.iter().find(|id| !found.contains(id)) {
            tracing::warn!("Dice set references unknown dice {}", missing);
            return Err(AppError::NotFound(format!("Dice {} not found", missing)));
        }

        Ok(())
    }
}
