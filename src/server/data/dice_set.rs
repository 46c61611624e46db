//! Dice set repository: set rows plus their composition join rows.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect,
};

use crate::server::model::{
    dice_set::{DiceSet, DiceSetFilter, NewDiceSet},
    page::Page,
};

pub struct DiceSetRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> DiceSetRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a set and one join row per distinct dice, then reloads it.
    ///
    /// Join rows get increasing `position` values in the order given.
    pub async fn create(&self, params: NewDiceSet) -> Result<DiceSet, DbErr> {
        let entity = entity::dice_set::ActiveModel {
            name: ActiveValue::Set(params.name),
            user_id: ActiveValue::Set(params.user_id),
            campaign_id: ActiveValue::Set(params.campaign_id),
            character_id: ActiveValue::Set(params.character_id),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        self.insert_dices(entity.id, &params.dices).await?;

        self.find_by_id(entity.id).await?.ok_or_else(|| {
            DbErr::RecordNotFound(format!(
                "Dice set with id {} not found after creation",
                entity.id
            ))
        })
    }

    /// Loads a set together with its dice in draw order.
    pub async fn find_by_id(&self, id: i32) -> Result<Option<DiceSet>, DbErr> {
        let Some(entity) = entity::prelude::DiceSet::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let rows = self.load_dices(id).await?;

        Ok(Some(DiceSet::from_entity(entity, rows)))
    }

    /// Lists the owner's sets ordered by id, each with its dice.
    pub async fn list(&self, filter: DiceSetFilter, page: Page) -> Result<Vec<DiceSet>, DbErr> {
        let mut query = entity::prelude::DiceSet::find()
            .filter(entity::dice_set::Column::UserId.eq(filter.user_id));
        if let Some(character_id) = filter.character_id {
            query = query.filter(entity::dice_set::Column::CharacterId.eq(character_id));
        }

        let entities = query
            .order_by_asc(entity::dice_set::Column::Id)
            .offset(page.offset)
            .limit(page.limit)
            .all(self.db)
            .await?;

        let mut sets = Vec::with_capacity(entities.len());
        for entity in entities {
            let rows = self.load_dices(entity.id).await?;
            sets.push(DiceSet::from_entity(entity, rows));
        }

        Ok(sets)
    }

    /// Counts sets owned by a character, used for the per-character cap.
    pub async fn count_by_character(&self, character_id: i32) -> Result<u64, DbErr> {
        entity::prelude::DiceSet::find()
            .filter(entity::dice_set::Column::CharacterId.eq(character_id))
            .count(self.db)
            .await
    }

    /// Renames a set.
    pub async fn rename(&self, id: i32, name: String) -> Result<(), DbErr> {
        entity::dice_set::ActiveModel {
            id: ActiveValue::Unchanged(id),
            name: ActiveValue::Set(name),
            ..Default::default()
        }
        .update(self.db)
        .await?;

        Ok(())
    }

    /// Replaces a set's composition with the given `(dice_id, quantity)` pairs.
    pub async fn replace_dices(&self, id: i32, dices: &[(i32, i32)]) -> Result<(), DbErr> {
        self.delete_dices(&[id]).await?;
        self.insert_dices(id, dices).await
    }

    /// Ids of sets matching a column value; cascades use these to reach join rows.
    pub async fn ids_by_character(&self, character_id: i32) -> Result<Vec<i32>, DbErr> {
        self.ids_where(entity::dice_set::Column::CharacterId, character_id)
            .await
    }

    pub async fn ids_by_campaign(&self, campaign_id: i32) -> Result<Vec<i32>, DbErr> {
        self.ids_where(entity::dice_set::Column::CampaignId, campaign_id)
            .await
    }

    pub async fn ids_by_user(&self, user_id: i32) -> Result<Vec<i32>, DbErr> {
        self.ids_where(entity::dice_set::Column::UserId, user_id)
            .await
    }

    /// Counts composition rows across the given sets.
    pub async fn count_dices(&self, set_ids: &[i32]) -> Result<u64, DbErr> {
        if set_ids.is_empty() {
            return Ok(0);
        }

        entity::prelude::DiceSetDice::find()
            .filter(entity::dice_set_dice::Column::DiceSetId.is_in(set_ids.iter().copied()))
            .count(self.db)
            .await
    }

    /// Deletes composition rows across the given sets.
    pub async fn delete_dices(&self, set_ids: &[i32]) -> Result<u64, DbErr> {
        if set_ids.is_empty() {
            return Ok(0);
        }

        let result = entity::prelude::DiceSetDice::delete_many()
            .filter(entity::dice_set_dice::Column::DiceSetId.is_in(set_ids.iter().copied()))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    /// Deletes set rows by id.
    pub async fn delete_many(&self, set_ids: &[i32]) -> Result<u64, DbErr> {
        if set_ids.is_empty() {
            return Ok(0);
        }

        let result = entity::prelude::DiceSet::delete_many()
            .filter(entity::dice_set::Column::Id.is_in(set_ids.iter().copied()))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    async fn ids_where(
        &self,
        column: entity::dice_set::Column,
        value: i32,
    ) -> Result<Vec<i32>, DbErr> {
        entity::prelude::DiceSet::find()
            .select_only()
            .column(entity::dice_set::Column::Id)
            .filter(column.eq(value))
            .order_by_asc(entity::dice_set::Column::Id)
            .into_tuple::<i32>()
            .all(self.db)
            .await
    }

    async fn load_dices(
        &self,
        set_id: i32,
    ) -> Result<Vec<(entity::dice_set_dice::Model, entity::dice::Model)>, DbErr> {
        let rows = entity::prelude::DiceSetDice::find()
            .filter(entity::dice_set_dice::Column::DiceSetId.eq(set_id))
            .find_also_related(entity::prelude::Dice)
            .order_by_asc(entity::dice_set_dice::Column::Position)
            .order_by_asc(entity::dice_set_dice::Column::DiceId)
            .all(self.db)
            .await?;

        rows.into_iter()
            .map(|(join, dice)| {
                let dice = dice.ok_or_else(|| {
                    DbErr::RecordNotFound(format!(
                        "Dice {} referenced by dice set {} not found",
                        join.dice_id, set_id
                    ))
                })?;
                Ok((join, dice))
            })
            .collect()
    }

    async fn insert_dices(&self, set_id: i32, dices: &[(i32, i32)]) -> Result<(), DbErr> {
        for (position, &(dice_id, quantity)) in dices.iter().enumerate() {
            entity::dice_set_dice::ActiveModel {
                dice_set_id: ActiveValue::Set(set_id),
                dice_id: ActiveValue::Set(dice_id),
                quantity: ActiveValue::Set(quantity),
                position: ActiveValue::Set(position as i32),
            }
            .insert(self.db)
            .await?;
        }

        Ok(())
    }
}
