//! Roll history repository.
//!
//! Besides append and reads, this holds the bulk deletes used by cascades and the
//! trimming query that keeps each user's history bounded.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect,
};

use crate::server::model::{
    dice_log::{DiceLog, DiceLogFilter, NewDiceLog},
    page::Page,
};

pub struct DiceLogRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> DiceLogRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Appends a roll stamped with the current time.
    pub async fn append(&self, log: NewDiceLog) -> Result<DiceLog, DbErr> {
        let entity = entity::dice_log::ActiveModel {
            user_id: ActiveValue::Set(log.user_id),
            campaign_id: ActiveValue::Set(log.campaign_id),
            character_id: ActiveValue::Set(log.character_id),
            diceset_id: ActiveValue::Set(log.diceset_id),
            roll: ActiveValue::Set(log.roll),
            result: ActiveValue::Set(log.result),
            timestamp: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(DiceLog::from_entity(entity))
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<DiceLog>, DbErr> {
        let entity = entity::prelude::DiceLog::find_by_id(id).one(self.db).await?;

        Ok(entity.map(DiceLog::from_entity))
    }

    /// Lists the owner's history, newest first.
    pub async fn list(&self, filter: DiceLogFilter, page: Page) -> Result<Vec<DiceLog>, DbErr> {
        let mut query = entity::prelude::DiceLog::find()
            .filter(entity::dice_log::Column::UserId.eq(filter.user_id));
        if let Some(campaign_id) = filter.campaign_id {
            query = query.filter(entity::dice_log::Column::CampaignId.eq(campaign_id));
        }
        if let Some(character_id) = filter.character_id {
            query = query.filter(entity::dice_log::Column::CharacterId.eq(character_id));
        }

        let entities = query
            .order_by_desc(entity::dice_log::Column::Timestamp)
            .order_by_desc(entity::dice_log::Column::Id)
            .offset(page.offset)
            .limit(page.limit)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(DiceLog::from_entity).collect())
    }

    pub async fn count_by_user(&self, user_id: i32) -> Result<u64, DbErr> {
        self.count_where(entity::dice_log::Column::UserId, user_id)
            .await
    }

    pub async fn count_by_campaign(&self, campaign_id: i32) -> Result<u64, DbErr> {
        self.count_where(entity::dice_log::Column::CampaignId, campaign_id)
            .await
    }

    pub async fn count_by_character(&self, character_id: i32) -> Result<u64, DbErr> {
        self.count_where(entity::dice_log::Column::CharacterId, character_id)
            .await
    }

    pub async fn count_by_dice_set(&self, set_id: i32) -> Result<u64, DbErr> {
        self.count_where(entity::dice_log::Column::DicesetId, set_id)
            .await
    }

    /// Deletes everything past the `keep` newest rows of a user's history.
    ///
    /// Newest means ordered by `(timestamp DESC, id DESC)`.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of evicted rows
    pub async fn trim_user_history(&self, user_id: i32, keep: u64) -> Result<u64, DbErr> {
        let stale: Vec<i32> = entity::prelude::DiceLog::find()
            .select_only()
            .column(entity::dice_log::Column::Id)
            .filter(entity::dice_log::Column::UserId.eq(user_id))
            .order_by_desc(entity::dice_log::Column::Timestamp)
            .order_by_desc(entity::dice_log::Column::Id)
            .offset(keep)
            .limit(i64::MAX as u64)
            .into_tuple::<i32>()
            .all(self.db)
            .await?;

        if stale.is_empty() {
            return Ok(0);
        }

        let result = entity::prelude::DiceLog::delete_many()
            .filter(entity::dice_log::Column::Id.is_in(stale))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    pub async fn delete(&self, id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::DiceLog::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    pub async fn delete_by_user(&self, user_id: i32) -> Result<u64, DbErr> {
        self.delete_where(entity::dice_log::Column::UserId, user_id)
            .await
    }

    pub async fn delete_by_campaign(&self, campaign_id: i32) -> Result<u64, DbErr> {
        self.delete_where(entity::dice_log::Column::CampaignId, campaign_id)
            .await
    }

    pub async fn delete_by_character(&self, character_id: i32) -> Result<u64, DbErr> {
        self.delete_where(entity::dice_log::Column::CharacterId, character_id)
            .await
    }

    pub async fn delete_by_dice_set(&self, set_id: i32) -> Result<u64, DbErr> {
        self.delete_where(entity::dice_log::Column::DicesetId, set_id)
            .await
    }

    async fn count_where(&self, column: entity::dice_log::Column, value: i32) -> Result<u64, DbErr> {
        entity::prelude::DiceLog::find()
            .filter(column.eq(value))
            .count(self.db)
            .await
    }

    async fn delete_where(&self, column: entity::dice_log::Column, value: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::DiceLog::delete_many()
            .filter(column.eq(value))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
