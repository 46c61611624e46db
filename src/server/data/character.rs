//! Character data repository for database operations.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect,
};

use crate::server::model::{
    character::{
        skills_to_json, Character, CharacterFilter, CreateCharacterParams, UpdateCharacterParams,
    },
    page::Page,
};

pub struct CharacterRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> CharacterRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(&self, params: CreateCharacterParams) -> Result<Character, DbErr> {
        let entity = entity::character::ActiveModel {
            name: ActiveValue::Set(params.name),
            race: ActiveValue::Set(params.race),
            skills: ActiveValue::Set(skills_to_json(&params.skills)),
            notes: ActiveValue::Set(params.notes),
            inventory: ActiveValue::Set(params.inventory),
            campaign_id: ActiveValue::Set(params.campaign_id),
            user_id: ActiveValue::Set(params.user_id),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Character::from_entity(entity)
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Character>, DbErr> {
        entity::prelude::Character::find_by_id(id)
            .one(self.db)
            .await?
            .map(Character::from_entity)
            .transpose()
    }

    pub async fn list(&self, filter: CharacterFilter, page: Page) -> Result<Vec<Character>, DbErr> {
        let mut query = entity::prelude::Character::find()
            .filter(entity::character::Column::UserId.eq(filter.user_id));
        if let Some(campaign_id) = filter.campaign_id {
            query = query.filter(entity::character::Column::CampaignId.eq(campaign_id));
        }
        if let Some(name) = filter.name.filter(|s| !s.is_empty()) {
            query = query.filter(entity::character::Column::Name.contains(name));
        }

        query
            .order_by_asc(entity::character::Column::Id)
            .offset(page.offset)
            .limit(page.limit)
            .all(self.db)
            .await?
            .into_iter()
            .map(Character::from_entity)
            .collect()
    }

    /// Counts characters in a campaign, used for the per-campaign cap.
    pub async fn count_by_campaign(&self, campaign_id: i32) -> Result<u64, DbErr> {
        entity::prelude::Character::find()
            .filter(entity::character::Column::CampaignId.eq(campaign_id))
            .count(self.db)
            .await
    }

    pub async fn count_by_user(&self, user_id: i32) -> Result<u64, DbErr> {
        entity::prelude::Character::find()
            .filter(entity::character::Column::UserId.eq(user_id))
            .count(self.db)
            .await
    }

    pub async fn update(&self, id: i32, params: UpdateCharacterParams) -> Result<Character, DbErr> {
        let entity = entity::prelude::Character::find_by_id(id)
            .one(self.db)
            .await?
            .ok_or_else(|| DbErr::RecordNotFound(format!("Character with id {} not found", id)))?;

        let mut active: entity::character::ActiveModel = entity.into();
        if let Some(name) = params.name {
            active.name = ActiveValue::Set(name);
        }
        if let Some(race) = params.race {
            active.race = ActiveValue::Set(race);
        }
        if let Some(skills) = params.skills {
            active.skills = ActiveValue::Set(skills_to_json(&skills));
        }
        if let Some(notes) = params.notes {
            active.notes = ActiveValue::Set(Some(notes));
        }
        if let Some(inventory) = params.inventory {
            active.inventory = ActiveValue::Set(Some(inventory));
        }

        Character::from_entity(active.update(self.db).await?)
    }

    pub async fn delete(&self, id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::Character::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    pub async fn delete_by_campaign(&self, campaign_id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::Character::delete_many()
            .filter(entity::character::Column::CampaignId.eq(campaign_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    pub async fn delete_by_user(&self, user_id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::Character::delete_many()
            .filter(entity::character::Column::UserId.eq(user_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
