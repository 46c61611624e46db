//! Campaign data repository for database operations.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect,
};

use crate::server::model::{
    campaign::{Campaign, CampaignFilter, CreateCampaignParams, UpdateCampaignParams},
    page::Page,
};

pub struct CampaignRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> CampaignRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(&self, params: CreateCampaignParams) -> Result<Campaign, DbErr> {
        let entity = entity::campaign::ActiveModel {
            title: ActiveValue::Set(params.title),
            genre: ActiveValue::Set(params.genre),
            description: ActiveValue::Set(params.description),
            max_classes: ActiveValue::Set(params.max_classes),
            created_by: ActiveValue::Set(params.created_by),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Campaign::from_entity(entity))
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Campaign>, DbErr> {
        let entity = entity::prelude::Campaign::find_by_id(id).one(self.db).await?;

        Ok(entity.map(Campaign::from_entity))
    }

    /// Whether `created_by` already owns a campaign with this title.
    ///
    /// `exclude_id` skips the campaign being renamed.
    pub async fn title_exists(
        &self,
        created_by: i32,
        title: &str,
        exclude_id: Option<i32>,
    ) -> Result<bool, DbErr> {
        let mut query = entity::prelude::Campaign::find()
            .filter(entity::campaign::Column::CreatedBy.eq(created_by))
            .filter(entity::campaign::Column::Title.eq(title));
        if let Some(exclude_id) = exclude_id {
            query = query.filter(entity::campaign::Column::Id.ne(exclude_id));
        }

        Ok(query.count(self.db).await? > 0)
    }

    /// Lists the owner's campaigns ordered by id.
    pub async fn list(&self, filter: CampaignFilter, page: Page) -> Result<Vec<Campaign>, DbErr> {
        let mut query = entity::prelude::Campaign::find()
            .filter(entity::campaign::Column::CreatedBy.eq(filter.created_by));
        if let Some(title) = filter.title.filter(|s| !s.is_empty()) {
            query = query.filter(entity::campaign::Column::Title.contains(title));
        }

        let entities = query
            .order_by_asc(entity::campaign::Column::Id)
            .offset(page.offset)
            .limit(page.limit)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Campaign::from_entity).collect())
    }

    /// Counts campaigns owned by a user.
    pub async fn count_by_user(&self, user_id: i32) -> Result<u64, DbErr> {
        entity::prelude::Campaign::find()
            .filter(entity::campaign::Column::CreatedBy.eq(user_id))
            .count(self.db)
            .await
    }

    pub async fn update(&self, id: i32, params: UpdateCampaignParams) -> Result<Campaign, DbErr> {
        let entity = entity::prelude::Campaign::find_by_id(id)
            .one(self.db)
            .await?
            .ok_or_else(|| DbErr::RecordNotFound(format!("Campaign with id {} not found", id)))?;

        let mut active: entity::campaign::ActiveModel = entity.into();
        if let Some(title) = params.title {
            active.title = ActiveValue::Set(title);
        }
        if let Some(genre) = params.genre {
            active.genre = ActiveValue::Set(Some(genre));
        }
        if let Some(description) = params.description {
            active.description = ActiveValue::Set(Some(description));
        }
        if let Some(max_classes) = params.max_classes {
            active.max_classes = ActiveValue::Set(max_classes);
        }

        let entity = active.update(self.db).await?;

        Ok(Campaign::from_entity(entity))
    }

    pub async fn delete(&self, id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::Campaign::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    pub async fn delete_by_user(&self, user_id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::Campaign::delete_many()
            .filter(entity::campaign::Column::CreatedBy.eq(user_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
