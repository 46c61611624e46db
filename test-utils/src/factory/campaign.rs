//! Campaign factory for creating test campaign entities.

use crate::factory::helpers::next_id;
use crate::fixture;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test campaigns owned by a given user.
///
/// Default values are sourced from the campaign fixture.
///
/// # Example
///
/// ```rust,ignore
/// let campaign = CampaignFactory::new(&db, user.id)
///     .title("Curse of Strahd")
///     .max_classes(3)
///     .build()
///     .await?;
/// ```
pub struct CampaignFactory<'a> {
    db: &'a DatabaseConnection,
    entity: entity::campaign::Model,
}

impl<'a> CampaignFactory<'a> {
    /// Creates a new CampaignFactory with a unique title for the given owner.
    pub fn new(db: &'a DatabaseConnection, created_by: i32) -> Self {
        let id = next_id();
        let entity = fixture::campaign::entity_builder()
            .created_by(created_by)
            .title(format!("Campaign {}", id))
            .build();

        Self { db, entity }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.entity.title = title.into();
        self
    }

    pub fn genre(mut self, genre: Option<String>) -> Self {
        self.entity.genre = genre;
        self
    }

    pub fn max_classes(mut self, max_classes: i32) -> Self {
        self.entity.max_classes = max_classes;
        self
    }

    /// Builds and inserts the campaign entity into the database.
    pub async fn build(self) -> Result<entity::campaign::Model, DbErr> {
        entity::campaign::ActiveModel {
            title: ActiveValue::Set(self.entity.title),
            genre: ActiveValue::Set(self.entity.genre),
            description: ActiveValue::Set(self.entity.description),
            max_classes: ActiveValue::Set(self.entity.max_classes),
            created_by: ActiveValue::Set(self.entity.created_by),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a campaign with default values for the given owner.
pub async fn create_campaign(
    db: &DatabaseConnection,
    created_by: i32,
) -> Result<entity::campaign::Model, DbErr> {
    CampaignFactory::new(db, created_by).build().await
}
