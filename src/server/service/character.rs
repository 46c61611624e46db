use sea_orm::ConnectionTrait;

use crate::server::{
    data::character::CharacterRepository,
    error::AppError,
    model::{
        character::{Character, CharacterFilter, CreateCharacterParams, UpdateCharacterParams},
        page::Page,
        user::User,
    },
    service::{campaign::CampaignService, cascade::CascadeService, ensure_owner},
};

pub struct CharacterService<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> CharacterService<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a character in one of the principal's campaigns.
    ///
    /// The campaign's character count is read inside the caller's transaction and the
    /// insert is refused once it reaches the campaign's cap.
    ///
    /// # Returns
    /// - `Err(AppError::NotFound)` / `Err(AppError::Forbidden)` - Campaign missing or not owned
    /// - `Err(AppError::Conflict)` - "limit reached"
    pub async fn create(
        &self,
        params: CreateCharacterParams,
        principal: &User,
    ) -> Result<Character, AppError> {
        let campaign = CampaignService::new(self.db)
            .get(params.campaign_id, principal)
            .await?;
        let repo = CharacterRepository::new(self.db);

        let count = repo.count_by_campaign(campaign.id).await?;
        if count >= campaign.character_cap() {
            tracing::warn!(
                "Campaign {} already holds {} of {} characters",
                campaign.id,
                count,
                campaign.character_cap()
            );
            return Err(AppError::limit_reached());
        }

        let character = repo.create(params).await?;

        tracing::info!(
            "User {} created character {} in campaign {}",
            principal.id,
            character.id,
            campaign.id
        );

        Ok(character)
    }

    pub async fn get(&self, id: i32, principal: &User) -> Result<Character, AppError> {
        let character = CharacterRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Character not found".to_string()))?;

        ensure_owner("character", id, character.user_id, principal)?;

        Ok(character)
    }

    pub async fn list(&self, filter: CharacterFilter, page: Page) -> Result<Vec<Character>, AppError> {
        Ok(CharacterRepository::new(self.db).list(filter, page).await?)
    }

    pub async fn update(
        &self,
        id: i32,
        principal: &User,
        params: UpdateCharacterParams,
    ) -> Result<Character, AppError> {
        let character = self.get(id, principal).await?;

        let character = CharacterRepository::new(self.db)
            .update(character.id, params)
            .await?;

        tracing::info!("User {} updated character {}", principal.id, character.id);

        Ok(character)
    }

    /// Deletes a character with its sets and logs.
    pub async fn delete(&self, id: i32, principal: &User) -> Result<(), AppError> {
        let character = self.get(id, principal).await?;

        CascadeService::new(self.db)
            .delete_character(character.id)
            .await?;

        tracing::info!("User {} deleted character {}", principal.id, character.id);

        Ok(())
    }
}
