use sea_orm::ConnectionTrait;

use crate::server::{
    data::campaign::CampaignRepository,
    error::AppError,
    model::{
        campaign::{Campaign, CampaignFilter, CreateCampaignParams, UpdateCampaignParams},
        page::Page,
        user::User,
    },
    service::{cascade::CascadeService, conflict_on_duplicate, ensure_owner},
};

const DUPLICATE_TITLE: &str = "Campaign title already exists";

pub struct CampaignService<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> CampaignService<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a campaign owned by `params.created_by`.
    ///
    /// # Returns
    /// - `Err(AppError::Conflict)` - The owner already has a campaign with this title
    pub async fn create(&self, params: CreateCampaignParams) -> Result<Campaign, AppError> {
        let repo = CampaignRepository::new(self.db);

        if repo
            .title_exists(params.created_by, &params.title, None)
            .await?
        {
            tracing::warn!(
                "User {} already has a campaign titled {:?}",
                params.created_by,
                params.title
            );
            return Err(AppError::Conflict(DUPLICATE_TITLE.to_string()));
        }

        let campaign = repo
            .create(params)
            .await
            .map_err(conflict_on_duplicate(DUPLICATE_TITLE))?;

        tracing::info!(
            "User {} created campaign {}",
            campaign.created_by,
            campaign.id
        );

        Ok(campaign)
    }

    /// Loads a campaign the principal owns.
    ///
    /// # Returns
    /// - `Err(AppError::NotFound)` - No such campaign
    /// - `Err(AppError::Forbidden)` - Campaign belongs to someone else
    pub async fn get(&self, id: i32, principal: &User) -> Result<Campaign, AppError> {
        let campaign = CampaignRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Campaign not found".to_string()))?;

        ensure_owner("campaign", id, campaign.created_by, principal)?;

        Ok(campaign)
    }

    pub async fn list(&self, filter: CampaignFilter, page: Page) -> Result<Vec<Campaign>, AppError> {
        Ok(CampaignRepository::new(self.db).list(filter, page).await?)
    }

    pub async fn update(
        &self,
        id: i32,
        principal: &User,
        params: UpdateCampaignParams,
    ) -> Result<Campaign, AppError> {
        let campaign = self.get(id, principal).await?;
        let repo = CampaignRepository::new(self.db);

        if let Some(title) = &params.title {
            if repo.title_exists(principal.id, title, Some(campaign.id)).await? {
                tracing::warn!("User {} already has a campaign titled {:?}", principal.id, title);
                return Err(AppError::Conflict(DUPLICATE_TITLE.to_string()));
            }
        }

        let campaign = repo
            .update(campaign.id, params)
            .await
            .map_err(conflict_on_duplicate(DUPLICATE_TITLE))?;

        tracing::info!("User {} updated campaign {}", principal.id, campaign.id);

        Ok(campaign)
    }

    /// Deletes a campaign with its characters, sets and logs.
    pub async fn delete(&self, id: i32, principal: &User) -> Result<(), AppError> {
        let campaign = self.get(id, principal).await?;

        CascadeService::new(self.db)
            .delete_campaign(campaign.id)
            .await?;

        tracing::info!("User {} deleted campaign {}", principal.id, campaign.id);

        Ok(())
    }
}
