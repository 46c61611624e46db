//! Campaign domain models and parameters.

use crate::model::campaign::{CampaignDto, CreateCampaignDto, UpdateCampaignDto};

/// Hard ceiling on characters per campaign regardless of `max_classes`.
pub const MAX_CHARACTERS_PER_CAMPAIGN: i32 = 4;

#[derive(Debug, Clone, PartialEq)]
pub struct Campaign {
    pub id: i32,
    pub title: String,
    pub genre: Option<String>,
    pub description: Option<String>,
    pub max_classes: i32,
    /// Owning user.
    pub created_by: i32,
}

impl Campaign {
    pub fn from_entity(entity: entity::campaign::Model) -> Self {
        Self {
            id: entity.id,
            title: entity.title,
            genre: entity.genre,
            description: entity.description,
            max_classes: entity.max_classes,
            created_by: entity.created_by,
        }
    }

    pub fn into_dto(self) -> CampaignDto {
        CampaignDto {
            id: self.id,
            title: self.title,
            genre: self.genre,
            description: self.description,
            max_classes: self.max_classes,
            created_by: self.created_by,
        }
    }

    /// Number of characters this campaign may hold.
    pub fn character_cap(&self) -> u64 {
        clamp_max_classes(self.max_classes) as u64
    }
}

/// Clamps a requested slot count into `1..=4`.
pub fn clamp_max_classes(max_classes: i32) -> i32 {
    max_classes.clamp(1, MAX_CHARACTERS_PER_CAMPAIGN)
}

#[derive(Debug, Clone)]
pub struct CreateCampaignParams {
    pub title: String,
    pub genre: Option<String>,
    pub description: Option<String>,
    pub max_classes: i32,
    pub created_by: i32,
}

impl CreateCampaignParams {
    pub fn from_dto(created_by: i32, dto: CreateCampaignDto) -> Self {
        Self {
            title: dto.title.trim().to_string(),
            genre: dto.genre,
            description: dto.description,
            max_classes: clamp_max_classes(dto.max_classes.unwrap_or(MAX_CHARACTERS_PER_CAMPAIGN)),
            created_by,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct UpdateCampaignParams {
    pub title: Option<String>,
    pub genre: Option<String>,
    pub description: Option<String>,
    pub max_classes: Option<i32>,
}

impl UpdateCampaignParams {
    pub fn from_dto(dto: UpdateCampaignDto) -> Self {
        Self {
            title: dto.title.map(|t| t.trim().to_string()),
            genre: dto.genre,
            description: dto.description,
            max_classes: dto.max_classes.map(clamp_max_classes),
        }
    }
}

/// List filter; `created_by` is always the principal.
#[derive(Debug, Clone)]
pub struct CampaignFilter {
    pub created_by: i32,
    pub title: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamps_requested_slots() {
        assert_eq!(clamp_max_classes(0), 1);
        assert_eq!(clamp_max_classes(3), 3);
        assert_eq!(clamp_max_classes(12), MAX_CHARACTERS_PER_CAMPAIGN);
    }

    #[test]
    fn create_defaults_to_full_cap() {
        let params = CreateCampaignParams::from_dto(
            1,
            CreateCampaignDto {
                title: "  Strahd  ".to_string(),
                genre: None,
                description: None,
                max_classes: None,
            },
        );
        assert_eq!(params.title, "Strahd");
        assert_eq!(params.max_classes, MAX_CHARACTERS_PER_CAMPAIGN);
    }
}
