use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::model::api::check_length;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CampaignDto {
    pub id: i32,
    pub title: String,
    pub genre: Option<String>,
    pub description: Option<String>,
    pub max_classes: i32,
    pub created_by: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CreateCampaignDto {
    pub title: String,
    pub genre: Option<String>,
    pub description: Option<String>,
    /// Character slots, 1..=4 (default 4)
    pub max_classes: Option<i32>,
}

impl CreateCampaignDto {
    pub fn validate(&self) -> Result<(), String> {
        check_length("title", &self.title, 1, 100)?;
        validate_optional_fields(&self.genre, &self.description, self.max_classes)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct UpdateCampaignDto {
    pub title: Option<String>,
    pub genre: Option<String>,
    pub description: Option<String>,
    pub max_classes: Option<i32>,
}

impl UpdateCampaignDto {
    pub fn validate(&self) -> Result<(), String> {
        if let Some(title) = &self.title {
            check_length("title", title, 1, 100)?;
        }
        validate_optional_fields(&self.genre, &self.description, self.max_classes)
    }
}

fn validate_optional_fields(
    genre: &Option<String>,
    description: &Option<String>,
    max_classes: Option<i32>,
) -> Result<(), String> {
    if let Some(genre) = genre {
        check_length("genre", genre, 0, 50)?;
    }
    if let Some(description) = description {
        check_length("description", description, 0, 2000)?;
    }
    if let Some(max_classes) = max_classes {
        if max_classes < 1 {
            return Err("max_classes must be at least 1".to_string());
        }
    }
    Ok(())
}

#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct CampaignFilterQuery {
    /// Case-insensitive substring of the title
    pub title: Option<String>,
}
