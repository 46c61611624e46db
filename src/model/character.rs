use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::model::api::check_length;

/// Attribute name to score, e.g. `{"strength": 14}`.
pub type Skills = BTreeMap<String, i64>;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CharacterDto {
    pub id: i32,
    pub name: String,
    pub race: String,
    pub skills: Skills,
    pub notes: Option<String>,
    pub inventory: Option<String>,
    pub campaign_id: i32,
    pub user_id: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CreateCharacterDto {
    pub name: String,
    pub race: String,
    pub campaign_id: i32,
    #[serde(default)]
    pub skills: Skills,
    pub notes: Option<String>,
    pub inventory: Option<String>,
}

impl CreateCharacterDto {
    pub fn validate(&self) -> Result<(), String> {
        check_length("name", &self.name, 1, 100)?;
        check_length("race", &self.race, 1, 50)?;
        validate_details(&self.skills, &self.notes, &self.inventory)
    }
}

/// Partial character patch. The owning campaign cannot be changed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct UpdateCharacterDto {
    pub name: Option<String>,
    pub race: Option<String>,
    pub skills: Option<Skills>,
    pub notes: Option<String>,
    pub inventory: Option<String>,
}

impl UpdateCharacterDto {
    pub fn validate(&self) -> Result<(), String> {
        if let Some(name) = &self.name {
            check_length("name", name, 1, 100)?;
        }
        if let Some(race) = &self.race {
            check_length("race", race, 1, 50)?;
        }
        let empty = Skills::new();
        validate_details(
            self.skills.as_ref().unwrap_or(&empty),
            &self.notes,
            &self.inventory,
        )
    }
}

fn validate_details(
    skills: &Skills,
    notes: &Option<String>,
    inventory: &Option<String>,
) -> Result<(), String> {
    if skills.keys().any(|name| name.trim().is_empty()) {
        return Err("skill names must not be empty".to_string());
    }
    if let Some(notes) = notes {
        check_length("notes", notes, 0, 5000)?;
    }
    if let Some(inventory) = inventory {
        check_length("inventory", inventory, 0, 5000)?;
    }
    Ok(())
}

#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct CharacterFilterQuery {
    pub campaign_id: Option<i32>,
    /// Case-insensitive substring of the character name
    pub name: Option<String>,
}
