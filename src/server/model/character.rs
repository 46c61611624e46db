//! Character domain models and parameters.
//!
//! Characters are the "classes" of the public API. Skills are stored as a JSON object
//! and decoded into an integer map at the repository boundary.

use sea_orm::DbErr;

use crate::model::character::{CharacterDto, CreateCharacterDto, Skills, UpdateCharacterDto};

#[derive(Debug, Clone, PartialEq)]
pub struct Character {
    pub id: i32,
    pub name: String,
    pub race: String,
    pub skills: Skills,
    pub notes: Option<String>,
    pub inventory: Option<String>,
    pub campaign_id: i32,
    /// Owning user.
    pub user_id: i32,
}

impl Character {
    /// Converts an entity model to a character domain model at the repository boundary.
    ///
    /// # Returns
    /// - `Ok(Character)` - Converted domain model
    /// - `Err(DbErr::Custom)` - Stored skills are not an object of integers
    pub fn from_entity(entity: entity::character::Model) -> Result<Self, DbErr> {
        let skills = skills_from_json(entity.skills)?;

        Ok(Self {
            id: entity.id,
            name: entity.name,
            race: entity.race,
            skills,
            notes: entity.notes,
            inventory: entity.inventory,
            campaign_id: entity.campaign_id,
            user_id: entity.user_id,
        })
    }

    pub fn into_dto(self) -> CharacterDto {
        CharacterDto {
            id: self.id,
            name: self.name,
            race: self.race,
            skills: self.skills,
            notes: self.notes,
            inventory: self.inventory,
            campaign_id: self.campaign_id,
            user_id: self.user_id,
        }
    }
}

pub fn skills_from_json(value: serde_json::Value) -> Result<Skills, DbErr> {
    serde_json::from_value(value)
        .map_err(|e| DbErr::Custom(format!("Failed to decode character skills: {}", e)))
}

pub fn skills_to_json(skills: &Skills) -> serde_json::Value {
    serde_json::Value::Object(
        skills
            .iter()
            .map(|(name, score)| (name.clone(), serde_json::Value::from(*score)))
            .collect(),
    )
}

#[derive(Debug, Clone)]
pub struct CreateCharacterParams {
    pub name: String,
    pub race: String,
    pub skills: Skills,
    pub notes: Option<String>,
    pub inventory: Option<String>,
    pub campaign_id: i32,
    pub user_id: i32,
}

impl CreateCharacterParams {
    pub fn from_dto(user_id: i32, dto: CreateCharacterDto) -> Self {
        Self {
            name: dto.name.trim().to_string(),
            race: dto.race.trim().to_string(),
            skills: dto.skills,
            notes: dto.notes,
            inventory: dto.inventory,
            campaign_id: dto.campaign_id,
            user_id,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct UpdateCharacterParams {
    pub name: Option<String>,
    pub race: Option<String>,
    pub skills: Option<Skills>,
    pub notes: Option<String>,
    pub inventory: Option<String>,
}

impl UpdateCharacterParams {
    pub fn from_dto(dto: UpdateCharacterDto) -> Self {
        Self {
            name: dto.name.map(|v| v.trim().to_string()),
            race: dto.race.map(|v| v.trim().to_string()),
            skills: dto.skills,
            notes: dto.notes,
            inventory: dto.inventory,
        }
    }
}

/// List filter; `user_id` is always the principal.
#[derive(Debug, Clone)]
pub struct CharacterFilter {
    pub user_id: i32,
    pub campaign_id: Option<i32>,
    pub name: Option<String>,
}
