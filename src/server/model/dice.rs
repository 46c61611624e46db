//! Dice catalog models and single-roll results.

use crate::{
    model::dice::{DiceDto, DiceRollDto, RollQuery},
    server::error::AppError,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dice {
    pub id: i32,
    pub name: String,
    pub sides: i32,
}

impl Dice {
    pub fn from_entity(entity: entity::dice::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            sides: entity.sides,
        }
    }

    pub fn into_dto(self) -> DiceDto {
        DiceDto {
            id: self.id,
            name: self.name,
            sides: self.sides,
        }
    }
}

/// Outcome of one draw.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiceRoll {
    pub dice_id: i32,
    pub name: String,
    pub sides: i32,
    pub result: i32,
}

impl DiceRoll {
    pub fn into_dto(self) -> DiceRollDto {
        DiceRollDto {
            dice_id: self.dice_id,
            name: self.name,
            sides: self.sides,
            result: self.result,
        }
    }
}

/// Campaign and character a roll is logged under.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RollTarget {
    pub campaign_id: i32,
    pub character_id: i32,
}

impl RollTarget {
    /// Reads the optional target from query parameters.
    ///
    /// # Returns
    /// - `Ok(Some(_))` - Both ids supplied
    /// - `Ok(None)` - Neither supplied
    /// - `Err(AppError::BadRequest)` - Only one of the two supplied
    pub fn from_query(query: RollQuery) -> Result<Option<Self>, AppError> {
        match (query.campaign_id, query.character_id) {
            (Some(campaign_id), Some(character_id)) => Ok(Some(Self {
                campaign_id,
                character_id,
            })),
            (None, None) => Ok(None),
            _ => Err(AppError::BadRequest(
                "campaign_id and character_id must be supplied together".to_string(),
            )),
        }
    }
}
