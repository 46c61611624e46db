use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::model::{api::check_length, dice::DiceRollDto};

pub const MAX_DICE_IDS: usize = 100;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct DiceSetDto {
    pub id: i32,
    pub name: String,
    pub user_id: i32,
    pub campaign_id: i32,
    pub character_id: i32,
    pub dices: Vec<DiceSetDiceDto>,
}

/// A catalog dice and how many times it is drawn per roll.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct DiceSetDiceDto {
    pub dice_id: i32,
    pub name: String,
    pub sides: i32,
    pub quantity: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CreateDiceSetDto {
    pub name: String,
    #[serde(alias = "dnd_class_id")]
    pub character_id: i32,
    /// Repeated ids collapse into a quantity
    #[serde(default)]
    pub dice_ids: Vec<i32>,
}

impl CreateDiceSetDto {
    pub fn validate(&self) -> Result<(), String> {
        check_length("name", &self.name, 1, 100)?;
        validate_dice_ids(&self.dice_ids)
    }
}

/// Partial patch; `dice_ids`, when present, replaces the whole composition.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct UpdateDiceSetDto {
    pub name: Option<String>,
    pub dice_ids: Option<Vec<i32>>,
}

impl UpdateDiceSetDto {
    pub fn validate(&self) -> Result<(), String> {
        if let Some(name) = &self.name {
            check_length("name", name, 1, 100)?;
        }
        if let Some(dice_ids) = &self.dice_ids {
            validate_dice_ids(dice_ids)?;
        }
        Ok(())
    }
}

fn validate_dice_ids(dice_ids: &[i32]) -> Result<(), String> {
    if dice_ids.len() > MAX_DICE_IDS {
        return Err(format!("a dice set holds at most {} dices", MAX_DICE_IDS));
    }
    Ok(())
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct DiceSetRollDto {
    pub diceset_id: i32,
    pub name: String,
    pub results: Vec<DiceRollDto>,
    pub total: i64,
}

#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct DiceSetFilterQuery {
    #[serde(alias = "dnd_class_id")]
    pub character_id: Option<i32>,
}
