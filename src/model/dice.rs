use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct DiceDto {
    pub id: i32,
    pub name: String,
    pub sides: i32,
}

/// One draw of one dice.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct DiceRollDto {
    pub dice_id: i32,
    pub name: String,
    pub sides: i32,
    pub result: i32,
}

/// Optional log target for a roll. Both ids must be given for the roll to be recorded.
#[derive(Debug, Clone, Copy, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct RollQuery {
    pub campaign_id: Option<i32>,
    #[serde(alias = "dnd_class_id")]
    pub character_id: Option<i32>,
}
