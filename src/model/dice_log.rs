use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct DiceLogDto {
    pub id: i32,
    pub user_id: i32,
    pub campaign_id: i32,
    pub character_id: i32,
    pub diceset_id: Option<i32>,
    pub roll: String,
    pub result: i64,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct DiceLogFilterQuery {
    pub campaign_id: Option<i32>,
    #[serde(alias = "dnd_class_id")]
    pub character_id: Option<i32>,
}
