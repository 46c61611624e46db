//! Roll history models.

use chrono::{DateTime, Utc};

use crate::model::dice_log::DiceLogDto;

/// Entries kept per user; older ones are evicted on append.
pub const MAX_LOGS_PER_USER: u64 = 100;

#[derive(Debug, Clone, PartialEq)]
pub struct DiceLog {
    pub id: i32,
    pub user_id: i32,
    pub campaign_id: i32,
    pub character_id: i32,
    pub diceset_id: Option<i32>,
    pub roll: String,
    pub result: i64,
    pub timestamp: DateTime<Utc>,
}

impl DiceLog {
    pub fn from_entity(entity: entity::dice_log::Model) -> Self {
        Self {
            id: entity.id,
            user_id: entity.user_id,
            campaign_id: entity.campaign_id,
            character_id: entity.character_id,
            diceset_id: entity.diceset_id,
            roll: entity.roll,
            result: entity.result,
            timestamp: entity.timestamp,
        }
    }

    pub fn into_dto(self) -> DiceLogDto {
        DiceLogDto {
            id: self.id,
            user_id: self.user_id,
            campaign_id: self.campaign_id,
            character_id: self.character_id,
            diceset_id: self.diceset_id,
            roll: self.roll,
            result: self.result,
            timestamp: self.timestamp,
        }
    }
}

/// A roll to append; the repository stamps the time.
#[derive(Debug, Clone)]
pub struct NewDiceLog {
    pub user_id: i32,
    pub campaign_id: i32,
    pub character_id: i32,
    pub diceset_id: Option<i32>,
    pub roll: String,
    pub result: i64,
}

#[derive(Debug, Clone)]
pub struct DiceLogFilter {
    pub user_id: i32,
    pub campaign_id: Option<i32>,
    pub character_id: Option<i32>,
}
