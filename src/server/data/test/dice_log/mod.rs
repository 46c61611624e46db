use crate::server::{
    data::dice_log::DiceLogRepository,
    model::{
        dice_log::{DiceLogFilter, NewDiceLog},
        page::Page,
    },
};
use chrono::{Duration, Utc};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod append;
mod delete;
mod list;
mod trim_user_history;

fn new_log(character: &entity::character::Model, result: i64) -> NewDiceLog {
    NewDiceLog {
        user_id: character.user_id,
        campaign_id: character.campaign_id,
        character_id: character.id,
        diceset_id: None,
        roll: "d20".to_string(),
        result,
    }
}
