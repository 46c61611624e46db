use crate::server::{
    data::dice_set::DiceSetRepository,
    model::{
        dice_set::{DiceSetFilter, NewDiceSet},
        page::Page,
    },
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
mod find_by_id;
mod list;
mod replace_dices;
