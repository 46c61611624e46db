use crate::server::{
    data::dice::{DiceRepository, DICE_CATALOG},
    model::page::Page,
};
use entity::prelude::*;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod find_many;
mod list;
mod seed_catalog;
