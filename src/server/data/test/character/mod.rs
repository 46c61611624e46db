use crate::{
    model::character::Skills,
    server::{
        data::character::CharacterRepository,
        model::{
            character::{CharacterFilter, CreateCharacterParams, UpdateCharacterParams},
            page::Page,
        },
    },
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod count;
mod create;
mod delete;
mod list;
mod update;
