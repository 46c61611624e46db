use crate::server::{
    data::user::UserRepository,
    model::{
        page::Page,
        user::{CreateUserParams, UserChanges, UserFilter},
    },
};
use entity::prelude::*;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod find_by_login;
mod is_taken;
mod list;
mod update;
