use crate::server::{
    data::campaign::CampaignRepository,
    model::{
        campaign::{CampaignFilter, CreateCampaignParams, UpdateCampaignParams},
        page::Page,
    },
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
mod list;
mod title_exists;
mod update;
