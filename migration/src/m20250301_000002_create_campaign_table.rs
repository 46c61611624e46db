use sea_orm_migration::{prelude::*, schema::*};

use super::m20250301_000001_create_user_table::User;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Campaign::Table)
                    .if_not_exists()
                    .col(pk_auto(Campaign::Id))
                    .col(string(Campaign::Title))
                    .col(string_null(Campaign::Genre))
                    .col(text_null(Campaign::Description))
                    .col(integer(Campaign::MaxClasses).default(4))
                    .col(integer(Campaign::CreatedBy))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_campaign_created_by")
                            .from(Campaign::Table, Campaign::CreatedBy)
                            .to(User::Table, User::Id),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("uq_campaign_title_created_by")
                    .table(Campaign::Table)
                    .col(Campaign::Title)
                    .col(Campaign::CreatedBy)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Campaign::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Campaign {
    Table,
    Id,
    Title,
    Genre,
    Description,
    MaxClasses,
    CreatedBy,
}
