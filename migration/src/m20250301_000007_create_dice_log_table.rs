use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20250301_000001_create_user_table::User,
    m20250301_000002_create_campaign_table::Campaign,
    m20250301_000003_create_character_table::Character,
    m20250301_000005_create_dice_set_table::DiceSet,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(DiceLog::Table)
                    .if_not_exists()
                    .col(pk_auto(DiceLog::Id))
                    .col(integer(DiceLog::UserId))
                    .col(integer(DiceLog::CampaignId))
                    .col(integer(DiceLog::CharacterId))
                    .col(integer_null(DiceLog::DicesetId))
                    .col(text(DiceLog::Roll))
                    .col(big_integer(DiceLog::Result))
                    .col(
                        timestamp_with_time_zone(DiceLog::Timestamp)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_dice_log_user_id")
                            .from(DiceLog::Table, DiceLog::UserId)
                            .to(User::Table, User::Id),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_dice_log_campaign_id")
                            .from(DiceLog::Table, DiceLog::CampaignId)
                            .to(Campaign::Table, Campaign::Id),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_dice_log_character_id")
                            .from(DiceLog::Table, DiceLog::CharacterId)
                            .to(Character::Table, Character::Id),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_dice_log_diceset_id")
                            .from(DiceLog::Table, DiceLog::DicesetId)
                            .to(DiceSet::Table, DiceSet::Id),
                    )
                    .to_owned(),
            )
            .await?;

        // FIFO trimming orders each user's logs by timestamp
        manager
            .create_index(
                Index::create()
                    .name("idx_dice_log_user_timestamp")
                    .table(DiceLog::Table)
                    .col(DiceLog::UserId)
                    .col(DiceLog::Timestamp)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(DiceLog::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum DiceLog {
    Table,
    Id,
    UserId,
    CampaignId,
    CharacterId,
    DicesetId,
    Roll,
    Result,
    Timestamp,
}
