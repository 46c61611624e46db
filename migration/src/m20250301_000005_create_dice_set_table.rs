use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20250301_000001_create_user_table::User,
    m20250301_000002_create_campaign_table::Campaign,
    m20250301_000003_create_character_table::Character,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(DiceSet::Table)
                    .if_not_exists()
                    .col(pk_auto(DiceSet::Id))
                    .col(string(DiceSet::Name))
                    .col(integer(DiceSet::UserId))
                    .col(integer(DiceSet::CampaignId))
                    .col(integer(DiceSet::CharacterId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_dice_set_user_id")
                            .from(DiceSet::Table, DiceSet::UserId)
                            .to(User::Table, User::Id),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_dice_set_campaign_id")
                            .from(DiceSet::Table, DiceSet::CampaignId)
                            .to(Campaign::Table, Campaign::Id),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_dice_set_character_id")
                            .from(DiceSet::Table, DiceSet::CharacterId)
                            .to(Character::Table, Character::Id),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(DiceSet::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum DiceSet {
    Table,
    Id,
    Name,
    UserId,
    CampaignId,
    CharacterId,
}
