use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20250301_000004_create_dice_table::Dice, m20250301_000005_create_dice_set_table::DiceSet,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(DiceSetDice::Table)
                    .if_not_exists()
                    .col(integer(DiceSetDice::DiceSetId))
                    .col(integer(DiceSetDice::DiceId))
                    .col(integer(DiceSetDice::Quantity).default(1))
                    .col(integer(DiceSetDice::Position).default(0))
                    .primary_key(
                        Index::create()
                            .col(DiceSetDice::DiceSetId)
                            .col(DiceSetDice::DiceId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_dice_set_dice_dice_set_id")
                            .from(DiceSetDice::Table, DiceSetDice::DiceSetId)
                            .to(DiceSet::Table, DiceSet::Id),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_dice_set_dice_dice_id")
                            .from(DiceSetDice::Table, DiceSetDice::DiceId)
                            .to(Dice::Table, Dice::Id),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(DiceSetDice::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum DiceSetDice {
    Table,
    DiceSetId,
    DiceId,
    Quantity,
    Position,
}
