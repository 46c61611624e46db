use sea_orm::entity::prelude::*;

/// Join row between a dice set and a catalog dice.
///
/// Duplicate dice in a set collapse into a single row with `quantity > 1`. `position`
/// records the order in which each distinct dice first appeared when the set was built,
/// which fixes the draw order when the set is rolled.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "dice_set_dice")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub dice_set_id: i32,
    #[sea_orm(primary_key, auto_increment = false)]
    pub dice_id: i32,
    pub quantity: i32,
    pub position: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::dice_set::Entity",
        from = "Column::DiceSetId",
        to = "super::dice_set::Column::Id"
    )]
    DiceSet,
    #[sea_orm(
        belongs_to = "super::dice::Entity",
        from = "Column::DiceId",
        to = "super::dice::Column::Id"
    )]
    Dice,
}

impl Related<super::dice_set::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::DiceSet.def()
    }
}

impl Related<super::dice::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Dice.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
