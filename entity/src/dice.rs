use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "dice")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub name: String,
    pub sides: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::dice_set_dice::Entity")]
    DiceSetDice,
}

impl Related<super::dice_set_dice::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::DiceSetDice.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
