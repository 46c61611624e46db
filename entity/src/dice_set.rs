use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "dice_set")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub user_id: i32,
    pub campaign_id: i32,
    pub character_id: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::UserId",
        to = "super::user::Column::Id"
    )]
    User,
    #[sea_orm(
        belongs_to = "super::character::Entity",
        from = "Column::CharacterId",
        to = "super::character::Column::Id"
    )]
    Character,
    #[sea_orm(has_many = "super::dice_set_dice::Entity")]
    DiceSetDice,
    #[sea_orm(has_many = "super::dice_log::Entity")]
    DiceLog,
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl Related<super::character::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Character.def()
    }
}

impl Related<super::dice_set_dice::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::DiceSetDice.def()
    }
}

impl Related<super::dice_log::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::DiceLog.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
