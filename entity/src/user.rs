use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "user")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique, indexed)]
    pub user_name: String,
    #[sea_orm(unique, indexed)]
    pub email: String,
    pub password_hash: String,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::campaign::Entity")]
    Campaign,
    #[sea_orm(has_many = "super::character::Entity")]
    Character,
    #[sea_orm(has_many = "super::dice_set::Entity")]
    DiceSet,
    #[sea_orm(has_many = "super::dice_log::Entity")]
    DiceLog,
}

impl Related<super::campaign::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Campaign.def()
    }
}

impl Related<super::character::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Character.def()
    }
}

impl Related<super::dice_set::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::DiceSet.def()
    }
}

impl Related<super::dice_log::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::DiceLog.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
