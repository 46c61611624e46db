use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "character")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub race: String,
    /// JSON object mapping attribute names to integer scores.
    pub skills: Json,
    #[sea_orm(column_type = "Text", nullable)]
    pub notes: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub inventory: Option<String>,
    pub campaign_id: i32,
    pub user_id: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::campaign::Entity",
        from = "Column::CampaignId",
        to = "super::campaign::Column::Id"
    )]
    Campaign,
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::UserId",
        to = "super::user::Column::Id"
    )]
    User,
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

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
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
