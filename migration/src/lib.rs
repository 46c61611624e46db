pub use sea_orm_migration::prelude::*;

mod m20250301_000001_create_user_table;
mod m20250301_000002_create_campaign_table;
mod m20250301_000003_create_character_table;
mod m20250301_000004_create_dice_table;
mod m20250301_000005_create_dice_set_table;
mod m20250301_000006_create_dice_set_dice_table;
mod m20250301_000007_create_dice_log_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250301_000001_create_user_table::Migration),
            Box::new(m20250301_000002_create_campaign_table::Migration),
            Box::new(m20250301_000003_create_character_table::Migration),
            Box::new(m20250301_000004_create_dice_table::Migration),
            Box::new(m20250301_000005_create_dice_set_table::Migration),
            Box::new(m20250301_000006_create_dice_set_dice_table::Migration),
            Box::new(m20250301_000007_create_dice_log_table::Migration),
        ]
    }
}
