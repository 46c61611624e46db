//! Dice factory for populating the catalog in tests.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Catalog members present in every running server.
pub const CATALOG: [(&str, i32); 7] = [
    ("d4", 4),
    ("d6", 6),
    ("d8", 8),
    ("d10", 10),
    ("d12", 12),
    ("d20", 20),
    ("d100", 100),
];

/// Factory for creating catalog dice.
pub struct DiceFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    sides: i32,
}

impl<'a> DiceFactory<'a> {
    /// Creates a new DiceFactory defaulting to a uniquely named six-sided dice.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            name: format!("dice_{}", next_id()),
            sides: 6,
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn sides(mut self, sides: i32) -> Self {
        self.sides = sides;
        self
    }

    pub async fn build(self) -> Result<entity::dice::Model, DbErr> {
        entity::dice::ActiveModel {
            name: ActiveValue::Set(self.name),
            sides: ActiveValue::Set(self.sides),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a named dice with the given number of sides.
pub async fn create_dice(
    db: &DatabaseConnection,
    name: &str,
    sides: i32,
) -> Result<entity::dice::Model, DbErr> {
    DiceFactory::new(db).name(name).sides(sides).build().await
}

/// Inserts the full d4..d100 catalog and returns the rows in catalog order.
pub async fn create_catalog(db: &DatabaseConnection) -> Result<Vec<entity::dice::Model>, DbErr> {
    let mut dices = Vec::with_capacity(CATALOG.len());
    for (name, sides) in CATALOG {
        dices.push(create_dice(db, name, sides).await?);
    }
    Ok(dices)
}
