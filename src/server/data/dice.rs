//! Dice catalog repository.
//!
//! The catalog is reference data. The only write path is the idempotent seed run at
//! startup; the API never mutates it.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
    QueryOrder, QuerySelect,
};

use crate::server::model::{dice::Dice, page::Page};

/// Standard polyhedral set seeded at startup.
pub const DICE_CATALOG: [(&str, i32); 7] = [
    ("d4", 4),
    ("d6", 6),
    ("d8", 8),
    ("d10", 10),
    ("d12", 12),
    ("d20", 20),
    ("d100", 100),
];

pub struct DiceRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> DiceRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts any catalog dice that are not present yet.
    ///
    /// # Returns
    /// - `Ok(usize)` - Number of dice inserted, 0 once the catalog is complete
    pub async fn seed_catalog(&self) -> Result<usize, DbErr> {
        let mut inserted = 0;

        for (name, sides) in DICE_CATALOG {
            let exists = entity::prelude::Dice::find()
                .filter(entity::dice::Column::Name.eq(name))
                .one(self.db)
                .await?
                .is_some();
            if exists {
                continue;
            }

            entity::dice::ActiveModel {
                name: ActiveValue::Set(name.to_string()),
                sides: ActiveValue::Set(sides),
                ..Default::default()
            }
            .insert(self.db)
            .await?;
            inserted += 1;
        }

        Ok(inserted)
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Dice>, DbErr> {
        let entity = entity::prelude::Dice::find_by_id(id).one(self.db).await?;

        Ok(entity.map(Dice::from_entity))
    }

    /// Loads the dice among `ids` that exist; missing ids are silently absent.
    pub async fn find_many(&self, ids: &[i32]) -> Result<Vec<Dice>, DbErr> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let entities = entity::prelude::Dice::find()
            .filter(entity::dice::Column::Id.is_in(ids.iter().copied()))
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Dice::from_entity).collect())
    }

    /// Lists the catalog ordered by number of sides.
    pub async fn list(&self, page: Page) -> Result<Vec<Dice>, DbErr> {
        let entities = entity::prelude::Dice::find()
            .order_by_asc(entity::dice::Column::Sides)
            .order_by_asc(entity::dice::Column::Id)
            .offset(page.offset)
            .limit(page.limit)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Dice::from_entity).collect())
    }
}
