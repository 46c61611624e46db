//! Dice set domain models, composition helpers and roll results.

use crate::{
    model::dice_set::{CreateDiceSetDto, DiceSetDiceDto, DiceSetDto, DiceSetRollDto, UpdateDiceSetDto},
    server::model::dice::{Dice, DiceRoll},
};

/// Hard ceiling on dice sets per character.
pub const MAX_DICE_SETS_PER_CHARACTER: u64 = 5;

#[derive(Debug, Clone, PartialEq)]
pub struct DiceSet {
    pub id: i32,
    pub name: String,
    pub user_id: i32,
    pub campaign_id: i32,
    pub character_id: i32,
    /// Entries in draw order.
    pub dices: Vec<DiceSetEntry>,
}

/// One distinct dice within a set.
#[derive(Debug, Clone, PartialEq)]
pub struct DiceSetEntry {
    pub dice: Dice,
    pub quantity: i32,
}

impl DiceSet {
    /// Builds the domain model from the set row and its join rows.
    ///
    /// Entries are sorted by `(position, dice_id)` so the draw order does not depend on
    /// the order rows came back from the store.
    pub fn from_entity(
        entity: entity::dice_set::Model,
        mut rows: Vec<(entity::dice_set_dice::Model, entity::dice::Model)>,
    ) -> Self {
        rows.sort_by_key(|(join, _)| (join.position, join.dice_id));

        Self {
            id: entity.id,
            name: entity.name,
            user_id: entity.user_id,
            campaign_id: entity.campaign_id,
            character_id: entity.character_id,
            dices: rows
                .into_iter()
                .map(|(join, dice)| DiceSetEntry {
                    dice: Dice::from_entity(dice),
                    quantity: join.quantity,
                })
                .collect(),
        }
    }

    /// Every individual draw the set expands into, in order.
    pub fn draws(&self) -> impl Iterator<Item = &Dice> {
        self.dices
            .iter()
            .flat_map(|entry| std::iter::repeat_n(&entry.dice, entry.quantity.max(0) as usize))
    }

    pub fn into_dto(self) -> DiceSetDto {
        DiceSetDto {
            id: self.id,
            name: self.name,
            user_id: self.user_id,
            campaign_id: self.campaign_id,
            character_id: self.character_id,
            dices: self
                .dices
                .into_iter()
                .map(|entry| DiceSetDiceDto {
                    dice_id: entry.dice.id,
                    name: entry.dice.name,
                    sides: entry.dice.sides,
                    quantity: entry.quantity,
                })
                .collect(),
        }
    }
}

/// Collapses repeated dice ids into `(dice_id, quantity)` pairs.
///
/// Pairs keep the order in which each id first appears.
pub fn collapse_dice_ids(dice_ids: &[i32]) -> Vec<(i32, i32)> {
    let mut entries: Vec<(i32, i32)> = Vec::new();
    for &dice_id in dice_ids {
        match entries.iter_mut().find(|(id, _)| *id == dice_id) {
            Some((_, quantity)) => *quantity += 1,
            None => entries.push((dice_id, 1)),
        }
    }
    entries
}

#[derive(Debug, Clone)]
pub struct CreateDiceSetParams {
    pub name: String,
    pub character_id: i32,
    /// Collapsed `(dice_id, quantity)` pairs.
    pub dices: Vec<(i32, i32)>,
}

impl CreateDiceSetParams {
    pub fn from_dto(dto: CreateDiceSetDto) -> Self {
        Self {
            name: dto.name.trim().to_string(),
            character_id: dto.character_id,
            dices: collapse_dice_ids(&dto.dice_ids),
        }
    }
}

/// Row values for a new set once the owning character has been resolved.
#[derive(Debug, Clone)]
pub struct NewDiceSet {
    pub name: String,
    pub user_id: i32,
    pub campaign_id: i32,
    pub character_id: i32,
    pub dices: Vec<(i32, i32)>,
}

#[derive(Debug, Clone, Default)]
pub struct UpdateDiceSetParams {
    pub name: Option<String>,
    /// Replacement composition, already collapsed.
    pub dices: Option<Vec<(i32, i32)>>,
}

impl UpdateDiceSetParams {
    pub fn from_dto(dto: UpdateDiceSetDto) -> Self {
        Self {
            name: dto.name.map(|n| n.trim().to_string()),
            dices: dto.dice_ids.as_deref().map(collapse_dice_ids),
        }
    }
}

#[derive(Debug, Clone)]
pub struct DiceSetFilter {
    pub user_id: i32,
    pub character_id: Option<i32>,
}

/// Outcome of rolling a whole set.
#[derive(Debug, Clone, PartialEq)]
pub struct DiceSetRoll {
    pub diceset_id: i32,
    pub name: String,
    pub results: Vec<DiceRoll>,
    pub total: i64,
}

impl DiceSetRoll {
    /// Text stored in the roll history, e.g. `"Attack: [3, 5, 7]"`.
    pub fn label(&self) -> String {
        let results: Vec<String> = self.results.iter().map(|r| r.result.to_string()).collect();
        format!("{}: [{}]", self.name, results.join(", "))
    }

    pub fn into_dto(self) -> DiceSetRollDto {
        DiceSetRollDto {
            diceset_id: self.diceset_id,
            name: self.name,
            results: self.results.into_iter().map(DiceRoll::into_dto).collect(),
            total: self.total,
        }
    }
}
