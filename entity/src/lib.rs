//! SeaORM entity models for the rollbook schema.
//!
//! Each module maps one table. The ownership tree is rooted at `user`:
//! `user` → `campaign` → `character` → `dice_set` → `dice_set_dice` → `dice`, with
//! `dice_log` hanging off the user, campaign, character and optional dice set.

pub mod prelude;

pub mod campaign;
pub mod character;
pub mod dice;
pub mod dice_log;
pub mod dice_set;
pub mod dice_set_dice;
pub mod user;
