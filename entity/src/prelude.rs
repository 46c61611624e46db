pub use super::campaign::Entity as Campaign;
pub use super::character::Entity as Character;
pub use super::dice::Entity as Dice;
pub use super::dice_log::Entity as DiceLog;
pub use super::dice_set::Entity as DiceSet;
pub use super::dice_set_dice::Entity as DiceSetDice;
pub use super::user::Entity as User;
