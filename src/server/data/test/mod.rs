mod campaign;
mod character;
mod dice;
mod dice_log;
mod dice_set;
mod user;
