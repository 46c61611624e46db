//! Random source for dice draws.
//!
//! Draws go through the `DiceRoller` trait so the process-wide generator can be replaced
//! in tests by a seeded or scripted one.

use std::sync::Mutex;

use rand::{rngs::StdRng, Rng, SeedableRng};

/// Uniform integer source for dice.
pub trait DiceRoller: Send + Sync {
    /// Draws one value in `1..=sides`.
    fn roll(&self, sides: i32) -> i32;
}

/// Pseudo-random roller backed by a `StdRng`.
pub struct RandomRoller {
    rng: Mutex<StdRng>,
}

impl RandomRoller {
    /// Seeds from the operating system.
    pub fn new() -> Self {
        Self {
            rng: Mutex::new(StdRng::from_os_rng()),
        }
    }

    /// Reproducible sequence for a given seed.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }
}

impl Default for RandomRoller {
    fn default() -> Self {
        Self::new()
    }
}

impl DiceRoller for RandomRoller {
    fn roll(&self, sides: i32) -> i32 {
        let mut rng = self.rng.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        rng.random_range(1..=sides.max(1))
    }
}

/// Replays a fixed list of values, then keeps returning 1.
#[cfg(test)]
pub struct ScriptedRoller {
    values: Mutex<std::collections::VecDeque<i32>>,
}

#[cfg(test)]
impl ScriptedRoller {
    pub fn new(values: impl IntoIterator<Item = i32>) -> Self {
        Self {
            values: Mutex::new(values.into_iter().collect()),
        }
    }
}

#[cfg(test)]
impl DiceRoller for ScriptedRoller {
    fn roll(&self, _sides: i32) -> i32 {
        self.values.lock().unwrap().pop_front().unwrap_or(1)
    }
}
