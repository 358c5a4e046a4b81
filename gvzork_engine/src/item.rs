//! Item module
//!
//! Items are the portable objects lying around campus. An item never changes once
//! it is built; only where it sits (a location's floor or the player's pack) does.

use std::fmt::Display;

use crate::WorldObject;
use crate::error::WorldError;

/// Largest calorie value an item may carry.
pub const MAX_CALORIES: i32 = 1000;
/// Heaviest an item may be, in pounds.
pub const MAX_WEIGHT: i32 = 500;

/// A takeable object with a calorie value and a weight.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    name: String,
    description: String,
    calories: u32,
    weight: u32,
}
impl Item {
    /// Build a validated item.
    ///
    /// # Errors
    /// - if `name` or `description` is blank
    /// - if `calories` falls outside `0..=1000` or `weight` outside `0..=500`
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        calories: i32,
        weight: i32,
    ) -> Result<Item, WorldError> {
        let name = name.into();
        let description = description.into();
        if name.trim().is_empty() {
            return Err(WorldError::BlankName);
        }
        if !(0..=MAX_CALORIES).contains(&calories) {
            return Err(WorldError::CaloriesOutOfRange(calories));
        }
        if description.trim().is_empty() {
            return Err(WorldError::BlankDescription);
        }
        if !(0..=MAX_WEIGHT).contains(&weight) {
            return Err(WorldError::WeightOutOfRange(weight));
        }
        Ok(Item {
            name,
            description,
            calories: calories.unsigned_abs(),
            weight: weight.unsigned_abs(),
        })
    }

    pub fn calories(&self) -> u32 {
        self.calories
    }

    pub fn weight(&self) -> u32 {
        self.weight
    }

    /// True if the item counts toward feeding the Elf.
    pub fn is_edible(&self) -> bool {
        self.calories > 0
    }
}
impl WorldObject for Item {
    fn name(&self) -> &str {
        &self.name
    }

    fn description(&self) -> &str {
        &self.description
    }
}
impl Display for Item {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}({} calories)- {} lb- {}",
            self.name, self.calories, self.weight, self.description
        )
    }
}

/// Anything that can hold items: a location's floor or the player's pack.
pub trait ItemHolder {
    fn add_item(&mut self, item: Item);
    /// Remove the item with exactly this name, returning it if it was held.
    fn remove_item_by_name(&mut self, name: &str) -> Option<Item>;
    /// Find a held item matching player input (see [`crate::world::match_index`]).
    fn find_item(&self, query: &str) -> Option<&Item>;
}
