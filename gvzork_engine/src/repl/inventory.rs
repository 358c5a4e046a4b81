//! `repl::inventory` module
//!
//! Contains repl loop handlers for commands that affect the player's pack:
//! `take`, `give`, `items` and `magic`.

use crate::item::ItemHolder;
use crate::{GameWorld, View, ViewItem, WorldObject};

use anyhow::{Context, Result};
use log::info;

/// Pick up an item from the current location, if it fits under the carry limit.
///
/// # Errors
/// - if the player's location cannot be resolved
pub fn take_handler(world: &mut GameWorld, view: &mut View, arg: Option<&str>) -> Result<()> {
    let Some(query) = arg else {
        view.push(ViewItem::Prompt("What do you want to take?".into()));
        return Ok(());
    };

    let (item_name, item_weight) = match world.player_location_ref()?.find_item(query) {
        Some(item) => (item.name().to_string(), item.weight()),
        None => {
            view.push(ViewItem::ActionFailure("No such item in this location.".into()));
            return Ok(());
        },
    };

    if world.player.carried_weight.saturating_add(item_weight) > world.carry_capacity {
        info!(
            "player refused {item_name} ({item_weight} lb): already carrying {} of {} lb",
            world.player.carried_weight, world.carry_capacity
        );
        view.push(ViewItem::ActionFailure("You cannot carry that much weight.".into()));
        return Ok(());
    }

    let item = world
        .player_location_mut()?
        .remove_item_by_name(&item_name)
        .with_context(|| format!("removing '{item_name}' from the player's location"))?;
    world.player.add_item(item);

    view.push(ViewItem::ActionSuccess(format!("You took the {item_name}.")));
    info!(
        "player took {item_name}; now carrying {} lb",
        world.player.carried_weight
    );
    Ok(())
}

/// Hand an inventory item over for delivery.
///
/// The item leaves the pack wherever this is attempted. Only at the delivery
/// location does it count: edible items reduce the calories still needed, while
/// inedible ones get the player teleported somewhere random.
///
/// # Errors
/// - if the player's location cannot be resolved
/// - if an item's calorie value cannot be applied to the counter
pub fn give_handler(world: &mut GameWorld, view: &mut View, arg: Option<&str>) -> Result<()> {
    let Some(query) = arg else {
        view.push(ViewItem::Prompt("What do you want to give?".into()));
        return Ok(());
    };

    let Some(item_name) = world.player.find_item(query).map(|item| item.name().to_string()) else {
        view.push(ViewItem::ActionFailure("No such item in your inventory.".into()));
        return Ok(());
    };
    let item = world
        .player
        .remove_item_by_name(&item_name)
        .with_context(|| format!("removing '{item_name}' from inventory"))?;

    if !world.at_delivery_location() {
        let delivery_name = world.location(world.delivery_location)?.name().to_string();
        view.push(ViewItem::ActionFailure(format!(
            "You can only give items to the {} in the {delivery_name}.",
            world.recipient
        )));
        info!("player gave away {item_name} outside the {delivery_name}; it is gone");
        return Ok(());
    }

    if item.is_edible() {
        let calories = i32::try_from(item.calories()).context("item calorie value out of range")?;
        world.calories_needed = world.calories_needed.saturating_sub(calories);
        view.push(ViewItem::ActionSuccess(format!(
            "You gave the {} {calories} calories.",
            world.recipient
        )));
        info!(
            "player delivered {item_name} ({calories} cal); {} cal still needed",
            world.calories_needed
        );
        if world.calories_needed <= 0 {
            world.in_progress = false;
            info!("calorie goal met");
        }
    } else {
        view.push(ViewItem::ActionFailure(format!(
            "The {} is displeased and teleports you away!",
            world.recipient
        )));
        let destination = world.teleport_player();
        let name = world.location(destination)?.name().to_string();
        view.push(ViewItem::Transition(format!("You have been teleported to {name}.")));
        info!("player offered inedible {item_name} and was sent to {name}");
    }
    Ok(())
}

/// List what the player is carrying and the carried weight.
pub fn items_handler(world: &GameWorld, view: &mut View) {
    view.push(ViewItem::Inventory {
        items: world.player.inventory.iter().map(ToString::to_string).collect(),
        carried_weight: world.player.carried_weight,
    });
}

/// Halve the carried weight without touching the pack's contents.
pub fn magic_handler(world: &mut GameWorld, view: &mut View) {
    let before = world.player.carried_weight;
    world.player.halve_weight();
    view.push(ViewItem::ActionSuccess(
        "Magic happens! Your inventory weight is halved.".into(),
    ));
    info!("magic: carried weight {before} -> {}", world.player.carried_weight);
}
