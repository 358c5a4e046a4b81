use gvzork_engine as gz;
use gz::command::CommandKind;
use gz::random::ScriptedSource;
use gz::repl::{ScriptedInput, dispatch, system::DEFEAT_MESSAGE};
use gz::*;

struct Campus {
    world: GameWorld,
    hall: LocationId,
    woods: LocationId,
    field: LocationId,
}

/// Hall (east) <-> Field, Hall (north) <-> Woods. The first scripted pick is the start.
fn campus(picks: &[usize]) -> Campus {
    let mut builder = WorldBuilder::new();
    let hall = builder.add_location(Location::new("Hall", "Science labs."));
    let woods = builder.add_location(Location::new("Woods", "A dark forest."));
    let field = builder.add_location(Location::new("Field", "Open grass."));
    builder.connect_both(hall, "east", field, "west").unwrap();
    builder.connect_both(hall, "north", woods, "south").unwrap();

    let hall_items = [
        Item::new("Anvil", "Very heavy.", 0, 25).unwrap(),
        Item::new("Brick", "A red brick.", 0, 6).unwrap(),
        Item::new("Cookie", "A delicious M&M cookie.", 10, 1).unwrap(),
        Item::new("Feast", "Enough food for anyone.", 500, 3).unwrap(),
        Item::new("Sandwich", "Turkey on rye.", 200, 1).unwrap(),
        Item::new("Stew", "A pot of stew.", 300, 2).unwrap(),
        Item::new("Nail", "A rusty nail.", 0, 1).unwrap(),
    ];
    for item in hall_items {
        builder.location_mut(hall).unwrap().add_item(item);
    }
    builder.location_mut(woods).unwrap().add_npc(
        Npc::new(
            "Elf",
            "A magical creature who can save GVSU.",
            vec!["A".into(), "B".into(), "C".into()],
        )
        .unwrap(),
    );

    let world = builder
        .build(&GameConfig::default(), Box::new(ScriptedSource::new(picks.to_vec())))
        .unwrap();
    Campus {
        world,
        hall,
        woods,
        field,
    }
}

fn run(world: &mut GameWorld, view: &mut View, kind: CommandKind, arg: Option<&str>) {
    dispatch(world, view, kind, arg).unwrap();
}

fn inventory_names(world: &GameWorld) -> Vec<String> {
    world.player.inventory.iter().map(|i| i.name().to_string()).collect()
}

fn item_names(world: &GameWorld, id: LocationId) -> Vec<String> {
    world
        .location(id)
        .unwrap()
        .items()
        .iter()
        .map(|i| i.name().to_string())
        .collect()
}

#[test]
fn take_moves_item_and_adds_weight() {
    let Campus { mut world, hall, .. } = campus(&[0]);
    let mut view = View::capture();
    run(&mut world, &mut view, CommandKind::Take, Some("Cookie"));
    assert_eq!(inventory_names(&world), ["Cookie"]);
    assert_eq!(world.player.carried_weight, 1);
    assert!(!item_names(&world, hall).contains(&"Cookie".to_string()));
    assert!(view.mentions("You took the Cookie."));
}

#[test]
fn take_over_capacity_changes_nothing() {
    let Campus { mut world, hall, .. } = campus(&[0]);
    let mut view = View::capture();
    run(&mut world, &mut view, CommandKind::Take, Some("Anvil"));
    assert_eq!(world.player.carried_weight, 25);
    let hall_before = item_names(&world, hall);

    run(&mut world, &mut view, CommandKind::Take, Some("Brick"));
    assert_eq!(world.player.carried_weight, 25);
    assert_eq!(inventory_names(&world), ["Anvil"]);
    assert_eq!(item_names(&world, hall), hall_before);
    assert!(view.mentions("You cannot carry that much weight."));
}

#[test]
fn take_missing_item_or_argument() {
    let Campus { mut world, .. } = campus(&[0]);
    let mut view = View::capture();
    run(&mut world, &mut view, CommandKind::Take, Some("Unicorn"));
    run(&mut world, &mut view, CommandKind::Take, None);
    assert!(view.mentions("No such item in this location."));
    assert!(view.mentions("What do you want to take?"));
    assert!(world.player.inventory.is_empty());
}

#[test]
fn deliveries_in_woods_count_down_to_victory() {
    let Campus { mut world, .. } = campus(&[0]);
    let mut view = View::capture();
    run(&mut world, &mut view, CommandKind::Take, Some("Sandwich"));
    run(&mut world, &mut view, CommandKind::Take, Some("Stew"));
    run(&mut world, &mut view, CommandKind::Go, Some("north"));

    run(&mut world, &mut view, CommandKind::Give, Some("Sandwich"));
    assert_eq!(world.calories_needed, 300);
    assert!(world.in_progress);
    assert!(view.mentions("You gave the Elf 200 calories."));

    run(&mut world, &mut view, CommandKind::Give, Some("Stew"));
    assert!(world.calories_needed <= 0);
    assert!(!world.in_progress);
    assert_eq!(world.outcome(), Outcome::Victory);
    assert!(world.player.inventory.is_empty());
    assert_eq!(world.player.carried_weight, 0);
}

#[test]
fn inedible_delivery_teleports_and_consumes_item() {
    // start in the hall, then teleport lands in the field
    let Campus {
        mut world, woods, field, ..
    } = campus(&[0, 2]);
    let mut view = View::capture();
    run(&mut world, &mut view, CommandKind::Take, Some("Nail"));
    run(&mut world, &mut view, CommandKind::Go, Some("north"));
    assert_eq!(world.player.location, woods);

    run(&mut world, &mut view, CommandKind::Give, Some("Nail"));
    assert_eq!(world.calories_needed, 500);
    assert_eq!(world.player.location, field);
    assert!(world.player.inventory.is_empty());
    assert!(world.in_progress);
    assert!(view.mentions("displeased"));
}

#[test]
fn delivery_elsewhere_still_consumes_item() {
    let Campus { mut world, hall, .. } = campus(&[0]);
    let mut view = View::capture();
    run(&mut world, &mut view, CommandKind::Take, Some("Sandwich"));
    run(&mut world, &mut view, CommandKind::Take, Some("Cookie"));
    assert_eq!(world.player.carried_weight, 2);

    run(&mut world, &mut view, CommandKind::Give, Some("Sandwich"));
    assert_eq!(world.calories_needed, 500);
    assert_eq!(inventory_names(&world), ["Cookie"]);
    assert_eq!(world.player.carried_weight, 1);
    assert_eq!(world.player.location, hall);
    assert!(view.mentions("You can only give items to the Elf in the Woods."));
}

#[test]
fn give_unknown_item() {
    let Campus { mut world, .. } = campus(&[0]);
    let mut view = View::capture();
    run(&mut world, &mut view, CommandKind::Give, Some("Cookie"));
    assert!(view.mentions("No such item in your inventory."));
    assert_eq!(world.calories_needed, 500);
}

#[test]
fn go_through_exits_and_mark_visited() {
    let Campus {
        mut world, hall, field, ..
    } = campus(&[0]);
    let mut view = View::capture();

    run(&mut world, &mut view, CommandKind::Go, Some("up"));
    assert_eq!(world.player.location, hall);
    assert!(view.mentions("You cannot go that way."));
    assert!(!world.location(hall).unwrap().visited());

    run(&mut world, &mut view, CommandKind::Go, Some("east"));
    assert_eq!(world.player.location, field);
    assert!(world.location(hall).unwrap().visited());
    assert!(!world.location(field).unwrap().visited());

    let rendering = world.location_summary(field).unwrap().to_string();
    assert!(rendering.contains("- west- Hall (Visited)"));
    let rendering = world.location_summary(hall).unwrap().to_string();
    assert!(rendering.contains("- east- Field (Unknown)"));
}

#[test]
fn magic_halves_weight_but_not_inventory() {
    let Campus { mut world, .. } = campus(&[0]);
    let mut view = View::capture();
    run(&mut world, &mut view, CommandKind::Take, Some("Brick"));
    run(&mut world, &mut view, CommandKind::Take, Some("Cookie"));
    assert_eq!(world.player.carried_weight, 7);

    run(&mut world, &mut view, CommandKind::Magic, None);
    assert_eq!(world.player.carried_weight, 3);
    assert_eq!(world.player.inventory.len(), 2);
}

#[test]
fn talk_cycles_and_meet_does_not() {
    let Campus { mut world, .. } = campus(&[1]);
    let mut view = View::capture();
    for _ in 0..4 {
        run(&mut world, &mut view, CommandKind::Talk, Some("Elf"));
    }
    run(&mut world, &mut view, CommandKind::Meet, Some("elf"));
    let quotes: Vec<_> = view
        .items
        .iter()
        .filter_map(|item| match item {
            ViewItem::NpcSpeech { quote, .. } => Some(quote.as_str()),
            _ => None,
        })
        .collect();
    assert_eq!(quotes, ["A", "B", "C", "A"]);
    assert!(view.mentions("A magical creature who can save GVSU."));

    run(&mut world, &mut view, CommandKind::Talk, Some("Elf"));
    assert_eq!(view.items.last().map(ViewItem::plain_text).as_deref(), Some("Elf: B"));
}

#[test]
fn talk_to_absent_npc() {
    let Campus { mut world, .. } = campus(&[0]);
    let mut view = View::capture();
    run(&mut world, &mut view, CommandKind::Talk, Some("Elf"));
    run(&mut world, &mut view, CommandKind::Meet, None);
    assert!(view.mentions("No such NPC in this location."));
    assert!(view.mentions("Who do you want to meet?"));
}

#[test]
fn items_lists_inventory_or_says_empty() {
    let Campus { mut world, .. } = campus(&[0]);
    let mut view = View::capture();
    run(&mut world, &mut view, CommandKind::Items, None);
    assert!(view.mentions("You are not carrying any items."));
    run(&mut world, &mut view, CommandKind::Take, Some("Cookie"));
    run(&mut world, &mut view, CommandKind::Items, None);
    assert!(view.mentions("- Cookie(10 calories)- 1 lb- A delicious M&M cookie."));
    assert!(view.mentions("Total weight: 1 lb"));
}

#[test]
fn help_lists_every_command() {
    let Campus { mut world, .. } = campus(&[0]);
    let mut view = View::capture();
    run(&mut world, &mut view, CommandKind::Help, Some("ignored"));
    let Some(ViewItem::Help { commands, time }) = view.items.last() else {
        panic!("help did not produce a help listing");
    };
    assert_eq!(commands.len(), CommandKind::ALL.len());
    assert!(commands.iter().any(|c| c == "teleport"));
    assert!(!time.is_empty());
}

#[test]
fn quit_ends_in_defeat() {
    let Campus { mut world, .. } = campus(&[0]);
    let mut view = View::capture();
    let mut input = ScriptedInput::new(["look", "quit", "take Cookie"]);
    let outcome = run_repl(&mut world, &mut view, &mut input).unwrap();
    assert_eq!(outcome, Outcome::Defeat);
    assert!(view.mentions("Quitting the game. Goodbye!"));
    assert!(view.mentions(DEFEAT_MESSAGE));
    assert!(!view.mentions("Congratulations"));
    // nothing after quit is read
    assert!(world.player.inventory.is_empty());
}

#[test]
fn full_session_ends_in_victory() {
    let Campus { mut world, .. } = campus(&[0]);
    let mut view = View::capture();
    let mut input = ScriptedInput::new(["", "take Feast", "go north", "give feast", "quit"]);
    let outcome = run_repl(&mut world, &mut view, &mut input).unwrap();
    assert_eq!(outcome, Outcome::Victory);
    assert!(view.mentions("Welcome to GVZork!"));
    assert!(view.mentions("Congratulations! The Elf has enough calories to save GVSU!"));
    assert!(!view.mentions("Quitting the game"));
}

#[test]
fn unknown_commands_do_not_end_the_game() {
    let Campus { mut world, .. } = campus(&[0]);
    let mut view = View::capture();
    let mut input = ScriptedInput::new(["dance", "   ", "take"]);
    let outcome = run_repl(&mut world, &mut view, &mut input).unwrap();
    assert!(view.mentions("Unknown command. Type 'help' for a list of commands."));
    assert!(view.mentions("What do you want to take?"));
    // input ran out without the goal being met
    assert_eq!(outcome, Outcome::Defeat);
    assert!(view.mentions(DEFEAT_MESSAGE));
}

#[test]
fn teleport_may_land_anywhere() {
    let Campus {
        mut world, hall, woods, ..
    } = campus(&[0, 0, 1]);
    let mut view = View::capture();
    run(&mut world, &mut view, CommandKind::Teleport, None);
    assert_eq!(world.player.location, hall);
    run(&mut world, &mut view, CommandKind::Teleport, None);
    assert_eq!(world.player.location, woods);
    assert!(view.mentions("You have been teleported to Woods."));
}

#[test]
fn huge_negative_goal_does_not_overflow_on_delivery() {
    let mut builder = WorldBuilder::new();
    let woods = builder.add_location(Location::new("Woods", "A dark forest."));
    builder
        .location_mut(woods)
        .unwrap()
        .add_item(Item::new("Cookie", "A delicious M&M cookie.", 10, 1).unwrap());
    let config = GameConfig {
        calorie_target: i32::MIN + 5,
        ..GameConfig::default()
    };
    let mut world = builder.build(&config, Box::new(ScriptedSource::default())).unwrap();
    let mut view = View::capture();

    run(&mut world, &mut view, CommandKind::Take, Some("Cookie"));
    run(&mut world, &mut view, CommandKind::Give, Some("Cookie"));
    assert_eq!(world.calories_needed, i32::MIN);
    assert_eq!(world.outcome(), Outcome::Victory);
    assert!(world.player.inventory.is_empty());
}
