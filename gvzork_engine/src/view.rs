//! View module.
//! Rather than printing to the console from each handler, handlers push [`ViewItem`]s
//! into a [`View`], which renders them all at once when flushed.
//!
//! A view built with [`View::capture`] keeps flushed items in a transcript instead of
//! printing them, which is how the tests observe a session.
use std::fmt::{Display, Write};

use colored::Colorize;
use textwrap::{fill, termwidth};
use variantly::Variantly;

use crate::style::{GameStyle, indented_block, normal_block};
use crate::world::Outcome;

const ICON_SUCCESS: &str = "\u{2611}"; // ✔
const ICON_FAILURE: &str = "\u{274C}"; // ✖
const ICON_ERROR: &str = "⚠︎"; // U+26A0 U+FE0E
const ICON_ENGINE: &str = "⚙";
const ICON_CELEBRATE: &str = "🎉"; // U+1F389

/// Where flushed output goes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewMode {
    /// Styled text on stdout.
    Terminal,
    /// Kept in [`View::transcript`], nothing printed.
    Capture,
}

/// One exit as shown to the player.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExitLine {
    pub direction: String,
    pub destination: String,
    /// Whether the *destination* has been visited.
    pub visited: bool,
}

/// Everything shown for a location by `look`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocationSummary {
    pub name: String,
    pub description: String,
    pub npcs: Vec<String>,
    /// Items in their canonical rendering.
    pub items: Vec<String>,
    pub exits: Vec<ExitLine>,
}
impl Display for LocationSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{}- {}", self.name, self.description)?;
        write_list(f, "You see the following NPCs:", &self.npcs)?;
        write_list(f, "You see the following Items:", &self.items)?;
        writeln!(f, "You can go in the following Directions:")?;
        for exit in &self.exits {
            writeln!(
                f,
                "- {}- {} {}",
                exit.direction,
                exit.destination,
                if exit.visited { "(Visited)" } else { "(Unknown)" }
            )?;
        }
        Ok(())
    }
}

fn write_list(f: &mut std::fmt::Formatter<'_>, heading: &str, entries: &[String]) -> std::fmt::Result {
    if entries.is_empty() {
        return writeln!(f, "{heading} None");
    }
    writeln!(f, "{heading}")?;
    for entry in entries {
        writeln!(f, "- {entry}")?;
    }
    Ok(())
}

/// A single piece of output produced while handling a command.
#[derive(Debug, Clone, PartialEq, Eq, Variantly)]
pub enum ViewItem {
    Welcome { recipient: String, delivery_location: String },
    LocationSummary(LocationSummary),
    Transition(String),
    ActionSuccess(String),
    ActionFailure(String),
    /// Asks the player for an argument they left off.
    Prompt(String),
    Error(String),
    NpcSpeech { speaker: String, quote: String },
    NpcDescription { name: String, description: String },
    Inventory { items: Vec<String>, carried_weight: u32 },
    Help { commands: Vec<String>, time: String },
    EngineMessage(String),
    GameOver { outcome: Outcome, message: String },
}
impl ViewItem {
    /// Unstyled text of this item, as it reads to the player.
    pub fn plain_text(&self) -> String {
        match self {
            ViewItem::Welcome {
                recipient,
                delivery_location,
            } => format!(
                "Welcome to GVZork!\nYour goal is to collect edible items and bring them to the \
                 {recipient} in the {delivery_location}.\nType 'help' for a list of commands."
            ),
            ViewItem::LocationSummary(summary) => summary.to_string(),
            ViewItem::NpcSpeech { speaker, quote } => format!("{speaker}: {quote}"),
            ViewItem::NpcDescription { description, .. } => description.clone(),
            ViewItem::Inventory { items, carried_weight } => {
                if items.is_empty() {
                    "You are not carrying any items.".to_string()
                } else {
                    let mut text = String::from("You are carrying:\n");
                    for item in items {
                        let _ = writeln!(text, "- {item}");
                    }
                    let _ = write!(text, "Total weight: {carried_weight} lb");
                    text
                }
            },
            ViewItem::Help { commands, time } => {
                let mut text = String::from("Available commands:\n");
                for command in commands {
                    let _ = writeln!(text, "- {command}");
                }
                let _ = write!(text, "Current time: {time}");
                text
            },
            ViewItem::Transition(msg)
            | ViewItem::ActionSuccess(msg)
            | ViewItem::ActionFailure(msg)
            | ViewItem::Prompt(msg)
            | ViewItem::Error(msg)
            | ViewItem::EngineMessage(msg)
            | ViewItem::GameOver { message: msg, .. } => msg.clone(),
        }
    }
}

/// View aggregates output for one pass through the REPL and then displays it.
#[derive(Debug, Clone)]
pub struct View {
    pub width: usize,
    pub mode: ViewMode,
    pub items: Vec<ViewItem>,
    pub transcript: Vec<ViewItem>,
}
impl Default for View {
    fn default() -> Self {
        Self::new()
    }
}

impl View {
    /// Create a view that prints to the terminal.
    pub fn new() -> Self {
        Self {
            width: termwidth(),
            mode: ViewMode::Terminal,
            items: Vec::new(),
            transcript: Vec::new(),
        }
    }

    /// Create a view that records flushed items instead of printing them.
    pub fn capture() -> Self {
        Self {
            mode: ViewMode::Capture,
            ..Self::new()
        }
    }

    pub fn push(&mut self, item: ViewItem) {
        self.items.push(item);
    }

    /// Display (or record) everything pushed since the last flush.
    pub fn flush(&mut self) {
        match self.mode {
            ViewMode::Capture => self.transcript.append(&mut self.items),
            ViewMode::Terminal => {
                // re-check terminal width in case it's been resized
                self.width = termwidth();
                for item in &self.items {
                    self.render(item);
                }
                self.items.clear();
                println!();
            },
        }
    }

    /// True if any recorded or pending item's text contains `needle`.
    pub fn mentions(&self, needle: &str) -> bool {
        self.transcript
            .iter()
            .chain(&self.items)
            .any(|item| item.plain_text().contains(needle))
    }

    fn render(&self, item: &ViewItem) {
        match item {
            ViewItem::Welcome { .. } => {
                println!("{:^width$}", "GVZORK".banner_style(), width = self.width);
                println!("{}\n", fill(&item.plain_text(), normal_block()).description_style());
            },
            ViewItem::LocationSummary(summary) => Self::location_summary(summary),
            ViewItem::Transition(msg) => println!("{}", fill(msg, normal_block()).transition_style()),
            ViewItem::ActionSuccess(msg) => println!("{:<4}{}", ICON_SUCCESS.green(), msg.success_style()),
            ViewItem::ActionFailure(msg) => println!("{:<4}{}", ICON_FAILURE.red(), msg.denied_style()),
            ViewItem::Prompt(msg) => println!("{}", msg.italic()),
            ViewItem::Error(msg) => println!("{:<4}{}", ICON_ERROR.red(), msg.error_style()),
            ViewItem::NpcSpeech { speaker, quote } => {
                println!("{}: {}", speaker.npc_style(), fill(quote, normal_block()).italic());
            },
            ViewItem::NpcDescription { name, description } => {
                println!("{}", name.npc_style().bold());
                println!("{}", fill(description, normal_block()).description_style());
            },
            ViewItem::Inventory { items, carried_weight } => {
                if items.is_empty() {
                    println!("{}", "You are not carrying any items.".italic().dimmed());
                } else {
                    println!("{}:", "You are carrying".subheading_style());
                    for entry in items {
                        println!("{}", fill(entry, indented_block()).item_style());
                    }
                    println!("Total weight: {carried_weight} lb");
                }
            },
            ViewItem::Help { commands, time } => {
                println!("{}", "Available commands:".bold().yellow());
                for command in commands {
                    println!("  - {}", command.bold().green());
                }
                println!("Current time: {}", time.italic());
            },
            ViewItem::EngineMessage(msg) => println!("{:<4}{}", ICON_ENGINE, msg),
            ViewItem::GameOver { outcome, message } => match outcome {
                Outcome::Victory => println!("\n{:<4}{}", ICON_CELEBRATE, message.success_style().bold()),
                Outcome::Defeat => println!("\n{:<4}{}", ICON_FAILURE.red(), message.denied_style().bold()),
            },
        }
    }

    fn location_summary(summary: &LocationSummary) {
        println!("{}", summary.name.location_style());
        println!("{}\n", fill(&summary.description, normal_block()).description_style());

        print!("{} ", "You see the following NPCs:".subheading_style());
        if summary.npcs.is_empty() {
            println!("{}", "None".dimmed());
        } else {
            println!();
            for npc in &summary.npcs {
                println!("  - {}", npc.npc_style());
            }
        }

        print!("{} ", "You see the following Items:".subheading_style());
        if summary.items.is_empty() {
            println!("{}", "None".dimmed());
        } else {
            println!();
            for item in &summary.items {
                println!("{}", fill(item, indented_block()).item_style());
            }
        }

        println!("{}", "You can go in the following Directions:".subheading_style());
        for exit in &summary.exits {
            if exit.visited {
                println!(
                    "  - {}- {} {}",
                    exit.direction.exit_visited_style(),
                    exit.destination.location_style(),
                    "(Visited)".exit_visited_style()
                );
            } else {
                println!(
                    "  - {}- {} {}",
                    exit.direction.exit_unvisited_style(),
                    exit.destination.location_style(),
                    "(Unknown)".exit_unvisited_style()
                );
            }
        }
    }
}
