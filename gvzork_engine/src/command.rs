//! Command module
//!
//! Maps the first word of player input to a command and keeps the rest as arguments.

use std::collections::BTreeMap;

use variantly::Variantly;

/// Every command the player can issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CommandKind {
    Give,
    Go,
    Help,
    Items,
    Look,
    Magic,
    Meet,
    Quit,
    Take,
    Talk,
    Teleport,
}
impl CommandKind {
    pub const ALL: [CommandKind; 11] = [
        CommandKind::Help,
        CommandKind::Talk,
        CommandKind::Meet,
        CommandKind::Take,
        CommandKind::Give,
        CommandKind::Go,
        CommandKind::Items,
        CommandKind::Look,
        CommandKind::Quit,
        CommandKind::Teleport,
        CommandKind::Magic,
    ];

    /// The word the player types to run this command.
    pub fn keyword(self) -> &'static str {
        match self {
            CommandKind::Give => "give",
            CommandKind::Go => "go",
            CommandKind::Help => "help",
            CommandKind::Items => "items",
            CommandKind::Look => "look",
            CommandKind::Magic => "magic",
            CommandKind::Meet => "meet",
            CommandKind::Quit => "quit",
            CommandKind::Take => "take",
            CommandKind::Talk => "talk",
            CommandKind::Teleport => "teleport",
        }
    }
}

/// Lookup table from command word to command.
#[derive(Debug, Clone)]
pub struct CommandTable {
    commands: BTreeMap<&'static str, CommandKind>,
}
impl Default for CommandTable {
    fn default() -> Self {
        Self::standard()
    }
}
impl CommandTable {
    /// Table holding every [`CommandKind`].
    pub fn standard() -> Self {
        Self {
            commands: CommandKind::ALL.iter().map(|kind| (kind.keyword(), *kind)).collect(),
        }
    }

    pub fn lookup(&self, word: &str) -> Option<CommandKind> {
        self.commands.get(word).copied()
    }

    /// Registered command words, in table order.
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.commands.keys().copied()
    }
}

/// A line of player input, resolved against a [`CommandTable`].
#[derive(Debug, Clone, PartialEq, Eq, Variantly)]
pub enum Command {
    /// Nothing but whitespace was entered.
    Blank,
    /// A registered command and its first argument, if any.
    Known { kind: CommandKind, arg: Option<String> },
    /// The first word is not a registered command.
    Unknown(String),
}

/// Tokenizes an input line on whitespace and resolves its first word.
///
/// Only the first argument is kept; any further words are ignored.
pub fn parse_command(table: &CommandTable, input: &str) -> Command {
    let mut words = input.split_whitespace();
    let Some(verb) = words.next() else {
        return Command::Blank;
    };
    match table.lookup(&verb.to_lowercase()) {
        Some(kind) => Command::Known {
            kind,
            arg: words.next().map(str::to_string),
        },
        None => Command::Unknown(verb.to_string()),
    }
}
