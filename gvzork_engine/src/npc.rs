//! NPC Module
//!
//! Non-player characters stand in one place and recite a fixed list of lines,
//! one per conversation, starting over when they run out.

use std::fmt::Display;

use crate::WorldObject;
use crate::error::WorldError;

/// What an NPC says when it has nothing scripted.
pub const NO_MESSAGES: &str = "No messages available.";

/// A non-playable character.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Npc {
    name: String,
    description: String,
    messages: Vec<String>,
    next: usize,
}
impl Npc {
    /// Build an NPC. An empty message list is allowed.
    ///
    /// # Errors
    /// - if `name` or `description` is blank
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        messages: Vec<String>,
    ) -> Result<Npc, WorldError> {
        let name = name.into();
        let description = description.into();
        if name.trim().is_empty() {
            return Err(WorldError::BlankName);
        }
        if description.trim().is_empty() {
            return Err(WorldError::BlankDescription);
        }
        Ok(Npc {
            name,
            description,
            messages,
            next: 0,
        })
    }

    /// Returns the current line and advances to the following one, wrapping at the end.
    ///
    /// Not idempotent: every call moves the cursor.
    pub fn next_message(&mut self) -> &str {
        if self.messages.is_empty() {
            return NO_MESSAGES;
        }
        let current = self.next;
        self.next = (current + 1) % self.messages.len();
        &self.messages[current]
    }
}
impl WorldObject for Npc {
    fn name(&self) -> &str {
        &self.name
    }

    fn description(&self) -> &str {
        &self.description
    }
}
impl Display for Npc {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name)
    }
}
