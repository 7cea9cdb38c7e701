//! Semantic output of a turn, consumed by presenters.

use serde::Serialize;

use super::errors::GameError;
use super::types::RoomKey;
use super::world::World;

/// Everything a presenter needs to draw a room.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RoomView {
    pub key: RoomKey,
    pub name: String,
    /// Display image reference; `None` when the room has no image.
    pub image: Option<String>,
    pub description: String,
    /// Riddle prompt or character description for the occupant.
    pub encounter: Option<String>,
    pub exits: Vec<String>,
}

impl RoomView {
    pub fn build(world: &World, key: &RoomKey) -> Result<Self, GameError> {
        let room = world.room(key)?;
        let image = room.display_image();
        Ok(Self {
            key: key.clone(),
            name: room.name.clone(),
            image: (!image.is_empty()).then(|| image.to_string()),
            description: room.describe(),
            encounter: room.character.as_ref().map(|c| c.interact_text()),
            exits: world.exit_lines(key)?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatusLine {
    pub text: String,
    pub is_error: bool,
}

impl StatusLine {
    pub fn normal(text: &str) -> Self {
        Self {
            text: text.to_string(),
            is_error: false,
        }
    }

    pub fn error(text: &str) -> Self {
        Self {
            text: text.to_string(),
            is_error: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum GameEvent {
    /// Start a fresh transcript (room entry, restart).
    ClearLog,
    /// The player entered or re-looked at a room.
    Room(RoomView),
    /// One narrative line.
    Log { text: String },
    Status(StatusLine),
    /// Current inventory summary.
    Inventory { list: String },
}

impl GameEvent {
    pub fn log(text: impl Into<String>) -> Self {
        GameEvent::Log { text: text.into() }
    }
}
