//! The Old Forest game core.
//!
//! Rooms, characters, the player and the command interpreter live here.
//! Nothing in this module touches a terminal or a file; a turn produces
//! [`GameEvent`]s and a presenter decides how they look.

pub mod commands;
pub mod errors;
pub mod events;
pub mod normalize;
pub mod player;
pub mod riddle;
pub mod session;
pub mod types;
pub mod world;

pub use commands::{help_text, parse_command, GameCommand};
pub use errors::GameError;
pub use events::{GameEvent, RoomView, StatusLine};
pub use normalize::normalize_answer;
pub use player::{Player, EMPTY_INVENTORY};
pub use riddle::{AnswerOutcome, RiddleState, DEFAULT_ATTEMPTS};
pub use session::{
    GameSession, DEATH_STATUS, LOCKED_OUT_STATUS, VICTORY_STATUS, WELCOME_STATUS,
};
pub use types::{Character, CharacterKind, Item, Room, RoomKey};
pub use world::{
    canonical_world, World, CASTLE_KEY, CASTLE_ROOM_NAME, HOME_KEY, START_ROOM_KEY, STONE_KEY,
    WATER_KEY,
};
