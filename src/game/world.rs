//! Room registry and the canonical five-room world.
//!
//! The world is rebuilt from scratch for every new game and every restart;
//! nothing here is loaded from disk.

use std::collections::HashMap;

use super::errors::GameError;
use super::types::{Character, Room, RoomKey};

pub const FOREST_KEY: &str = "forest";
pub const BRIDGE_KEY: &str = "bridge";
pub const RIVER_KEY: &str = "river";
pub const CASTLE_KEY: &str = "castle";
pub const HOME_KEY: &str = "home";

/// Where every new game starts.
pub const START_ROOM_KEY: &str = FOREST_KEY;

/// Room names that game rules refer to.
pub const CASTLE_ROOM_NAME: &str = "Old Castle";
pub const STONE_KEY: &str = "Stone Key";
pub const WATER_KEY: &str = "Water Key";
pub const VICTORY_ITEM: &str = "Treasure (Victory)";

/// Registry of rooms by key. Owns every room and, through them, every character.
#[derive(Debug, Clone, Default)]
pub struct World {
    rooms: HashMap<RoomKey, Room>,
}

impl World {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: impl Into<RoomKey>, room: Room) {
        self.rooms.insert(key.into(), room);
    }

    pub fn room(&self, key: &RoomKey) -> Result<&Room, GameError> {
        self.rooms
            .get(key)
            .ok_or_else(|| GameError::RoomNotFound(key.to_string()))
    }

    pub fn room_mut(&mut self, key: &RoomKey) -> Result<&mut Room, GameError> {
        self.rooms
            .get_mut(key)
            .ok_or_else(|| GameError::RoomNotFound(key.to_string()))
    }

    pub fn rooms(&self) -> impl Iterator<Item = (&RoomKey, &Room)> {
        self.rooms.iter()
    }

    /// Where `direction` leads from `from`, or `None` when unlinked.
    pub fn resolve_exit(&self, from: &RoomKey, direction: &str) -> Result<Option<RoomKey>, GameError> {
        Ok(self.room(from)?.move_to(direction).cloned())
    }

    /// One line per outgoing link, in link order: "The <room> is to the <dir>."
    pub fn exit_lines(&self, key: &RoomKey) -> Result<Vec<String>, GameError> {
        self.room(key)?
            .links()
            .map(|(direction, target)| -> Result<String, GameError> {
                let target = self.room(target)?;
                Ok(format!("The {} is to the {}.", target.name, direction))
            })
            .collect()
    }
}

/// Build the fixed world: forest hub, troll bridge, nymph river, dwarf castle,
/// and the home room reached only by winning.
pub fn canonical_world() -> World {
    let mut forest = Room::new(
        "Forest Entrance",
        "You stand at the edge of the Old Forest. A path winds deeper into the shadows. Legends say treasures lie within, but few return.",
        "/assets/img/forest.jpg",
    );
    let mut bridge = Room::new(
        "Bridge",
        "An ancient mossy bridge stretches over a rushing river. A hulking troll blocks the way.",
        "/assets/img/monster.jpg",
    )
    .with_cleared_image("/assets/img/bridge.jpg")
    .with_character(Character::riddle(
        "Troll",
        "A huge troll stands in the middle of the bridge blocking your way.",
        "Walk right through me, never feel me. Always lurking, never seen. What am I?",
        &["shadow", "a shadow"],
        Some(STONE_KEY),
    ));
    let mut river = Room::new(
        "River",
        "A glittering river cuts through the forest. The water ripples oddly.",
        "/assets/img/nymph.jpg",
    )
    .with_cleared_image("/assets/img/water.jpg")
    .with_character(Character::riddle(
        "Water Nymph",
        "An eerie looking water nymph stands in the river and prevents you from moving with her magical powers.",
        "What always runs but never walks, has a bed but never sleeps?",
        &["river", "a river"],
        Some(WATER_KEY),
    ));
    let mut castle = Room::new(
        CASTLE_ROOM_NAME,
        "You are now in an old castle standing before a dragon sleeping on treasure. A sinister dwarf appears before you.",
        "/assets/img/castle.jpg",
    )
    .with_character(Character::riddle(
        "Sinister Dwarf",
        "A sinister dwarf appears before you and asks you a riddle.",
        "I am always hungry, I must always be fed, The finger I touch will soon turn red.",
        &["fire"],
        Some(VICTORY_ITEM),
    ));
    let home = Room::new(
        "Home",
        "You are suddenly transported back home safely standing in your backyard.",
        "/assets/img/home.jpg",
    );

    forest.link_room("east", BRIDGE_KEY.into());
    forest.link_room("south", RIVER_KEY.into());
    forest.link_room("west", CASTLE_KEY.into());
    bridge.link_room("west", FOREST_KEY.into());
    river.link_room("north", FOREST_KEY.into());
    castle.link_room("east", FOREST_KEY.into());

    let mut world = World::new();
    world.insert(FOREST_KEY, forest);
    world.insert(BRIDGE_KEY, bridge);
    world.insert(RIVER_KEY, river);
    world.insert(CASTLE_KEY, castle);
    world.insert(HOME_KEY, home);
    world
}
