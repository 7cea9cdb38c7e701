use std::fmt;

use serde::{Deserialize, Serialize};

use super::riddle::{AnswerOutcome, RiddleState};

/// Key of a room in the world registry.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RoomKey(String);

impl RoomKey {
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RoomKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for RoomKey {
    fn from(key: &str) -> Self {
        Self::new(key)
    }
}

/// Case-insensitive name comparison used for items and room gates.
pub fn same_name(a: &str, b: &str) -> bool {
    a.to_lowercase() == b.to_lowercase()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub name: String,
    #[serde(default)]
    pub description: String,
}

impl Item {
    pub fn new(name: &str, description: &str) -> Self {
        Self {
            name: name.to_string(),
            description: description.to_string(),
        }
    }

    /// Item with an empty description, as granted for riddle rewards.
    pub fn named(name: &str) -> Self {
        Self::new(name, "")
    }

    pub fn is_named(&self, name: &str) -> bool {
        same_name(&self.name, name)
    }
}

/// What a character can do beyond describing itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CharacterKind {
    Plain,
    Riddle(RiddleState),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Character {
    pub name: String,
    pub description: String,
    pub kind: CharacterKind,
}

impl Character {
    pub fn plain(name: &str, description: &str) -> Self {
        Self {
            name: name.to_string(),
            description: description.to_string(),
            kind: CharacterKind::Plain,
        }
    }

    pub fn riddle(
        name: &str,
        description: &str,
        riddle: &str,
        answers: &[&str],
        reward_item: Option<&str>,
    ) -> Self {
        Self {
            name: name.to_string(),
            description: description.to_string(),
            kind: CharacterKind::Riddle(RiddleState::new(riddle, answers, reward_item)),
        }
    }

    pub fn describe(&self) -> String {
        format!("{} — {}", self.name, self.description)
    }

    pub fn riddle_state(&self) -> Option<&RiddleState> {
        match &self.kind {
            CharacterKind::Riddle(state) => Some(state),
            CharacterKind::Plain => None,
        }
    }

    /// True for a riddle character whose riddle is still open.
    pub fn has_open_riddle(&self) -> bool {
        self.riddle_state().is_some_and(|r| !r.is_solved())
    }

    pub fn is_solved_riddle(&self) -> bool {
        self.riddle_state().is_some_and(RiddleState::is_solved)
    }

    /// Text shown when the player meets this character.
    pub fn interact_text(&self) -> String {
        match &self.kind {
            CharacterKind::Riddle(state) if state.is_solved() => {
                format!("{} has already been answered.", self.name)
            }
            CharacterKind::Riddle(state) => format!(
                "{}\n\nRiddle: {}\n\n(Answer by typing: answer <your answer>)",
                self.description, state.riddle
            ),
            CharacterKind::Plain => self.describe(),
        }
    }

    /// Guess this character's riddle. `None` when the character has no riddle.
    pub fn try_answer(&mut self, raw: &str) -> Option<AnswerOutcome> {
        match &mut self.kind {
            CharacterKind::Riddle(state) => Some(state.try_answer(raw)),
            CharacterKind::Plain => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Room {
    pub name: String,
    pub description: String,
    pub image: String,
    /// Shown instead of `image` once the occupant's riddle is solved.
    pub cleared_image: Option<String>,
    links: Vec<(String, RoomKey)>,
    pub character: Option<Character>,
    pub items: Vec<Item>,
}

impl Room {
    pub fn new(name: &str, description: &str, image: &str) -> Self {
        Self {
            name: name.to_string(),
            description: description.to_string(),
            image: image.to_string(),
            cleared_image: None,
            links: Vec::new(),
            character: None,
            items: Vec::new(),
        }
    }

    pub fn with_cleared_image(mut self, image: &str) -> Self {
        self.cleared_image = Some(image.to_string());
        self
    }

    pub fn with_character(mut self, character: Character) -> Self {
        self.character = Some(character);
        self
    }

    /// Link `direction` to `target`. Relinking a direction keeps its place in
    /// the exit order.
    pub fn link_room(&mut self, direction: &str, target: RoomKey) {
        match self.links.iter_mut().find(|(dir, _)| dir == direction) {
            Some(link) => link.1 = target,
            None => self.links.push((direction.to_string(), target)),
        }
    }

    pub fn move_to(&self, direction: &str) -> Option<&RoomKey> {
        self.links
            .iter()
            .find(|(dir, _)| dir == direction)
            .map(|(_, key)| key)
    }

    /// Outgoing links in insertion order.
    pub fn links(&self) -> impl Iterator<Item = (&str, &RoomKey)> {
        self.links.iter().map(|(dir, key)| (dir.as_str(), key))
    }

    pub fn display_image(&self) -> &str {
        match (&self.character, &self.cleared_image) {
            (Some(c), Some(cleared)) if c.is_solved_riddle() => cleared,
            _ => &self.image,
        }
    }

    pub fn describe(&self) -> String {
        let mut text = self.description.clone();
        if !self.items.is_empty() {
            let names: Vec<&str> = self.items.iter().map(|i| i.name.as_str()).collect();
            text.push_str("\n\nYou see: ");
            text.push_str(&names.join(", "));
        }
        text
    }
}
