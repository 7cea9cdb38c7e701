//! The game session: one world, one player, one game-over flag.
//!
//! A session is driven one line at a time through
//! [`GameSession::handle_command`], which mutates state and returns the events
//! produced by that line. Rendering is left entirely to a presenter.

use log::{debug, info};

use super::commands::{help_text, parse_command, GameCommand};
use super::errors::GameError;
use super::events::{GameEvent, RoomView, StatusLine};
use super::player::Player;
use super::riddle::AnswerOutcome;
use super::types::{Item, RoomKey};
use super::world::{
    canonical_world, World, CASTLE_ROOM_NAME, HOME_KEY, START_ROOM_KEY, STONE_KEY, WATER_KEY,
};
use crate::logutil::escape_input;

pub const WELCOME_STATUS: &str = "Type 'help' for commands.";
pub const VICTORY_STATUS: &str = "🎉 YOU WIN! Type 'restart' to play again.";
pub const DEATH_STATUS: &str = "💀 GAME OVER. Type 'restart' to try again.";
pub const LOCKED_OUT_STATUS: &str = "Game over. Type 'restart' to play again.";

const CASTLE_SEALED: &str =
    "⚠️ The castle gates are magically sealed. You need both the Stone Key and Water Key to enter.";
const NO_RIDDLE: &str = "There's no riddle here to answer.";
const TREASURE_CLAIMED: &str = "✨ As you answer, the castle trembles and the treasure room opens. You are transported home with the treasure!";
const TREASURE_WITHHELD: &str = "The dwarf nods, but nothing happens — you need both the Stone Key and the Water Key to claim the treasure. Find them first.";

/// Keys that open the castle gate and, with the dwarf solved, win the game.
const CASTLE_KEYS: [&str; 2] = [STONE_KEY, WATER_KEY];

pub struct GameSession {
    world: World,
    player: Player,
    game_over: bool,
    status: StatusLine,
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new()
    }
}

impl GameSession {
    pub fn new() -> Self {
        Self {
            world: canonical_world(),
            player: Player::new(RoomKey::new(START_ROOM_KEY)),
            game_over: false,
            status: StatusLine::normal(WELCOME_STATUS),
        }
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    /// Status line as of the last turn.
    pub fn status(&self) -> &StatusLine {
        &self.status
    }

    pub fn current_room_view(&self) -> Result<RoomView, GameError> {
        RoomView::build(&self.world, &self.player.current_room)
    }

    /// Opening events for a freshly built game.
    pub fn start(&mut self) -> Result<Vec<GameEvent>, GameError> {
        let mut out = Vec::new();
        self.set_status(StatusLine::normal(WELCOME_STATUS), &mut out);
        let start = self.player.current_room.clone();
        self.enter_room(start, &mut out)?;
        Ok(out)
    }

    /// Throw away all state and begin again from the canonical world.
    pub fn restart(&mut self) -> Result<Vec<GameEvent>, GameError> {
        info!(
            "Restarting game (was game_over={}, room={})",
            self.game_over, self.player.current_room
        );
        *self = Self::new();
        self.start()
    }

    /// Interpret one line of player text. Blank lines produce no events.
    pub fn handle_command(&mut self, raw: &str) -> Result<Vec<GameEvent>, GameError> {
        let cmd = raw.trim();
        if cmd.is_empty() {
            return Ok(Vec::new());
        }
        let command = parse_command(cmd);
        debug!(
            "Command parsed: input=\"{}\" command={:?} room={}",
            escape_input(cmd),
            command,
            self.player.current_room
        );

        let mut out = Vec::new();
        match command {
            GameCommand::Restart => return self.restart(),
            _ if self.game_over => {
                self.set_status(StatusLine::error(LOCKED_OUT_STATUS), &mut out)
            }
            GameCommand::Help => out.push(GameEvent::log(help_text())),
            GameCommand::Look => {
                let here = self.player.current_room.clone();
                self.enter_room(here, &mut out)?;
            }
            GameCommand::Inventory => out.push(GameEvent::log(format!(
                "Inventory: {}",
                self.player.inventory_list()
            ))),
            GameCommand::Move(direction) => self.attempt_move(&direction, &mut out)?,
            GameCommand::Answer(text) => self.attempt_answer(&text, &mut out)?,
            GameCommand::Other(text) => {
                let open_riddle = self
                    .world
                    .room(&self.player.current_room)?
                    .character
                    .as_ref()
                    .is_some_and(|c| c.has_open_riddle());
                if open_riddle {
                    self.attempt_answer(&text, &mut out)?;
                } else {
                    out.push(GameEvent::log(format!(
                        "Unknown command: \"{}\". Type 'help' for a list of valid commands.",
                        text
                    )));
                }
            }
        }
        Ok(out)
    }

    fn attempt_move(&mut self, direction: &str, out: &mut Vec<GameEvent>) -> Result<(), GameError> {
        let Some(next) = self.world.resolve_exit(&self.player.current_room, direction)? else {
            out.push(GameEvent::log(format!(
                "❌ You can't go {} from here.",
                direction
            )));
            return Ok(());
        };
        if self.world.room(&next)?.name == CASTLE_ROOM_NAME && !self.player.has_all(&CASTLE_KEYS) {
            debug!("Castle gate held shut; inventory={}", self.player.inventory_list());
            out.push(GameEvent::log(CASTLE_SEALED));
            return Ok(());
        }
        self.enter_room(next, out)
    }

    fn attempt_answer(&mut self, text: &str, out: &mut Vec<GameEvent>) -> Result<(), GameError> {
        let here = self.player.current_room.clone();
        let room = self.world.room_mut(&here)?;
        let Some(character) = room.character.as_mut() else {
            out.push(GameEvent::log(NO_RIDDLE));
            return Ok(());
        };
        let Some(outcome) = character.try_answer(text) else {
            out.push(GameEvent::log(NO_RIDDLE));
            return Ok(());
        };
        let name = character.name.clone();
        debug!("Answer to {}: {}", name, outcome.status());
        out.push(GameEvent::log(outcome.message(&name)));

        match outcome {
            AnswerOutcome::Correct { reward } => {
                info!("Riddle solved: {}", name);
                if let Some(reward) = reward.filter(|r| r.to_lowercase().contains("key")) {
                    self.player.add_item(Item::named(&reward));
                    out.push(GameEvent::log(format!("🔑 You received: {}", reward)));
                    out.push(GameEvent::Inventory {
                        list: self.player.inventory_list(),
                    });
                }
                if name.to_lowercase().contains("dwarf") {
                    if self.player.has_all(&CASTLE_KEYS) {
                        info!("Victory: treasure claimed from {}", name);
                        out.push(GameEvent::log(TREASURE_CLAIMED));
                        self.player.current_room = RoomKey::new(HOME_KEY);
                        self.set_status(StatusLine::normal(VICTORY_STATUS), out);
                        self.game_over = true;
                    } else {
                        out.push(GameEvent::log(TREASURE_WITHHELD));
                    }
                }
            }
            AnswerOutcome::Dead => {
                info!("Player defeated by {}", name);
                self.set_status(StatusLine::error(DEATH_STATUS), out);
                self.game_over = true;
            }
            AnswerOutcome::Wrong { .. } | AnswerOutcome::Already => {}
        }

        let here = self.player.current_room.clone();
        self.enter_room(here, out)
    }

    fn enter_room(&mut self, key: RoomKey, out: &mut Vec<GameEvent>) -> Result<(), GameError> {
        let view = RoomView::build(&self.world, &key)?;
        self.player.current_room = key;
        out.push(GameEvent::ClearLog);
        out.push(GameEvent::Room(view));
        out.push(GameEvent::Inventory {
            list: self.player.inventory_list(),
        });
        Ok(())
    }

    fn set_status(&mut self, status: StatusLine, out: &mut Vec<GameEvent>) {
        self.status = status.clone();
        out.push(GameEvent::Status(status));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::world::{BRIDGE_KEY, CASTLE_KEY, FOREST_KEY, RIVER_KEY};

    fn logs(events: &[GameEvent]) -> Vec<&str> {
        events
            .iter()
            .filter_map(|e| match e {
                GameEvent::Log { text } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    fn room_of(s: &GameSession) -> &str {
        s.player().current_room.as_str()
    }

    #[test]
    fn start_renders_forest_with_welcome_status() {
        let mut s = GameSession::new();
        let events = s.start().unwrap();
        assert_eq!(
            events.first(),
            Some(&GameEvent::Status(StatusLine::normal(WELCOME_STATUS)))
        );
        assert!(events.contains(&GameEvent::ClearLog));
        let names: Vec<&str> = events
            .iter()
            .filter_map(|e| match e {
                GameEvent::Room(v) => Some(v.name.as_str()),
                _ => None,
            })
            .collect();
        assert_eq!(names, vec!["Forest Entrance"]);
    }

    #[test]
    fn blank_input_is_ignored() {
        let mut s = GameSession::new();
        assert!(s.handle_command("   ").unwrap().is_empty());
    }

    #[test]
    fn blocked_exit_keeps_room() {
        let mut s = GameSession::new();
        let events = s.handle_command("north").unwrap();
        assert_eq!(logs(&events), vec!["❌ You can't go north from here."]);
        assert_eq!(room_of(&s), FOREST_KEY);
    }

    #[test]
    fn castle_gate_needs_both_keys() {
        let mut s = GameSession::new();
        let events = s.handle_command("w").unwrap();
        assert_eq!(logs(&events), vec![CASTLE_SEALED]);
        assert_eq!(room_of(&s), FOREST_KEY);

        s.player.add_item(Item::named(STONE_KEY));
        s.handle_command("go west").unwrap();
        assert_eq!(room_of(&s), FOREST_KEY);

        s.player.add_item(Item::named("water key"));
        s.handle_command("go west").unwrap();
        assert_eq!(room_of(&s), CASTLE_KEY);
    }

    #[test]
    fn fallback_guess_only_with_open_riddle() {
        let mut s = GameSession::new();
        let events = s.handle_command("xyzzy").unwrap();
        assert_eq!(
            logs(&events),
            vec!["Unknown command: \"xyzzy\". Type 'help' for a list of valid commands."]
        );

        s.handle_command("e").unwrap();
        let events = s.handle_command("The Shadow!").unwrap();
        assert!(logs(&events).contains(&"✅ Correct! Troll accepts your answer."));
        assert!(s.player().has_item(STONE_KEY));

        // riddle now solved, so free text is unknown again
        let events = s.handle_command("shadow").unwrap();
        assert!(logs(&events)[0].starts_with("Unknown command"));
    }

    #[test]
    fn answer_in_empty_room_has_no_riddle() {
        let mut s = GameSession::new();
        let events = s.handle_command("answer fire").unwrap();
        assert_eq!(logs(&events), vec![NO_RIDDLE]);
    }

    #[test]
    fn answer_rerenders_room_and_keeps_position() {
        let mut s = GameSession::new();
        s.handle_command("s").unwrap();
        let events = s.handle_command("say ocean").unwrap();
        assert_eq!(logs(&events), vec!["❌ Wrong! You have 2 attempts left."]);
        assert!(matches!(events.last(), Some(GameEvent::Inventory { .. })));
        assert!(events.iter().any(|e| matches!(e, GameEvent::Room(v) if v.name == "River")));
        assert_eq!(room_of(&s), RIVER_KEY);
    }

    #[test]
    fn solved_bridge_shows_cleared_image() {
        let mut s = GameSession::new();
        s.handle_command("e").unwrap();
        assert_eq!(
            s.current_room_view().unwrap().image.as_deref(),
            Some("/assets/img/monster.jpg")
        );
        s.handle_command("answer shadow").unwrap();
        assert_eq!(
            s.current_room_view().unwrap().image.as_deref(),
            Some("/assets/img/bridge.jpg")
        );
        let events = s.handle_command("answer shadow").unwrap();
        assert_eq!(logs(&events), vec!["You already answered Troll."]);
        assert_eq!(room_of(&s), BRIDGE_KEY);
    }

    #[test]
    fn dwarf_without_keys_withholds_treasure() {
        let mut s = GameSession::new();
        // walk in past the gate, then drop the keys' effect by rebuilding the player
        s.player.add_item(Item::named(STONE_KEY));
        s.player.add_item(Item::named(WATER_KEY));
        s.handle_command("w").unwrap();
        s.player = Player::new(RoomKey::new(CASTLE_KEY));
        let events = s.handle_command("answer fire").unwrap();
        assert!(logs(&events).contains(
            &"The dwarf nods, but nothing happens — you need both the Stone Key and the Water Key to claim the treasure. Find them first."
        ));
        assert!(!s.is_game_over());
        assert_eq!(room_of(&s), CASTLE_KEY);
        // the treasure itself is not a key and is never granted
        assert!(!s.player().has_item("Treasure (Victory)"));
    }

    #[test]
    fn game_over_rejects_everything_but_restart() {
        let mut s = GameSession::new();
        s.handle_command("e").unwrap();
        for guess in ["light", "dark", "moon"] {
            s.handle_command(guess).unwrap();
        }
        assert!(s.is_game_over());
        assert_eq!(s.status(), &StatusLine::error(DEATH_STATUS));

        let events = s.handle_command("help").unwrap();
        assert_eq!(events, vec![GameEvent::Status(StatusLine::error(LOCKED_OUT_STATUS))]);

        s.handle_command("RESTART").unwrap();
        assert!(!s.is_game_over());
        assert_eq!(room_of(&s), FOREST_KEY);
        assert_eq!(s.status(), &StatusLine::normal(WELCOME_STATUS));
    }
}
