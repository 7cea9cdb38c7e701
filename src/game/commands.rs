//! Parsing of one line of player text into a game command.
//!
//! Parsing is pure: whether an unrecognized line counts as a riddle guess
//! depends on the current room, so that decision is left to the session.

/// One recognized player action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameCommand {
    Restart,                // RESTART - rebuild the world
    Help,                   // HELP - command summary
    Look,                   // L, LOOK - re-render the room
    Inventory,              // I, INVENTORY - list held items
    Move(String),           // N, GO NORTH, WEST ... (full direction name)
    Answer(String),         // ANSWER/SAY/REPLY text
    /// Anything else, trimmed but with its original case.
    Other(String),
}

const ANSWER_VERBS: [&str; 3] = ["answer", "say", "reply"];

/// Classify a raw input line. Matching is case-insensitive and whole-line.
pub fn parse_command(input: &str) -> GameCommand {
    let cmd = input.trim();
    let lower = cmd.to_lowercase();

    match lower.as_str() {
        "restart" => return GameCommand::Restart,
        "help" => return GameCommand::Help,
        "look" | "l" => return GameCommand::Look,
        "inventory" | "i" => return GameCommand::Inventory,
        _ => {}
    }

    if let Some(direction) = parse_movement(&lower) {
        return GameCommand::Move(direction.to_string());
    }
    if let Some(text) = parse_answer(&lower) {
        return GameCommand::Answer(text.to_string());
    }
    GameCommand::Other(cmd.to_string())
}

/// Full direction name for a single-letter or full cardinal direction.
pub fn expand_direction(word: &str) -> Option<&'static str> {
    match word {
        "n" | "north" => Some("north"),
        "s" | "south" => Some("south"),
        "e" | "east" => Some("east"),
        "w" | "west" => Some("west"),
        _ => None,
    }
}

/// `(go <ws>+)? <direction>` over the whole lowercased line.
fn parse_movement(lower: &str) -> Option<&'static str> {
    let word = match lower.strip_prefix("go") {
        Some(rest) if rest.starts_with(char::is_whitespace) => rest.trim_start(),
        _ => lower,
    };
    expand_direction(word)
}

/// `<verb> <ws>+ <text>` where text is non-empty.
fn parse_answer(lower: &str) -> Option<&str> {
    ANSWER_VERBS.iter().find_map(|verb| {
        let rest = lower.strip_prefix(verb)?;
        if !rest.starts_with(char::is_whitespace) {
            return None;
        }
        let text = rest.trim_start();
        (!text.is_empty()).then_some(text)
    })
}

/// Static command summary for HELP.
pub fn help_text() -> &'static str {
    "Commands: north / south / east / west  |  go <dir>  |  answer <text>  |  look  |  inventory  |  restart"
}
