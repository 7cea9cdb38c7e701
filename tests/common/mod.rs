//! Shared helpers for driving a session in integration tests.

use oldforest::game::{GameEvent, GameSession};
use oldforest::render::{EventLog, Presenter};

/// Start a fresh game and record its opening events.
#[allow(dead_code)]
pub fn started() -> (GameSession, EventLog) {
    let mut session = GameSession::new();
    let mut log = EventLog::new();
    log.present(&session.start().expect("start")).expect("present");
    (session, log)
}

/// Feed each command in turn and return the events of the last one.
#[allow(dead_code)]
pub fn run(session: &mut GameSession, commands: &[&str]) -> Vec<GameEvent> {
    let mut last = Vec::new();
    for cmd in commands {
        last = session.handle_command(cmd).expect("command");
    }
    last
}

/// Narrative lines from a slice of events.
#[allow(dead_code)]
pub fn log_lines(events: &[GameEvent]) -> Vec<String> {
    events
        .iter()
        .filter_map(|e| match e {
            GameEvent::Log { text } => Some(text.clone()),
            _ => None,
        })
        .collect()
}
