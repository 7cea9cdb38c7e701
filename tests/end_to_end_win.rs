mod common;

use common::{log_lines, run, started};
use oldforest::game::{GameEvent, StatusLine, HOME_KEY, LOCKED_OUT_STATUS, VICTORY_STATUS};

// Full winning playthrough: both keys, castle gate, dwarf riddle, home.
#[test]
fn winning_playthrough_reaches_home() {
    let (mut session, _log) = started();

    let events = run(&mut session, &["east", "answer shadow"]);
    let lines = log_lines(&events);
    assert!(lines.contains(&"✅ Correct! Troll accepts your answer.".to_string()));
    assert!(lines.contains(&"🔑 You received: Stone Key".to_string()));

    let events = run(&mut session, &["w", "s", "reply A river."]);
    assert!(log_lines(&events).contains(&"🔑 You received: Water Key".to_string()));
    assert_eq!(session.player().inventory_list(), "Stone Key, Water Key");

    run(&mut session, &["n", "go west"]);
    assert_eq!(session.player().current_room.as_str(), "castle");

    let events = run(&mut session, &["answer Fire"]);
    let lines = log_lines(&events);
    assert!(
        lines.iter().any(|l| l.contains("transported home with the treasure")),
        "expected victory narration: {:?}",
        lines
    );
    assert_eq!(session.player().current_room.as_str(), HOME_KEY);
    assert!(session.is_game_over());
    assert_eq!(session.status(), &StatusLine::normal(VICTORY_STATUS));
    assert!(events.contains(&GameEvent::Status(StatusLine::normal(VICTORY_STATUS))));

    // The last room rendered is Home
    let last_room = events.iter().rev().find_map(|e| match e {
        GameEvent::Room(v) => Some(v.name.clone()),
        _ => None,
    });
    assert_eq!(last_room.as_deref(), Some("Home"));

    // Treasure is not a key, so it never lands in the inventory
    assert!(!session.player().has_item("Treasure (Victory)"));
}

#[test]
fn commands_after_victory_are_rejected() {
    let (mut session, _log) = started();
    run(
        &mut session,
        &["e", "shadow", "w", "s", "river", "n", "w", "fire"],
    );
    assert!(session.is_game_over());

    for cmd in ["look", "help", "e", "inventory", "answer fire"] {
        let events = session.handle_command(cmd).unwrap();
        assert_eq!(
            events,
            vec![GameEvent::Status(StatusLine::error(LOCKED_OUT_STATUS))],
            "command {:?} should be locked out",
            cmd
        );
    }
    assert_eq!(session.player().current_room.as_str(), HOME_KEY);
}
