mod common;

use common::{log_lines, run, started};
use oldforest::game::{
    GameEvent, StatusLine, DEATH_STATUS, LOCKED_OUT_STATUS, STONE_KEY, WATER_KEY,
};

#[test]
fn three_wrong_answers_end_the_game() {
    let (mut session, _log) = started();
    run(&mut session, &["s"]);

    let first = run(&mut session, &["answer ocean"]);
    assert_eq!(log_lines(&first), vec!["❌ Wrong! You have 2 attempts left."]);
    let second = run(&mut session, &["lake"]);
    assert_eq!(log_lines(&second), vec!["❌ Wrong! You have 1 attempts left."]);
    assert!(!session.is_game_over());

    let third = run(&mut session, &["say pond"]);
    assert_eq!(
        log_lines(&third),
        vec!["❌ Wrong! No attempts left. Water Nymph triggers your doom. GAME OVER."]
    );
    assert!(third.contains(&GameEvent::Status(StatusLine::error(DEATH_STATUS))));
    assert!(session.is_game_over());
    assert_eq!(session.status(), &StatusLine::error(DEATH_STATUS));
}

#[test]
fn dead_player_cannot_act() {
    let (mut session, _log) = started();
    run(&mut session, &["e", "a", "b", "c"]);
    assert!(session.is_game_over());

    let events = run(&mut session, &["w"]);
    assert_eq!(events, vec![GameEvent::Status(StatusLine::error(LOCKED_OUT_STATUS))]);
    assert_eq!(session.player().current_room.as_str(), "bridge");
    assert!(!session.player().has_item(STONE_KEY));
    assert!(!session.player().has_item(WATER_KEY));
}

#[test]
fn wrong_answer_after_partial_progress_still_counts() {
    let (mut session, _log) = started();
    // one miss, then the right answer: solved with attempts to spare
    run(&mut session, &["e", "darkness", "shadow"]);
    assert!(!session.is_game_over());
    assert!(session.player().has_item(STONE_KEY));
    let troll = session
        .world()
        .room(&"bridge".into())
        .unwrap()
        .character
        .as_ref()
        .and_then(|c| c.riddle_state())
        .unwrap();
    assert_eq!(troll.attempts(), 2);
    assert!(troll.is_solved());
}
