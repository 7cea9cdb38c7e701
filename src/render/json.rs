//! Line-delimited JSON presenter.
//!
//! Each event becomes one JSON object on its own line, tagged by `event`:
//!
//! ```text
//! {"event":"status","text":"Type 'help' for commands.","is_error":false}
//! {"event":"clear_log"}
//! {"event":"room","key":"forest","name":"Forest Entrance",...}
//! ```

use std::io::Write;

use super::Presenter;
use crate::game::{GameError, GameEvent, RoomView, StatusLine};

pub struct JsonPresenter<W: Write> {
    out: W,
}

impl<W: Write> JsonPresenter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn emit(&mut self, event: &GameEvent) -> Result<(), GameError> {
        serde_json::to_writer(&mut self.out, event)?;
        writeln!(self.out)?;
        self.out.flush()?;
        Ok(())
    }
}

impl<W: Write> Presenter for JsonPresenter<W> {
    fn render_room(&mut self, view: &RoomView) -> Result<(), GameError> {
        self.emit(&GameEvent::Room(view.clone()))
    }

    fn append_log(&mut self, text: &str) -> Result<(), GameError> {
        self.emit(&GameEvent::log(text))
    }

    fn clear_log(&mut self) -> Result<(), GameError> {
        self.emit(&GameEvent::ClearLog)
    }

    fn set_status(&mut self, text: &str, is_error: bool) -> Result<(), GameError> {
        let status = if is_error {
            StatusLine::error(text)
        } else {
            StatusLine::normal(text)
        };
        self.emit(&GameEvent::Status(status))
    }

    fn update_inventory(&mut self, list: &str) -> Result<(), GameError> {
        self.emit(&GameEvent::Inventory {
            list: list.to_string(),
        })
    }

    fn present(&mut self, events: &[GameEvent]) -> Result<(), GameError> {
        for event in events {
            self.emit(event)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::GameSession;

    #[test]
    fn every_event_is_one_json_line() {
        let mut session = GameSession::new();
        let events = session.start().unwrap();
        let mut p = JsonPresenter::new(Vec::new());
        p.present(&events).unwrap();
        let text = String::from_utf8(p.into_inner()).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), events.len());
        for line in &lines {
            let value: serde_json::Value = serde_json::from_str(line).unwrap();
            assert!(value.get("event").is_some(), "untagged line: {}", line);
        }
        assert!(lines.iter().any(|l| l.contains(r#""name":"Forest Entrance""#)));
    }

    #[test]
    fn direct_calls_match_event_encoding() {
        let mut p = JsonPresenter::new(Vec::new());
        p.set_status("Game over.", true).unwrap();
        p.update_inventory("(empty)").unwrap();
        let text = String::from_utf8(p.into_inner()).unwrap();
        assert_eq!(
            text,
            "{\"event\":\"status\",\"text\":\"Game over.\",\"is_error\":true}\n{\"event\":\"inventory\",\"list\":\"(empty)\"}\n"
        );
    }
}
