use super::Presenter;
use crate::game::{GameError, GameEvent, RoomView, StatusLine};

/// Presenter that records events instead of drawing them.
#[derive(Debug, Default, Clone)]
pub struct EventLog {
    events: Vec<GameEvent>,
}

impl EventLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> &[GameEvent] {
        &self.events
    }

    /// Narrative lines in the order they were logged.
    pub fn log_lines(&self) -> Vec<&str> {
        self.events
            .iter()
            .filter_map(|e| match e {
                GameEvent::Log { text } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    pub fn last_status(&self) -> Option<&StatusLine> {
        self.events.iter().rev().find_map(|e| match e {
            GameEvent::Status(status) => Some(status),
            _ => None,
        })
    }

    pub fn last_room(&self) -> Option<&RoomView> {
        self.events.iter().rev().find_map(|e| match e {
            GameEvent::Room(view) => Some(view),
            _ => None,
        })
    }

    pub fn last_inventory(&self) -> Option<&str> {
        self.events.iter().rev().find_map(|e| match e {
            GameEvent::Inventory { list } => Some(list.as_str()),
            _ => None,
        })
    }

    pub fn clear(&mut self) {
        self.events.clear();
    }
}

impl Presenter for EventLog {
    fn render_room(&mut self, view: &RoomView) -> Result<(), GameError> {
        self.events.push(GameEvent::Room(view.clone()));
        Ok(())
    }

    fn append_log(&mut self, text: &str) -> Result<(), GameError> {
        self.events.push(GameEvent::log(text));
        Ok(())
    }

    fn clear_log(&mut self) -> Result<(), GameError> {
        self.events.push(GameEvent::ClearLog);
        Ok(())
    }

    fn set_status(&mut self, text: &str, is_error: bool) -> Result<(), GameError> {
        self.events.push(GameEvent::Status(StatusLine {
            text: text.to_string(),
            is_error,
        }));
        Ok(())
    }

    fn update_inventory(&mut self, list: &str) -> Result<(), GameError> {
        self.events.push(GameEvent::Inventory {
            list: list.to_string(),
        });
        Ok(())
    }

    fn present(&mut self, events: &[GameEvent]) -> Result<(), GameError> {
        self.events.extend_from_slice(events);
        Ok(())
    }
}
