//! Presentation boundary.
//!
//! The game core emits [`GameEvent`]s; a [`Presenter`] turns them into
//! output. Three presenters ship with the crate:
//!
//! - [`TerminalPresenter`] - plain text for an interactive terminal
//! - [`JsonPresenter`] - one JSON object per event per line, for driving a
//!   browser page or another front end over a pipe
//! - [`EventLog`] - in-memory collector for tests and transcripts

use crate::game::{GameError, GameEvent, RoomView};

pub mod json;
pub mod memory;
pub mod terminal;

pub use json::JsonPresenter;
pub use memory::EventLog;
pub use terminal::TerminalPresenter;

pub trait Presenter {
    /// Draw a room: title, image, description, encounter and exits.
    fn render_room(&mut self, view: &RoomView) -> Result<(), GameError>;

    /// Append one narrative line to the transcript.
    fn append_log(&mut self, text: &str) -> Result<(), GameError>;

    /// Start a fresh transcript.
    fn clear_log(&mut self) -> Result<(), GameError>;

    fn set_status(&mut self, text: &str, is_error: bool) -> Result<(), GameError>;

    fn update_inventory(&mut self, list: &str) -> Result<(), GameError>;

    /// Show the input prompt. Non-interactive presenters ignore it.
    fn prompt(&mut self, _prompt: &str) -> Result<(), GameError> {
        Ok(())
    }

    /// Echo a command read from a script, so transcripts show what was typed.
    fn echo_command(&mut self, _command: &str) -> Result<(), GameError> {
        Ok(())
    }

    /// Dispatch a turn's events in order.
    fn present(&mut self, events: &[GameEvent]) -> Result<(), GameError> {
        for event in events {
            match event {
                GameEvent::ClearLog => self.clear_log()?,
                GameEvent::Room(view) => self.render_room(view)?,
                GameEvent::Log { text } => self.append_log(text)?,
                GameEvent::Status(status) => self.set_status(&status.text, status.is_error)?,
                GameEvent::Inventory { list } => self.update_inventory(list)?,
            }
        }
        Ok(())
    }
}

impl<P: Presenter + ?Sized> Presenter for Box<P> {
    fn render_room(&mut self, view: &RoomView) -> Result<(), GameError> {
        (**self).render_room(view)
    }

    fn append_log(&mut self, text: &str) -> Result<(), GameError> {
        (**self).append_log(text)
    }

    fn clear_log(&mut self) -> Result<(), GameError> {
        (**self).clear_log()
    }

    fn set_status(&mut self, text: &str, is_error: bool) -> Result<(), GameError> {
        (**self).set_status(text, is_error)
    }

    fn update_inventory(&mut self, list: &str) -> Result<(), GameError> {
        (**self).update_inventory(list)
    }

    fn prompt(&mut self, prompt: &str) -> Result<(), GameError> {
        (**self).prompt(prompt)
    }

    fn echo_command(&mut self, command: &str) -> Result<(), GameError> {
        (**self).echo_command(command)
    }

    fn present(&mut self, events: &[GameEvent]) -> Result<(), GameError> {
        (**self).present(events)
    }
}
