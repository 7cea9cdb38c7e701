//! Plain-text presenter for a terminal.

use std::io::Write;

use super::Presenter;
use crate::game::{GameError, RoomView};

pub struct TerminalPresenter<W: Write> {
    out: W,
    show_images: bool,
}

impl<W: Write> TerminalPresenter<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            show_images: true,
        }
    }

    /// Toggle the `[image: ...]` line under room titles.
    pub fn with_images(mut self, show_images: bool) -> Self {
        self.show_images = show_images;
        self
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Presenter for TerminalPresenter<W> {
    fn render_room(&mut self, view: &RoomView) -> Result<(), GameError> {
        writeln!(self.out, "== {} ==", view.name)?;
        if self.show_images {
            if let Some(image) = &view.image {
                writeln!(self.out, "[image: {}]", image)?;
            }
        }
        if !view.description.is_empty() {
            writeln!(self.out, "{}", view.description)?;
        }
        if let Some(encounter) = &view.encounter {
            writeln!(self.out)?;
            writeln!(self.out, "{}", encounter)?;
        }
        if !view.exits.is_empty() {
            writeln!(self.out)?;
            for line in &view.exits {
                writeln!(self.out, "{}", line)?;
            }
        }
        Ok(())
    }

    fn append_log(&mut self, text: &str) -> Result<(), GameError> {
        writeln!(self.out, "{}", text)?;
        Ok(())
    }

    fn clear_log(&mut self) -> Result<(), GameError> {
        // A terminal keeps its scrollback; mark the break instead.
        writeln!(self.out)?;
        Ok(())
    }

    fn set_status(&mut self, text: &str, is_error: bool) -> Result<(), GameError> {
        let label = if is_error { "Error" } else { "Status" };
        writeln!(self.out, "{}: {}", label, text)?;
        Ok(())
    }

    fn update_inventory(&mut self, list: &str) -> Result<(), GameError> {
        writeln!(self.out, "Carrying: {}", list)?;
        Ok(())
    }

    fn prompt(&mut self, prompt: &str) -> Result<(), GameError> {
        write!(self.out, "{}", prompt)?;
        self.out.flush()?;
        Ok(())
    }

    fn echo_command(&mut self, command: &str) -> Result<(), GameError> {
        writeln!(self.out, "> {}", command)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::world::{canonical_world, BRIDGE_KEY};

    fn render(show_images: bool) -> String {
        let world = canonical_world();
        let view = RoomView::build(&world, &BRIDGE_KEY.into()).unwrap();
        let mut p = TerminalPresenter::new(Vec::new()).with_images(show_images);
        p.render_room(&view).unwrap();
        String::from_utf8(p.into_inner()).unwrap()
    }

    #[test]
    fn room_render_has_title_image_and_exits() {
        let text = render(true);
        assert!(text.starts_with("== Bridge ==\n[image: /assets/img/monster.jpg]\n"));
        assert!(text.contains("Riddle: Walk right through me"));
        assert!(text.ends_with("The Forest Entrance is to the west.\n"));
    }

    #[test]
    fn image_line_can_be_hidden() {
        assert!(!render(false).contains("[image:"));
    }

    #[test]
    fn status_labels_errors() {
        let mut p = TerminalPresenter::new(Vec::new());
        p.set_status("Type 'help' for commands.", false).unwrap();
        p.set_status("Game over.", true).unwrap();
        let text = String::from_utf8(p.into_inner()).unwrap();
        assert_eq!(text, "Status: Type 'help' for commands.\nError: Game over.\n");
    }
}
