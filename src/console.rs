//! Input drivers: the interactive line loop and the script runner.
//!
//! Both own nothing but the loop itself. The session is passed in explicitly
//! and every line goes through [`GameSession::handle_command`], so the same
//! game can be driven from stdin, a file, or a test.

use log::{debug, info};
use tokio::io::{AsyncBufRead, AsyncBufReadExt};

use crate::config::{GameConfig, OutputFormat};
use crate::game::{GameError, GameSession};
use crate::logutil::escape_input;
use crate::render::Presenter;

/// Banner printed before the first room when enabled.
pub const BANNER: &str = "*** The Old Forest ***\nAnswer the riddles, gather the keys, and claim the treasure.";

/// Front-end words that end the loop without reaching the interpreter.
const QUIT_WORDS: [&str; 3] = ["quit", "exit", "q"];

/// Options for the interactive loop.
#[derive(Debug, Clone)]
pub struct PlayOptions {
    pub prompt: String,
    /// Print the prompt before each line. Off when stdin is not a terminal.
    pub show_prompt: bool,
    pub show_banner: bool,
}

impl Default for PlayOptions {
    fn default() -> Self {
        Self {
            prompt: "> ".to_string(),
            show_prompt: true,
            show_banner: true,
        }
    }
}

impl PlayOptions {
    /// Options for the resolved output format. JSON output never carries the
    /// banner or prompt, whichever way JSON was selected.
    pub fn from_config(game: &GameConfig, output: OutputFormat, interactive: bool) -> Self {
        let text = output == OutputFormat::Text;
        Self {
            prompt: game.prompt.clone(),
            show_prompt: text && interactive,
            show_banner: text && game.show_banner,
        }
    }
}

/// Summary returned when a loop ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RunSummary {
    /// Lines handed to the interpreter.
    pub commands: usize,
    /// Whether the game ended (won or lost) when the loop stopped.
    pub game_over: bool,
}

pub fn is_quit(line: &str) -> bool {
    let lower = line.trim().to_lowercase();
    QUIT_WORDS.contains(&lower.as_str())
}

/// Run the interactive loop until EOF or a quit word.
pub async fn play<R, P>(
    session: &mut GameSession,
    presenter: &mut P,
    input: R,
    options: &PlayOptions,
) -> Result<RunSummary, GameError>
where
    R: AsyncBufRead + Unpin,
    P: Presenter + ?Sized,
{
    if options.show_banner {
        presenter.append_log(BANNER)?;
    }
    presenter.present(&session.start()?)?;

    let mut summary = RunSummary::default();
    let mut lines = input.lines();
    loop {
        if options.show_prompt {
            presenter.prompt(&options.prompt)?;
        }
        let Some(line) = lines.next_line().await? else {
            debug!("Input closed after {} commands", summary.commands);
            break;
        };
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        if is_quit(line) {
            info!("Player quit after {} commands", summary.commands);
            break;
        }
        summary.commands += 1;
        let events = session.handle_command(line)?;
        presenter.present(&events)?;
    }
    summary.game_over = session.is_game_over();
    Ok(summary)
}

/// Replay a script of commands, one per line.
///
/// Blank lines and lines starting with `#` are skipped. A quit word stops
/// the script early, as it would in interactive play.
pub fn run_script<P>(
    session: &mut GameSession,
    presenter: &mut P,
    script: &str,
) -> Result<RunSummary, GameError>
where
    P: Presenter + ?Sized,
{
    presenter.present(&session.start()?)?;

    let mut summary = RunSummary::default();
    for line in script.lines().map(str::trim) {
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        if is_quit(line) {
            break;
        }
        debug!("Script command: \"{}\"", escape_input(line));
        summary.commands += 1;
        presenter.echo_command(line)?;
        let events = session.handle_command(line)?;
        presenter.present(&events)?;
    }
    summary.game_over = session.is_game_over();
    Ok(summary)
}
