//! Binary entrypoint for the Old Forest CLI.
//!
//! Commands:
//! - `play [--json]` - interactive game on stdin (the default when no command is given)
//! - `script <file> [--json]` - replay a file of commands and print the transcript
//! - `init` - write a starter config file
//!
//! See the library crate docs for module-level details: `oldforest::`.
use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use log::{info, warn};
use tokio::io::BufReader;

use oldforest::config::{Config, OutputFormat};
use oldforest::console::{self, PlayOptions};
use oldforest::game::GameSession;
use oldforest::render::{JsonPresenter, Presenter, TerminalPresenter};

#[derive(Parser)]
#[command(name = "oldforest")]
#[command(about = "A small riddle-driven text adventure")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Configuration file path (can be used before or after subcommand)
    #[arg(short, long, default_value = "oldforest.toml", global = true)]
    config: String,

    /// Verbose logging (-v, -vv for more; may appear before or after subcommand)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Play interactively on stdin
    Play {
        /// Emit one JSON event per line instead of text
        #[arg(long)]
        json: bool,
    },
    /// Replay commands from a file, one per line
    Script {
        /// Script file path
        file: String,
        /// Emit one JSON event per line instead of text
        #[arg(long)]
        json: bool,
    },
    /// Write a default configuration file
    Init,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command.unwrap_or(Commands::Play { json: false }) {
        Commands::Init => {
            init_logging(&Config::default(), cli.verbose);
            Config::create_default(&cli.config).await?;
            info!("Configuration file created at {}", cli.config);
            println!("Wrote default configuration to {}", cli.config);
        }
        Commands::Play { json } => {
            let config = load_config(&cli.config, cli.verbose).await?;
            let output = config.game.output_format(json);
            // Piped input gets no prompt noise
            let options = PlayOptions::from_config(
                &config.game,
                output,
                atty::is(atty::Stream::Stdin),
            );
            let mut presenter = make_presenter(&config, output);
            let mut session = GameSession::new();
            let stdin = BufReader::new(tokio::io::stdin());
            let summary = console::play(&mut session, &mut presenter, stdin, &options).await?;
            info!(
                "Session ended after {} commands (game_over={})",
                summary.commands, summary.game_over
            );
        }
        Commands::Script { file, json } => {
            let config = load_config(&cli.config, cli.verbose).await?;
            let script = tokio::fs::read_to_string(&file)
                .await
                .with_context(|| format!("Failed to read script {}", file))?;
            let mut presenter = make_presenter(&config, config.game.output_format(json));
            let mut session = GameSession::new();
            let summary = console::run_script(&mut session, &mut presenter, &script)?;
            info!(
                "Script {} finished: {} commands (game_over={})",
                file, summary.commands, summary.game_over
            );
        }
    }

    Ok(())
}

/// Load the config, install logging from it, then report a missing file.
async fn load_config(path: &str, verbosity: u8) -> Result<Config> {
    let (config, source) = Config::load_or_default(path).await?;
    init_logging(&config, verbosity);
    if let Some(warning) = source.fallback_warning(path) {
        warn!("{}", warning);
    }
    info!("Starting Old Forest v{}", env!("CARGO_PKG_VERSION"));
    Ok(config)
}

fn make_presenter(config: &Config, output: OutputFormat) -> Box<dyn Presenter> {
    let stdout = std::io::stdout();
    match output {
        OutputFormat::Json => Box::new(JsonPresenter::new(stdout)),
        OutputFormat::Text => {
            Box::new(TerminalPresenter::new(stdout).with_images(config.game.show_images))
        }
    }
}

fn init_logging(config: &Config, verbosity: u8) {
    use std::io::Write;
    let mut builder = env_logger::Builder::new();
    // CLI verbosity overrides the configured level
    let base_level = match verbosity {
        0 => config.logging.level_filter(),
        1 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    };
    builder.filter_level(base_level);
    if let Some(ref file) = config.logging.file {
        if let Ok(f) = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(file)
        {
            let write_mutex = std::sync::Arc::new(std::sync::Mutex::new(f));
            // With -v the log also goes to stderr so it can be watched live
            let echo = verbosity > 0;
            builder.format(move |fmt, record| {
                let ts = chrono::Utc::now().format("%Y-%m-%dT%H:%M:%SZ");
                let line = format!("{} [{}] {}", ts, record.level(), record.args());
                if let Ok(mut guard) = write_mutex.lock() {
                    let _ = writeln!(guard, "{}", line);
                }
                if echo {
                    writeln!(fmt, "{}", line)
                } else {
                    Ok(())
                }
            });
        } else {
            eprintln!("Could not open log file {}; logging to stderr", file);
            builder.format(|fmt, record| {
                let ts = chrono::Utc::now().format("%Y-%m-%dT%H:%M:%SZ");
                writeln!(fmt, "{} [{}] {}", ts, record.level(), record.args())
            });
        }
    } else {
        builder.format(|fmt, record| {
            let ts = chrono::Utc::now().format("%Y-%m-%dT%H:%M:%SZ");
            writeln!(fmt, "{} [{}] {}", ts, record.level(), record.args())
        });
    }
    let _ = builder.try_init();
}
