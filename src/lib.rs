//! # Old Forest - a riddle-driven text adventure
//!
//! The player starts at the edge of the Old Forest, answers the riddles of a
//! troll and a water nymph to earn two keys, and uses them to reach a sinister
//! dwarf guarding a treasure. Three wrong answers to any riddle end the game.
//!
//! ## Features
//!
//! - **Fixed five-room world**: rebuilt from scratch on every new game or `restart`.
//! - **Forgiving answers**: guesses are normalized (case, punctuation, articles)
//!   before comparison, so "The Shadow!" matches "shadow".
//! - **Event output**: every turn produces a list of [`game::GameEvent`]s that a
//!   [`render::Presenter`] draws as terminal text or line-delimited JSON.
//! - **Scriptable**: a file of commands can be replayed for demos and tests.
//!
//! ## Quick Start
//!
//! ```rust
//! use oldforest::game::GameSession;
//! use oldforest::render::{EventLog, Presenter};
//!
//! let mut session = GameSession::new();
//! let mut log = EventLog::new();
//! log.present(&session.start().unwrap()).unwrap();
//!
//! for line in ["e", "answer shadow"] {
//!     let events = session.handle_command(line).unwrap();
//!     log.present(&events).unwrap();
//! }
//! assert!(session.player().has_item("Stone Key"));
//! ```
//!
//! ## Module Organization
//!
//! - [`game`] - world, characters, player and the command interpreter
//! - [`render`] - presenters that turn events into output
//! - [`console`] - interactive and scripted input loops
//! - [`config`] - TOML configuration for the front end and logging
//! - [`logutil`] - helpers for logging raw player input
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │  Input loop     │ ← stdin, script file, or test
//! └─────────────────┘
//!          │ one line
//! ┌─────────────────┐
//! │  GameSession    │ ← parse, dispatch, mutate world/player
//! └─────────────────┘
//!          │ Vec<GameEvent>
//! ┌─────────────────┐
//! │  Presenter      │ ← terminal text, JSON lines, or memory
//! └─────────────────┘
//! ```

pub mod config;
pub mod console;
pub mod game;
pub mod logutil;
pub mod render;
