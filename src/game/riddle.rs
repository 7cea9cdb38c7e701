//! Riddle state carried by riddle characters.
//!
//! A riddle starts unsolved with [`DEFAULT_ATTEMPTS`] guesses. A correct guess
//! solves it for the rest of the session; each wrong guess burns one attempt
//! and the last wrong guess is fatal. Inventory, rooms and win conditions are
//! the caller's business.

use std::collections::BTreeSet;

use serde::Serialize;

use super::normalize::normalize_answer;

/// Guesses granted to every riddle at world build.
pub const DEFAULT_ATTEMPTS: u8 = 3;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RiddleState {
    pub riddle: String,
    /// Accepted answers, already normalized.
    answers: BTreeSet<String>,
    attempts: u8,
    solved: bool,
    pub reward_item: Option<String>,
}

/// Result of a single guess.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum AnswerOutcome {
    /// The guess matched; the riddle is now solved.
    Correct { reward: Option<String> },
    /// The guess missed and attempts remain.
    Wrong { attempts_left: u8 },
    /// The guess missed and no attempts remain.
    Dead,
    /// The riddle had been solved before this guess.
    Already,
}

impl RiddleState {
    pub fn new<S: AsRef<str>>(riddle: &str, answers: &[S], reward_item: Option<&str>) -> Self {
        Self {
            riddle: riddle.to_string(),
            answers: answers
                .iter()
                .map(|a| normalize_answer(a.as_ref()))
                .collect(),
            attempts: DEFAULT_ATTEMPTS,
            solved: false,
            reward_item: reward_item.map(str::to_string),
        }
    }

    pub fn attempts(&self) -> u8 {
        self.attempts
    }

    pub fn is_solved(&self) -> bool {
        self.solved
    }

    pub fn is_depleted(&self) -> bool {
        !self.solved && self.attempts == 0
    }

    /// Whether a normalized guess would be accepted, without touching state.
    pub fn accepts(&self, raw: &str) -> bool {
        self.answers.contains(&normalize_answer(raw))
    }

    /// Apply one guess.
    pub fn try_answer(&mut self, raw: &str) -> AnswerOutcome {
        if self.solved {
            return AnswerOutcome::Already;
        }
        if self.is_depleted() {
            return AnswerOutcome::Dead;
        }
        if self.accepts(raw) {
            self.solved = true;
            return AnswerOutcome::Correct {
                reward: self.reward_item.clone(),
            };
        }
        self.attempts = self.attempts.saturating_sub(1);
        if self.attempts == 0 {
            AnswerOutcome::Dead
        } else {
            AnswerOutcome::Wrong {
                attempts_left: self.attempts,
            }
        }
    }
}

impl AnswerOutcome {
    /// Short status tag, matching the serialized `status` field.
    pub fn status(&self) -> &'static str {
        match self {
            AnswerOutcome::Correct { .. } => "correct",
            AnswerOutcome::Wrong { .. } => "wrong",
            AnswerOutcome::Dead => "dead",
            AnswerOutcome::Already => "already",
        }
    }

    /// Narrative line for this outcome, addressed from the character `name`.
    pub fn message(&self, name: &str) -> String {
        match self {
            AnswerOutcome::Correct { .. } => format!("✅ Correct! {} accepts your answer.", name),
            AnswerOutcome::Wrong { attempts_left } => {
                format!("❌ Wrong! You have {} attempts left.", attempts_left)
            }
            AnswerOutcome::Dead => format!(
                "❌ Wrong! No attempts left. {} triggers your doom. GAME OVER.",
                name
            ),
            AnswerOutcome::Already => format!("You already answered {}.", name),
        }
    }
}
