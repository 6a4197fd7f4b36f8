//! Task model: ids, bounded scores and the task record.
//!
//! A task carries only its raw attributes. Quadrant and priority are never
//! stored here; see [`crate::matrix`] for the derivations.

mod id;

pub use id::{Clock, FixedClock, IdGenerator, SystemClock, TaskId};

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ValidationError;

/// Urgency or importance rating, always within `1..=10`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "u8")]
pub struct Score(u8);

impl Score {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 10;

    /// Value the input form resets to after each add.
    pub const NEUTRAL: Score = Score(5);

    /// Strict constructor. Rejects anything outside `1..=10`.
    pub fn new(value: i64) -> Result<Self, ValidationError> {
        if (Self::MIN as i64..=Self::MAX as i64).contains(&value) {
            Ok(Score(value as u8))
        } else {
            Err(ValidationError::ScoreOutOfRange {
                value,
                min: Self::MIN,
                max: Self::MAX,
            })
        }
    }

    /// Saturating constructor, behaves like a 1..=10 slider.
    pub fn clamped(value: i64) -> Self {
        Score(value.clamp(Self::MIN as i64, Self::MAX as i64) as u8)
    }

    pub fn get(self) -> u8 {
        self.0
    }
}

impl Default for Score {
    fn default() -> Self {
        Score::NEUTRAL
    }
}

impl TryFrom<i64> for Score {
    type Error = ValidationError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Score::new(value)
    }
}

impl From<Score> for u8 {
    fn from(score: Score) -> Self {
        score.0
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Score {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value: i64 = s.trim().parse().map_err(|_| ValidationError::InvalidValue {
            field: "score".to_string(),
            message: format!("'{s}' is not an integer"),
        })?;
        Score::new(value)
    }
}

/// A single todo item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub id: TaskId,
    /// Trimmed, never empty.
    pub text: String,
    pub urgency: Score,
    pub importance: Score,
    #[serde(default)]
    pub completed: bool,
}

impl Task {
    /// Build a task from user input.
    ///
    /// Returns `None` when the trimmed text is empty.
    pub fn new(id: TaskId, text: &str, urgency: Score, importance: Score) -> Option<Self> {
        let text = text.trim();
        if text.is_empty() {
            return None;
        }
        Some(Self {
            id,
            text: text.to_string(),
            urgency,
            importance,
            completed: false,
        })
    }

    pub fn toggle(&mut self) {
        self.completed = !self.completed;
    }
}
