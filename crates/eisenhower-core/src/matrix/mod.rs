//! Eisenhower matrix classification.
//!
//! Priority and quadrant are pure functions of a task's urgency and
//! importance. Nothing here keeps state, so a quadrant can never drift out of
//! sync with the attributes it was derived from.
//!
//! ```text
//!                 not urgent (<=5)   urgent (>5)
//! important (>5)     2 Decide          1 Do
//! not important      4 Delete          3 Delegate
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ValidationError;
use crate::task::{Score, Task};

/// Scores strictly above this count as "high". 5 itself is low.
pub const HIGH_THRESHOLD: u8 = 5;

/// Weight applied to importance in the priority score.
pub const IMPORTANCE_WEIGHT: f64 = 1.5;

/// One of the four Eisenhower buckets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum Quadrant {
    /// Urgent and important.
    Do = 1,
    /// Important, not urgent.
    Decide = 2,
    /// Urgent, not important.
    Delegate = 3,
    /// Neither.
    Delete = 4,
}

impl Quadrant {
    pub const ALL: [Quadrant; 4] = [
        Quadrant::Do,
        Quadrant::Decide,
        Quadrant::Delegate,
        Quadrant::Delete,
    ];

    pub fn number(self) -> u8 {
        self as u8
    }

    pub fn from_number(n: u8) -> Option<Self> {
        match n {
            1 => Some(Quadrant::Do),
            2 => Some(Quadrant::Decide),
            3 => Some(Quadrant::Delegate),
            4 => Some(Quadrant::Delete),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Quadrant::Do => "Do",
            Quadrant::Decide => "Decide",
            Quadrant::Delegate => "Delegate",
            Quadrant::Delete => "Delete",
        }
    }

    pub fn hint(self) -> &'static str {
        match self {
            Quadrant::Do => "Urgent & Important",
            Quadrant::Decide => "Not Urgent & Important",
            Quadrant::Delegate => "Urgent & Not Important",
            Quadrant::Delete => "Not Urgent & Not Important",
        }
    }

    /// Fixed (urgency, importance) pair a task is snapped to when it is
    /// dropped on this quadrant.
    pub fn representative(self) -> (Score, Score) {
        let (urgency, importance) = match self {
            Quadrant::Do => (8, 8),
            Quadrant::Decide => (3, 8),
            Quadrant::Delegate => (8, 3),
            Quadrant::Delete => (3, 3),
        };
        (Score::clamped(urgency), Score::clamped(importance))
    }

    pub(crate) fn index(self) -> usize {
        self.number() as usize - 1
    }
}

impl TryFrom<u8> for Quadrant {
    type Error = ValidationError;

    fn try_from(n: u8) -> Result<Self, Self::Error> {
        Quadrant::from_number(n).ok_or_else(|| ValidationError::UnknownQuadrant(n.to_string()))
    }
}

impl From<Quadrant> for u8 {
    fn from(q: Quadrant) -> Self {
        q.number()
    }
}

impl fmt::Display for Quadrant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Q{} {}", self.number(), self.label())
    }
}

impl FromStr for Quadrant {
    type Err = ValidationError;

    /// Accepts `1`..`4`, `q1`..`q4` or a label such as `delegate`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_ascii_lowercase();
        let key = key.strip_prefix('q').unwrap_or(&key);
        if let Ok(n) = key.parse::<u8>() {
            return Quadrant::from_number(n)
                .ok_or_else(|| ValidationError::UnknownQuadrant(s.to_string()));
        }
        Quadrant::ALL
            .into_iter()
            .find(|q| q.label().eq_ignore_ascii_case(key))
            .ok_or_else(|| ValidationError::UnknownQuadrant(s.to_string()))
    }
}

fn is_high(score: Score) -> bool {
    score.get() > HIGH_THRESHOLD
}

/// Quadrant for a raw (urgency, importance) pair.
pub fn classify(urgency: Score, importance: Score) -> Quadrant {
    match (is_high(urgency), is_high(importance)) {
        (true, true) => Quadrant::Do,
        (false, true) => Quadrant::Decide,
        (true, false) => Quadrant::Delegate,
        (false, false) => Quadrant::Delete,
    }
}

/// Priority score for a raw pair: `importance * 1.5 + urgency`.
pub fn priority(urgency: Score, importance: Score) -> f64 {
    f64::from(importance.get()) * IMPORTANCE_WEIGHT + f64::from(urgency.get())
}

pub fn compute_quadrant(task: &Task) -> Quadrant {
    classify(task.urgency, task.importance)
}

/// Sort key only. Ranges over `2.5..=25.0`.
pub fn compute_priority(task: &Task) -> f64 {
    priority(task.urgency, task.importance)
}
