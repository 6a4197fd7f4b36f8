//! Creation-time task ids.

use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ValidationError;

/// Task identifier: milliseconds since the Unix epoch at creation time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskId(pub u64);

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for TaskId {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<u64>()
            .map(TaskId)
            .map_err(|_| ValidationError::InvalidTaskId(s.to_string()))
    }
}

/// Source of wall-clock milliseconds for id generation.
pub trait Clock: Send {
    fn now_ms(&self) -> u64;
}

/// Wall clock backed by `chrono::Utc`.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_ms(&self) -> u64 {
        Utc::now().timestamp_millis().max(0) as u64
    }
}

/// Clock frozen at a given instant. Useful for deterministic tests.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub u64);

impl Clock for FixedClock {
    fn now_ms(&self) -> u64 {
        self.0
    }
}

/// Issues strictly increasing ids derived from the clock.
///
/// Two adds within the same millisecond (or a clock stepping backwards)
/// get `last + 1` instead of a duplicate. The counter saturates at
/// `u64::MAX` rather than wrapping.
pub struct IdGenerator {
    clock: Box<dyn Clock>,
    last: Option<u64>,
}

impl IdGenerator {
    pub fn new() -> Self {
        Self::with_clock(SystemClock)
    }

    pub fn with_clock(clock: impl Clock + 'static) -> Self {
        Self {
            clock: Box::new(clock),
            last: None,
        }
    }

    pub fn next_id(&mut self) -> TaskId {
        let now = self.clock.now_ms();
        let id = match self.last {
            Some(last) if now <= last => last.saturating_add(1),
            _ => now,
        };
        self.last = Some(id);
        TaskId(id)
    }
}

impl Default for IdGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for IdGenerator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IdGenerator").field("last", &self.last).finish()
    }
}
