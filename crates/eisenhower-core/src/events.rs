//! Events emitted by the task store.
//!
//! Serialized as JSON objects tagged by a snake_case `type`, matching the
//! `Intent` encoding.

use serde::{Deserialize, Serialize};

use crate::matrix::Quadrant;
use crate::task::TaskId;

/// Every applied intent produces an Event.
/// Ignored intents produce none.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Event {
    TaskAdded {
        id: TaskId,
        text: String,
        quadrant: Quadrant,
        priority: f64,
    },
    TaskToggled {
        id: TaskId,
        completed: bool,
    },
    TaskDeleted {
        id: TaskId,
    },
    CompletedCleared {
        removed: Vec<TaskId>,
    },
    TaskReclassified {
        id: TaskId,
        from: Quadrant,
        to: Quadrant,
    },
}

impl Event {
    /// Task the event is about, if it concerns exactly one.
    pub fn task_id(&self) -> Option<TaskId> {
        match self {
            Event::TaskAdded { id, .. }
            | Event::TaskToggled { id, .. }
            | Event::TaskDeleted { id }
            | Event::TaskReclassified { id, .. } => Some(*id),
            Event::CompletedCleared { .. } => None,
        }
    }
}
