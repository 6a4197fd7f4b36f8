//! User intents addressed to the task store.
//!
//! A render surface translates its input events (clicks, key presses,
//! drops) into these values and hands them to [`crate::TaskStore::apply`].

use serde::{Deserialize, Serialize};

use crate::task::TaskId;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Intent {
    /// Create a task. Scores are raw input and get clamped into `1..=10`.
    Add {
        text: String,
        urgency: i64,
        importance: i64,
    },
    Toggle {
        id: TaskId,
    },
    Delete {
        id: TaskId,
    },
    ClearCompleted,
    /// Drop a task onto a quadrant panel. Numbers outside 1-4 are ignored.
    Reclassify {
        id: TaskId,
        quadrant: u8,
    },
}

impl Intent {
    pub fn add(text: impl Into<String>, urgency: i64, importance: i64) -> Self {
        Intent::Add {
            text: text.into(),
            urgency,
            importance,
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Intent::Add { .. } => "add",
            Intent::Toggle { .. } => "toggle",
            Intent::Delete { .. } => "delete",
            Intent::ClearCompleted => "clear_completed",
            Intent::Reclassify { .. } => "reclassify",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_intent_json_shape() {
        let intent: Intent =
            serde_json::from_str(r#"{"type":"reclassify","id":17,"quadrant":2}"#).unwrap();
        assert_eq!(
            intent,
            Intent::Reclassify {
                id: TaskId(17),
                quadrant: 2
            }
        );

        let intent: Intent = serde_json::from_str(r#"{"type":"clear_completed"}"#).unwrap();
        assert_eq!(intent, Intent::ClearCompleted);
    }

    #[test]
    fn test_add_accepts_out_of_range_scores() {
        let intent: Intent =
            serde_json::from_str(r#"{"type":"add","text":"x","urgency":42,"importance":-1}"#)
                .unwrap();
        assert_eq!(intent, Intent::add("x", 42, -1));
        assert_eq!(intent.kind(), "add");
    }
}
