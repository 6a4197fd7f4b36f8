//! Add-task input form state.
//!
//! Holds what the user has typed so far and produces an `Add` intent on
//! submit. After a successful submit the form clears its text and puts both
//! sliders back to their defaults.

use serde::{Deserialize, Serialize};

use crate::intent::Intent;
use crate::task::Score;

/// Whether `text` is acceptable as a task. Drives the add button's enabled state.
pub fn can_submit(text: &str) -> bool {
    !text.trim().is_empty()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputForm {
    pub text: String,
    pub urgency: i64,
    pub importance: i64,
    default_urgency: Score,
    default_importance: Score,
}

impl InputForm {
    pub fn new() -> Self {
        Self::with_defaults(Score::NEUTRAL, Score::NEUTRAL)
    }

    pub fn with_defaults(urgency: Score, importance: Score) -> Self {
        Self {
            text: String::new(),
            urgency: urgency.get().into(),
            importance: importance.get().into(),
            default_urgency: urgency,
            default_importance: importance,
        }
    }

    pub fn can_submit(&self) -> bool {
        can_submit(&self.text)
    }

    /// Take the current input as an `Add` intent and reset the form.
    ///
    /// Returns `None` and leaves the form untouched when the text is blank.
    pub fn submit(&mut self) -> Option<Intent> {
        if !self.can_submit() {
            return None;
        }
        let intent = Intent::add(self.text.trim(), self.urgency, self.importance);
        self.reset();
        Some(intent)
    }

    pub fn reset(&mut self) {
        self.text.clear();
        self.urgency = self.default_urgency.get().into();
        self.importance = self.default_importance.get().into();
    }
}

impl Default for InputForm {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_can_submit() {
        assert!(!can_submit(""));
        assert!(!can_submit("  \t "));
        assert!(can_submit(" a "));
    }

    #[test]
    fn test_submit_resets_to_defaults() {
        let mut form = InputForm::with_defaults(Score::new(4).unwrap(), Score::new(6).unwrap());
        form.text = "  Write report ".to_string();
        form.urgency = 9;
        form.importance = 2;

        let intent = form.submit().unwrap();
        assert_eq!(intent, Intent::add("Write report", 9, 2));
        assert!(form.text.is_empty());
        assert_eq!((form.urgency, form.importance), (4, 6));
        assert!(!form.can_submit());
    }

    #[test]
    fn test_submit_blank_keeps_state() {
        let mut form = InputForm::new();
        form.text = "   ".to_string();
        form.urgency = 8;
        assert!(form.submit().is_none());
        assert_eq!(form.text, "   ");
        assert_eq!(form.urgency, 8);
    }
}
