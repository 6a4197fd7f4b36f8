//! Derived view state handed to the render layer.
//!
//! A [`MatrixView`] is rebuilt from scratch after every store mutation:
//! sort by priority, classify, bucket into panels. There is no incremental
//! update path.

use serde::{Deserialize, Serialize};

use crate::matrix::{compute_priority, compute_quadrant, Quadrant};
use crate::task::{Score, Task, TaskId};

/// A task plus its derived priority and quadrant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskView {
    pub id: TaskId,
    pub text: String,
    pub urgency: Score,
    pub importance: Score,
    pub completed: bool,
    pub priority: f64,
    pub quadrant: Quadrant,
}

impl TaskView {
    pub fn from_task(task: &Task) -> Self {
        Self {
            id: task.id,
            text: task.text.clone(),
            urgency: task.urgency,
            importance: task.importance,
            completed: task.completed,
            priority: compute_priority(task),
            quadrant: compute_quadrant(task),
        }
    }

    /// Score badges shown next to the task text: `U: 8`, `I: 8`, `P: 20.0`.
    pub fn badges(&self, precision: usize) -> [String; 3] {
        [
            format!("U: {}", self.urgency),
            format!("I: {}", self.importance),
            format!("P: {:.*}", precision, self.priority),
        ]
    }
}

/// Tasks belonging to one quadrant, in priority order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuadrantPanel {
    pub quadrant: Quadrant,
    pub label: String,
    pub tasks: Vec<TaskView>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatrixSummary {
    pub total: usize,
    pub completed: usize,
    /// Counts for quadrants 1 through 4.
    pub per_quadrant: [usize; 4],
}

impl MatrixSummary {
    pub fn open(&self) -> usize {
        self.total - self.completed
    }

    pub fn count(&self, quadrant: Quadrant) -> usize {
        self.per_quadrant[quadrant.index()]
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatrixView {
    /// Full listing, descending priority.
    pub tasks: Vec<TaskView>,
    /// Always four panels, quadrant 1 first.
    pub panels: Vec<QuadrantPanel>,
    pub summary: MatrixSummary,
}

impl MatrixView {
    pub fn build(tasks: &[Task]) -> Self {
        let sorted: Vec<TaskView> = sort_by_priority(tasks)
            .into_iter()
            .map(TaskView::from_task)
            .collect();

        let mut panels: Vec<QuadrantPanel> = Quadrant::ALL
            .into_iter()
            .map(|quadrant| QuadrantPanel {
                quadrant,
                label: quadrant.label().to_string(),
                tasks: Vec::new(),
            })
            .collect();

        let mut summary = MatrixSummary {
            total: sorted.len(),
            ..MatrixSummary::default()
        };

        for view in &sorted {
            if view.completed {
                summary.completed += 1;
            }
            summary.per_quadrant[view.quadrant.index()] += 1;
            panels[view.quadrant.index()].tasks.push(view.clone());
        }

        Self {
            tasks: sorted,
            panels,
            summary,
        }
    }

    pub fn panel(&self, quadrant: Quadrant) -> &QuadrantPanel {
        &self.panels[quadrant.index()]
    }

    pub fn find(&self, id: TaskId) -> Option<&TaskView> {
        self.tasks.iter().find(|t| t.id == id)
    }
}

impl Default for MatrixView {
    fn default() -> Self {
        Self::build(&[])
    }
}

/// Descending priority. The sort is stable, so equal priorities keep
/// their relative order in `tasks` (insertion order for the store).
pub fn sort_by_priority(tasks: &[Task]) -> Vec<&Task> {
    let mut sorted: Vec<&Task> = tasks.iter().collect();
    sorted.sort_by(|a, b| compute_priority(b).total_cmp(&compute_priority(a)));
    sorted
}
