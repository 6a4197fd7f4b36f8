//! In-memory task store.
//!
//! The store owns the task list and the derived [`MatrixView`]. Every
//! operation is synchronous and is followed by a full rebuild of the view.
//! Invalid input (blank text, unknown id, unknown quadrant) is ignored:
//! operations return `None` and nothing changes.
//!
//! ## Usage
//!
//! ```ignore
//! let mut store = TaskStore::new();
//! store.apply(Intent::add("Ship release", 9, 8));
//! for task in &store.view().tasks {
//!     println!("{} {}", task.quadrant, task.text);
//! }
//! ```

use tracing::{debug, trace};

use crate::events::Event;
use crate::intent::Intent;
use crate::matrix::{compute_priority, compute_quadrant, Quadrant};
use crate::task::{Clock, IdGenerator, Score, Task, TaskId};
use crate::view::MatrixView;

#[derive(Debug)]
pub struct TaskStore {
    /// Insertion order.
    tasks: Vec<Task>,
    ids: IdGenerator,
    view: MatrixView,
}

impl TaskStore {
    pub fn new() -> Self {
        Self::with_ids(IdGenerator::new())
    }

    /// Store whose task ids come from `clock`.
    pub fn with_clock(clock: impl Clock + 'static) -> Self {
        Self::with_ids(IdGenerator::with_clock(clock))
    }

    fn with_ids(ids: IdGenerator) -> Self {
        Self {
            tasks: Vec::new(),
            ids,
            view: MatrixView::default(),
        }
    }

    // ── Queries ──────────────────────────────────────────────────────

    /// Tasks in insertion order. Use [`TaskStore::view`] for display order.
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn get(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn view(&self) -> &MatrixView {
        &self.view
    }

    // ── Operations ───────────────────────────────────────────────────

    /// Dispatch an intent. Returns the resulting event, or `None` if the
    /// intent was ignored.
    pub fn apply(&mut self, intent: Intent) -> Option<Event> {
        let kind = intent.kind();
        let event = match intent {
            Intent::Add {
                text,
                urgency,
                importance,
            } => self.add(&text, Score::clamped(urgency), Score::clamped(importance)),
            Intent::Toggle { id } => self.toggle_completed(id),
            Intent::Delete { id } => self.delete(id),
            Intent::ClearCompleted => self.clear_completed(),
            Intent::Reclassify { id, quadrant } => match Quadrant::from_number(quadrant) {
                Some(q) => self.reclassify(id, q),
                None => {
                    self.refresh();
                    None
                }
            },
        };

        match &event {
            Some(event) => debug!(intent = kind, ?event, "intent applied"),
            None => trace!(intent = kind, "intent ignored"),
        }
        event
    }

    pub fn add(&mut self, text: &str, urgency: Score, importance: Score) -> Option<Event> {
        let event = if text.trim().is_empty() {
            None
        } else {
            let id = self.ids.next_id();
            Task::new(id, text, urgency, importance).map(|task| {
                let event = Event::TaskAdded {
                    id,
                    text: task.text.clone(),
                    quadrant: compute_quadrant(&task),
                    priority: compute_priority(&task),
                };
                self.tasks.push(task);
                event
            })
        };
        self.refresh();
        event
    }

    pub fn toggle_completed(&mut self, id: TaskId) -> Option<Event> {
        let event = self.get_mut(id).map(|task| {
            task.toggle();
            Event::TaskToggled {
                id,
                completed: task.completed,
            }
        });
        self.refresh();
        event
    }

    pub fn delete(&mut self, id: TaskId) -> Option<Event> {
        let event = self
            .tasks
            .iter()
            .position(|t| t.id == id)
            .map(|index| {
                self.tasks.remove(index);
                Event::TaskDeleted { id }
            });
        self.refresh();
        event
    }

    /// Drop every completed task. Calling it again right away removes
    /// nothing and returns `None`.
    pub fn clear_completed(&mut self) -> Option<Event> {
        let removed: Vec<TaskId> = self
            .tasks
            .iter()
            .filter(|t| t.completed)
            .map(|t| t.id)
            .collect();
        self.tasks.retain(|t| !t.completed);
        self.refresh();

        if removed.is_empty() {
            None
        } else {
            Some(Event::CompletedCleared { removed })
        }
    }

    /// Snap the task's urgency and importance to the quadrant's
    /// representative pair. Prior values are discarded.
    pub fn reclassify(&mut self, id: TaskId, quadrant: Quadrant) -> Option<Event> {
        let event = self.get_mut(id).map(|task| {
            let from = compute_quadrant(task);
            let (urgency, importance) = quadrant.representative();
            task.urgency = urgency;
            task.importance = importance;
            Event::TaskReclassified {
                id,
                from,
                to: compute_quadrant(task),
            }
        });
        self.refresh();
        event
    }

    fn get_mut(&mut self, id: TaskId) -> Option<&mut Task> {
        self.tasks.iter_mut().find(|t| t.id == id)
    }

    fn refresh(&mut self) {
        self.view = MatrixView::build(&self.tasks);
    }
}

impl Default for TaskStore {
    fn default() -> Self {
        Self::new()
    }
}
