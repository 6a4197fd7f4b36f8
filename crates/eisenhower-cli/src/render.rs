//! Plain-text painting of the matrix view.

use eisenhower_core::{Config, MatrixView, TaskView};

fn task_line(task: &TaskView, precision: usize) -> String {
    let mark = if task.completed { "x" } else { " " };
    let [u, i, p] = task.badges(precision);
    format!(
        "[{mark}] {:<14} {:<40} {u:<6} {i:<6} {p}",
        task.id.to_string(),
        task.text
    )
}

/// Full task list, highest priority first.
pub fn task_list(view: &MatrixView, config: &Config) -> String {
    let mut out = format!(
        "Tasks ({} open, {} done)\n",
        view.summary.open(),
        view.summary.completed
    );
    if view.tasks.is_empty() {
        out.push_str("  (no tasks)\n");
    }
    for task in &view.tasks {
        out.push_str("  ");
        out.push_str(&task_line(task, config.display.priority_precision));
        out.push('\n');
    }
    out
}

/// The four quadrant panels.
pub fn matrix(view: &MatrixView, config: &Config) -> String {
    let mut out = String::new();
    for panel in &view.panels {
        out.push_str(&format!("== {} ({}) ==\n", panel.quadrant, panel.quadrant.hint()));
        let visible: Vec<&TaskView> = panel
            .tasks
            .iter()
            .filter(|t| config.display.show_completed || !t.completed)
            .collect();
        if visible.is_empty() {
            out.push_str("  (empty)\n");
        }
        for task in visible {
            out.push_str(&format!("  - {}\n", task.text));
        }
    }
    out
}

pub fn full(view: &MatrixView, config: &Config) -> String {
    format!("{}\n{}", task_list(view, config), matrix(view, config))
}
