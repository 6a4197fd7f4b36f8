//! Applying a recorded stream of intents.
//!
//! The stream is JSON lines, one [`Intent`] per line. Blank lines and lines
//! starting with `#` are skipped. Malformed lines are skipped with a warning,
//! or abort the replay in strict mode.

use std::io::BufRead;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::{CoreError, Result};
use crate::events::Event;
use crate::intent::Intent;
use crate::store::TaskStore;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ReplayReport {
    /// Intents that changed the store.
    pub applied: usize,
    /// Well-formed intents the store ignored.
    pub ignored: usize,
    /// Malformed lines.
    pub skipped: usize,
    pub events: Vec<Event>,
}

pub fn replay<R: BufRead>(store: &mut TaskStore, reader: R, strict: bool) -> Result<ReplayReport> {
    let mut report = ReplayReport::default();

    for (index, line) in reader.lines().enumerate() {
        let line_no = index + 1;
        let line = line?;
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        let intent: Intent = match serde_json::from_str(trimmed) {
            Ok(intent) => intent,
            Err(source) if strict => {
                return Err(CoreError::Replay {
                    line: line_no,
                    source,
                })
            }
            Err(e) => {
                warn!(line = line_no, error = %e, "skipping malformed intent");
                report.skipped += 1;
                continue;
            }
        };

        match store.apply(intent) {
            Some(event) => {
                report.applied += 1;
                report.events.push(event);
            }
            None => report.ignored += 1,
        }
    }

    debug!(
        applied = report.applied,
        ignored = report.ignored,
        skipped = report.skipped,
        "replay finished"
    );
    Ok(report)
}
