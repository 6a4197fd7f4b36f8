//! # Eisenhower Core Library
//!
//! This library provides the core logic for an Eisenhower-matrix task
//! manager. Any render surface (the bundled CLI, a GUI, a web view) drives
//! it through the same intent interface and paints the derived view.
//!
//! ## Architecture
//!
//! - **Classifier**: pure functions mapping urgency/importance to a quadrant
//!   and a priority score
//! - **Task Store**: owned, in-memory task list mutated only via intents;
//!   rebuilds the derived view after every mutation
//! - **View**: priority-sorted listing plus the four quadrant panels
//! - **Storage**: TOML-based configuration (tasks are never persisted)
//!
//! ## Key Components
//!
//! - [`TaskStore`]: Task list and intent dispatch
//! - [`Intent`]: User actions addressed to the store
//! - [`MatrixView`]: Derived state handed to the render layer
//! - [`Config`]: Application configuration management

pub mod error;
pub mod events;
pub mod form;
pub mod intent;
pub mod matrix;
pub mod replay;
pub mod storage;
pub mod store;
pub mod task;
pub mod view;

pub use error::{ConfigError, CoreError, ValidationError};
pub use events::Event;
pub use form::{can_submit, InputForm};
pub use intent::Intent;
pub use matrix::{classify, compute_priority, compute_quadrant, priority, Quadrant};
pub use replay::{replay, ReplayReport};
pub use storage::Config;
pub use store::TaskStore;
pub use task::{Clock, FixedClock, IdGenerator, Score, SystemClock, Task, TaskId};
pub use view::{sort_by_priority, MatrixSummary, MatrixView, QuadrantPanel, TaskView};
