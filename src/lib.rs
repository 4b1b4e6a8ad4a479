//! spec-split: turn a design document into per-role task lists.
//!
//! A run reads one document, extracts `### タスク<N>` sections into tasks,
//! builds a dependency graph, assigns every task to one of three roles and
//! writes the results:
//!
//! - `<output>/<role>/tasks.md` - listing for `parent`, `child1`, `child2`
//! - `<output>/shared/dependencies.json` - dependency graph
//! - `<output>/shared/task_map.md` - role-to-task map
//! - `<output>/shared/gantt_chart.md` - schedule chart (with `--gantt`)

pub mod assign;
pub mod color;
pub mod config;
pub mod deps;
pub mod emit;
pub mod error;
pub mod grammar;
pub mod log;
pub mod pipeline;
pub mod task;

pub use error::{SplitError, SplitResult};
