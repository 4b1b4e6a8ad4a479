//! Output artifacts.
//!
//! Layout under the output root:
//! - `<role>/tasks.md` - one listing per role
//! - `shared/dependencies.json` - the dependency graph
//! - `shared/task_map.md` - role-to-task map
//! - `shared/gantt_chart.md` - schedule chart (optional)
//!
//! Every file is rewritten in full on each run.

mod gantt;
mod render;

use std::fs;
use std::path::{Path, PathBuf};

use crate::assign::Assignment;
use crate::deps::DependencyGraph;
use crate::error::{SplitError, SplitResult};
use crate::grammar::Role;
use crate::log::LOG_FILE_NAME;
use crate::task::Task;

pub use gantt::{chart_order, render as render_gantt};
pub use render::{role_listing, summary_line, task_map, NO_TASKS_NOTICE};

/// Paths of every artifact under an output root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputLayout {
    pub root: PathBuf,
}

impl OutputLayout {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn role_dir(&self, role: Role) -> PathBuf {
        self.root.join(role.as_str())
    }

    pub fn listing_path(&self, role: Role) -> PathBuf {
        self.role_dir(role).join("tasks.md")
    }

    pub fn shared_dir(&self) -> PathBuf {
        self.root.join("shared")
    }

    pub fn dependencies_path(&self) -> PathBuf {
        self.shared_dir().join("dependencies.json")
    }

    pub fn task_map_path(&self) -> PathBuf {
        self.shared_dir().join("task_map.md")
    }

    pub fn gantt_path(&self) -> PathBuf {
        self.shared_dir().join("gantt_chart.md")
    }

    pub fn log_path(&self) -> PathBuf {
        self.shared_dir().join(LOG_FILE_NAME)
    }

    /// Create the role and shared directories. Safe to repeat.
    pub fn create_dirs(&self) -> SplitResult<()> {
        for dir in Role::ALL
            .into_iter()
            .map(|role| self.role_dir(role))
            .chain(std::iter::once(self.shared_dir()))
        {
            fs::create_dir_all(&dir).map_err(|e| SplitError::io(&dir, e))?;
        }
        Ok(())
    }
}

/// Write the role listings, the dependency graph and the task map,
/// returning the paths written in order.
pub fn write_task_files(
    layout: &OutputLayout,
    tasks: &[Task],
    assignment: &Assignment,
    graph: &DependencyGraph,
    generated_at: Option<&str>,
) -> SplitResult<Vec<PathBuf>> {
    layout.create_dirs()?;
    let mut written = Vec::new();

    for role in Role::ALL {
        let role_tasks = assignment.tasks_for(role, tasks);
        let path = layout.listing_path(role);
        write_file(&path, &role_listing(role, &role_tasks, generated_at))?;
        written.push(path);
    }

    let path = layout.dependencies_path();
    write_file(&path, &graph.to_json()?)?;
    written.push(path);

    let path = layout.task_map_path();
    write_file(&path, &task_map(tasks, assignment, generated_at))?;
    written.push(path);

    Ok(written)
}

/// Write the schedule chart.
pub fn write_gantt(
    layout: &OutputLayout,
    tasks: &[Task],
    assignment: &Assignment,
) -> SplitResult<PathBuf> {
    layout.create_dirs()?;
    let path = layout.gantt_path();
    write_file(&path, &render_gantt(tasks, assignment))?;
    Ok(path)
}

fn write_file(path: &Path, content: &str) -> SplitResult<()> {
    fs::write(path, content).map_err(|e| SplitError::io(path, e))
}
