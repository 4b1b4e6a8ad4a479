//! End-to-end split run: read, parse, analyze, assign, emit.

use std::fs;
use std::path::PathBuf;

use chrono::Local;

use crate::assign::{self, Assignment};
use crate::config::Config;
use crate::deps::DependencyGraph;
use crate::emit::{self, OutputLayout};
use crate::error::{SplitError, SplitResult};
use crate::grammar::Role;
use crate::log::{RunLogger, Stage};
use crate::task::{self, Task};

/// Milestones reported while a run progresses.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Progress {
    Parsing,
    Parsed { tasks: usize },
    AnalyzingDependencies,
    Assigning,
    WritingFiles,
    WritingGantt,
}

/// Everything a finished run produced.
#[derive(Debug)]
pub struct RunReport {
    pub tasks: Vec<Task>,
    pub graph: DependencyGraph,
    pub assignment: Assignment,
    pub layout: OutputLayout,
    /// Files written, in write order.
    pub written: Vec<PathBuf>,
}

impl RunReport {
    /// Tasks assigned to a role, in bucket order.
    pub fn tasks_for(&self, role: Role) -> Vec<&Task> {
        self.assignment.tasks_for(role, &self.tasks)
    }
}

/// Run the whole pipeline without progress reporting.
pub fn run(config: &Config) -> SplitResult<RunReport> {
    run_with_progress(config, |_| {})
}

/// Run the whole pipeline, calling `on_progress` before each stage.
///
/// The schedule chart stage is reported once the task files are on disk.
///
/// Nothing is written when the input document is missing.
pub fn run_with_progress<F>(config: &Config, mut on_progress: F) -> SplitResult<RunReport>
where
    F: FnMut(Progress),
{
    if !config.input.exists() {
        return Err(SplitError::InputNotFound(config.input.clone()));
    }
    let content =
        fs::read_to_string(&config.input).map_err(|e| SplitError::io(&config.input, e))?;

    let layout = OutputLayout::new(&config.output_dir);
    let logger = if config.log_enabled {
        RunLogger::new(layout.log_path())
    } else {
        RunLogger::disabled()
    };
    let _ = logger.start_session(&config.input);

    on_progress(Progress::Parsing);
    let tasks = task::parse_document(&content);
    logger.note(Stage::Parse, &format!("found {} task sections", tasks.len()));
    for task in tasks.iter().filter(|t| t.id.is_empty()) {
        logger.note(
            Stage::Parse,
            &format!("section {} ({}) has no task ID", task.number, task.name),
        );
    }
    on_progress(Progress::Parsed { tasks: tasks.len() });

    on_progress(Progress::AnalyzingDependencies);
    let graph = DependencyGraph::build(&tasks);
    logger.note(Stage::Deps, &format!("{} graph entries", graph.len()));
    for dep in graph.dangling() {
        logger.note(Stage::Deps, &format!("dangling dependency: {}", dep));
    }

    on_progress(Progress::Assigning);
    let assignment = assign::assign(&tasks);
    for task in &tasks {
        if let Some(assignee) = assignment.assignee(task.seq) {
            logger.note(
                Stage::Assign,
                &format!("{} -> {} ({})", task.id, assignee.role, assignee.label()),
            );
        }
    }

    on_progress(Progress::WritingFiles);
    let generated_at = config
        .timestamp
        .then(|| Local::now().format("%Y-%m-%d %H:%M:%S").to_string());
    let mut written = emit::write_task_files(
        &layout,
        &tasks,
        &assignment,
        &graph,
        generated_at.as_deref(),
    )?;

    if config.gantt {
        on_progress(Progress::WritingGantt);
        written.push(emit::write_gantt(&layout, &tasks, &assignment)?);
    }

    for path in &written {
        logger.note(Stage::Emit, &format!("wrote {}", path.display()));
    }

    Ok(RunReport {
        tasks,
        graph,
        assignment,
        layout,
        written,
    })
}
