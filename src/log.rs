//! Per-run file log.
//!
//! Each run truncates the log and writes a session separator, then one
//! timestamped line per pipeline event:
//! `YYYY-MM-DD HH:MM:SS | <stage> | <message>`.

use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use chrono::Local;

/// File name of the run log inside the shared output directory.
pub const LOG_FILE_NAME: &str = "split.log";

/// Pipeline stage a log line belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Parse,
    Deps,
    Assign,
    Emit,
}

impl Stage {
    pub fn as_str(self) -> &'static str {
        match self {
            Stage::Parse => "parse",
            Stage::Deps => "deps",
            Stage::Assign => "assign",
            Stage::Emit => "emit",
        }
    }
}

/// A logger writing to a single file, or nowhere when disabled.
pub struct RunLogger {
    /// Path to the log file, `None` when logging is disabled.
    pub path: Option<PathBuf>,
}

impl RunLogger {
    /// Create a logger writing to `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: Some(path.into()),
        }
    }

    /// A logger that drops every message.
    pub fn disabled() -> Self {
        Self { path: None }
    }

    /// Truncate the log and write the session separator.
    pub fn start_session(&self, input: &Path) -> io::Result<()> {
        let Some(path) = self.path.as_deref() else {
            return Ok(());
        };
        ensure_parent(path)?;

        let timestamp = Local::now().format("%Y-%m-%d %H:%M:%S");
        let separator = format!(
            "======================================================================\n\
             === Split of {} - Session Started at {} ===\n\
             ======================================================================\n",
            input.display(),
            timestamp
        );

        let mut file = File::create(path)?;
        file.write_all(separator.as_bytes())?;
        file.flush()
    }

    /// Append a log line.
    pub fn log(&self, stage: Stage, message: &str) -> io::Result<()> {
        let Some(path) = self.path.as_deref() else {
            return Ok(());
        };
        ensure_parent(path)?;

        let timestamp = Local::now().format("%Y-%m-%d %H:%M:%S");
        let line = format!("{} | {} | {}\n", timestamp, stage.as_str(), message);

        let mut file = OpenOptions::new().create(true).append(true).open(path)?;
        file.write_all(line.as_bytes())?;
        file.flush()
    }

    /// Log without surfacing failures; the log never aborts a run.
    pub fn note(&self, stage: Stage, message: &str) {
        let _ = self.log(stage, message);
    }
}

fn ensure_parent(path: &Path) -> io::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    Ok(())
}
