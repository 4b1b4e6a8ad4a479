use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use super::types::{Config, ConfigError};

/// Shape of spec-split.toml. Every key is optional; unknown keys are ignored.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub(super) struct FileConfig {
    output: OutputSection,
    log: LogSection,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct OutputSection {
    dir: Option<PathBuf>,
    gantt: Option<bool>,
    timestamp: Option<bool>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct LogSection {
    enabled: Option<bool>,
}

pub(super) fn load_from_file(path: &Path) -> Result<FileConfig, ConfigError> {
    let content = fs::read_to_string(path).map_err(|e| ConfigError::Io {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;
    parse_toml(&content)
}

pub(super) fn parse_toml(content: &str) -> Result<FileConfig, ConfigError> {
    ::toml::from_str(content).map_err(|e| ConfigError::Parse(e.to_string()))
}

impl FileConfig {
    /// Overwrite the values this file sets.
    pub(super) fn merge_into(self, config: &mut Config) {
        if let Some(dir) = self.output.dir {
            config.output_dir = dir;
        }
        if let Some(gantt) = self.output.gantt {
            config.gantt = gantt;
        }
        if let Some(timestamp) = self.output.timestamp {
            config.timestamp = timestamp;
        }
        if let Some(enabled) = self.log.enabled {
            config.log_enabled = enabled;
        }
    }
}
