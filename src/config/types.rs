use std::path::{Path, PathBuf};

use super::cli::CliArgs;
use super::{env, toml};

/// Output directory used when none is configured.
pub const DEFAULT_OUTPUT_DIR: &str = "claude-tasks";

/// Config file picked up from the working directory when present.
pub const DEFAULT_CONFIG_FILE: &str = "spec-split.toml";

/// Run configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Path to the design document.
    pub input: PathBuf,
    /// Root of the generated output.
    pub output_dir: PathBuf,
    /// Also generate the schedule chart.
    pub gantt: bool,
    /// Write a generation timestamp into listings and the task map.
    pub timestamp: bool,
    /// Write the run log under the shared output directory.
    pub log_enabled: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input: PathBuf::new(),
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            gantt: false,
            timestamp: false,
            log_enabled: true,
        }
    }
}

impl Config {
    /// Load configuration from all sources with proper precedence.
    ///
    /// Precedence: CLI args > env vars > config file > defaults.
    pub fn load(cli_args: &CliArgs) -> Result<Self, ConfigError> {
        Self::load_in(cli_args, Path::new("."))
    }

    /// Like [`Config::load`], resolving the default config file against `dir`.
    pub fn load_in(cli_args: &CliArgs, dir: &Path) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(ref path) = cli_args.config {
            toml::load_from_file(path)?.merge_into(&mut config);
        } else {
            let default_path = dir.join(DEFAULT_CONFIG_FILE);
            if default_path.exists() {
                toml::load_from_file(&default_path)?.merge_into(&mut config);
            }
        }

        env::apply_env(&mut config);
        config.apply_cli(cli_args);

        Ok(config)
    }

    /// Parse TOML content over the defaults.
    #[cfg(test)]
    pub(super) fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let mut config = Self::default();
        toml::parse_toml(content)?.merge_into(&mut config);
        Ok(config)
    }

    /// Apply environment overrides through a custom lookup.
    #[cfg(test)]
    pub(super) fn apply_env_from<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        env::apply_env_from(self, lookup);
    }

    /// Apply CLI arguments.
    pub(super) fn apply_cli(&mut self, args: &CliArgs) {
        self.input = args.input.clone();
        if let Some(ref dir) = args.output {
            self.output_dir = dir.clone();
        }
        if args.gantt {
            self.gantt = true;
        }
        if args.timestamp {
            self.timestamp = true;
        }
        if args.no_log {
            self.log_enabled = false;
        }
    }

    /// Default spec-split.toml content.
    #[cfg(test)]
    pub(super) fn default_toml() -> String {
        format!(
            r#"# spec-split configuration

[output]
dir = "{}"
gantt = false
timestamp = false

[log]
enabled = true
"#,
            DEFAULT_OUTPUT_DIR
        )
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// I/O error reading config file.
    #[error("config I/O error: {}: {message}", .path.display())]
    Io { path: PathBuf, message: String },
    /// Parse error in config file.
    #[error("config parse error: {0}")]
    Parse(String),
}
