//! Configuration loading for spec-split.
//!
//! Supports spec-split.toml, CLI flags, and environment variables.
//! Precedence (highest to lowest): CLI flags > env vars > config file > defaults.

mod cli;
mod env;
mod toml;
mod types;

pub use cli::{parse_args, CliArgs};
pub use types::{Config, ConfigError, DEFAULT_CONFIG_FILE, DEFAULT_OUTPUT_DIR};
