use std::path::PathBuf;

use super::types::Config;

pub(super) const ENV_OUTPUT: &str = "SPEC_SPLIT_OUTPUT";
pub(super) const ENV_GANTT: &str = "SPEC_SPLIT_GANTT";
pub(super) const ENV_TIMESTAMP: &str = "SPEC_SPLIT_TIMESTAMP";
pub(super) const ENV_LOG: &str = "SPEC_SPLIT_LOG";

/// Apply overrides from the process environment.
pub(super) fn apply_env(config: &mut Config) {
    apply_env_from(config, |key| std::env::var(key).ok());
}

/// Apply overrides using `lookup` to read variables.
pub(super) fn apply_env_from<F>(config: &mut Config, lookup: F)
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(val) = lookup(ENV_OUTPUT) {
        if !val.is_empty() {
            config.output_dir = PathBuf::from(val);
        }
    }
    if let Some(val) = lookup(ENV_GANTT) {
        config.gantt = is_truthy(&val);
    }
    if let Some(val) = lookup(ENV_TIMESTAMP) {
        config.timestamp = is_truthy(&val);
    }
    if let Some(val) = lookup(ENV_LOG) {
        config.log_enabled = is_truthy(&val);
    }
}

fn is_truthy(val: &str) -> bool {
    val == "true" || val == "1"
}
