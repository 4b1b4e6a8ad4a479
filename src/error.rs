use std::path::PathBuf;

use crate::config::ConfigError;

/// Errors that stop a split run.
///
/// Parsing and assignment never fail; only file access, configuration and
/// serialization can.
#[derive(Debug, thiserror::Error)]
pub enum SplitError {
    #[error("design document not found: {}", .0.display())]
    InputNotFound(PathBuf),

    #[error("{}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("failed to serialize dependency map: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl SplitError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        SplitError::Io {
            path: path.into(),
            source,
        }
    }
}

pub type SplitResult<T> = Result<T, SplitError>;
