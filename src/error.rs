use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, MeshError>;

/// Everything that can stop a conversion run.
#[derive(Debug, Error)]
pub enum MeshError {
    /// A `v`, `vt` or `f` record that cannot be read.
    #[error("line {line}: malformed `{tag}` record: {reason}")]
    Malformed {
        line: usize,
        tag: String,
        reason: String,
    },

    /// Inputs and outputs given on the command line cannot be paired.
    #[error("invalid output: {0}")]
    Config(String),

    /// Reading an input or writing an output failed.
    #[error("{}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl MeshError {
    pub(crate) fn malformed(line: usize, tag: &str, reason: impl Into<String>) -> Self {
        Self::Malformed {
            line,
            tag: tag.to_string(),
            reason: reason.into(),
        }
    }

    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
