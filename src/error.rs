//! Crate-wide error type.
//!
//! One variant per failure category, each carrying enough context (a path,
//! a reason) to produce a useful message on its own — callers should not
//! need to re-wrap these with `.context(...)` to make them readable.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PartitionError {
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{path} has no header line")]
    EmptyHeader { path: PathBuf },

    #[error("partition count must be greater than zero")]
    ZeroPartitions,

    /// Catch-all for failures that don't need their own variant, such as
    /// a rayon thread pool refusing to build for a given `--workers` count.
    #[error("{0}")]
    Internal(String),
}

pub type Result<T> = std::result::Result<T, PartitionError>;

impl PartitionError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        PartitionError::Io {
            path: path.into(),
            source,
        }
    }
}
