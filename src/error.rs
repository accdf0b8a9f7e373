//! Error types for tree listing

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while listing a tree.
///
/// `Stat` and `ReadDir` are recoverable: the caller logs them and moves on to
/// the next root or sibling. `Output` means stdout is gone and the run stops.
#[derive(Debug, Error)]
pub enum TreeError {
    #[error("cannot access {}: {source}", path.display())]
    Stat {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("cannot read directory {}: {source}", path.display())]
    ReadDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("error writing output: {0}")]
    Output(#[from] io::Error),
}

impl TreeError {
    pub fn stat(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Stat {
            path: path.into(),
            source,
        }
    }

    pub fn read_dir(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::ReadDir {
            path: path.into(),
            source,
        }
    }

    /// True when the failure is in writing output rather than in the filesystem.
    pub fn is_fatal(&self) -> bool {
        matches!(self, Self::Output(_))
    }
}
