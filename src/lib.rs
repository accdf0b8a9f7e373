//! lds - a colorful directory tree listing

pub mod error;
pub mod logging;
pub mod output;
pub mod tree;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use error::TreeError;
pub use output::{OutputConfig, StreamingFormatter, StyleTable};
pub use tree::{Entry, EntryKind, TreeOutput, TreeWalker, WalkSummary, WalkerConfig};
