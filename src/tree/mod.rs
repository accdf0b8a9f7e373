//! Directory tree walking logic
//!
//! - `reader`: lists, filters and sorts one directory
//! - `symlink`: decides how each symlink is shown or followed
//! - `walker`: `TreeWalker`, which streams the tree to a `TreeOutput`

mod config;
mod entry;
mod reader;
mod symlink;
mod walker;

pub use config::WalkerConfig;
pub use entry::{Entry, EntryKind, root_name};
pub use reader::{compare_names, is_hidden, read_entries, sort_by_name};
pub use symlink::resolve;
pub use walker::{
    BRANCH, PIPE, SPACE, TEE, TreeOutput, TreeWalker, WalkSummary, child_prefix, connector,
};
