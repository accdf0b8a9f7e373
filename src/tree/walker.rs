//! TreeWalker - depth-first walk that streams one line per entry

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use log::warn;

use crate::error::TreeError;

use super::config::WalkerConfig;
use super::entry::Entry;
use super::reader::read_entries;
use super::symlink::resolve;

/// Glyph before the last child of a directory.
pub const BRANCH: &str = "╰─ ";
/// Glyph before every other child.
pub const TEE: &str = "├─ ";
/// Prefix continuation below a non-last child.
pub const PIPE: &str = "│  ";
/// Prefix continuation below the last child.
pub const SPACE: &str = "   ";

/// Connector printed between a line's prefix and its name.
pub fn connector(is_last: bool) -> &'static str {
    if is_last { BRANCH } else { TEE }
}

/// Prefix handed down to the children of an entry.
pub fn child_prefix(prefix: &str, is_last: bool) -> String {
    let extension = if is_last { SPACE } else { PIPE };
    format!("{}{}", prefix, extension)
}

/// Callback for streaming output - receives each node in display order.
pub trait TreeOutput {
    /// `prefix` is the ancestry part of the line; the formatter adds the
    /// connector from `is_last`. The root is sent once with `is_root` set.
    fn output_node(
        &mut self,
        entry: &Entry,
        prefix: &str,
        is_last: bool,
        is_root: bool,
    ) -> io::Result<()>;
}

/// What a finished walk printed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WalkSummary {
    pub dirs: usize,
    pub files: usize,
    /// Subdirectories that were printed but could not be listed
    pub skipped: usize,
}

/// Children of one directory still waiting to be printed.
struct Frame {
    /// Stored in reverse display order so `pop` yields the next entry.
    pending: Vec<Entry>,
    prefix: String,
    depth: usize,
    /// Canonical path of the directory, tracked only while dereferencing
    canonical: Option<PathBuf>,
}

impl Frame {
    fn new(mut entries: Vec<Entry>, prefix: String, depth: usize, canonical: Option<PathBuf>) -> Self {
        entries.reverse();
        Self {
            pending: entries,
            prefix,
            depth,
            canonical,
        }
    }
}

/// Tree walker that writes each entry as soon as it is reached.
///
/// Uses an explicit stack of frames instead of recursion, so memory grows with
/// depth times sibling count and deep trees do not touch the call stack.
pub struct TreeWalker {
    config: WalkerConfig,
}

impl TreeWalker {
    pub fn new(config: WalkerConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &WalkerConfig {
        &self.config
    }

    /// Walk `root` and stream every line to `output`.
    ///
    /// Fails only when the root itself cannot be stat'ed or listed (nothing is
    /// printed in that case) or when writing fails. Unreadable subdirectories
    /// are logged and counted in [`WalkSummary::skipped`].
    pub fn walk<O: TreeOutput>(&self, root: &Path, output: &mut O) -> Result<WalkSummary, TreeError> {
        let root_entry = Entry::root(root)?;
        let children = read_entries(root, &self.config)?;

        output.output_node(&root_entry, "", true, true)?;

        let mut summary = WalkSummary::default();
        if !self.config.allows_descent(0) {
            return Ok(summary);
        }

        let mut stack = vec![Frame::new(children, String::new(), 1, self.canonical(root))];

        while let Some(frame) = stack.last_mut() {
            let Some(entry) = frame.pending.pop() else {
                stack.pop();
                continue;
            };
            let is_last = frame.pending.is_empty();
            let depth = frame.depth;

            let entry = resolve(entry, &self.config);
            output.output_node(&entry, &frame.prefix, is_last, false)?;

            if !entry.is_dir() {
                summary.files += 1;
                continue;
            }
            summary.dirs += 1;

            if !self.config.allows_descent(depth) {
                continue;
            }

            let prefix = child_prefix(&frame.prefix, is_last);
            let canonical = self.canonical(entry.path());

            if let Some(path) = &canonical {
                if stack.iter().any(|f| f.canonical.as_ref() == Some(path)) {
                    warn!(
                        "Not descending into {}: symlink loop back to {}",
                        entry.path().display(),
                        path.display()
                    );
                    continue;
                }
            }

            match read_entries(entry.path(), &self.config) {
                Ok(children) => stack.push(Frame::new(children, prefix, depth + 1, canonical)),
                Err(e) => {
                    warn!("{}", e);
                    summary.skipped += 1;
                }
            }
        }

        Ok(summary)
    }

    /// Canonical path used for loop detection. Loops are only reachable by
    /// following links, so nothing is resolved unless dereferencing.
    fn canonical(&self, path: &Path) -> Option<PathBuf> {
        if self.config.dereference_links {
            fs::canonicalize(path).ok()
        } else {
            None
        }
    }
}
