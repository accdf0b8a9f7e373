//! How symlinks are displayed and followed

use std::fs::{self, Metadata};
use std::io;
use std::path::{Path, PathBuf};

use log::debug;

use super::config::WalkerConfig;
use super::entry::Entry;

/// Apply the symlink policy to one entry.
///
/// - `dereference_links`: the entry becomes its final target (name, path and
///   metadata). A link that cannot be resolved is returned untouched.
/// - otherwise, unless `no_symlink`: the immediate target is attached for
///   display and the link itself is kept, so it is never descended into.
/// - otherwise the entry is returned as is.
pub fn resolve(entry: Entry, config: &WalkerConfig) -> Entry {
    if !entry.is_symlink() {
        return entry;
    }

    if config.dereference_links {
        match dereference(entry.path()) {
            Ok((target, metadata)) => Entry::dereferenced(target, metadata),
            Err(e) => {
                debug!("Cannot resolve symlink {}: {}", entry.path().display(), e);
                entry
            }
        }
    } else if !config.no_symlink {
        match fs::read_link(entry.path()) {
            Ok(target) => entry.with_link_target(target),
            Err(e) => {
                debug!("Cannot read symlink {}: {}", entry.path().display(), e);
                entry
            }
        }
    } else {
        entry
    }
}

/// Follow a chain of links to the final target and stat it.
fn dereference(path: &Path) -> io::Result<(PathBuf, Metadata)> {
    let target = fs::canonicalize(path)?;
    let metadata = fs::metadata(&target)?;
    Ok((target, metadata))
}
