//! Directory entries as read from the filesystem

use std::fs::{self, Metadata};
use std::io;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

use crate::error::TreeError;

/// Display category of an entry, in the priority order used for styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    Dir,
    Hidden,
    Symlink,
    File,
}

/// One filesystem entry with its `lstat` metadata.
///
/// Entries are read fresh for every walk. After dereferencing, `path` and
/// `metadata` describe the link's target instead of the link.
#[derive(Debug, Clone)]
pub struct Entry {
    name: String,
    path: PathBuf,
    metadata: Metadata,
    link_target: Option<PathBuf>,
}

impl Entry {
    /// Build an entry from a directory listing without following symlinks.
    pub fn from_dir_entry(entry: &fs::DirEntry) -> io::Result<Self> {
        let metadata = entry.metadata()?;
        Ok(Self {
            name: entry.file_name().to_string_lossy().to_string(),
            path: entry.path(),
            metadata,
            link_target: None,
        })
    }

    /// Build the entry for a tree root.
    pub fn root(path: &Path) -> Result<Self, TreeError> {
        let metadata = fs::symlink_metadata(path).map_err(|e| TreeError::stat(path, e))?;
        Ok(Self {
            name: root_name(path),
            path: path.to_path_buf(),
            metadata,
            link_target: None,
        })
    }

    /// An entry standing for the resolved target of a symlink.
    pub(crate) fn dereferenced(target: PathBuf, metadata: Metadata) -> Self {
        Self {
            name: root_name(&target),
            path: target,
            metadata,
            link_target: None,
        }
    }

    pub(crate) fn with_link_target(mut self, target: PathBuf) -> Self {
        self.link_target = Some(target);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn metadata(&self) -> &Metadata {
        &self.metadata
    }

    /// Immediate target of the symlink, when it is shown next to the name.
    pub fn link_target(&self) -> Option<&Path> {
        self.link_target.as_deref()
    }

    pub fn is_dir(&self) -> bool {
        self.metadata.is_dir()
    }

    pub fn is_symlink(&self) -> bool {
        self.metadata.file_type().is_symlink()
    }

    pub fn is_hidden(&self) -> bool {
        self.name.starts_with('.')
    }

    pub fn size(&self) -> u64 {
        self.metadata.len()
    }

    pub fn modified(&self) -> Option<SystemTime> {
        self.metadata.modified().ok()
    }

    pub fn kind(&self) -> EntryKind {
        if self.is_dir() {
            EntryKind::Dir
        } else if self.is_hidden() {
            EntryKind::Hidden
        } else if self.is_symlink() {
            EntryKind::Symlink
        } else {
            EntryKind::File
        }
    }

    /// Name as printed, with ` -> target` appended for annotated symlinks.
    pub fn display_name(&self) -> String {
        match &self.link_target {
            Some(target) => format!("{} -> {}", self.name, target.display()),
            None => self.name.clone(),
        }
    }
}

/// Final component of `path`, or the whole path when it has none (`.`, `..`, `/`).
pub fn root_name(path: &Path) -> String {
    path.file_name()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_else(|| path.display().to_string())
}
