//! Colors for each kind of entry and each long-format column

use termcolor::{Color, ColorSpec};

use crate::tree::EntryKind;

fn rgb(r: u8, g: u8, b: u8) -> ColorSpec {
    let mut spec = ColorSpec::new();
    spec.set_fg(Some(Color::Rgb(r, g, b)));
    spec
}

/// Immutable style table, built once and handed to the formatter.
#[derive(Debug, Clone)]
pub struct StyleTable {
    pub dir: ColorSpec,
    pub file: ColorSpec,
    pub hidden: ColorSpec,
    pub symlink: ColorSpec,
    pub permissions: ColorSpec,
    pub size: ColorSpec,
    pub modified: ColorSpec,
}

impl StyleTable {
    pub fn new() -> Self {
        Self {
            dir: rgb(0x4e, 0x9a, 0x06),
            file: rgb(0x72, 0x9f, 0xcf),
            hidden: rgb(0x88, 0x8a, 0x85),
            symlink: rgb(0xad, 0x7f, 0xa8),
            permissions: rgb(0xf5, 0x79, 0x00),
            size: rgb(0x34, 0x65, 0xa4),
            modified: rgb(0xcc, 0x00, 0x00),
        }
    }

    pub fn for_kind(&self, kind: EntryKind) -> &ColorSpec {
        match kind {
            EntryKind::Dir => &self.dir,
            EntryKind::Hidden => &self.hidden,
            EntryKind::Symlink => &self.symlink,
            EntryKind::File => &self.file,
        }
    }
}

impl Default for StyleTable {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_each_kind_has_distinct_color() {
        let styles = StyleTable::new();
        let kinds = [
            EntryKind::Dir,
            EntryKind::Hidden,
            EntryKind::Symlink,
            EntryKind::File,
        ];
        for (i, a) in kinds.iter().enumerate() {
            for b in &kinds[i + 1..] {
                assert_ne!(styles.for_kind(*a), styles.for_kind(*b), "{:?} vs {:?}", a, b);
            }
        }
    }

    #[test]
    fn test_directory_is_green() {
        let styles = StyleTable::default();
        assert_eq!(styles.for_kind(EntryKind::Dir).fg(), Some(&Color::Rgb(78, 154, 6)));
    }
}
