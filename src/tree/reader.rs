//! Listing, filtering and ordering the children of one directory

use std::cmp::Ordering;
use std::fs;
use std::path::Path;

use log::warn;

use crate::error::TreeError;

use super::config::WalkerConfig;
use super::entry::Entry;

/// Read the immediate children of `path`, drop hidden names unless
/// `show_hidden` is set, and sort them by name.
///
/// Failing to open the directory is an error for the caller. A child whose
/// metadata cannot be read is logged and left out.
pub fn read_entries(path: &Path, config: &WalkerConfig) -> Result<Vec<Entry>, TreeError> {
    let dir = fs::read_dir(path).map_err(|e| TreeError::read_dir(path, e))?;

    let mut entries = Vec::new();
    for dir_entry in dir {
        let dir_entry = match dir_entry {
            Ok(e) => e,
            Err(e) => {
                warn!("Error reading entry in {}: {}", path.display(), e);
                continue;
            }
        };

        if !config.show_hidden && is_hidden(&dir_entry.file_name().to_string_lossy()) {
            continue;
        }

        match Entry::from_dir_entry(&dir_entry) {
            Ok(entry) => entries.push(entry),
            Err(e) => warn!("Cannot stat {}: {}", dir_entry.path().display(), e),
        }
    }

    sort_by_name(&mut entries, config.reverse, |e| e.name());
    Ok(entries)
}

pub fn is_hidden(name: &str) -> bool {
    name.starts_with('.')
}

/// Case-insensitive name order. Names equal after case folding fall back to
/// byte order so the result never depends on the order entries were read in.
pub fn compare_names(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}

/// Sort `items` by the name `key` returns, descending when `reverse` is set.
pub fn sort_by_name<T, F>(items: &mut [T], reverse: bool, key: F)
where
    F: Fn(&T) -> &str,
{
    items.sort_by(|a, b| {
        let ord = compare_names(key(a), key(b));
        if reverse { ord.reverse() } else { ord }
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTree;

    fn names(entries: &[Entry]) -> Vec<&str> {
        entries.iter().map(|e| e.name()).collect()
    }

    fn sorted(input: &[&str], reverse: bool) -> Vec<String> {
        let mut items: Vec<String> = input.iter().map(|s| s.to_string()).collect();
        sort_by_name(&mut items, reverse, |s| s.as_str());
        items
    }

    #[test]
    fn test_hidden_entries_excluded_by_default() {
        let tree = TestTree::sample();
        let entries = read_entries(tree.path(), &WalkerConfig::default()).unwrap();
        assert_eq!(names(&entries), vec!["a.txt", "sub"]);
        assert!(entries.iter().all(|e| !e.name().starts_with('.')));
    }

    #[test]
    fn test_hidden_entries_included_with_show_hidden() {
        let tree = TestTree::sample();
        let config = WalkerConfig {
            show_hidden: true,
            ..Default::default()
        };
        let entries = read_entries(tree.path(), &config).unwrap();
        assert_eq!(names(&entries), vec![".hidden", "a.txt", "sub"]);
    }

    #[test]
    fn test_reverse_listing() {
        let tree = TestTree::sample();
        let config = WalkerConfig {
            reverse: true,
            ..Default::default()
        };
        let entries = read_entries(tree.path(), &config).unwrap();
        assert_eq!(names(&entries), vec!["sub", "a.txt"]);
    }

    #[test]
    fn test_missing_directory_is_an_error() {
        let tree = TestTree::new();
        let result = read_entries(&tree.path().join("missing"), &WalkerConfig::default());
        assert!(matches!(result, Err(TreeError::ReadDir { .. })));
    }

    #[test]
    fn test_file_is_not_a_directory() {
        let tree = TestTree::new();
        let file = tree.add_file("plain.txt", "x");
        let result = read_entries(&file, &WalkerConfig::default());
        assert!(matches!(result, Err(TreeError::ReadDir { .. })));
    }

    #[test]
    fn test_case_insensitive_order() {
        assert_eq!(
            sorted(&["banana", "Apple", "cherry", "apricot"], false),
            vec!["Apple", "apricot", "banana", "cherry"]
        );
    }

    #[test]
    fn test_case_ties_are_deterministic() {
        let forward = sorted(&["readme", "README", "Readme"], false);
        let shuffled = sorted(&["Readme", "readme", "README"], false);
        assert_eq!(forward, shuffled);
        assert_eq!(forward, vec!["README", "Readme", "readme"]);
    }

    #[test]
    fn test_sort_is_idempotent() {
        let once = sorted(&["b", "C", "a", ".x", "B"], false);
        let refs: Vec<&str> = once.iter().map(|s| s.as_str()).collect();
        let twice = sorted(&refs, false);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_reverse_matches_reversed_sort() {
        let input = ["zeta", "Alpha", "beta", "alpha", "Gamma", "10", "2"];
        let mut forward = sorted(&input, false);
        forward.reverse();
        assert_eq!(forward, sorted(&input, true));
    }

    #[test]
    fn test_is_hidden() {
        assert!(is_hidden(".git"));
        assert!(is_hidden("."));
        assert!(!is_hidden("src"));
        assert!(!is_hidden("file.txt"));
    }
}
