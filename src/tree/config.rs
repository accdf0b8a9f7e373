//! Configuration types for tree walkers

/// Configuration for tree walking behavior.
#[derive(Debug, Clone, Default)]
pub struct WalkerConfig {
    /// Include entries whose names start with `.`
    pub show_hidden: bool,
    /// Sort siblings in descending name order
    pub reverse: bool,
    /// Replace symlinks with their final target
    pub dereference_links: bool,
    /// Never show or follow symlink targets
    pub no_symlink: bool,
    /// Deepest level printed below the root (root is depth 0).
    /// `None` means unlimited.
    pub max_depth: Option<usize>,
}

impl WalkerConfig {
    /// Whether a directory sitting at `depth` may be listed.
    pub fn allows_descent(&self, depth: usize) -> bool {
        self.max_depth.is_none_or(|max| depth < max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unlimited_depth_by_default() {
        let config = WalkerConfig::default();
        assert!(config.allows_descent(0));
        assert!(config.allows_descent(10_000));
    }

    #[test]
    fn test_max_depth_stops_at_limit() {
        let config = WalkerConfig {
            max_depth: Some(2),
            ..Default::default()
        };
        assert!(config.allows_descent(0));
        assert!(config.allows_descent(1));
        assert!(!config.allows_descent(2));
    }

    #[test]
    fn test_max_depth_zero_lists_nothing() {
        let config = WalkerConfig {
            max_depth: Some(0),
            ..Default::default()
        };
        assert!(!config.allows_descent(0));
    }
}
