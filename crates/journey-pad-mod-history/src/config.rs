/// Configuration for the history system.

/// Maximum number of snapshots kept on the undo stack before the oldest
/// entries are dropped.
const DEFAULT_MAX_HISTORY_DEPTH: usize = 50;

/// Configuration for a `HistoryStore`.
#[derive(Debug, Clone)]
pub struct HistoryConfig {
    /// Max snapshots on the undo stack. Oldest entries are evicted first
    /// once the limit is exceeded. The redo stack is not bounded; it can
    /// never grow past what was undone.
    pub max_history_depth: usize,
}

impl Default for HistoryConfig {
    fn default() -> Self {
        Self {
            max_history_depth: DEFAULT_MAX_HISTORY_DEPTH,
        }
    }
}

impl HistoryConfig {
    /// Config with a custom undo depth.
    pub fn with_depth(max_history_depth: usize) -> Self {
        Self { max_history_depth }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = HistoryConfig::default();
        assert_eq!(config.max_history_depth, 50);
    }

    #[test]
    fn test_with_depth() {
        let config = HistoryConfig::with_depth(3);
        assert_eq!(config.max_history_depth, 3);
    }
}
