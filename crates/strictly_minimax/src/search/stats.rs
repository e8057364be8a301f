//! Per-search counters.

use serde::{Deserialize, Serialize};

/// Counters collected while one search runs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchStats {
    /// Positions visited, root included.
    pub nodes: u64,
    /// Terminal positions scored with `utility`.
    pub leaves: u64,
    /// Times the remaining siblings of a node were skipped.
    pub cutoffs: u64,
}

impl std::fmt::Display for SearchStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} nodes, {} leaves, {} cutoffs",
            self.nodes, self.leaves, self.cutoffs
        )
    }
}
