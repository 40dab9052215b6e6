//! Per-move search statistics for diagnostics and tuning.

use serde::{Deserialize, Serialize};

/// Statistics collected while choosing one move.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchStats {
    /// Seed the move's RNG was built from. Replaying with this seed
    /// reproduces the move.
    pub seed: u64,

    /// The random-move override fired and no search ran.
    pub random_bypass: bool,

    /// Boards visited by the search, root included.
    pub nodes: u32,

    /// Alpha-beta cutoffs encountered (`beta <= alpha`).
    pub cutoffs: u32,

    /// Cutoffs that were ignored by the prune-skip policy.
    pub skipped_prunes: u32,

    /// Child values scaled by injected noise.
    pub noise_injections: u32,

    /// Time spent choosing the move (microseconds).
    pub time_us: u64,
}

impl SearchStats {
    /// Create new empty statistics.
    pub fn new() -> Self {
        Self::default()
    }

    /// Cutoffs that actually pruned.
    #[must_use]
    pub fn prunes(&self) -> u32 {
        self.cutoffs.saturating_sub(self.skipped_prunes)
    }

    /// Calculate nodes per second.
    #[must_use]
    pub fn nodes_per_second(&self) -> f64 {
        if self.time_us == 0 {
            0.0
        } else {
            self.nodes as f64 / (self.time_us as f64 / 1_000_000.0)
        }
    }
}
