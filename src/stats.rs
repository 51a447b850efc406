//! Episode outcome tallies and run summaries

use serde::{Deserialize, Serialize};

/// Win/loss tally across completed episodes.
///
/// Purely observational: the tally plays no part in the learning updates.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct EpisodeStats {
    /// Episodes that ended in a win
    pub wins: usize,
    /// Episodes that ended in a loss
    pub losses: usize,
}

impl EpisodeStats {
    /// Create an empty tally
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one completed episode
    pub fn record(&mut self, won: bool) {
        if won {
            self.wins += 1;
        } else {
            self.losses += 1;
        }
    }

    /// Total episodes recorded
    pub fn episodes(&self) -> usize {
        self.wins + self.losses
    }

    /// Fraction of recorded episodes that were wins (0.0 when empty)
    pub fn win_rate(&self) -> f64 {
        let total = self.episodes();
        if total > 0 {
            self.wins as f64 / total as f64
        } else {
            0.0
        }
    }
}

/// Summary of one training-then-evaluation run, written by the demo binary
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunSummary {
    /// Tally over the training episodes
    pub training: EpisodeStats,
    /// Tally over the greedy evaluation episodes
    pub evaluation: EpisodeStats,
    /// Number of distinct (state, action) values materialized
    pub table_size: usize,
    /// Seed used, if the run was deterministic
    pub seed: Option<u64>,
}

impl RunSummary {
    /// Save the summary as pretty-printed JSON
    pub fn save<P: AsRef<std::path::Path>>(&self, path: P) -> crate::Result<()> {
        let file = std::fs::File::create(path)?;
        serde_json::to_writer_pretty(file, self)?;
        Ok(())
    }
}
