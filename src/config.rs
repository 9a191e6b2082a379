use std::path::PathBuf;

use crate::constants::sampler::{DEFAULT_MAX_PER_LABEL, DEFAULT_SEED};
use crate::heuristics::HardCriteria;

/// Top-level pipeline configuration.
#[derive(Clone, Debug)]
pub struct ChallengeConfig {
    /// Destination path for the JSONL challenge set (overwritten if present).
    pub output: PathBuf,
    /// Cap on retained examples per gold label.
    pub max_per_label: usize,
    /// RNG seed that controls both shuffle phases.
    pub seed: u64,
    /// Thresholds for the hard-example decision.
    pub criteria: HardCriteria,
}

impl ChallengeConfig {
    /// Config with defaults for everything but the output path.
    pub fn new(output: impl Into<PathBuf>) -> Self {
        Self {
            output: output.into(),
            max_per_label: DEFAULT_MAX_PER_LABEL,
            seed: DEFAULT_SEED,
            criteria: HardCriteria::default(),
        }
    }

    /// Override the per-label cap.
    pub fn with_max_per_label(mut self, max_per_label: usize) -> Self {
        self.max_per_label = max_per_label;
        self
    }

    /// Override the shuffle seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }
}
