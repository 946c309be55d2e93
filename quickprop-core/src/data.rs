//! Core data types for quickprop property-based testing.

use std::fmt;

/// Number of runs used when a configuration does not say otherwise.
pub const DEFAULT_RUN_COUNT: usize = 100;

/// Configuration for property testing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Maximum number of predicate evaluations per check.
    pub run_count: usize,

    /// Seed to replay a previous run with. A fresh seed is drawn when `None`.
    pub seed: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            run_count: DEFAULT_RUN_COUNT,
            seed: None,
        }
    }
}

impl Config {
    /// Create a new config with the given number of runs.
    pub fn with_runs(mut self, runs: usize) -> Self {
        self.run_count = runs;
        self
    }

    /// Create a new config pinned to the given seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}

/// Aggregate pass/fail result of running a property.
///
/// Only the fact of failure is kept; the failing value is not retained.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Verdict {
    /// Whether some generated value falsified the predicate.
    pub failed: bool,

    /// Number of predicate evaluations performed.
    pub tests_run: usize,
}

impl Verdict {
    pub fn passed(&self) -> bool {
        !self.failed
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.failed {
            write!(f, "✗ property failed after {} tests.", self.tests_run)
        } else {
            write!(f, "✓ property passed {} tests.", self.tests_run)
        }
    }
}
