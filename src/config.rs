/// How the assignment and writeback loops are executed.
///
/// Both modes run the exact same per-pixel computation and produce
/// bit-identical output for equal inputs and seeds; only the scheduling
/// differs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExecutionMode {
    /// Single-threaded scan over the pixel range, in index order.
    #[default]
    Sequential,
    /// The same scan partitioned across rayon's thread pool.
    Parallel,
}

/// Configuration for one clustering call.
#[derive(Debug, Clone)]
pub struct ClusterConfig {
    /// Number of clusters (palette size of the segmented output).
    pub k: usize,

    /// Number of assignment/update iterations. The loop always runs this
    /// many times; there is no early exit on convergence.
    pub max_iters: usize,

    /// Seed for centroid initialization. Equal seeds give equal output,
    /// in either execution mode.
    pub seed: u64,

    /// Execution mode for the assignment and writeback loops.
    pub mode: ExecutionMode,
}

impl Default for ClusterConfig {
    fn default() -> Self {
        Self {
            k: 5,
            max_iters: 50,
            seed: 0,
            mode: ExecutionMode::Sequential,
        }
    }
}

impl ClusterConfig {
    /// Create a new configuration with the specified number of clusters.
    pub fn new(k: usize) -> Self {
        Self {
            k,
            ..Default::default()
        }
    }

    /// Set the iteration budget.
    pub fn with_max_iters(mut self, max_iters: usize) -> Self {
        self.max_iters = max_iters;
        self
    }

    /// Set the random seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Set the execution mode.
    pub fn with_mode(mut self, mode: ExecutionMode) -> Self {
        self.mode = mode;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_matches_reference_harness() {
        let config = ClusterConfig::default();
        assert_eq!(config.k, 5);
        assert_eq!(config.max_iters, 50);
        assert_eq!(config.seed, 0);
        assert_eq!(config.mode, ExecutionMode::Sequential);
    }

    #[test]
    fn test_builder_chain() {
        let config = ClusterConfig::new(8)
            .with_max_iters(12)
            .with_seed(99)
            .with_mode(ExecutionMode::Parallel);
        assert_eq!(config.k, 8);
        assert_eq!(config.max_iters, 12);
        assert_eq!(config.seed, 99);
        assert_eq!(config.mode, ExecutionMode::Parallel);
    }
}
