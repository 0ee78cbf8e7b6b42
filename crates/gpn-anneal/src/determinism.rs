use gpn_core::derive_substream_seed;

/// Derives the deterministic seed for a single search iteration.
///
/// Each iteration draws its proposal and its acceptance decision from an
/// independent substream, so the trajectory is reproducible regardless of how
/// many random draws an individual proposal consumed.
pub fn iteration_seed(master_seed: u64, iteration: usize) -> u64 {
    derive_substream_seed(master_seed, iteration as u64)
}

/// Derives the deterministic seed for one run within a batch of independent
/// runs (restarts, family sweeps).
pub fn run_seed(master_seed: u64, run_index: usize) -> u64 {
    derive_substream_seed(master_seed ^ 0x5EED_BA5E_5EED_BA5E, run_index as u64)
}
