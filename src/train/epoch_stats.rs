use serde::{Serialize, Deserialize};

/// Per-epoch training statistics recorded by the `Trainer`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EpochStats {
    /// 0-based epoch number.
    pub epoch: usize,
    /// Total epochs requested for this run.
    pub total_epochs: usize,
    /// Seed the epoch's column shuffle used.
    pub seed: u64,
    /// Mean of the mini-batch costs of this epoch.
    pub cost: f64,
    /// Mini-batches processed (one optimizer step each).
    pub batches: usize,
    /// Training columns left out of this epoch's batches.
    pub dropped_columns: usize,
    /// Wall-clock duration of this single epoch in milliseconds.
    pub elapsed_ms: u64,
}
