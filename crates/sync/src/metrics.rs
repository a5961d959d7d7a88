use metrics::{Counter, Histogram};
use metrics_derive::Metrics;

/// The metrics for the [`super::Synchronizer`].
#[derive(Metrics)]
#[metrics(scope = "chain_mirror")]
pub struct SyncMetrics {
    /// A counter on the blocks written to the mirror.
    pub blocks_written: Counter,
    /// A counter on the transactions written to the mirror.
    pub transactions_written: Counter,
    /// A counter on the blocks skipped because they were already persisted.
    pub blocks_skipped: Counter,
    /// A histogram of the write transaction duration (ms).
    #[metric(describe = "Time to atomically persist a block and its transactions (ms)")]
    pub write_duration: Histogram,
}
