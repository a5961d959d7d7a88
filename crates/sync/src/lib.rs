//! Drives the chain-to-mirror pipeline: read a block from the node's
//! storage, normalize it, reconcile it against the mirror, and persist it
//! atomically.

use chain_mirror_db::{Database, DatabaseError};
use chain_mirror_normalizer::BlockNormalizer;
use chain_mirror_primitives::{ChainNamespace, UpgradeSchedule};
use chain_mirror_providers::ChainReader;

use std::{ops::RangeInclusive, sync::Arc, time::Instant};

mod error;
pub use error::SyncError;

mod metrics;
pub use metrics::SyncMetrics;

mod reconciler;
pub use reconciler::Reconciler;

mod writer;
pub use writer::TransactionalWriter;

/// The outcome of synchronizing a single block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncOutcome {
    /// The block and its transactions were persisted.
    Written,
    /// The mirror already holds a matching copy of the block.
    AlreadySynced,
}

/// A summary of a range synchronization.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SyncReport {
    /// The number of blocks written.
    pub written: u64,
    /// The number of blocks skipped because they were already persisted.
    pub skipped: u64,
}

/// Mirrors blocks from a chain node's storage into the relational store.
///
/// The reader is injected as a trait so the pipeline can run against any
/// node backend; the writer owns the only write path, one database
/// transaction per block.
#[derive(Debug)]
pub struct Synchronizer<C> {
    /// The chain storage reader.
    reader: C,
    /// The hard-fork-aware block normalizer.
    normalizer: BlockNormalizer,
    /// The atomic block writer.
    writer: TransactionalWriter,
    /// The pre-write existence reconciler.
    reconciler: Reconciler,
    /// The metrics of the synchronizer.
    metrics: SyncMetrics,
}

impl<C: ChainReader> Synchronizer<C> {
    /// Creates a new synchronizer mirroring the provided reader into the
    /// namespace's tables of the provided database.
    pub fn new(
        reader: C,
        schedule: UpgradeSchedule,
        database: Arc<Database>,
        namespace: ChainNamespace,
    ) -> Self {
        Self {
            reader,
            normalizer: BlockNormalizer::new(schedule),
            writer: TransactionalWriter::new(database.clone(), namespace.clone()),
            reconciler: Reconciler::new(database, namespace),
            metrics: SyncMetrics::default(),
        }
    }

    /// Synchronizes the block at the provided height.
    ///
    /// Reads the block from chain storage, normalizes it, and persists it
    /// unless the mirror already holds a matching copy. A persisted block
    /// under the same hash whose projection does not match the freshly
    /// normalized rows is surfaced as [`SyncError::CanonicalDivergence`];
    /// the mirror never overwrites persisted rows.
    pub async fn sync_block(&self, number: u64) -> Result<SyncOutcome, SyncError> {
        let header = self.reader.block(number).await?;
        let hash = header.hash_slow();
        let transactions = self.reader.transactions(hash, number).await?;
        let total_difficulty = self.reader.total_difficulty(hash, number).await?;

        let (block, rows) = self.normalizer.normalize(&header, &transactions, total_difficulty)?;

        if let Some(light) = self.reconciler.lookup(hash).await? {
            if light.matches(&block, &rows) {
                tracing::trace!(target: "mirror::sync", block_number = number, block_hash = ?hash, "Block already mirrored, skipping.");
                self.metrics.blocks_skipped.increment(1);
                return Ok(SyncOutcome::AlreadySynced);
            }
            return Err(SyncError::CanonicalDivergence { number, hash });
        }

        let write_started = Instant::now();
        self.writer.write_block(&block, &rows).await?;
        self.metrics.write_duration.record(write_started.elapsed().as_millis() as f64);
        self.metrics.blocks_written.increment(1);
        self.metrics.transactions_written.increment(rows.len() as u64);

        Ok(SyncOutcome::Written)
    }

    /// Synchronizes every block in the provided height range.
    ///
    /// A benign duplicate-insert race ([`DatabaseError::ConstraintViolation`])
    /// counts as a skip; any other error aborts the range.
    pub async fn sync_range(&self, range: RangeInclusive<u64>) -> Result<SyncReport, SyncError> {
        let mut report = SyncReport::default();

        for number in range {
            match self.sync_block(number).await {
                Ok(SyncOutcome::Written) => report.written += 1,
                Ok(SyncOutcome::AlreadySynced) => report.skipped += 1,
                Err(SyncError::Database(DatabaseError::ConstraintViolation(msg))) => {
                    tracing::debug!(target: "mirror::sync", block_number = number, %msg, "Lost write race for block, skipping.");
                    self.metrics.blocks_skipped.increment(1);
                    report.skipped += 1;
                }
                Err(err) => return Err(err),
            }
        }

        Ok(report)
    }
}
