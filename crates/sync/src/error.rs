use alloy_primitives::B256;
use chain_mirror_db::DatabaseError;
use chain_mirror_normalizer::NormalizerError;
use chain_mirror_providers::ChainReaderError;

/// The error type for the synchronization pipeline.
#[derive(Debug, thiserror::Error)]
pub enum SyncError {
    /// An error occurred reading from the chain node's storage.
    #[error(transparent)]
    ChainReader(#[from] ChainReaderError),
    /// An error occurred normalizing a block or deriving a sender.
    #[error(transparent)]
    Normalizer(#[from] NormalizerError),
    /// An error occurred interacting with the mirror database.
    #[error(transparent)]
    Database(#[from] DatabaseError),
    /// A block is already persisted at the height but does not match the
    /// chain's canonical view, i.e. the chain reorganized past the mirror.
    /// The mirror never overwrites persisted rows; resolving the divergence
    /// is an operator decision.
    #[error("persisted block at height {number} diverges from canonical block {hash}")]
    CanonicalDivergence {
        /// The height at which the divergence was detected.
        number: u64,
        /// The canonical block hash reported by the chain.
        hash: B256,
    },
}
