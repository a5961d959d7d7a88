use alloy_consensus::{Header, TxEnvelope};
use alloy_primitives::{B256, U256};

/// The error type for chain storage reads.
///
/// All variants signal that the requested data is unavailable locally: the
/// caller decides whether to retry later (node still catching up) or treat
/// the height as permanently pruned.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ChainReaderError {
    /// The block at the provided height is unavailable.
    #[error("block {0} not found in chain storage")]
    BlockNotFound(u64),
    /// The body for the provided block is unavailable.
    #[error("body for block {hash} at height {number} not found in chain storage")]
    BodyNotFound {
        /// The hash of the block whose body was requested.
        hash: B256,
        /// The height of the block whose body was requested.
        number: u64,
    },
    /// The total difficulty for the provided block is unavailable.
    #[error("total difficulty for block {0} not found in chain storage")]
    TotalDifficultyNotFound(B256),
}

/// Read access to a locally synchronized chain node's storage.
///
/// Implementations are side-effect free storage reads; the mirror does not
/// manage the node's lifecycle, configuration or network participation.
#[async_trait::async_trait]
pub trait ChainReader: Send + Sync {
    /// Returns the header of the block at the provided height.
    async fn block(&self, number: u64) -> Result<Header, ChainReaderError>;

    /// Returns the transactions of the block with the provided hash and
    /// height, in on-chain inclusion order. An empty vector is returned for
    /// a block without transactions.
    async fn transactions(
        &self,
        block_hash: B256,
        number: u64,
    ) -> Result<Vec<TxEnvelope>, ChainReaderError>;

    /// Returns the total difficulty up to and including the block with the
    /// provided hash and height.
    async fn total_difficulty(
        &self,
        block_hash: B256,
        number: u64,
    ) -> Result<U256, ChainReaderError>;
}
