use alloy_consensus::crypto::RecoveryError;
use alloy_primitives::B256;

/// The error type for block normalization.
#[derive(Debug, thiserror::Error)]
pub enum NormalizerError {
    /// Sender recovery failed for a transaction. Fatal for the whole
    /// block's normalization; no placeholder address is ever substituted.
    #[error("failed to recover sender for transaction {hash}: {source}")]
    SignatureRecovery {
        /// The hash of the offending transaction.
        hash: B256,
        /// The underlying recovery failure.
        source: RecoveryError,
    },
    /// No signing scheme is active for the transaction at the block's
    /// height, so the sender cannot be derived.
    #[error("no active signing scheme for type {tx_type} transaction at height {height}")]
    SigningContext {
        /// The height of the block containing the transaction.
        height: u64,
        /// The EIP-2718 type identifier of the transaction.
        tx_type: u8,
    },
}
