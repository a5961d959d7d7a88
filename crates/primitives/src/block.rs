use crate::NormalizedTransaction;
use alloy_primitives::{Address, Bloom, Bytes, B256, B64, U256};

/// A block in its storage-schema-stable form, independent of the protocol
/// era it was produced under.
///
/// Numeric fields that can exceed 64 bits on some networks (`difficulty`,
/// `total_difficulty`) are kept as [`U256`] and persisted losslessly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedBlock {
    /// The block hash, the primary identity of the row.
    pub hash: B256,
    /// The block height.
    pub number: u64,
    /// The hash of the parent block.
    pub parent_hash: B256,
    /// The block difficulty.
    pub difficulty: U256,
    /// The cumulative difficulty up to and including this block.
    pub total_difficulty: U256,
    /// The block gas limit.
    pub gas_limit: u64,
    /// The gas used by all transactions in the block.
    pub gas_used: u64,
    /// The base fee per gas. `None` for blocks below the fee-market upgrade.
    pub base_fee_per_gas: Option<u64>,
    /// The block extra data. `None` on networks/eras that omit it.
    pub extra_data: Option<Bytes>,
    /// The bloom filter over the logs of the block.
    pub logs_bloom: Bloom,
    /// The address of the block producer.
    pub miner: Address,
    /// The proof-of-work nonce.
    pub nonce: B64,
    /// The root of the receipts trie.
    pub receipts_root: B256,
    /// The root of the state trie.
    pub state_root: B256,
    /// The root of the transactions trie.
    pub transactions_root: B256,
    /// The hash of the uncle headers.
    pub uncles_hash: B256,
    /// The RLP-encoded size of the block in bytes.
    pub size: u64,
    /// The block timestamp.
    pub timestamp: u64,
}

/// A lightweight projection of a persisted block, used solely for
/// existence checks before deciding to (re-)synchronize. Derived on read,
/// never persisted separately.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LightBlock {
    /// The persisted block hash.
    pub hash: B256,
    /// The persisted block height.
    pub number: u64,
    /// The hashes of the persisted transactions, in inclusion order.
    pub transactions: Vec<B256>,
}

impl LightBlock {
    /// Returns whether this projection matches the chain-derived rows.
    pub fn matches(&self, block: &NormalizedBlock, transactions: &[NormalizedTransaction]) -> bool {
        self.hash == block.hash &&
            self.number == block.number &&
            self.transactions.len() == transactions.len() &&
            self.transactions.iter().zip(transactions).all(|(hash, tx)| *hash == tx.hash)
    }
}
