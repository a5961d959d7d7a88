//! Converts chain-native blocks and transactions into their
//! storage-schema-stable row form, resolving hard-fork-dependent optional
//! fields and deriving each transaction's sender.

use alloy_consensus::{Block, BlockBody, Header, TxEnvelope};
use alloy_primitives::{Address, U256};
use alloy_rlp::Encodable;
use chain_mirror_primitives::{
    NormalizedBlock, NormalizedTransaction, SigningScheme, TransactionType, UpgradeSchedule,
};

mod error;
pub use error::NormalizerError;

/// Produces a schema-stable row representation of a block regardless of the
/// protocol-upgrade era it belongs to.
///
/// The normalizer owns the chain's [`UpgradeSchedule`]: it decides both the
/// nullability of fork-introduced fields and the signing scheme under which
/// each transaction's sender is recovered.
#[derive(Debug, Clone)]
pub struct BlockNormalizer {
    /// The upgrade schedule of the mirrored chain.
    schedule: UpgradeSchedule,
}

impl BlockNormalizer {
    /// Creates a new normalizer for a chain with the provided upgrade
    /// schedule.
    pub const fn new(schedule: UpgradeSchedule) -> Self {
        Self { schedule }
    }

    /// Normalizes a block and its ordered transaction list into one block
    /// row and one transaction row per input transaction, with
    /// `transaction_index` values exactly `0..N-1` in input order.
    ///
    /// Fails on the first transaction whose sender cannot be derived; no
    /// partial output is produced.
    pub fn normalize(
        &self,
        header: &Header,
        transactions: &[TxEnvelope],
        total_difficulty: U256,
    ) -> Result<(NormalizedBlock, Vec<NormalizedTransaction>), NormalizerError> {
        let hash = header.hash_slow();
        let number = header.number;
        tracing::trace!(
            target: "mirror::normalizer",
            block_hash = ?hash,
            block_number = number,
            transactions = transactions.len(),
            "Normalizing block."
        );

        // Some networks omit extra data entirely.
        let extra_data = (!header.extra_data.is_empty()).then(|| header.extra_data.clone());
        // The base fee only exists once the fee market has activated.
        let base_fee_per_gas =
            self.schedule.fee_market_active(number).then_some(header.base_fee_per_gas).flatten();

        let block = NormalizedBlock {
            hash,
            number,
            parent_hash: header.parent_hash,
            difficulty: header.difficulty,
            total_difficulty,
            gas_limit: header.gas_limit,
            gas_used: header.gas_used,
            base_fee_per_gas,
            extra_data,
            logs_bloom: header.logs_bloom,
            miner: header.beneficiary,
            nonce: header.nonce,
            receipts_root: header.receipts_root,
            state_root: header.state_root,
            transactions_root: header.transactions_root,
            uncles_hash: header.ommers_hash,
            size: rlp_size(header, transactions),
            timestamp: header.timestamp,
        };

        let transactions = transactions
            .iter()
            .enumerate()
            .map(|(index, tx)| self.normalize_transaction(tx, number, index as u64))
            .collect::<Result<Vec<_>, _>>()?;

        Ok((block, transactions))
    }

    /// Derives the sender of a transaction under the signing scheme active
    /// at the provided height.
    ///
    /// The scheme is resolved from the height against the upgrade schedule,
    /// not from the transaction's own type field alone. A failed recovery is
    /// surfaced as an error, never substituted with a placeholder address.
    pub fn derive_sender(&self, tx: &TxEnvelope, height: u64) -> Result<Address, NormalizerError> {
        let context = || NormalizerError::SigningContext { height, tx_type: tx.tx_type() as u8 };
        let scheme = self.schedule.signing_scheme(height, tx).ok_or_else(context)?;

        match (scheme, tx) {
            (
                SigningScheme::Legacy | SigningScheme::ReplayProtectedLegacy,
                TxEnvelope::Legacy(signed),
            ) => signed.recover_signer().map_err(|source| NormalizerError::SignatureRecovery {
                hash: *signed.hash(),
                source: source.into(),
            }),
            (SigningScheme::AccessList, TxEnvelope::Eip2930(signed)) => {
                signed.recover_signer().map_err(|source| NormalizerError::SignatureRecovery {
                    hash: *signed.hash(),
                    source: source.into(),
                })
            }
            (SigningScheme::DynamicFee, TxEnvelope::Eip1559(signed)) => {
                signed.recover_signer().map_err(|source| NormalizerError::SignatureRecovery {
                    hash: *signed.hash(),
                    source: source.into(),
                })
            }
            _ => Err(context()),
        }
    }

    fn normalize_transaction(
        &self,
        tx: &TxEnvelope,
        block_number: u64,
        transaction_index: u64,
    ) -> Result<NormalizedTransaction, NormalizerError> {
        let from_address = self.derive_sender(tx, block_number)?;

        let row = match tx {
            TxEnvelope::Legacy(signed) => {
                let tx = signed.tx();
                NormalizedTransaction {
                    hash: *signed.hash(),
                    block_number,
                    from_address,
                    to_address: tx.to.to().copied(),
                    gas: tx.gas_limit,
                    gas_price: Some(tx.gas_price),
                    max_fee_per_gas: None,
                    max_priority_fee_per_gas: None,
                    input: tx.input.clone(),
                    nonce: tx.nonce,
                    transaction_index,
                    transaction_type: TransactionType::Legacy,
                    value: tx.value,
                }
            }
            TxEnvelope::Eip2930(signed) => {
                let tx = signed.tx();
                NormalizedTransaction {
                    hash: *signed.hash(),
                    block_number,
                    from_address,
                    to_address: tx.to.to().copied(),
                    gas: tx.gas_limit,
                    gas_price: Some(tx.gas_price),
                    max_fee_per_gas: None,
                    max_priority_fee_per_gas: None,
                    input: tx.input.clone(),
                    nonce: tx.nonce,
                    transaction_index,
                    transaction_type: TransactionType::AccessList,
                    value: tx.value,
                }
            }
            TxEnvelope::Eip1559(signed) => {
                let tx = signed.tx();
                NormalizedTransaction {
                    hash: *signed.hash(),
                    block_number,
                    from_address,
                    to_address: tx.to.to().copied(),
                    gas: tx.gas_limit,
                    gas_price: None,
                    max_fee_per_gas: Some(tx.max_fee_per_gas),
                    max_priority_fee_per_gas: Some(tx.max_priority_fee_per_gas),
                    input: tx.input.clone(),
                    nonce: tx.nonce,
                    transaction_index,
                    transaction_type: TransactionType::DynamicFee,
                    value: tx.value,
                }
            }
            // Sender derivation has already rejected every other type.
            _ => {
                return Err(NormalizerError::SigningContext {
                    height: block_number,
                    tx_type: tx.tx_type() as u8,
                })
            }
        };

        Ok(row)
    }
}

/// Computes the RLP-encoded size of the block in bytes, as the chain node
/// reports it.
fn rlp_size(header: &Header, transactions: &[TxEnvelope]) -> u64 {
    let block = Block {
        header: header.clone(),
        body: BlockBody {
            transactions: transactions.to_vec(),
            ommers: Vec::new(),
            withdrawals: None,
        },
    };
    block.length() as u64
}
