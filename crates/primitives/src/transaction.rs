use alloy_primitives::{Address, Bytes, B256, U256};

/// The transaction type categories the mirror persists.
///
/// The discriminants match the EIP-2718 type identifiers on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum TransactionType {
    /// A legacy transaction, with or without replay protection.
    Legacy = 0,
    /// An EIP-2930 access-list transaction.
    AccessList = 1,
    /// An EIP-1559 dynamic-fee transaction.
    DynamicFee = 2,
}

/// A transaction in its storage-schema-stable form.
///
/// The sender is always derived from the signature during normalization,
/// never taken verbatim from wire data. Fee fields are exclusive by type:
/// legacy and access-list transactions carry `gas_price`, dynamic-fee
/// transactions carry `max_fee_per_gas` and `max_priority_fee_per_gas`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedTransaction {
    /// The transaction hash, the primary identity of the row.
    pub hash: B256,
    /// The height of the block the transaction was included in.
    pub block_number: u64,
    /// The sender address, recovered from the signature.
    pub from_address: Address,
    /// The recipient address. `None` for contract-creation transactions.
    pub to_address: Option<Address>,
    /// The gas limit of the transaction.
    pub gas: u64,
    /// The gas price. Populated for legacy and access-list transactions.
    pub gas_price: Option<u128>,
    /// The maximum fee per gas. Populated for dynamic-fee transactions.
    pub max_fee_per_gas: Option<u128>,
    /// The maximum priority fee per gas. Populated for dynamic-fee
    /// transactions.
    pub max_priority_fee_per_gas: Option<u128>,
    /// The calldata payload.
    pub input: Bytes,
    /// The sender nonce.
    pub nonce: u64,
    /// The 0-based position of the transaction within its block.
    pub transaction_index: u64,
    /// The transaction type category.
    pub transaction_type: TransactionType,
    /// The transferred value.
    pub value: U256,
}
