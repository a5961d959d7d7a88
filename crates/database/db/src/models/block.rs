use super::to_i64;

use alloy_primitives::hex;
use chain_mirror_primitives::{ChainNamespace, NormalizedBlock};
use sea_orm::{
    sea_query::{Alias, InsertStatement, Query},
    DeriveIden,
};

/// The columns of the per-namespace blocks table.
#[derive(DeriveIden)]
pub(crate) enum Blocks {
    Hash,
    BlockNumber,
    ParentHash,
    Difficulty,
    TotalDifficulty,
    GasLimit,
    GasUsed,
    BaseFeePerGas,
    ExtraData,
    LogsBloom,
    Miner,
    Nonce,
    ReceiptsRoot,
    StateRoot,
    TransactionsRoot,
    UnclesHash,
    Size,
    Timestamp,
}

/// Builds a parameterized insert statement for the provided block. The
/// namespace selects the target table, all values are bound.
pub(crate) fn insert_statement(
    namespace: &ChainNamespace,
    block: &NormalizedBlock,
) -> InsertStatement {
    let values: [sea_orm::Value; 18] = [
        block.hash.to_vec().into(),
        to_i64(block.number).into(),
        block.parent_hash.to_vec().into(),
        block.difficulty.to_string().into(),
        block.total_difficulty.to_string().into(),
        to_i64(block.gas_limit).into(),
        to_i64(block.gas_used).into(),
        block.base_fee_per_gas.map(to_i64).into(),
        block.extra_data.as_ref().map(hex::encode_prefixed).into(),
        block.logs_bloom.to_vec().into(),
        block.miner.to_vec().into(),
        block.nonce.to_vec().into(),
        block.receipts_root.to_vec().into(),
        block.state_root.to_vec().into(),
        block.transactions_root.to_vec().into(),
        block.uncles_hash.to_vec().into(),
        to_i64(block.size).into(),
        to_i64(block.timestamp).into(),
    ];

    Query::insert()
        .into_table(Alias::new(namespace.blocks_table()))
        .columns([
            Blocks::Hash,
            Blocks::BlockNumber,
            Blocks::ParentHash,
            Blocks::Difficulty,
            Blocks::TotalDifficulty,
            Blocks::GasLimit,
            Blocks::GasUsed,
            Blocks::BaseFeePerGas,
            Blocks::ExtraData,
            Blocks::LogsBloom,
            Blocks::Miner,
            Blocks::Nonce,
            Blocks::ReceiptsRoot,
            Blocks::StateRoot,
            Blocks::TransactionsRoot,
            Blocks::UnclesHash,
            Blocks::Size,
            Blocks::Timestamp,
        ])
        .values_panic(values.map(Into::into))
        .to_owned()
}
