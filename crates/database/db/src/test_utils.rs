//! Test utilities for the database crate.

use super::Database;
use crate::models::{block::Blocks, transaction::Transactions};

use alloy_primitives::{Address, Bloom, Bytes, B256, B64, U256};
use chain_mirror_migration::{EthereumMigrationInfo, Migrator, MigratorTrait};
use chain_mirror_primitives::{
    ChainNamespace, NormalizedBlock, NormalizedTransaction, TransactionType,
};
use sea_orm::{
    sea_query::{Alias, Expr, Query},
    ConnectionTrait,
};

/// Instantiates a new in-memory database and runs the migrations for the
/// [`test_namespace`] to set up the schema.
pub async fn setup_test_db() -> Database {
    let database_url = "sqlite::memory:";
    let connection = sea_orm::Database::connect(database_url).await.unwrap();
    Migrator::<EthereumMigrationInfo>::up(&connection, None).await.unwrap();

    connection.into()
}

/// The namespace the test schema is migrated for.
pub fn test_namespace() -> ChainNamespace {
    ChainNamespace::new("ethereum").unwrap()
}

/// Returns a [`NormalizedBlock`] with the provided height and hash.
pub fn block_fixture(number: u64, hash: B256) -> NormalizedBlock {
    NormalizedBlock {
        hash,
        number,
        parent_hash: B256::repeat_byte(0x11),
        difficulty: U256::from(17_171_480_576u64),
        total_difficulty: U256::from(34_351_349_760u64),
        gas_limit: 30_000_000,
        gas_used: 21_000,
        base_fee_per_gas: Some(7),
        extra_data: Some(Bytes::from_static(&[0xd8, 0x83, 0x01, 0x0a, 0x0b])),
        logs_bloom: Bloom::ZERO,
        miner: Address::repeat_byte(0x22),
        nonce: B64::repeat_byte(0x33),
        receipts_root: B256::repeat_byte(0x44),
        state_root: B256::repeat_byte(0x55),
        transactions_root: B256::repeat_byte(0x66),
        uncles_hash: B256::repeat_byte(0x77),
        size: 1024,
        timestamp: 1_700_000_000,
    }
}

/// Reads the persisted `base_fee_per_gas` column of a block row.
pub async fn persisted_base_fee(
    db: &Database,
    namespace: &ChainNamespace,
    block_hash: B256,
) -> Option<i64> {
    let stmt = Query::select()
        .column(Blocks::BaseFeePerGas)
        .from(Alias::new(namespace.blocks_table()))
        .and_where(Expr::col(Blocks::Hash).eq(block_hash.to_vec()))
        .to_owned();
    let row = db
        .connection
        .query_one(db.connection.get_database_backend().build(&stmt))
        .await
        .unwrap()
        .unwrap();
    row.try_get::<Option<i64>>("", "base_fee_per_gas").unwrap()
}

/// Reads the persisted fee columns of a transaction row as
/// `(gas_price, max_fee_per_gas, max_priority_fee_per_gas)`.
pub async fn persisted_fee_columns(
    db: &Database,
    namespace: &ChainNamespace,
    transaction_hash: B256,
) -> (Option<String>, Option<String>, Option<String>) {
    let stmt = Query::select()
        .column(Transactions::GasPrice)
        .column(Transactions::MaxFeePerGas)
        .column(Transactions::MaxPriorityFeePerGas)
        .from(Alias::new(namespace.transactions_table()))
        .and_where(Expr::col(Transactions::Hash).eq(transaction_hash.to_vec()))
        .to_owned();
    let row = db
        .connection
        .query_one(db.connection.get_database_backend().build(&stmt))
        .await
        .unwrap()
        .unwrap();
    (
        row.try_get::<Option<String>>("", "gas_price").unwrap(),
        row.try_get::<Option<String>>("", "max_fee_per_gas").unwrap(),
        row.try_get::<Option<String>>("", "max_priority_fee_per_gas").unwrap(),
    )
}

/// Returns a legacy-shaped [`NormalizedTransaction`] at the provided
/// position within a block.
pub fn transaction_fixture(block_number: u64, index: u64, hash: B256) -> NormalizedTransaction {
    NormalizedTransaction {
        hash,
        block_number,
        from_address: Address::repeat_byte(0x88),
        to_address: Some(Address::repeat_byte(0x99)),
        gas: 21_000,
        gas_price: Some(20_000_000_000),
        max_fee_per_gas: None,
        max_priority_fee_per_gas: None,
        input: Bytes::new(),
        nonce: index,
        transaction_index: index,
        transaction_type: TransactionType::Legacy,
        value: U256::from(1_000_000_000_000_000_000u64),
    }
}
