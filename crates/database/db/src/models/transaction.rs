use super::to_i64;

use alloy_primitives::hex;
use chain_mirror_primitives::{ChainNamespace, NormalizedTransaction};
use sea_orm::{
    sea_query::{Alias, InsertStatement, Query},
    DeriveIden,
};

/// The columns of the per-namespace transactions table.
#[derive(DeriveIden)]
pub(crate) enum Transactions {
    Hash,
    BlockNumber,
    FromAddress,
    ToAddress,
    Gas,
    GasPrice,
    MaxFeePerGas,
    MaxPriorityFeePerGas,
    Input,
    Nonce,
    TransactionIndex,
    TransactionType,
    Value,
}

/// Builds a parameterized multi-row insert statement for the provided
/// transactions. Callers must ensure the slice is non-empty.
pub(crate) fn insert_statement(
    namespace: &ChainNamespace,
    transactions: &[NormalizedTransaction],
) -> InsertStatement {
    let mut stmt = Query::insert()
        .into_table(Alias::new(namespace.transactions_table()))
        .columns([
            Transactions::Hash,
            Transactions::BlockNumber,
            Transactions::FromAddress,
            Transactions::ToAddress,
            Transactions::Gas,
            Transactions::GasPrice,
            Transactions::MaxFeePerGas,
            Transactions::MaxPriorityFeePerGas,
            Transactions::Input,
            Transactions::Nonce,
            Transactions::TransactionIndex,
            Transactions::TransactionType,
            Transactions::Value,
        ])
        .to_owned();

    for tx in transactions {
        let values: [sea_orm::Value; 13] = [
            tx.hash.to_vec().into(),
            to_i64(tx.block_number).into(),
            tx.from_address.to_vec().into(),
            tx.to_address.map(|to| to.to_vec()).into(),
            to_i64(tx.gas).into(),
            tx.gas_price.map(|price| price.to_string()).into(),
            tx.max_fee_per_gas.map(|fee| fee.to_string()).into(),
            tx.max_priority_fee_per_gas.map(|fee| fee.to_string()).into(),
            hex::encode_prefixed(&tx.input).into(),
            to_i64(tx.nonce).into(),
            to_i64(tx.transaction_index).into(),
            (tx.transaction_type as i16).into(),
            tx.value.to_string().into(),
        ];
        stmt.values_panic(values.map(Into::into));
    }

    stmt
}
