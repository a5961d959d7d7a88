use super::{models, DatabaseError};
use crate::DatabaseConnectionProvider;

use alloy_primitives::B256;
use chain_mirror_primitives::{ChainNamespace, LightBlock, NormalizedBlock, NormalizedTransaction};
use sea_orm::{
    sea_query::{Alias, Expr, JoinType, Order, Query},
    ConnectionTrait,
};

use crate::models::{block::Blocks, transaction::Transactions};

/// The [`DatabaseOperations`] trait provides methods for interacting with the
/// mirror store.
///
/// It is implemented for every [`DatabaseConnectionProvider`], so the same
/// operations run against a plain connection or inside a
/// [`crate::DatabaseTransaction`]. Every statement is parameterized; the
/// validated [`ChainNamespace`] is the only token interpolated into SQL, and
/// only to select the target table.
#[async_trait::async_trait]
pub trait DatabaseOperations: DatabaseConnectionProvider {
    /// Insert a [`NormalizedBlock`] into the namespace's blocks table.
    ///
    /// Returns [`DatabaseError::ConstraintViolation`] if a block with the same
    /// hash or height is already present.
    async fn insert_block(
        &self,
        namespace: &ChainNamespace,
        block: &NormalizedBlock,
    ) -> Result<(), DatabaseError> {
        tracing::trace!(target: "mirror::db", %namespace, block_hash = ?block.hash, block_number = block.number, "Inserting block into database.");
        let stmt = models::block::insert_statement(namespace, block);
        let conn = self.get_connection();
        conn.execute(conn.get_database_backend().build(&stmt)).await?;
        Ok(())
    }

    /// Insert a batch of [`NormalizedTransaction`]s into the namespace's
    /// transactions table. A no-op for an empty slice.
    async fn insert_transactions(
        &self,
        namespace: &ChainNamespace,
        transactions: &[NormalizedTransaction],
    ) -> Result<(), DatabaseError> {
        if transactions.is_empty() {
            return Ok(());
        }

        tracing::trace!(target: "mirror::db", %namespace, count = transactions.len(), "Inserting transactions into database.");
        let stmt = models::transaction::insert_statement(namespace, transactions);
        let conn = self.get_connection();
        conn.execute(conn.get_database_backend().build(&stmt)).await?;
        Ok(())
    }

    /// Get the [`LightBlock`] stored under the provided hash, with its
    /// transaction hashes ordered by transaction index.
    async fn get_light_block(
        &self,
        namespace: &ChainNamespace,
        block_hash: B256,
    ) -> Result<Option<LightBlock>, DatabaseError> {
        let b = Alias::new("b");
        let t = Alias::new("t");
        let stmt = Query::select()
            .expr_as(Expr::col((b.clone(), Blocks::Hash)), Alias::new("block_hash"))
            .expr_as(Expr::col((b.clone(), Blocks::BlockNumber)), Alias::new("block_number"))
            .expr_as(Expr::col((t.clone(), Transactions::Hash)), Alias::new("transaction_hash"))
            .from_as(Alias::new(namespace.blocks_table()), b.clone())
            .join_as(
                JoinType::LeftJoin,
                Alias::new(namespace.transactions_table()),
                t.clone(),
                Expr::col((t.clone(), Transactions::BlockNumber))
                    .equals((b.clone(), Blocks::BlockNumber)),
            )
            .and_where(Expr::col((b, Blocks::Hash)).eq(block_hash.to_vec()))
            .order_by((t, Transactions::TransactionIndex), Order::Asc)
            .to_owned();

        let conn = self.get_connection();
        let rows = conn.query_all(conn.get_database_backend().build(&stmt)).await?;

        let Some(first) = rows.first() else { return Ok(None) };
        let hash = B256::from_slice(&first.try_get::<Vec<u8>>("", "block_hash")?);
        let number =
            first.try_get::<i64>("", "block_number")?.try_into().expect("height is non-negative");

        let mut transactions = Vec::with_capacity(rows.len());
        for row in &rows {
            if let Some(tx_hash) = row.try_get::<Option<Vec<u8>>>("", "transaction_hash")? {
                transactions.push(B256::from_slice(&tx_hash));
            }
        }

        Ok(Some(LightBlock { hash, number, transactions }))
    }

    /// Get the number of blocks stored for the namespace.
    async fn block_count(&self, namespace: &ChainNamespace) -> Result<u64, DatabaseError> {
        count_rows(self.get_connection(), namespace.blocks_table()).await
    }

    /// Get the number of transactions stored for the namespace.
    async fn transaction_count(&self, namespace: &ChainNamespace) -> Result<u64, DatabaseError> {
        count_rows(self.get_connection(), namespace.transactions_table()).await
    }
}

impl<T> DatabaseOperations for T where T: DatabaseConnectionProvider {}

async fn count_rows<C: ConnectionTrait>(conn: &C, table: String) -> Result<u64, DatabaseError> {
    let stmt = Query::select()
        .expr_as(Expr::cust("COUNT(*)"), Alias::new("count"))
        .from(Alias::new(table))
        .to_owned();
    let row = conn.query_one(conn.get_database_backend().build(&stmt)).await?;
    let count = row.map(|row| row.try_get::<i64>("", "count")).transpose()?.unwrap_or_default();
    Ok(count.try_into().expect("count is non-negative"))
}
