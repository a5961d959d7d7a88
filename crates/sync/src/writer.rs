use chain_mirror_db::{Database, DatabaseError, DatabaseOperations};
use chain_mirror_primitives::{ChainNamespace, NormalizedBlock, NormalizedTransaction};

use std::sync::Arc;

/// Atomically persists a block together with all of its transactions.
///
/// One [`TransactionalWriter::write_block`] call maps to exactly one
/// database transaction: the block row and the batched transaction rows
/// either all become visible on commit or none do. Writes are not
/// idempotent, re-writing a persisted block surfaces
/// [`DatabaseError::ConstraintViolation`].
#[derive(Debug, Clone)]
pub struct TransactionalWriter {
    /// The mirror database handle.
    database: Arc<Database>,
    /// The namespace whose tables the writer targets.
    namespace: ChainNamespace,
}

impl TransactionalWriter {
    /// Creates a new writer over the provided database and namespace.
    pub const fn new(database: Arc<Database>, namespace: ChainNamespace) -> Self {
        Self { database, namespace }
    }

    /// Persists the block and its transactions in a single database
    /// transaction. Any failure rolls back and surfaces the error.
    pub async fn write_block(
        &self,
        block: &NormalizedBlock,
        transactions: &[NormalizedTransaction],
    ) -> Result<(), DatabaseError> {
        tracing::debug!(
            target: "mirror::sync",
            namespace = %self.namespace,
            block_hash = ?block.hash,
            block_number = block.number,
            transactions = transactions.len(),
            "Writing block to mirror."
        );

        let tx = self.database.tx().await?;
        let result: Result<(), DatabaseError> = async {
            tx.insert_block(&self.namespace, block).await?;
            tx.insert_transactions(&self.namespace, transactions).await?;
            Ok(())
        }
        .await;

        match result {
            Ok(()) => tx.commit().await,
            Err(err) => {
                if let Err(rollback_err) = tx.rollback().await {
                    tracing::error!(
                        target: "mirror::sync",
                        error = %rollback_err,
                        "Failed to roll back write transaction."
                    );
                }
                Err(err)
            }
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use alloy_primitives::B256;
    use chain_mirror_db::test_utils::{
        block_fixture, setup_test_db, test_namespace, transaction_fixture,
    };

    #[tokio::test]
    async fn test_write_block_commits_block_and_transactions() {
        let db = Arc::new(setup_test_db().await);
        let writer = TransactionalWriter::new(db.clone(), test_namespace());

        let block = block_fixture(1, B256::repeat_byte(0xa1));
        let txs = vec![
            transaction_fixture(1, 0, B256::repeat_byte(0xb1)),
            transaction_fixture(1, 1, B256::repeat_byte(0xb2)),
        ];
        writer.write_block(&block, &txs).await.unwrap();

        assert_eq!(db.block_count(&test_namespace()).await.unwrap(), 1);
        assert_eq!(db.transaction_count(&test_namespace()).await.unwrap(), 2);
    }

    #[tokio::test]
    async fn test_duplicate_write_is_constraint_violation() {
        let db = Arc::new(setup_test_db().await);
        let writer = TransactionalWriter::new(db.clone(), test_namespace());

        let block = block_fixture(1, B256::repeat_byte(0xa1));
        let txs = vec![transaction_fixture(1, 0, B256::repeat_byte(0xb1))];
        writer.write_block(&block, &txs).await.unwrap();

        let err = writer.write_block(&block, &txs).await.unwrap_err();
        assert!(matches!(err, DatabaseError::ConstraintViolation(_)), "{err}");

        // The failed write left the persisted rows untouched.
        assert_eq!(db.block_count(&test_namespace()).await.unwrap(), 1);
        assert_eq!(db.transaction_count(&test_namespace()).await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_failed_transaction_insert_rolls_back_block() {
        let db = Arc::new(setup_test_db().await);
        let writer = TransactionalWriter::new(db.clone(), test_namespace());

        let block = block_fixture(1, B256::repeat_byte(0xa1));
        writer.write_block(&block, &[]).await.unwrap();

        // A fresh block paired with an already persisted transaction hash
        // fails mid-transaction; the new block row must not survive.
        let other = block_fixture(2, B256::repeat_byte(0xa2));
        writer
            .write_block(&other, &[transaction_fixture(2, 0, B256::repeat_byte(0xc1))])
            .await
            .unwrap();

        let third = block_fixture(3, B256::repeat_byte(0xa3));
        let duplicate_tx = transaction_fixture(3, 0, B256::repeat_byte(0xc1));
        let err = writer.write_block(&third, &[duplicate_tx]).await.unwrap_err();
        assert!(matches!(err, DatabaseError::ConstraintViolation(_)), "{err}");

        assert_eq!(db.block_count(&test_namespace()).await.unwrap(), 2);
        assert_eq!(db.transaction_count(&test_namespace()).await.unwrap(), 1);
        assert!(db.get_light_block(&test_namespace(), third.hash).await.unwrap().is_none());
    }
}
