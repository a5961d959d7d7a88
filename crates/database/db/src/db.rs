use super::{transaction::DatabaseTransaction, DatabaseConnectionProvider};
use crate::error::DatabaseError;

use sea_orm::{Database as SeaOrmDatabase, DatabaseConnection, TransactionTrait};

/// The [`Database`] struct is responsible for interacting with the database.
///
/// It wraps a [`sea_orm::DatabaseConnection`] and implements
/// [`DatabaseConnectionProvider`] such that it can perform the operations
/// defined in [`crate::DatabaseOperations`]. Atomic multi-statement writes
/// go through [`Database::tx`], which returns a [`DatabaseTransaction`] that
/// also implements both traits.
#[derive(Debug)]
pub struct Database {
    /// The underlying database connection.
    pub(crate) connection: DatabaseConnection,
}

impl Database {
    /// Creates a new [`Database`] instance associated with the provided
    /// database URL.
    pub async fn new(database_url: &str) -> Result<Self, DatabaseError> {
        let connection = SeaOrmDatabase::connect(database_url).await?;
        Ok(Self { connection })
    }

    /// Creates a new [`DatabaseTransaction`] which can be used for atomic
    /// operations.
    pub async fn tx(&self) -> Result<DatabaseTransaction, DatabaseError> {
        Ok(DatabaseTransaction::new(self.connection.begin().await?))
    }
}

impl DatabaseConnectionProvider for Database {
    type Connection = DatabaseConnection;

    fn get_connection(&self) -> &Self::Connection {
        &self.connection
    }
}

impl From<DatabaseConnection> for Database {
    fn from(connection: DatabaseConnection) -> Self {
        Self { connection }
    }
}

#[cfg(test)]
mod test {
    use crate::{
        operations::DatabaseOperations,
        test_utils::{
            block_fixture, persisted_fee_columns, setup_test_db, test_namespace,
            transaction_fixture,
        },
        DatabaseError,
    };
    use alloy_primitives::B256;

    #[tokio::test]
    async fn test_insert_and_lookup_light_block() {
        let db = setup_test_db().await;
        let namespace = test_namespace();

        let block = block_fixture(1, B256::repeat_byte(0xa1));
        let txs = vec![
            transaction_fixture(1, 0, B256::repeat_byte(0xb1)),
            transaction_fixture(1, 1, B256::repeat_byte(0xb2)),
        ];

        // Nothing persisted yet.
        assert_eq!(db.get_light_block(&namespace, block.hash).await.unwrap(), None);

        db.insert_block(&namespace, &block).await.unwrap();
        db.insert_transactions(&namespace, &txs).await.unwrap();

        let light = db.get_light_block(&namespace, block.hash).await.unwrap().unwrap();
        assert_eq!(light.hash, block.hash);
        assert_eq!(light.number, block.number);
        assert_eq!(light.transactions, vec![txs[0].hash, txs[1].hash]);
    }

    #[tokio::test]
    async fn test_lookup_block_without_transactions() {
        let db = setup_test_db().await;
        let namespace = test_namespace();

        let block = block_fixture(5, B256::repeat_byte(0xa5));
        db.insert_block(&namespace, &block).await.unwrap();

        let light = db.get_light_block(&namespace, block.hash).await.unwrap().unwrap();
        assert_eq!(light.number, 5);
        assert!(light.transactions.is_empty());
    }

    #[tokio::test]
    async fn test_duplicate_block_insert_is_constraint_violation() {
        let db = setup_test_db().await;
        let namespace = test_namespace();

        let block = block_fixture(1, B256::repeat_byte(0xa1));
        db.insert_block(&namespace, &block).await.unwrap();

        let err = db.insert_block(&namespace, &block).await.unwrap_err();
        assert!(matches!(err, DatabaseError::ConstraintViolation(_)), "{err}");
        assert_eq!(db.block_count(&namespace).await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_rolled_back_transaction_leaves_no_rows() {
        let db = setup_test_db().await;
        let namespace = test_namespace();

        let block = block_fixture(1, B256::repeat_byte(0xa1));
        let txs = vec![transaction_fixture(1, 0, B256::repeat_byte(0xb1))];

        // Simulates a crash between the block insert and the commit.
        let tx = db.tx().await.unwrap();
        tx.insert_block(&namespace, &block).await.unwrap();
        tx.insert_transactions(&namespace, &txs).await.unwrap();
        tx.rollback().await.unwrap();

        assert_eq!(db.block_count(&namespace).await.unwrap(), 0);
        assert_eq!(db.transaction_count(&namespace).await.unwrap(), 0);
        assert_eq!(db.get_light_block(&namespace, block.hash).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_committed_transaction_is_visible() {
        let db = setup_test_db().await;
        let namespace = test_namespace();

        let block = block_fixture(2, B256::repeat_byte(0xa2));
        let tx = db.tx().await.unwrap();
        tx.insert_block(&namespace, &block).await.unwrap();
        tx.commit().await.unwrap();

        assert_eq!(db.block_count(&namespace).await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_fee_columns_nullability() {
        let db = setup_test_db().await;
        let namespace = test_namespace();

        let block = block_fixture(1, B256::repeat_byte(0xa1));
        let legacy = transaction_fixture(1, 0, B256::repeat_byte(0xb1));
        let mut dynamic = transaction_fixture(1, 1, B256::repeat_byte(0xb2));
        dynamic.gas_price = None;
        dynamic.max_fee_per_gas = Some(2_000_000_000);
        dynamic.max_priority_fee_per_gas = Some(1_000_000_000);

        db.insert_block(&namespace, &block).await.unwrap();
        db.insert_transactions(&namespace, &[legacy.clone(), dynamic.clone()]).await.unwrap();

        let (gas_price, max_fee, max_priority) =
            persisted_fee_columns(&db, &namespace, legacy.hash).await;
        assert_eq!(gas_price, Some("20000000000".to_string()));
        assert_eq!(max_fee, None);
        assert_eq!(max_priority, None);

        let (gas_price, max_fee, max_priority) =
            persisted_fee_columns(&db, &namespace, dynamic.hash).await;
        assert_eq!(gas_price, None);
        assert_eq!(max_fee, Some("2000000000".to_string()));
        assert_eq!(max_priority, Some("1000000000".to_string()));
    }
}
