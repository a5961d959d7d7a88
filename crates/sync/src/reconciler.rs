use alloy_primitives::B256;
use chain_mirror_db::{Database, DatabaseError, DatabaseOperations};
use chain_mirror_primitives::{ChainNamespace, LightBlock};

use std::sync::Arc;

/// Answers the "do we already hold this block" question ahead of a write.
///
/// The lookup is a single round trip returning a [`LightBlock`] projection;
/// [`LightBlock::matches`] then decides between an already mirrored block
/// and a canonical divergence.
#[derive(Debug, Clone)]
pub struct Reconciler {
    /// The mirror database handle.
    database: Arc<Database>,
    /// The namespace whose tables the reconciler queries.
    namespace: ChainNamespace,
}

impl Reconciler {
    /// Creates a new reconciler over the provided database and namespace.
    pub const fn new(database: Arc<Database>, namespace: ChainNamespace) -> Self {
        Self { database, namespace }
    }

    /// Returns the persisted projection of the block with the provided
    /// hash, or `None` if the mirror does not hold it.
    pub async fn lookup(&self, block_hash: B256) -> Result<Option<LightBlock>, DatabaseError> {
        self.database.get_light_block(&self.namespace, block_hash).await
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use chain_mirror_db::test_utils::{
        block_fixture, setup_test_db, test_namespace, transaction_fixture,
    };

    #[tokio::test]
    async fn test_lookup_round_trip() {
        let db = Arc::new(setup_test_db().await);
        let reconciler = Reconciler::new(db.clone(), test_namespace());

        let block = block_fixture(7, B256::repeat_byte(0xa7));
        let txs = vec![transaction_fixture(7, 0, B256::repeat_byte(0xb7))];

        assert_eq!(reconciler.lookup(block.hash).await.unwrap(), None);

        db.insert_block(&test_namespace(), &block).await.unwrap();
        db.insert_transactions(&test_namespace(), &txs).await.unwrap();

        let light = reconciler.lookup(block.hash).await.unwrap().unwrap();
        assert!(light.matches(&block, &txs));
        assert!(!light.matches(&block, &[]));
    }
}
