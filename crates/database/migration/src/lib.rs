//! Schema migrations for the chain mirror database.

pub use sea_orm_migration::prelude::*;

mod m20220101_000001_create_blocks_table;
mod m20220101_000002_create_transactions_table;

mod migration_info;
pub use migration_info::{EthereumMigrationInfo, MigrationInfo, PolygonMigrationInfo};

/// The migrator for the per-namespace mirror schema.
///
/// The chain namespace the tables are created under is compile-time
/// configuration supplied through the [`MigrationInfo`] type parameter.
#[derive(Debug)]
pub struct Migrator<MI> {
    phantom: std::marker::PhantomData<MI>,
}

#[async_trait::async_trait]
impl<MI: MigrationInfo> MigratorTrait for Migrator<MI> {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20220101_000001_create_blocks_table::Migration::<MI>::new()),
            Box::new(m20220101_000002_create_transactions_table::Migration::<MI>::new()),
        ]
    }
}
