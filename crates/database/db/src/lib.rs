//! A library responsible for interacting with the mirror database.

mod models;

mod connection;
pub use connection::DatabaseConnectionProvider;

mod db;
pub use db::Database;

mod error;
pub use error::DatabaseError;

mod operations;
pub use operations::DatabaseOperations;

mod transaction;
pub use transaction::DatabaseTransaction;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use sea_orm::DbErr;
