/// The [`DatabaseConnectionProvider`] trait provides a way to get a
/// connection to the database. It is implemented by [`crate::Database`] and
/// [`crate::DatabaseTransaction`] so that the operations defined in
/// [`crate::DatabaseOperations`] can run either directly on the connection
/// or inside an atomic transaction.
pub trait DatabaseConnectionProvider {
    /// The underlying connection type.
    type Connection: sea_orm::ConnectionTrait + Send + Sync;

    /// Returns a reference to the database connection.
    fn get_connection(&self) -> &Self::Connection;
}
