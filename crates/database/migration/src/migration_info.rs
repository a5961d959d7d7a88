/// Chain-specific parameters for the schema migrations.
pub trait MigrationInfo: Send + Sync + 'static {
    /// The chain namespace prefixing the mirror's table names.
    fn namespace() -> &'static str;
}

/// The type implementing migration info for Ethereum mainnet.
#[derive(Debug)]
pub struct EthereumMigrationInfo;

impl MigrationInfo for EthereumMigrationInfo {
    fn namespace() -> &'static str {
        "ethereum"
    }
}

/// The type implementing migration info for Polygon mainnet.
#[derive(Debug)]
pub struct PolygonMigrationInfo;

impl MigrationInfo for PolygonMigrationInfo {
    fn namespace() -> &'static str {
        "polygon"
    }
}
