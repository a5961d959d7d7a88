//! Core types shared across the chain mirror.

mod block;
pub use block::{LightBlock, NormalizedBlock};

mod chain;
pub use chain::{ChainNamespace, InvalidNamespace};

mod hardforks;
pub use hardforks::{SigningScheme, UpgradeSchedule};

mod transaction;
pub use transaction::{NormalizedTransaction, TransactionType};
