//! Providers giving the mirror access to a chain node's local storage.

pub use chain::{ChainReader, ChainReaderError};
mod chain;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;
