//! Test utilities for the provider traits.

use crate::{ChainReader, ChainReaderError};

use alloy_consensus::{Header, TxEnvelope};
use alloy_primitives::{B256, U256};
use std::collections::HashMap;

/// An in-memory [`ChainReader`] backed by a map of heights to blocks.
#[derive(Debug, Clone, Default)]
pub struct MockChainReader {
    blocks: HashMap<u64, MockBlock>,
}

#[derive(Debug, Clone)]
struct MockBlock {
    header: Header,
    transactions: Vec<TxEnvelope>,
    total_difficulty: U256,
}

impl MockChainReader {
    /// Creates an empty reader.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a block to the reader, keyed by the header's height.
    pub fn with_block(
        mut self,
        header: Header,
        transactions: Vec<TxEnvelope>,
        total_difficulty: U256,
    ) -> Self {
        self.blocks.insert(header.number, MockBlock { header, transactions, total_difficulty });
        self
    }

    fn get(&self, block_hash: B256, number: u64) -> Option<&MockBlock> {
        self.blocks.get(&number).filter(|block| block.header.hash_slow() == block_hash)
    }
}

#[async_trait::async_trait]
impl ChainReader for MockChainReader {
    async fn block(&self, number: u64) -> Result<Header, ChainReaderError> {
        self.blocks
            .get(&number)
            .map(|block| block.header.clone())
            .ok_or(ChainReaderError::BlockNotFound(number))
    }

    async fn transactions(
        &self,
        block_hash: B256,
        number: u64,
    ) -> Result<Vec<TxEnvelope>, ChainReaderError> {
        self.get(block_hash, number)
            .map(|block| block.transactions.clone())
            .ok_or(ChainReaderError::BodyNotFound { hash: block_hash, number })
    }

    async fn total_difficulty(
        &self,
        block_hash: B256,
        number: u64,
    ) -> Result<U256, ChainReaderError> {
        self.get(block_hash, number)
            .map(|block| block.total_difficulty)
            .ok_or(ChainReaderError::TotalDifficultyNotFound(block_hash))
    }
}
