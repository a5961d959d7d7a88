use super::MigrationInfo;

use sea_orm_migration::{prelude::*, schema::*};

pub struct Migration<MI>(std::marker::PhantomData<MI>);

impl<MI> Migration<MI> {
    pub(crate) const fn new() -> Self {
        Self(std::marker::PhantomData)
    }
}

impl<MI> MigrationName for Migration<MI> {
    fn name(&self) -> &str {
        sea_orm_migration::util::get_file_stem(file!())
    }
}

#[allow(elided_lifetimes_in_paths)]
#[async_trait::async_trait]
impl<MI: MigrationInfo> MigrationTrait for Migration<MI> {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Alias::new(format!("{}_blocks", MI::namespace())))
                    .if_not_exists()
                    .col(binary_len(Blocks::Hash, 32).primary_key())
                    .col(big_integer(Blocks::BlockNumber).unique_key())
                    .col(binary_len(Blocks::ParentHash, 32))
                    .col(string(Blocks::Difficulty))
                    .col(string(Blocks::TotalDifficulty))
                    .col(big_integer(Blocks::GasLimit))
                    .col(big_integer(Blocks::GasUsed))
                    .col(big_integer_null(Blocks::BaseFeePerGas))
                    .col(text_null(Blocks::ExtraData))
                    .col(binary_len(Blocks::LogsBloom, 256))
                    .col(binary_len(Blocks::Miner, 20))
                    .col(binary_len(Blocks::Nonce, 8))
                    .col(binary_len(Blocks::ReceiptsRoot, 32))
                    .col(binary_len(Blocks::StateRoot, 32))
                    .col(binary_len(Blocks::TransactionsRoot, 32))
                    .col(binary_len(Blocks::UnclesHash, 32))
                    .col(big_integer(Blocks::Size))
                    .col(big_integer(Blocks::Timestamp))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(
                Table::drop().table(Alias::new(format!("{}_blocks", MI::namespace()))).to_owned(),
            )
            .await
    }
}

#[derive(DeriveIden)]
pub(crate) enum Blocks {
    Hash,
    BlockNumber,
    ParentHash,
    Difficulty,
    TotalDifficulty,
    GasLimit,
    GasUsed,
    BaseFeePerGas,
    ExtraData,
    LogsBloom,
    Miner,
    Nonce,
    ReceiptsRoot,
    StateRoot,
    TransactionsRoot,
    UnclesHash,
    Size,
    Timestamp,
}
