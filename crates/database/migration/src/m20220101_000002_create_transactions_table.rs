use super::{m20220101_000001_create_blocks_table::Blocks, MigrationInfo};

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
        let blocks = Alias::new(format!("{}_blocks", MI::namespace()));
        let transactions = Alias::new(format!("{}_transactions", MI::namespace()));

        manager
            .create_table(
                Table::create()
                    .table(transactions.clone())
                    .if_not_exists()
                    .col(binary_len(Transactions::Hash, 32).primary_key())
                    .col(big_integer(Transactions::BlockNumber))
                    .col(binary_len(Transactions::FromAddress, 20))
                    .col(binary_len_null(Transactions::ToAddress, 20))
                    .col(big_integer(Transactions::Gas))
                    .col(string_null(Transactions::GasPrice))
                    .col(string_null(Transactions::MaxFeePerGas))
                    .col(string_null(Transactions::MaxPriorityFeePerGas))
                    .col(text(Transactions::Input))
                    .col(big_integer(Transactions::Nonce))
                    .col(big_integer(Transactions::TransactionIndex))
                    .col(small_integer(Transactions::TransactionType))
                    .col(string(Transactions::Value))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_block_number")
                            .from(transactions.clone(), Transactions::BlockNumber)
                            .to(blocks, Blocks::BlockNumber)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(format!("idx_{}_transactions_block_number", MI::namespace()).as_str())
                    .table(transactions)
                    .col(Transactions::BlockNumber)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(
                Table::drop()
                    .table(Alias::new(format!("{}_transactions", MI::namespace())))
                    .to_owned(),
            )
            .await
    }
}

#[derive(DeriveIden)]
enum Transactions {
    Hash,
    BlockNumber,
    FromAddress,
    ToAddress,
    Gas,
    GasPrice,
    MaxFeePerGas,
    MaxPriorityFeePerGas,
    Input,
    Nonce,
    TransactionIndex,
    TransactionType,
    Value,
}
