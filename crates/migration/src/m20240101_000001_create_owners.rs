//! Create `owners` table.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Owners::Table)
                    .if_not_exists()
                    .col(pk_auto(Owners::Id))
                    .col(string_len(Owners::FirstName, 30))
                    .col(string_len(Owners::LastName, 30))
                    .col(string_len(Owners::Address, 255))
                    .col(string_len(Owners::City, 80))
                    .col(string_len(Owners::Telephone, 20))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Owners::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
pub(crate) enum Owners { Table, Id, FirstName, LastName, Address, City, Telephone }
