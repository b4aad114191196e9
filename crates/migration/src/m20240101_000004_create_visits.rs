//! Create `visits` table with FK to `pets`.
use sea_orm_migration::{prelude::*, schema::*};

use crate::m20240101_000003_create_pets::Pets;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Visits::Table)
                    .if_not_exists()
                    .col(pk_auto(Visits::Id))
                    .col(integer(Visits::PetId))
                    .col(date(Visits::VisitDate))
                    // Description is optional on the wire, so the column is nullable
                    .col(string_len_null(Visits::Description, 255))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_visits_pets")
                            .from(Visits::Table, Visits::PetId)
                            .to(Pets::Table, Pets::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Visits::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
pub(crate) enum Visits { Table, Id, PetId, VisitDate, Description }
