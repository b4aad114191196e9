//! Create `specialties`, `vets` and the `vet_specialties` join table.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Specialties::Table)
                    .if_not_exists()
                    .col(pk_auto(Specialties::Id))
                    .col(string_len(Specialties::Name, 80))
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Vets::Table)
                    .if_not_exists()
                    .col(pk_auto(Vets::Id))
                    .col(string_len(Vets::FirstName, 30))
                    .col(string_len(Vets::LastName, 30))
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(VetSpecialties::Table)
                    .if_not_exists()
                    .col(integer(VetSpecialties::VetId))
                    .col(integer(VetSpecialties::SpecialtyId))
                    .primary_key(
                        Index::create()
                            .col(VetSpecialties::VetId)
                            .col(VetSpecialties::SpecialtyId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_vet_specialties_vets")
                            .from(VetSpecialties::Table, VetSpecialties::VetId)
                            .to(Vets::Table, Vets::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_vet_specialties_specialties")
                            .from(VetSpecialties::Table, VetSpecialties::SpecialtyId)
                            .to(Specialties::Table, Specialties::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(VetSpecialties::Table).to_owned()).await?;
        manager.drop_table(Table::drop().table(Vets::Table).to_owned()).await?;
        manager.drop_table(Table::drop().table(Specialties::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
pub(crate) enum Specialties { Table, Id, Name }

#[derive(DeriveIden)]
pub(crate) enum Vets { Table, Id, FirstName, LastName }

#[derive(DeriveIden)]
pub(crate) enum VetSpecialties { Table, VetId, SpecialtyId }
