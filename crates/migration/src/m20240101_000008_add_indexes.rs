use sea_orm_migration::prelude::*;

use crate::m20240101_000001_create_owners::Owners;
use crate::m20240101_000003_create_pets::Pets;
use crate::m20240101_000004_create_visits::Visits;
use crate::m20240101_000006_create_users::Roles;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Owners: lookup by last name prefix
        manager
            .create_index(
                Index::create()
                    .name("idx_owners_last_name")
                    .table(Owners::Table)
                    .col(Owners::LastName)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_pets_owner")
                    .table(Pets::Table)
                    .col(Pets::OwnerId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_visits_pet")
                    .table(Visits::Table)
                    .col(Visits::PetId)
                    .to_owned(),
            )
            .await?;

        // Roles: a user holds each role once
        manager
            .create_index(
                Index::create()
                    .name("uniq_roles_username_role")
                    .table(Roles::Table)
                    .col(Roles::Username)
                    .col(Roles::Role)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_index(Index::drop().name("uniq_roles_username_role").table(Roles::Table).to_owned()).await?;
        manager.drop_index(Index::drop().name("idx_visits_pet").table(Visits::Table).to_owned()).await?;
        manager.drop_index(Index::drop().name("idx_pets_owner").table(Pets::Table).to_owned()).await?;
        manager.drop_index(Index::drop().name("idx_owners_last_name").table(Owners::Table).to_owned()).await
    }
}
