//! Sample data: pet types, specialties, vets and a handful of owners.
//!
//! Rows are inserted without explicit ids so auto-increment sequences stay in step.
use sea_orm_migration::prelude::*;
use sea_orm_migration::sea_orm::ConnectionTrait;

use crate::m20240101_000001_create_owners::Owners;
use crate::m20240101_000002_create_types::Types;
use crate::m20240101_000005_create_vets::{Specialties, VetSpecialties, Vets};

const PET_TYPES: [&str; 6] = ["cat", "dog", "lizard", "snake", "bird", "hamster"];
const SPECIALTIES: [&str; 3] = ["radiology", "surgery", "dentistry"];
const VETS: [(&str, &str); 6] = [
    ("James", "Carter"),
    ("Helen", "Leary"),
    ("Linda", "Douglas"),
    ("Rafael", "Ortega"),
    ("Henry", "Stevens"),
    ("Sharon", "Jenkins"),
];
/// (vet, specialty) positions in `VETS`/`SPECIALTIES`, 1-based.
const VET_SPECIALTIES: [(i32, i32); 5] = [(2, 1), (3, 2), (3, 3), (4, 2), (5, 1)];
const OWNERS: [(&str, &str, &str, &str, &str); 4] = [
    ("George", "Franklin", "110 W. Liberty St.", "Madison", "6085551023"),
    ("Betty", "Davis", "638 Cardinal Ave.", "Sun Prairie", "6085551749"),
    ("Eduardo", "Rodriquez", "2693 Commerce St.", "McFarland", "6085558763"),
    ("Harold", "Davis", "563 Friendly St.", "Windsor", "6085553198"),
];

#[derive(DeriveMigrationName)]
pub struct Migration;

async fn exec(manager: &SchemaManager<'_>, stmt: &InsertStatement) -> Result<(), DbErr> {
    let db = manager.get_connection();
    db.execute(db.get_database_backend().build(stmt)).await?;
    Ok(())
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let mut types = Query::insert();
        types.into_table(Types::Table).columns([Types::Name]);
        for name in PET_TYPES {
            types.values_panic([name.into()]);
        }
        exec(manager, &types).await?;

        let mut specialties = Query::insert();
        specialties.into_table(Specialties::Table).columns([Specialties::Name]);
        for name in SPECIALTIES {
            specialties.values_panic([name.into()]);
        }
        exec(manager, &specialties).await?;

        let mut vets = Query::insert();
        vets.into_table(Vets::Table).columns([Vets::FirstName, Vets::LastName]);
        for (first, last) in VETS {
            vets.values_panic([first.into(), last.into()]);
        }
        exec(manager, &vets).await?;

        let mut links = Query::insert();
        links.into_table(VetSpecialties::Table).columns([VetSpecialties::VetId, VetSpecialties::SpecialtyId]);
        for (vet, specialty) in VET_SPECIALTIES {
            links.values_panic([vet.into(), specialty.into()]);
        }
        exec(manager, &links).await?;

        let mut owners = Query::insert();
        owners.into_table(Owners::Table).columns([
            Owners::FirstName,
            Owners::LastName,
            Owners::Address,
            Owners::City,
            Owners::Telephone,
        ]);
        for (first, last, address, city, telephone) in OWNERS {
            owners.values_panic([first.into(), last.into(), address.into(), city.into(), telephone.into()]);
        }
        exec(manager, &owners).await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let db = manager.get_connection();
        let backend = db.get_database_backend();
        let deletes = [
            Query::delete()
                .from_table(Owners::Table)
                .and_where(Expr::col(Owners::Telephone).is_in(OWNERS.map(|o| o.4)))
                .to_owned(),
            Query::delete()
                .from_table(Vets::Table)
                .and_where(Expr::col(Vets::LastName).is_in(VETS.map(|v| v.1)))
                .to_owned(),
            Query::delete()
                .from_table(Specialties::Table)
                .and_where(Expr::col(Specialties::Name).is_in(SPECIALTIES))
                .to_owned(),
            Query::delete()
                .from_table(Types::Table)
                .and_where(Expr::col(Types::Name).is_in(PET_TYPES))
                .to_owned(),
        ];
        for stmt in &deletes {
            db.execute(backend.build(stmt)).await?;
        }
        Ok(())
    }
}
