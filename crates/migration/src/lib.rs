//! Migrator registering clinic migrations in dependency order.
//! Sample data follows the schema; indexes are applied last.
pub use sea_orm_migration::prelude::*;

mod m20240101_000001_create_owners;
mod m20240101_000002_create_types;
mod m20240101_000003_create_pets;
mod m20240101_000004_create_visits;
mod m20240101_000005_create_vets;
mod m20240101_000006_create_users;
mod m20240101_000007_seed_sample_data;
mod m20240101_000008_add_indexes;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20240101_000001_create_owners::Migration),
            Box::new(m20240101_000002_create_types::Migration),
            Box::new(m20240101_000003_create_pets::Migration),
            Box::new(m20240101_000004_create_visits::Migration),
            Box::new(m20240101_000005_create_vets::Migration),
            Box::new(m20240101_000006_create_users::Migration),
            Box::new(m20240101_000007_seed_sample_data::Migration),
            // Indexes should always be applied last
            Box::new(m20240101_000008_add_indexes::Migration),
        ]
    }
}
