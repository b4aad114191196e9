//! Schema tests against an in-memory SQLite database.

use chrono::NaiveDate;
use configs::DatabaseConfig;
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, ModelTrait, QueryFilter, Set};

use crate::{db, owner, pet, pet_type, specialty, vet, visit};

async fn setup_test_db() -> anyhow::Result<sea_orm::DatabaseConnection> {
    db::connect(&DatabaseConfig::in_memory()).await
}

#[tokio::test]
async fn migrations_seed_reference_data() -> anyhow::Result<()> {
    let db = setup_test_db().await?;

    let types = pet_type::Entity::find().all(&db).await?;
    assert_eq!(types.len(), 6);
    assert!(types.iter().any(|t| t.name == "hamster"));

    let specialties = specialty::Entity::find().all(&db).await?;
    assert_eq!(specialties.len(), 3);

    let davises = owner::Entity::find()
        .filter(owner::Column::LastName.starts_with("Davis"))
        .all(&db)
        .await?;
    assert_eq!(davises.len(), 2);
    Ok(())
}

#[tokio::test]
async fn pet_relations_resolve() -> anyhow::Result<()> {
    let db = setup_test_db().await?;

    let owner = owner::Entity::find().one(&db).await?.expect("seeded owner");
    let dog = pet_type::Entity::find()
        .filter(pet_type::Column::Name.eq("dog"))
        .one(&db)
        .await?
        .expect("seeded type");

    let created = pet::ActiveModel {
        name: Set("Rosy".into()),
        birth_date: Set(NaiveDate::from_ymd_opt(2019, 4, 12).unwrap()),
        type_id: Set(dog.id),
        owner_id: Set(owner.id),
        ..Default::default()
    }
    .insert(&db)
    .await?;

    let (found, kind) = pet::Entity::find_by_id(created.id)
        .find_also_related(pet_type::Entity)
        .one(&db)
        .await?
        .expect("pet row");
    assert_eq!(found.name, "Rosy");
    assert_eq!(kind.map(|k| k.name), Some("dog".to_string()));

    visit::ActiveModel {
        pet_id: Set(created.id),
        visit_date: Set(NaiveDate::from_ymd_opt(2020, 1, 2).unwrap()),
        description: Set(None),
        ..Default::default()
    }
    .insert(&db)
    .await?;
    let visits = found.find_related(visit::Entity).all(&db).await?;
    assert_eq!(visits.len(), 1);
    assert!(visits[0].description.is_none());
    Ok(())
}

#[tokio::test]
async fn seeded_vets_link_specialties() -> anyhow::Result<()> {
    let db = setup_test_db().await?;
    let vets = vet::Entity::find().find_with_related(specialty::Entity).all(&db).await?;
    assert_eq!(vets.len(), 6);
    let douglas = vets.iter().find(|(v, _)| v.last_name == "Douglas").expect("seeded vet");
    let mut names: Vec<_> = douglas.1.iter().map(|s| s.name.as_str()).collect();
    names.sort();
    assert_eq!(names, ["dentistry", "surgery"]);
    assert!(vets.iter().find(|(v, _)| v.last_name == "Carter").is_some_and(|(_, s)| s.is_empty()));
    Ok(())
}
