use async_trait::async_trait;
use models::{owner, pet, pet_type, specialty, vet, vet_specialty, visit};
use sea_orm::{
    ActiveModelBehavior, ActiveModelTrait, ColumnTrait, ConnectionTrait, DatabaseConnection, DbErr, EntityTrait,
    IntoActiveModel, QueryFilter, QueryOrder, Set, TransactionTrait,
};
use tracing::debug;

use crate::clinic::domain::{Owner, Pet, PetType, Specialty, Vet, Visit};
use crate::clinic::repository::CrudRepository;
use crate::errors::ServiceError;

/// SeaORM-backed repository; one value serves every clinic entity.
#[derive(Clone)]
pub struct SeaOrmRepository {
    pub db: DatabaseConnection,
}

impl SeaOrmRepository {
    pub fn new(db: DatabaseConnection) -> Self { Self { db } }
}

/// Update when the row already exists, insert (keeping a caller-chosen id) otherwise.
pub(crate) async fn persist<A, C>(db: &C, model: A, exists: bool) -> Result<<A::Entity as EntityTrait>::Model, DbErr>
where
    A: ActiveModelTrait + ActiveModelBehavior + Send + 'static,
    <A::Entity as EntityTrait>::Model: IntoActiveModel<A>,
    C: ConnectionTrait,
{
    if exists { model.update(db).await } else { model.insert(db).await }
}

fn key(id: Option<i32>) -> sea_orm::ActiveValue<i32> {
    match id {
        Some(id) => Set(id),
        None => sea_orm::ActiveValue::NotSet,
    }
}

fn owner_from(m: owner::Model) -> Owner {
    Owner {
        id: Some(m.id),
        first_name: m.first_name,
        last_name: m.last_name,
        address: m.address,
        city: m.city,
        telephone: m.telephone,
    }
}

fn pet_type_from(m: pet_type::Model) -> PetType { PetType { id: Some(m.id), name: m.name } }

fn specialty_from(m: specialty::Model) -> Specialty { Specialty { id: Some(m.id), name: m.name } }

fn pet_from(m: pet::Model, kind: Option<pet_type::Model>) -> Pet {
    let pet_type = kind.map(pet_type_from).unwrap_or(PetType { id: Some(m.type_id), name: String::new() });
    Pet { id: Some(m.id), name: Some(m.name), birth_date: m.birth_date, owner_id: m.owner_id, pet_type }
}

fn visit_from(m: visit::Model) -> Visit {
    Visit { id: Some(m.id), pet_id: m.pet_id, date: m.visit_date, description: m.description }
}

fn vet_from(m: vet::Model, specialties: Vec<specialty::Model>) -> Vet {
    Vet {
        id: Some(m.id),
        first_name: m.first_name,
        last_name: m.last_name,
        specialties: specialties.into_iter().map(specialty_from).collect(),
    }
}

#[async_trait]
impl CrudRepository<Owner> for SeaOrmRepository {
    async fn find_by_id(&self, id: i32) -> Result<Option<Owner>, ServiceError> {
        Ok(owner::Entity::find_by_id(id).one(&self.db).await?.map(owner_from))
    }

    async fn find_all(&self) -> Result<Vec<Owner>, ServiceError> {
        let rows = owner::Entity::find().order_by_asc(owner::Column::Id).all(&self.db).await?;
        Ok(rows.into_iter().map(owner_from).collect())
    }

    async fn save(&self, o: Owner) -> Result<Owner, ServiceError> {
        let exists = match o.id {
            Some(id) => owner::Entity::find_by_id(id).one(&self.db).await?.is_some(),
            None => false,
        };
        let am = owner::ActiveModel {
            id: key(o.id),
            first_name: Set(o.first_name),
            last_name: Set(o.last_name),
            address: Set(o.address),
            city: Set(o.city),
            telephone: Set(o.telephone),
        };
        Ok(owner_from(persist(&self.db, am, exists).await?))
    }

    async fn delete(&self, id: i32) -> Result<bool, ServiceError> {
        Ok(owner::Entity::delete_by_id(id).exec(&self.db).await?.rows_affected > 0)
    }
}

#[async_trait]
impl CrudRepository<PetType> for SeaOrmRepository {
    async fn find_by_id(&self, id: i32) -> Result<Option<PetType>, ServiceError> {
        Ok(pet_type::Entity::find_by_id(id).one(&self.db).await?.map(pet_type_from))
    }

    async fn find_all(&self) -> Result<Vec<PetType>, ServiceError> {
        let rows = pet_type::Entity::find().order_by_asc(pet_type::Column::Id).all(&self.db).await?;
        Ok(rows.into_iter().map(pet_type_from).collect())
    }

    async fn save(&self, t: PetType) -> Result<PetType, ServiceError> {
        let exists = match t.id {
            Some(id) => pet_type::Entity::find_by_id(id).one(&self.db).await?.is_some(),
            None => false,
        };
        let am = pet_type::ActiveModel { id: key(t.id), name: Set(t.name) };
        Ok(pet_type_from(persist(&self.db, am, exists).await?))
    }

    async fn delete(&self, id: i32) -> Result<bool, ServiceError> {
        Ok(pet_type::Entity::delete_by_id(id).exec(&self.db).await?.rows_affected > 0)
    }
}

#[async_trait]
impl CrudRepository<Pet> for SeaOrmRepository {
    async fn find_by_id(&self, id: i32) -> Result<Option<Pet>, ServiceError> {
        let row = pet::Entity::find_by_id(id).find_also_related(pet_type::Entity).one(&self.db).await?;
        Ok(row.map(|(p, t)| pet_from(p, t)))
    }

    async fn find_all(&self) -> Result<Vec<Pet>, ServiceError> {
        let rows = pet::Entity::find()
            .find_also_related(pet_type::Entity)
            .order_by_asc(pet::Column::Id)
            .all(&self.db)
            .await?;
        Ok(rows.into_iter().map(|(p, t)| pet_from(p, t)).collect())
    }

    async fn save(&self, p: Pet) -> Result<Pet, ServiceError> {
        let type_id = p.pet_type.id.ok_or_else(|| ServiceError::validation("type.id is required"))?;
        let exists = match p.id {
            Some(id) => pet::Entity::find_by_id(id).one(&self.db).await?.is_some(),
            None => false,
        };
        let am = pet::ActiveModel {
            id: key(p.id),
            name: Set(p.name.clone().unwrap_or_default()),
            birth_date: Set(p.birth_date),
            type_id: Set(type_id),
            owner_id: Set(p.owner_id),
        };
        let saved = persist(&self.db, am, exists).await?;
        debug!(pet_id = saved.id, owner_id = saved.owner_id, "pet row written");
        Ok(Pet { id: Some(saved.id), ..p })
    }

    async fn delete(&self, id: i32) -> Result<bool, ServiceError> {
        Ok(pet::Entity::delete_by_id(id).exec(&self.db).await?.rows_affected > 0)
    }
}

#[async_trait]
impl CrudRepository<Visit> for SeaOrmRepository {
    async fn find_by_id(&self, id: i32) -> Result<Option<Visit>, ServiceError> {
        Ok(visit::Entity::find_by_id(id).one(&self.db).await?.map(visit_from))
    }

    async fn find_all(&self) -> Result<Vec<Visit>, ServiceError> {
        let rows = visit::Entity::find().order_by_asc(visit::Column::Id).all(&self.db).await?;
        Ok(rows.into_iter().map(visit_from).collect())
    }

    async fn save(&self, v: Visit) -> Result<Visit, ServiceError> {
        let exists = match v.id {
            Some(id) => visit::Entity::find_by_id(id).one(&self.db).await?.is_some(),
            None => false,
        };
        let am = visit::ActiveModel {
            id: key(v.id),
            pet_id: Set(v.pet_id),
            visit_date: Set(v.date),
            description: Set(v.description),
        };
        Ok(visit_from(persist(&self.db, am, exists).await?))
    }

    async fn delete(&self, id: i32) -> Result<bool, ServiceError> {
        Ok(visit::Entity::delete_by_id(id).exec(&self.db).await?.rows_affected > 0)
    }
}

#[async_trait]
impl CrudRepository<Specialty> for SeaOrmRepository {
    async fn find_by_id(&self, id: i32) -> Result<Option<Specialty>, ServiceError> {
        Ok(specialty::Entity::find_by_id(id).one(&self.db).await?.map(specialty_from))
    }

    async fn find_all(&self) -> Result<Vec<Specialty>, ServiceError> {
        let rows = specialty::Entity::find().order_by_asc(specialty::Column::Id).all(&self.db).await?;
        Ok(rows.into_iter().map(specialty_from).collect())
    }

    async fn save(&self, s: Specialty) -> Result<Specialty, ServiceError> {
        let exists = match s.id {
            Some(id) => specialty::Entity::find_by_id(id).one(&self.db).await?.is_some(),
            None => false,
        };
        let am = specialty::ActiveModel { id: key(s.id), name: Set(s.name) };
        Ok(specialty_from(persist(&self.db, am, exists).await?))
    }

    async fn delete(&self, id: i32) -> Result<bool, ServiceError> {
        Ok(specialty::Entity::delete_by_id(id).exec(&self.db).await?.rows_affected > 0)
    }
}

#[async_trait]
impl CrudRepository<Vet> for SeaOrmRepository {
    async fn find_by_id(&self, id: i32) -> Result<Option<Vet>, ServiceError> {
        let rows = vet::Entity::find_by_id(id).find_with_related(specialty::Entity).all(&self.db).await?;
        Ok(rows.into_iter().next().map(|(v, s)| vet_from(v, s)))
    }

    async fn find_all(&self) -> Result<Vec<Vet>, ServiceError> {
        let rows = vet::Entity::find().find_with_related(specialty::Entity).all(&self.db).await?;
        Ok(rows.into_iter().map(|(v, s)| vet_from(v, s)).collect())
    }

    /// Writes the vet row and replaces its specialty links in one transaction.
    async fn save(&self, v: Vet) -> Result<Vet, ServiceError> {
        let txn = self.db.begin().await?;
        let exists = match v.id {
            Some(id) => vet::Entity::find_by_id(id).one(&txn).await?.is_some(),
            None => false,
        };
        let am = vet::ActiveModel {
            id: key(v.id),
            first_name: Set(v.first_name.clone()),
            last_name: Set(v.last_name.clone()),
        };
        let saved = persist(&txn, am, exists).await?;

        vet_specialty::Entity::delete_many()
            .filter(vet_specialty::Column::VetId.eq(saved.id))
            .exec(&txn)
            .await?;
        let links: Vec<vet_specialty::ActiveModel> = v
            .specialties
            .iter()
            .filter_map(|s| s.id)
            .map(|specialty_id| vet_specialty::ActiveModel { vet_id: Set(saved.id), specialty_id: Set(specialty_id) })
            .collect();
        if !links.is_empty() {
            vet_specialty::Entity::insert_many(links).exec_without_returning(&txn).await?;
        }
        txn.commit().await?;

        // Reload so specialty names reflect the stored rows.
        CrudRepository::<Vet>::find_by_id(self, saved.id)
            .await?
            .ok_or_else(|| ServiceError::not_found("vet", saved.id))
    }

    async fn delete(&self, id: i32) -> Result<bool, ServiceError> {
        Ok(vet::Entity::delete_by_id(id).exec(&self.db).await?.rows_affected > 0)
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;
    use crate::test_support::get_db;

    async fn repo() -> SeaOrmRepository { SeaOrmRepository::new(get_db().await.unwrap()) }

    #[tokio::test]
    async fn seeded_rows_are_readable() {
        let repo = repo().await;
        let types: Vec<PetType> = repo.find_all().await.unwrap();
        assert_eq!(types.len(), 6);
        assert_eq!(types[0].name, "cat");
        let vets: Vec<Vet> = repo.find_all().await.unwrap();
        assert_eq!(vets.len(), 6);
        assert!(vets.iter().any(|v| !v.specialties.is_empty()));
    }

    #[tokio::test]
    async fn pet_and_visit_round_trip() {
        let repo = repo().await;
        let pet = Pet {
            id: None,
            name: Some("Rosy".into()),
            birth_date: NaiveDate::from_ymd_opt(2019, 4, 12).unwrap(),
            owner_id: 1,
            pet_type: PetType { id: Some(2), name: String::new() },
        };
        let saved = repo.save(pet).await.unwrap();
        let id = saved.id.unwrap();
        let loaded: Pet = repo.find_by_id(id).await.unwrap().unwrap();
        assert_eq!(loaded.name.as_deref(), Some("Rosy"));
        assert_eq!(loaded.pet_type.name, "dog");

        let visit = Visit {
            id: None,
            pet_id: id,
            date: NaiveDate::from_ymd_opt(2024, 2, 29).unwrap(),
            description: None,
        };
        let visit = repo.save(visit).await.unwrap();
        let loaded: Visit = repo.find_by_id(visit.id.unwrap()).await.unwrap().unwrap();
        assert_eq!(loaded, visit);

        assert!(CrudRepository::<Pet>::delete(&repo, id).await.unwrap());
        assert!(CrudRepository::<Visit>::find_by_id(&repo, visit.id.unwrap()).await.unwrap().is_none());
        assert!(!CrudRepository::<Pet>::delete(&repo, id).await.unwrap());
    }

    #[tokio::test]
    async fn vet_specialties_are_replaced() {
        let repo = repo().await;
        let vet = Vet {
            id: None,
            first_name: "James".into(),
            last_name: "Herriot".into(),
            specialties: vec![Specialty { id: Some(1), name: String::new() }, Specialty { id: Some(2), name: String::new() }],
        };
        let mut saved = repo.save(vet).await.unwrap();
        assert_eq!(saved.specialties.len(), 2);
        assert!(saved.specialties.iter().all(|s| !s.name.is_empty()));

        saved.specialties.truncate(1);
        let updated = repo.save(saved.clone()).await.unwrap();
        assert_eq!(updated.id, saved.id);
        assert_eq!(updated.specialties.len(), 1);
    }

    #[tokio::test]
    async fn update_keeps_id() {
        let repo = repo().await;
        let mut owner: Owner = repo.find_by_id(1).await.unwrap().unwrap();
        owner.city = "Monona".into();
        let saved = repo.save(owner).await.unwrap();
        assert_eq!(saved.id, Some(1));
        let owners: Vec<Owner> = repo.find_all().await.unwrap();
        assert_eq!(owners.iter().filter(|o| o.city == "Monona").count(), 1);
    }
}
