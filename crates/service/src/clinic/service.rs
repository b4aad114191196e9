use std::sync::Arc;

use sea_orm::DatabaseConnection;
use tracing::{info, instrument, warn};

use super::domain::{DomainEntity, Owner, Pet, PetType, Specialty, Vet, Visit};
use super::repo::SeaOrmRepository;
use super::repository::{mock::InMemoryRepository, CrudRepository};
use crate::errors::ServiceError;

/// Generic CRUD rules shared by every clinic entity.
pub struct EntityService<T: DomainEntity> {
    repo: Arc<dyn CrudRepository<T>>,
}

impl<T: DomainEntity> Clone for EntityService<T> {
    fn clone(&self) -> Self { Self { repo: self.repo.clone() } }
}

impl<T: DomainEntity> EntityService<T> {
    pub fn new(repo: Arc<dyn CrudRepository<T>>) -> Self { Self { repo } }

    #[instrument(skip(self), fields(kind = T::KIND))]
    pub async fn find(&self, id: i32) -> Result<T, ServiceError> {
        self.repo.find_by_id(id).await?.ok_or_else(|| ServiceError::not_found(T::KIND, id))
    }

    pub async fn find_all(&self) -> Result<Vec<T>, ServiceError> { self.repo.find_all().await }

    /// Validate, drop any client-supplied id and insert.
    #[instrument(skip(self, entity), fields(kind = T::KIND))]
    pub async fn create(&self, mut entity: T) -> Result<T, ServiceError> {
        entity.validate()?;
        entity.set_id(None);
        let saved = self.repo.save(entity).await?;
        info!(kind = T::KIND, id = ?saved.id(), "created");
        Ok(saved)
    }

    /// Validate and overwrite the row stored under `id`.
    #[instrument(skip(self, entity), fields(kind = T::KIND))]
    pub async fn update(&self, id: i32, mut entity: T) -> Result<T, ServiceError> {
        entity.validate()?;
        if self.repo.find_by_id(id).await?.is_none() {
            return Err(ServiceError::not_found(T::KIND, id));
        }
        entity.set_id(Some(id));
        let saved = self.repo.save(entity).await?;
        info!(kind = T::KIND, id, "updated");
        Ok(saved)
    }

    #[instrument(skip(self), fields(kind = T::KIND))]
    pub async fn delete(&self, id: i32) -> Result<(), ServiceError> {
        if !self.repo.delete(id).await? {
            return Err(ServiceError::not_found(T::KIND, id));
        }
        info!(kind = T::KIND, id, "deleted");
        Ok(())
    }

    async fn lookup(&self, id: i32) -> Result<Option<T>, ServiceError> { self.repo.find_by_id(id).await }
}

/// Repository set backing a [`ClinicService`].
#[derive(Clone)]
pub struct ClinicRepositories {
    pub owners: Arc<dyn CrudRepository<Owner>>,
    pub pet_types: Arc<dyn CrudRepository<PetType>>,
    pub pets: Arc<dyn CrudRepository<Pet>>,
    pub visits: Arc<dyn CrudRepository<Visit>>,
    pub specialties: Arc<dyn CrudRepository<Specialty>>,
    pub vets: Arc<dyn CrudRepository<Vet>>,
}

impl ClinicRepositories {
    pub fn in_memory() -> Self {
        Self {
            owners: Arc::new(InMemoryRepository::<Owner>::default()),
            pet_types: Arc::new(InMemoryRepository::<PetType>::default()),
            pets: Arc::new(InMemoryRepository::<Pet>::default()),
            visits: Arc::new(InMemoryRepository::<Visit>::default()),
            specialties: Arc::new(InMemoryRepository::<Specialty>::default()),
            vets: Arc::new(InMemoryRepository::<Vet>::default()),
        }
    }

    pub fn seaorm(db: DatabaseConnection) -> Self {
        let repo = Arc::new(SeaOrmRepository::new(db));
        Self {
            owners: repo.clone(),
            pet_types: repo.clone(),
            pets: repo.clone(),
            visits: repo.clone(),
            specialties: repo.clone(),
            vets: repo,
        }
    }
}

/// Clinic business service, independent of the web framework.
#[derive(Clone)]
pub struct ClinicService {
    pub owners: EntityService<Owner>,
    pub pet_types: EntityService<PetType>,
    pub pets: EntityService<Pet>,
    pub visits: EntityService<Visit>,
    pub specialties: EntityService<Specialty>,
    pub vets: EntityService<Vet>,
}

impl ClinicService {
    pub fn new(repos: ClinicRepositories) -> Self {
        Self {
            owners: EntityService::new(repos.owners),
            pet_types: EntityService::new(repos.pet_types),
            pets: EntityService::new(repos.pets),
            visits: EntityService::new(repos.visits),
            specialties: EntityService::new(repos.specialties),
            vets: EntityService::new(repos.vets),
        }
    }

    pub fn in_memory() -> Self { Self::new(ClinicRepositories::in_memory()) }

    pub fn seaorm(db: DatabaseConnection) -> Self { Self::new(ClinicRepositories::seaorm(db)) }

    /// Owners whose last name starts with `prefix` (case-sensitive).
    #[instrument(skip(self))]
    pub async fn owners_by_last_name(&self, prefix: &str) -> Result<Vec<Owner>, ServiceError> {
        let owners = self.owners.find_all().await?;
        Ok(owners.into_iter().filter(|o| o.last_name.starts_with(prefix)).collect())
    }

    /// Resolve the owner and pet type a pet points at; the stored type replaces the client's copy.
    async fn resolve_references(&self, mut pet: Pet) -> Result<Pet, ServiceError> {
        pet.validate()?;
        if self.owners.lookup(pet.owner_id).await?.is_none() {
            warn!(owner_id = pet.owner_id, "pet references unknown owner");
            return Err(ServiceError::validation(format!("owner {} does not exist", pet.owner_id)));
        }
        let type_id = pet.pet_type.id.ok_or_else(|| ServiceError::validation("type.id is required"))?;
        pet.pet_type = self
            .pet_types
            .lookup(type_id)
            .await?
            .ok_or_else(|| ServiceError::validation(format!("pet type {type_id} does not exist")))?;
        Ok(pet)
    }

    pub async fn create_pet(&self, pet: Pet) -> Result<Pet, ServiceError> {
        let pet = self.resolve_references(pet).await?;
        self.pets.create(pet).await
    }

    pub async fn update_pet(&self, id: i32, pet: Pet) -> Result<Pet, ServiceError> {
        let pet = self.resolve_references(pet).await?;
        self.pets.update(id, pet).await
    }

    async fn check_visit(&self, visit: &Visit) -> Result<(), ServiceError> {
        if self.pets.lookup(visit.pet_id).await?.is_none() {
            return Err(ServiceError::validation(format!("pet {} does not exist", visit.pet_id)));
        }
        Ok(())
    }

    pub async fn create_visit(&self, visit: Visit) -> Result<Visit, ServiceError> {
        self.check_visit(&visit).await?;
        self.visits.create(visit).await
    }

    pub async fn update_visit(&self, id: i32, visit: Visit) -> Result<Visit, ServiceError> {
        self.check_visit(&visit).await?;
        self.visits.update(id, visit).await
    }

    /// Delete a pet type that no pet uses. Pets keep their type, so a type in
    /// use is a `Conflict` and stays stored.
    #[instrument(skip(self))]
    pub async fn delete_pet_type(&self, id: i32) -> Result<(), ServiceError> {
        let in_use = self.pets.find_all().await?.iter().filter(|p| p.pet_type.id == Some(id)).count();
        if in_use > 0 {
            warn!(type_id = id, pets = in_use, "pet type still in use");
            return Err(ServiceError::conflict(format!("pet type {id} is used by {in_use} pet(s)")));
        }
        self.pet_types.delete(id).await
    }

    /// Visits of one pet; `NotFound` when the pet does not exist.
    #[instrument(skip(self))]
    pub async fn visits_for_pet(&self, pet_id: i32) -> Result<Vec<Visit>, ServiceError> {
        self.pets.find(pet_id).await?;
        let visits = self.visits.find_all().await?;
        Ok(visits.into_iter().filter(|v| v.pet_id == pet_id).collect())
    }
}
