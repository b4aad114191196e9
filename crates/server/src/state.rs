use std::sync::Arc;

use sea_orm::DatabaseConnection;
use service::clinic::ClinicService;
use service::users::repo::SeaOrmUserRepository;
use service::users::repository::{mock::MockUserRepository, UserRepository};
use service::users::UserService;

/// Shared handler state, built explicitly at startup.
#[derive(Clone)]
pub struct AppState {
    pub clinic: Arc<ClinicService>,
    pub users: Arc<UserService<dyn UserRepository>>,
}

impl AppState {
    pub fn new(clinic: ClinicService, users: Arc<dyn UserRepository>) -> Self {
        Self { clinic: Arc::new(clinic), users: Arc::new(UserService::new(users)) }
    }

    pub fn seaorm(db: DatabaseConnection) -> Self {
        let users: Arc<dyn UserRepository> = Arc::new(SeaOrmUserRepository::new(db.clone()));
        Self::new(ClinicService::seaorm(db), users)
    }

    /// State with in-memory repositories and no sample data.
    pub fn in_memory() -> Self {
        let users: Arc<dyn UserRepository> = Arc::new(MockUserRepository::default());
        Self::new(ClinicService::in_memory(), users)
    }
}
