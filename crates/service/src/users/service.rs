use std::collections::HashSet;
use std::sync::Arc;

use tracing::{debug, info, instrument, warn};

use super::domain::User;
use super::repository::UserRepository;
use crate::errors::ServiceError;

pub const ROLE_PREFIX: &str = "ROLE_";

/// User save rules, independent of the web framework.
pub struct UserService<R: UserRepository + ?Sized> {
    repo: Arc<R>,
}

impl<R: UserRepository + ?Sized> UserService<R> {
    pub fn new(repo: Arc<R>) -> Self { Self { repo } }

    /// Normalize roles and persist the user.
    ///
    /// Fails with a validation error, without touching the repository, when
    /// the user has no roles. Role names gain the `ROLE_` prefix when missing,
    /// and roles without an owner are attached to `user`. Roles that end up
    /// with the same owner and name after that are kept once, so `ADMIN` and
    /// `ROLE_ADMIN` in one request store a single `ROLE_ADMIN`. The argument
    /// is updated in place.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    /// use service::users::{UserService, domain::{Role, User}, repository::mock::MockUserRepository};
    /// let svc = UserService::new(Arc::new(MockUserRepository::default()));
    /// let mut user = User { username: "admin".into(), password: "pw".into(), enabled: true, roles: Some(vec![Role::named("ADMIN")]) };
    /// tokio::runtime::Runtime::new().unwrap().block_on(svc.save_user(&mut user)).unwrap();
    /// assert_eq!(user.roles.unwrap()[0].name, "ROLE_ADMIN");
    /// ```
    #[instrument(skip(self, user), fields(username = %user.username))]
    pub async fn save_user(&self, user: &mut User) -> Result<(), ServiceError> {
        let Some(roles) = user.roles.as_mut().filter(|roles| !roles.is_empty()) else {
            warn!("user without roles rejected");
            return Err(ServiceError::validation("User must have at least a role set!"));
        };
        for role in roles.iter_mut() {
            if !role.name.starts_with(ROLE_PREFIX) {
                role.name = format!("{ROLE_PREFIX}{}", role.name);
            }
            if role.user.is_none() {
                role.user = Some(user.username.clone());
            }
        }
        let before = roles.len();
        let mut seen = HashSet::new();
        roles.retain(|role| seen.insert((role.user.clone(), role.name.clone())));
        if roles.len() < before {
            debug!(dropped = before - roles.len(), "duplicate roles merged");
        }
        self.repo.save(user).await?;
        info!(roles = user.roles.as_ref().map_or(0, Vec::len), "user saved");
        Ok(())
    }

    pub async fn find(&self, username: &str) -> Result<User, ServiceError> {
        self.repo
            .find_by_username(username)
            .await?
            .ok_or_else(|| ServiceError::not_found("user", username))
    }
}
