use async_trait::async_trait;
use models::{role, user};
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set, TransactionTrait};
use tracing::debug;

use crate::clinic::repo::seaorm::persist;
use crate::errors::ServiceError;
use crate::users::domain::{Role, User};
use crate::users::repository::UserRepository;

pub struct SeaOrmUserRepository {
    pub db: DatabaseConnection,
}

impl SeaOrmUserRepository {
    pub fn new(db: DatabaseConnection) -> Self { Self { db } }
}

#[async_trait]
impl UserRepository for SeaOrmUserRepository {
    async fn find_by_username(&self, username: &str) -> Result<Option<User>, ServiceError> {
        let Some(u) = user::Entity::find_by_id(username.to_string()).one(&self.db).await? else {
            return Ok(None);
        };
        let roles = role::Entity::find()
            .filter(role::Column::Username.eq(username))
            .order_by_asc(role::Column::Id)
            .all(&self.db)
            .await?
            .into_iter()
            .map(|r| Role { id: Some(r.id), name: r.role, user: Some(r.username) })
            .collect();
        Ok(Some(User { username: u.username, password: u.password, enabled: u.enabled, roles: Some(roles) }))
    }

    /// One transaction: upsert the user row, drop its old roles, insert the new ones.
    /// Any error returns before `commit`, and the dropped transaction rolls back.
    async fn save(&self, u: &mut User) -> Result<(), ServiceError> {
        let txn = self.db.begin().await?;
        let exists = user::Entity::find_by_id(u.username.clone()).one(&txn).await?.is_some();
        let am = user::ActiveModel {
            username: Set(u.username.clone()),
            password: Set(u.password.clone()),
            enabled: Set(u.enabled),
        };
        persist(&txn, am, exists).await?;

        role::Entity::delete_many()
            .filter(role::Column::Username.eq(u.username.clone()))
            .exec(&txn)
            .await?;
        for r in u.roles.iter_mut().flatten() {
            let owner = r.user.clone().unwrap_or_else(|| u.username.clone());
            let stored = persist(
                &txn,
                role::ActiveModel { username: Set(owner), role: Set(r.name.clone()), ..Default::default() },
                false,
            )
            .await?;
            r.id = Some(stored.id);
        }
        txn.commit().await?;
        debug!(username = %u.username, "user row and roles written");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::get_db;

    fn user(roles: Vec<Role>) -> User {
        User { username: "admin".into(), password: "admin".into(), enabled: true, roles: Some(roles) }
    }

    #[tokio::test]
    async fn save_then_load() {
        let repo = SeaOrmUserRepository::new(get_db().await.unwrap());
        let mut u = user(vec![Role::named("ROLE_OWNER_ADMIN"), Role::named("ROLE_VET_ADMIN")]);
        repo.save(&mut u).await.unwrap();
        assert!(u.roles.iter().flatten().all(|r| r.id.is_some()));

        let loaded = repo.find_by_username("admin").await.unwrap().unwrap();
        let names: Vec<_> = loaded.roles.iter().flatten().map(|r| r.name.as_str()).collect();
        assert_eq!(names, ["ROLE_OWNER_ADMIN", "ROLE_VET_ADMIN"]);
        assert!(loaded.roles.iter().flatten().all(|r| r.user.as_deref() == Some("admin")));
        assert!(repo.find_by_username("nobody").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn resave_replaces_roles() {
        let repo = SeaOrmUserRepository::new(get_db().await.unwrap());
        repo.save(&mut user(vec![Role::named("ROLE_A"), Role::named("ROLE_B")])).await.unwrap();
        let mut again = user(vec![Role::named("ROLE_C")]);
        again.enabled = false;
        repo.save(&mut again).await.unwrap();

        let loaded = repo.find_by_username("admin").await.unwrap().unwrap();
        assert!(!loaded.enabled);
        assert_eq!(loaded.roles.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn duplicate_roles_are_a_conflict() {
        let repo = SeaOrmUserRepository::new(get_db().await.unwrap());
        let mut u = user(vec![Role::named("ROLE_ADMIN"), Role::named("ROLE_ADMIN")]);
        assert!(matches!(repo.save(&mut u).await, Err(ServiceError::Conflict(_))));
        assert!(repo.find_by_username("admin").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn foreign_role_saved_twice_is_a_conflict() {
        let repo = SeaOrmUserRepository::new(get_db().await.unwrap());
        repo.save(&mut user(vec![Role::named("ROLE_ADMIN")])).await.unwrap();
        let shared = Role { id: None, name: "ROLE_SHARED".into(), user: Some("admin".into()) };
        let mut other = User { username: "clerk".into(), password: "pw".into(), enabled: true, roles: Some(vec![shared]) };
        repo.save(&mut other).await.unwrap();
        assert!(matches!(repo.save(&mut other).await, Err(ServiceError::Conflict(_))));

        let admin = repo.find_by_username("admin").await.unwrap().unwrap();
        assert_eq!(admin.roles.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn failed_save_leaves_nothing_behind() {
        let repo = SeaOrmUserRepository::new(get_db().await.unwrap());
        // The second role points at a user that does not exist, so its insert trips the foreign key.
        let ghost = Role { id: None, name: "ROLE_GHOST".into(), user: Some("ghost".into()) };
        let mut u = user(vec![Role::named("ROLE_ADMIN"), ghost]);
        assert!(matches!(repo.save(&mut u).await, Err(ServiceError::Conflict(_))));

        assert!(repo.find_by_username("admin").await.unwrap().is_none());
        let orphans = role::Entity::find().all(&repo.db).await.unwrap();
        assert!(orphans.is_empty());
    }
}
