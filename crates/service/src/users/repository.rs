use async_trait::async_trait;

use super::domain::User;
use crate::errors::ServiceError;

/// Persistence for users and their roles.
#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn find_by_username(&self, username: &str) -> Result<Option<User>, ServiceError>;
    /// Upsert the user and replace its roles atomically; fills in role ids.
    ///
    /// Only roles owned by `user` are cleared before the insert. A role whose
    /// back-reference names another user is stored under that user and is not
    /// cleared by a later save of `user`, so saving the same foreign role again
    /// hits the `(username, role)` unique key and fails with
    /// [`ServiceError::Conflict`].
    async fn save(&self, user: &mut User) -> Result<(), ServiceError>;
}

/// Simple in-memory mock repository for tests
pub mod mock {
    use super::*;
    use std::collections::HashMap;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use tokio::sync::Mutex;

    #[derive(Default)]
    pub struct MockUserRepository {
        users: Mutex<HashMap<String, User>>,
        next_role_id: Mutex<i32>,
        saves: AtomicUsize,
    }

    impl MockUserRepository {
        /// Number of `save` calls that reached the repository.
        pub fn save_calls(&self) -> usize { self.saves.load(Ordering::SeqCst) }
    }

    #[async_trait]
    impl UserRepository for MockUserRepository {
        async fn find_by_username(&self, username: &str) -> Result<Option<User>, ServiceError> {
            Ok(self.users.lock().await.get(username).cloned())
        }

        async fn save(&self, user: &mut User) -> Result<(), ServiceError> {
            self.saves.fetch_add(1, Ordering::SeqCst);
            let mut next = self.next_role_id.lock().await;
            for role in user.roles.iter_mut().flatten() {
                *next += 1;
                role.id = Some(*next);
            }
            self.users.lock().await.insert(user.username.clone(), user.clone());
            Ok(())
        }
    }
}
