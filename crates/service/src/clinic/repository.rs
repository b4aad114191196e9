use async_trait::async_trait;

use super::domain::DomainEntity;
use crate::errors::ServiceError;

/// Persistence collaborator for one clinic entity.
///
/// Lookups of missing rows return `None`/`false`, never an error.
#[async_trait]
pub trait CrudRepository<T: DomainEntity>: Send + Sync {
    async fn find_by_id(&self, id: i32) -> Result<Option<T>, ServiceError>;
    async fn find_all(&self) -> Result<Vec<T>, ServiceError>;
    /// Insert when `id` is unset, update otherwise. Returns the stored entity.
    async fn save(&self, entity: T) -> Result<T, ServiceError>;
    async fn delete(&self, id: i32) -> Result<bool, ServiceError>;
}

/// In-memory repository for tests and local runs without a database.
pub mod mock {
    use super::*;
    use std::collections::BTreeMap;
    use tokio::sync::RwLock;

    struct Table<T> {
        rows: BTreeMap<i32, T>,
        next_id: i32,
    }

    pub struct InMemoryRepository<T> {
        table: RwLock<Table<T>>,
    }

    impl<T> Default for InMemoryRepository<T> {
        fn default() -> Self {
            Self { table: RwLock::new(Table { rows: BTreeMap::new(), next_id: 1 }) }
        }
    }

    #[async_trait]
    impl<T: DomainEntity> CrudRepository<T> for InMemoryRepository<T> {
        async fn find_by_id(&self, id: i32) -> Result<Option<T>, ServiceError> {
            Ok(self.table.read().await.rows.get(&id).cloned())
        }

        async fn find_all(&self) -> Result<Vec<T>, ServiceError> {
            Ok(self.table.read().await.rows.values().cloned().collect())
        }

        async fn save(&self, mut entity: T) -> Result<T, ServiceError> {
            let mut table = self.table.write().await;
            let id = match entity.id() {
                Some(id) => {
                    table.next_id = table.next_id.max(id + 1);
                    id
                }
                None => {
                    let id = table.next_id;
                    table.next_id += 1;
                    id
                }
            };
            entity.set_id(Some(id));
            table.rows.insert(id, entity.clone());
            Ok(entity)
        }

        async fn delete(&self, id: i32) -> Result<bool, ServiceError> {
            Ok(self.table.write().await.rows.remove(&id).is_some())
        }
    }
}
