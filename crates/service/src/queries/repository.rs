use async_trait::async_trait;

use super::domain::{NewQuery, SupportQuery};
use crate::errors::ServiceError;

/// Persistence abstraction for support queries.
#[async_trait]
pub trait QueryRepository: Send + Sync {
    /// Store a new query with the default status and a freshly assigned id.
    async fn create(&self, new: NewQuery) -> Result<SupportQuery, ServiceError>;
    async fn find_by_id(&self, id: i32) -> Result<Option<SupportQuery>, ServiceError>;
    /// Overwrite the status; `Ok(None)` when the id is unknown.
    async fn update_status(&self, id: i32, status: &str) -> Result<Option<SupportQuery>, ServiceError>;
}

/// In-process repository: ids count up from 1 and are never reused.
pub mod memory {
    use super::*;
    use std::collections::BTreeMap;
    use tokio::sync::RwLock;

    use crate::queries::domain::DEFAULT_STATUS;

    #[derive(Default)]
    struct State {
        last_id: i32,
        rows: BTreeMap<i32, SupportQuery>,
    }

    #[derive(Default)]
    pub struct InMemoryQueryRepository {
        state: RwLock<State>,
    }

    impl InMemoryQueryRepository {
        pub fn new() -> Self { Self::default() }

        /// Snapshot in creation order.
        pub async fn all(&self) -> Vec<SupportQuery> {
            self.state.read().await.rows.values().cloned().collect()
        }
    }

    #[async_trait]
    impl QueryRepository for InMemoryQueryRepository {
        async fn create(&self, new: NewQuery) -> Result<SupportQuery, ServiceError> {
            let mut state = self.state.write().await;
            let id = state
                .last_id
                .checked_add(1)
                .ok_or_else(|| ServiceError::Db("query id space exhausted".into()))?;
            state.last_id = id;
            let q = SupportQuery { id, issue: new.issue, order_id: new.order_id, status: DEFAULT_STATUS.to_string() };
            state.rows.insert(id, q.clone());
            Ok(q)
        }

        async fn find_by_id(&self, id: i32) -> Result<Option<SupportQuery>, ServiceError> {
            Ok(self.state.read().await.rows.get(&id).cloned())
        }

        async fn update_status(&self, id: i32, status: &str) -> Result<Option<SupportQuery>, ServiceError> {
            let mut state = self.state.write().await;
            Ok(state.rows.get_mut(&id).map(|q| {
                q.status = status.to_string();
                q.clone()
            }))
        }
    }

}
