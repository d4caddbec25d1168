use std::sync::Arc;

use tracing::{info, instrument};

use super::domain::{CreateQueryInput, SupportQuery, UpdateStatusInput};
use super::repository::QueryRepository;
use crate::errors::ServiceError;

/// Support query business service independent of web framework and storage backend.
pub struct QueryService<R: QueryRepository + ?Sized = dyn QueryRepository> {
    repo: Arc<R>,
}

impl<R: QueryRepository + ?Sized> QueryService<R> {
    pub fn new(repo: Arc<R>) -> Self { Self { repo } }

    /// Open a new query with status `open`.
    ///
    /// # Examples
    /// ```
    /// use service::queries::{CreateQueryInput, InMemoryQueryRepository, QueryService};
    /// use std::sync::Arc;
    /// let svc = QueryService::new(Arc::new(InMemoryQueryRepository::new()));
    /// let q = tokio_test::block_on(svc.create(CreateQueryInput::new("Damaged box", "ORD-1"))).unwrap();
    /// assert_eq!(q.status, "open");
    /// assert_eq!(q.id, 1);
    /// ```
    #[instrument(skip(self, input))]
    pub async fn create(&self, input: CreateQueryInput) -> Result<SupportQuery, ServiceError> {
        let new = input.validate()?;
        let q = self.repo.create(new).await?;
        info!(query_id = q.id, order_id = %q.order_id, "query_created");
        Ok(q)
    }

    pub async fn get(&self, id: i32) -> Result<SupportQuery, ServiceError> {
        self.repo.find_by_id(id).await?.ok_or_else(|| ServiceError::not_found("Query"))
    }

    /// Overwrite the status of an existing query. Repeating the same update is a no-op.
    #[instrument(skip(self, input), fields(query_id = id))]
    pub async fn update_status(&self, id: i32, input: UpdateStatusInput) -> Result<SupportQuery, ServiceError> {
        let status = input.validate()?;
        let q = self
            .repo
            .update_status(id, &status)
            .await?
            .ok_or_else(|| ServiceError::not_found("Query"))?;
        info!(status = %q.status, "query_status_updated");
        Ok(q)
    }
}
