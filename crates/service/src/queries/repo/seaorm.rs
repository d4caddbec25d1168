use sea_orm::DatabaseConnection;

use crate::errors::ServiceError;
use crate::queries::domain::{NewQuery, SupportQuery};
use crate::queries::repository::QueryRepository;
use models::support_query;

pub struct SeaOrmQueryRepository {
    pub db: DatabaseConnection,
}

impl SeaOrmQueryRepository {
    pub fn new(db: DatabaseConnection) -> Self { Self { db } }
}

#[async_trait::async_trait]
impl QueryRepository for SeaOrmQueryRepository {
    async fn create(&self, new: NewQuery) -> Result<SupportQuery, ServiceError> {
        let created = support_query::create(&self.db, &new.issue, &new.order_id).await?;
        Ok(created.into())
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<SupportQuery>, ServiceError> {
        let found = support_query::find(&self.db, id).await?;
        Ok(found.map(Into::into))
    }

    async fn update_status(&self, id: i32, status: &str) -> Result<Option<SupportQuery>, ServiceError> {
        let updated = support_query::set_status(&self.db, id, status).await?;
        Ok(updated.map(Into::into))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::get_db;

    #[tokio::test]
    async fn seaorm_repository_round_trip() -> Result<(), anyhow::Error> {
        let repo = SeaOrmQueryRepository::new(get_db().await?);

        let q = repo
            .create(NewQuery { issue: "Temperature alarm in reefer".into(), order_id: "ORD-55".into() })
            .await?;
        assert_eq!(q.status, "open");

        let found = repo.find_by_id(q.id).await?.expect("row exists");
        assert_eq!(found, q);

        let updated = repo.update_status(q.id, "in-progress").await?.expect("row exists");
        assert_eq!(updated.status, "in-progress");
        assert_eq!(updated.order_id, "ORD-55");

        assert!(repo.update_status(q.id + 1000, "closed").await?.is_none());
        Ok(())
    }

    #[tokio::test]
    async fn closed_connection_surfaces_as_db_error() -> Result<(), anyhow::Error> {
        let db = get_db().await?;
        db.clone().close().await?;
        let repo = SeaOrmQueryRepository::new(db);
        let err = repo
            .create(NewQuery { issue: "x".into(), order_id: "y".into() })
            .await
            .unwrap_err();
        assert!(matches!(err, ServiceError::Db(_)));
        Ok(())
    }
}
