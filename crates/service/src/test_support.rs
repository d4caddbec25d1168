#![cfg(test)]
use migration::MigratorTrait;
use models::db::connect_with_config;
use sea_orm::DatabaseConnection;

/// Fresh in-memory SQLite database with migrations applied.
/// The pool is pinned to one connection because each sqlite memory connection is a separate database.
pub async fn get_db() -> Result<DatabaseConnection, anyhow::Error> {
    let cfg = configs::DatabaseConfig {
        url: "sqlite::memory:".into(),
        max_connections: 1,
        min_connections: 1,
        ..Default::default()
    };
    let db = connect_with_config(&cfg).await?;
    migration::Migrator::up(&db, None).await?;
    Ok(db)
}
