use std::{future::Future, net::SocketAddr, sync::Arc};

use axum::Router;
use configs::AppConfig;
use migration::MigratorTrait;
use tower_http::cors::CorsLayer;
use tracing::{info, warn};

use service::{
    carrier::RateClient,
    documents::{DocumentService, MemoryObjectStore, ObjectStore, S3ObjectStore},
    queries::{InMemoryQueryRepository, QueryRepository, QueryService, SeaOrmQueryRepository},
};

use crate::{metrics, routes, state::AppState};

/// Bucket name reported by the in-memory store.
pub const LOCAL_BUCKET: &str = "local-documents";

fn build_cors() -> CorsLayer {
    CorsLayer::very_permissive()
}

fn bind_addr(cfg: &AppConfig) -> anyhow::Result<SocketAddr> {
    Ok(format!("{}:{}", cfg.server.host, cfg.server.port).parse()?)
}

async fn build_object_store(cfg: &AppConfig) -> Arc<dyn ObjectStore> {
    if cfg.storage.is_configured() {
        Arc::new(S3ObjectStore::from_config(&cfg.storage).await)
    } else {
        warn!(bucket = LOCAL_BUCKET, "S3_BUCKET not set; documents are kept in memory");
        Arc::new(MemoryObjectStore::new(LOCAL_BUCKET))
    }
}

async fn build_query_repository(cfg: &AppConfig) -> anyhow::Result<Arc<dyn QueryRepository>> {
    if cfg.database.is_configured() {
        let db = models::db::connect_with_config(&cfg.database).await?;
        migration::Migrator::up(&db, None).await?;
        info!("support_query migrations applied");
        Ok(Arc::new(SeaOrmQueryRepository::new(db)))
    } else {
        warn!("DATABASE_URL not set; queries are kept in memory and lost on restart");
        Ok(Arc::new(InMemoryQueryRepository::new()))
    }
}

/// Wire services to the backends selected by configuration.
pub async fn build_state(cfg: &AppConfig) -> anyhow::Result<AppState> {
    let rates = RateClient::new(cfg.carrier.rates_url.clone())?;
    let documents = DocumentService::new(build_object_store(cfg).await);
    let queries = QueryService::new(build_query_repository(cfg).await?);
    info!(rates_url = %cfg.carrier.rates_url, bucket = %documents.bucket(), "services ready");
    Ok(AppState::new(rates, documents, queries))
}

pub fn build_app(state: AppState, cfg: &AppConfig) -> Router {
    metrics::init();
    routes::build_router(state, build_cors(), &cfg.server.frontend_dir)
}

/// Build the app and serve until `shutdown` resolves.
pub async fn run_with_shutdown<F>(cfg: AppConfig, shutdown: F) -> anyhow::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    common::env::ensure_env(&cfg.server.frontend_dir).await?;

    let state = build_state(&cfg).await?;
    let app = build_app(state, &cfg);

    let addr = bind_addr(&cfg)?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(%addr, "export desk listening");
    axum::serve(listener, app).with_graceful_shutdown(shutdown).await?;
    info!("export desk stopped accepting connections");
    Ok(())
}

/// Public entry: serve until Ctrl+C.
pub async fn run(cfg: AppConfig) -> anyhow::Result<()> {
    run_with_shutdown(cfg, async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!(error = %e, "cannot listen for Ctrl+C; serving until killed");
            std::future::pending::<()>().await;
        }
    })
    .await
}
