//! Environment/runtime helpers
//!
//! Sanity checks to ensure expected directories exist at startup.

use tracing::warn;

/// Warn when the web client assets are missing; the API still works without them.
pub async fn ensure_env(frontend_dir: &str) -> anyhow::Result<()> {
    match tokio::fs::metadata(frontend_dir).await {
        Ok(meta) if meta.is_dir() => Ok(()),
        Ok(_) => Err(anyhow::anyhow!("{frontend_dir} exists but is not a directory")),
        Err(_) => {
            warn!(%frontend_dir, "frontend assets directory not found; web client will 404");
            Ok(())
        }
    }
}
