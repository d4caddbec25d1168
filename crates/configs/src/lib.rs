use anyhow::Result;
use serde::Deserialize;
use anyhow::anyhow;

pub const DEFAULT_RATES_URL: &str = "https://api.shipping.com/getRates";
pub const DEFAULT_REGION: &str = "us-east-1";

#[derive(Debug, Clone, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub database: DatabaseConfig,
    #[serde(default)]
    pub carrier: CarrierConfig,
    #[serde(default)]
    pub storage: StorageConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default)]
    pub host: String,
    #[serde(default)]
    pub port: u16,
    #[serde(default)]
    pub worker_threads: Option<usize>,
    #[serde(default = "default_frontend_dir")]
    pub frontend_dir: String,
}

/// Blank host and zero port are filled from the environment during normalization.
impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: String::new(),
            port: 0,
            worker_threads: None,
            frontend_dir: default_frontend_dir(),
        }
    }
}

fn default_frontend_dir() -> String { "frontend".into() }

/// Empty `url` means the query collection lives in process memory.
#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    #[serde(default)]
    pub url: String,
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
    #[serde(default = "default_min_connections")]
    pub min_connections: u32,
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_secs: u64,
    #[serde(default = "default_idle_timeout")]
    pub idle_timeout_secs: u64,
    #[serde(default = "default_max_lifetime")]
    pub max_lifetime_secs: u64,
    #[serde(default = "default_acquire_timeout")]
    pub acquire_timeout_secs: u64,
    #[serde(default)]
    pub sqlx_logging: bool,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: String::new(),
            max_connections: default_max_connections(),
            min_connections: default_min_connections(),
            connect_timeout_secs: default_connect_timeout(),
            idle_timeout_secs: default_idle_timeout(),
            max_lifetime_secs: default_max_lifetime(),
            acquire_timeout_secs: default_acquire_timeout(),
            sqlx_logging: false,
        }
    }
}

fn default_max_connections() -> u32 { 10 }
fn default_min_connections() -> u32 { 2 }
fn default_connect_timeout() -> u64 { 30 }
fn default_idle_timeout() -> u64 { 600 }
fn default_max_lifetime() -> u64 { 3600 }
fn default_acquire_timeout() -> u64 { 30 }

/// Empty `rates_url` is filled from `CARRIER_RATES_URL`, then [`DEFAULT_RATES_URL`].
#[derive(Debug, Clone, Deserialize, Default)]
pub struct CarrierConfig {
    #[serde(default)]
    pub rates_url: String,
}

/// Object storage settings. Empty `bucket` selects the in-memory store.
/// Credentials are resolved by the AWS provider chain, never stored here.
/// Unset `force_path_style` means path-style whenever a custom `endpoint` is set.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct StorageConfig {
    #[serde(default)]
    pub bucket: String,
    #[serde(default)]
    pub region: String,
    #[serde(default)]
    pub endpoint: Option<String>,
    #[serde(default)]
    pub force_path_style: Option<bool>,
}

/// `CONFIG_PATH`, or `config.toml` in the working directory.
pub fn config_path() -> String {
    std::env::var("CONFIG_PATH").unwrap_or_else(|_| "config.toml".to_string())
}

pub fn load_default() -> Result<AppConfig> {
    load_from_file(&config_path())
}

pub fn load_from_file(path: &str) -> Result<AppConfig> {
    let content = std::fs::read_to_string(path)?;
    parse(&content)
}

pub fn parse(content: &str) -> Result<AppConfig> {
    let cfg: AppConfig = toml::from_str(content)?;
    Ok(cfg)
}

impl AppConfig {
    /// Load `config.toml` (or `CONFIG_PATH`); a missing file falls back to defaults + env.
    pub fn load_and_validate() -> Result<Self> {
        let mut cfg = if std::path::Path::new(&config_path()).exists() {
            load_default()?
        } else {
            AppConfig::default()
        };
        cfg.normalize_and_validate()?;
        Ok(cfg)
    }

    pub fn normalize_and_validate(&mut self) -> Result<()> {
        self.normalize_and_validate_with(|k| std::env::var(k).ok())
    }

    /// Same as [`normalize_and_validate`](Self::normalize_and_validate) with an injectable env lookup.
    pub fn normalize_and_validate_with<F>(&mut self, env: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        self.server.normalize(&env)?;
        self.database.normalize_from_env(&env);
        self.database.validate()?;
        self.carrier.normalize(&env)?;
        self.storage.normalize(&env);
        Ok(())
    }
}

impl ServerConfig {
    fn normalize<F: Fn(&str) -> Option<String>>(&mut self, env: &F) -> Result<()> {
        if self.host.trim().is_empty() {
            self.host = env("SERVER_HOST").unwrap_or_else(|| "127.0.0.1".to_string());
        }
        if self.port == 0 {
            self.port = match env("PORT") {
                Some(p) => p.parse::<u16>().map_err(|_| anyhow!("PORT must be in 1..=65535, got {p}"))?,
                None => 3000,
            };
        }
        if self.port == 0 {
            return Err(anyhow!("server.port must be in 1..=65535"));
        }
        match self.worker_threads {
            Some(w) if w > 0 => {}
            _ => {
                self.worker_threads = env("TOKIO_WORKER_THREADS")
                    .and_then(|v| v.parse::<usize>().ok())
                    .filter(|w| *w > 0)
                    .or(Some(4));
            }
        }
        if self.frontend_dir.trim().is_empty() {
            self.frontend_dir = default_frontend_dir();
        }
        Ok(())
    }
}

impl DatabaseConfig {
    pub fn normalize_from_env<F: Fn(&str) -> Option<String>>(&mut self, env: &F) {
        if self.url.trim().is_empty() {
            if let Some(url) = env("DATABASE_URL") {
                self.url = url;
            }
        }
    }

    pub fn is_configured(&self) -> bool {
        !self.url.trim().is_empty()
    }

    pub fn validate(&self) -> Result<()> {
        if !self.is_configured() {
            return Ok(());
        }
        let lower = self.url.to_lowercase();
        if !(lower.starts_with("postgresql://") || lower.starts_with("postgres://") || lower.starts_with("sqlite:")) {
            return Err(anyhow!("database.url must start with postgres://, postgresql:// or sqlite:"));
        }
        if self.min_connections == 0 {
            return Err(anyhow!("database.min_connections must be >= 1"));
        }
        if self.max_connections < self.min_connections {
            return Err(anyhow!("database.max_connections must be >= min_connections"));
        }
        if self.connect_timeout_secs == 0 || self.acquire_timeout_secs == 0 {
            return Err(anyhow!("database timeouts must be positive seconds"));
        }
        Ok(())
    }
}

impl CarrierConfig {
    fn normalize<F: Fn(&str) -> Option<String>>(&mut self, env: &F) -> Result<()> {
        if self.rates_url.trim().is_empty() {
            self.rates_url = env("CARRIER_RATES_URL")
                .filter(|u| !u.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_RATES_URL.into());
        }
        if !(self.rates_url.starts_with("http://") || self.rates_url.starts_with("https://")) {
            return Err(anyhow!("carrier.rates_url must start with http(s)"));
        }
        Ok(())
    }
}

impl StorageConfig {
    fn normalize<F: Fn(&str) -> Option<String>>(&mut self, env: &F) {
        if self.bucket.trim().is_empty() {
            self.bucket = env("S3_BUCKET").unwrap_or_default();
        }
        if self.region.trim().is_empty() {
            self.region = env("AWS_REGION")
                .filter(|r| !r.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_REGION.into());
        }
        if self.endpoint.as_deref().map_or(true, |e| e.trim().is_empty()) {
            self.endpoint = env("S3_ENDPOINT").filter(|e| !e.trim().is_empty());
        }
        if self.force_path_style.is_none() {
            self.force_path_style = env("S3_FORCE_PATH_STYLE").and_then(|v| v.trim().parse::<bool>().ok());
        }
    }

    /// Path-style addressing (`endpoint/bucket/key`); the default for custom endpoints such as MinIO.
    pub fn uses_path_style(&self) -> bool {
        self.force_path_style.unwrap_or(self.endpoint.is_some())
    }

    pub fn is_configured(&self) -> bool {
        !self.bucket.trim().is_empty()
    }
}
