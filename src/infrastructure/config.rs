use serde::Deserialize;
use std::env;
use std::time::Duration;

#[derive(Debug, Deserialize, Clone, Default)]
pub struct Config {
    #[serde(default)]
    pub app: AppConfig,
    #[serde(default)]
    pub database: DatabaseConfig,
    #[serde(default)]
    pub store: StoreConfig,
    #[serde(default)]
    pub graphql: GraphQlConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default)]
    pub cors_origins: Vec<String>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DatabaseConfig {
    #[serde(default)]
    pub url: String,
    #[serde(default = "default_pool_max")]
    pub max_connections: u32,
    #[serde(default = "default_acquire_timeout")]
    pub acquire_timeout_seconds: u64,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: String::new(),
            max_connections: default_pool_max(),
            acquire_timeout_seconds: default_acquire_timeout(),
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct StoreConfig {
    /// `postgres` or `memory`.
    #[serde(default = "default_store_provider")]
    pub provider: String,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct GraphQlConfig {
    /// Serve the GraphiQL IDE on `GET /graphql`.
    #[serde(default)]
    pub graphiql: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            cors_origins: Vec::new(),
        }
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            provider: default_store_provider(),
        }
    }
}

impl StoreConfig {
    pub fn memory() -> Self {
        Self {
            provider: "memory".to_string(),
        }
    }

    pub fn uses_database(&self) -> bool {
        self.provider == "postgres"
    }
}

impl Config {
    pub fn from_env() -> Result<Self, config::ConfigError> {
        let builder = config::Config::builder()
            .add_source(config::File::with_name("config").required(false))
            .add_source(config::Environment::with_prefix("ROSTER").separator("__"));
        let cfg = builder.build()?;
        let mut config: Config = cfg.try_deserialize()?;

        if config.store.uses_database() && config.database.url.trim().is_empty() {
            let database_url = match env::var("ROSTER__DATABASE__URL") {
                Ok(url) if !url.trim().is_empty() => url,
                _ => match env::var("DATABASE_URL") {
                    Ok(url) if !url.trim().is_empty() => url,
                    _ => {
                        return Err(config::ConfigError::Message(
                            "Missing database URL. Set ROSTER__DATABASE__URL or DATABASE_URL."
                                .into(),
                        ));
                    }
                },
            };

            config.database.url = database_url;
        }

        Ok(config)
    }

    /// Configuration for an in-process run backed by the memory store.
    pub fn in_memory() -> Self {
        Self {
            store: StoreConfig::memory(),
            ..Self::default()
        }
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.app.host, self.app.port)
    }

    pub fn acquire_timeout(&self) -> Duration {
        Duration::from_secs(self.database.acquire_timeout_seconds)
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8000
}

fn default_pool_max() -> u32 {
    10
}

fn default_acquire_timeout() -> u64 {
    5
}

fn default_store_provider() -> String {
    "postgres".to_string()
}
