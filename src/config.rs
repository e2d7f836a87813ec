use config::{Config as ConfigBuilder, ConfigError, Environment, File};
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub database: DatabaseConfig,
    #[serde(default)]
    pub source: SourceConfig,
    #[serde(default)]
    pub plan: PlanConfig,
    #[serde(default)]
    pub observability: ObservabilityConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DatabaseConfig {
    #[serde(default = "default_database_url")]
    pub url: String,
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
}

/// The spreadsheet-backed endpoint the catalog is fetched from.
#[derive(Debug, Deserialize, Clone)]
pub struct SourceConfig {
    #[serde(default = "default_source_url")]
    pub url: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

#[derive(Debug, Deserialize, Clone)]
pub struct PlanConfig {
    /// How many meals one draft contains.
    #[serde(default = "default_plan_size")]
    pub size: usize,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ObservabilityConfig {
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    3000
}

fn default_database_url() -> String {
    "sqlite://mealdraft.db".to_string()
}

fn default_max_connections() -> u32 {
    5
}

fn default_source_url() -> String {
    "https://api.sheety.co/292535b77f38b183d2f3d0036f450436/mealPlanV2/dataEntry".to_string()
}

fn default_timeout_secs() -> u64 {
    10
}

fn default_plan_size() -> usize {
    mealdraft_plan::DEFAULT_PLAN_SIZE
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: default_database_url(),
            max_connections: default_max_connections(),
        }
    }
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            url: default_source_url(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl Default for PlanConfig {
    fn default() -> Self {
        Self {
            size: default_plan_size(),
        }
    }
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

impl Config {
    /// Load configuration from an optional TOML file (default: `config.toml`
    /// next to the binary, if present) with `MEALDRAFT_*` environment
    /// overrides on top, e.g. `MEALDRAFT_SERVER__PORT=8080`.
    pub fn load(path: Option<String>) -> Result<Self, ConfigError> {
        let mut builder = ConfigBuilder::builder();

        builder = match path {
            Some(path) => builder.add_source(File::with_name(&path)),
            None => builder.add_source(File::with_name("config").required(false)),
        };

        builder = builder.add_source(Environment::with_prefix("MEALDRAFT").separator("__"));

        builder.build()?.try_deserialize()
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.database.url.is_empty() {
            return Err("database.url must not be empty".to_string());
        }
        if self.source.url.is_empty() {
            return Err("source.url must not be empty".to_string());
        }
        if self.plan.size == 0 {
            return Err("plan.size must be at least 1".to_string());
        }
        if self.source.timeout_secs == 0 {
            return Err("source.timeout_secs must be at least 1".to_string());
        }
        Ok(())
    }
}
