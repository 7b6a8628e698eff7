use figment::{Figment, providers::{Env, Format, Toml}};
use serde::{Deserialize, Serialize};

pub const DEFAULT_BASE_URL: &str = "http://localhost:8080/api";

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct Config {
    pub api: ApiConfig,
    pub session: SessionConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ApiConfig {
    pub base_url: String,
    pub connect_timeout: u64,
    pub request_timeout: u64,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct SessionConfig {
    /// Sliding validity window for a persisted identity, in minutes.
    pub window_minutes: i64,
    /// Directory holding the persisted session keys, one file per key.
    pub storage_dir: String,
    /// Artificial delay applied to registration, in milliseconds.
    pub register_delay_ms: u64,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct LoggingConfig {
    pub level: String,
    pub json_format: bool,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            connect_timeout: 5,
            request_timeout: 30,
        }
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            window_minutes: 120,
            storage_dir: ".wedplan".to_string(),
            register_delay_ms: 500,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            json_format: false,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api: ApiConfig::default(),
            session: SessionConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

impl Config {
    /// Load configuration from multiple sources in priority order:
    /// 1. Wedplan.toml (base configuration file)
    /// 2. Environment variables (prefixed with WEDPLAN_)
    /// 3. WEDPLAN_API_URL environment variable shortcut for the base URL
    pub fn load() -> Result<Self, figment::Error> {
        let defaults = toml::to_string(&Config::default()).unwrap_or_default();
        let figment = Figment::new()
            // Start with defaults
            .merge(Toml::string(&defaults))
            // Layer on Wedplan.toml if it exists
            .merge(Toml::file("Wedplan.toml"))
            // Layer on environment variables (e.g., WEDPLAN_SESSION_WINDOW_MINUTES)
            .merge(Env::prefixed("WEDPLAN_").split("_"))
            // Special case: WEDPLAN_API_URL maps straight onto api.base_url
            .merge(Env::raw().only(&["WEDPLAN_API_URL"]).map(|_| "api.base_url".into()));

        figment.extract()
    }
}
