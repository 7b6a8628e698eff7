pub mod api;
pub mod config;
pub mod error;
pub mod guard;
pub mod models;
pub mod service;
pub mod session;

#[cfg(test)]
pub mod test_utils;

pub use config::Config;
pub use error::AppError;

use crate::api::RestClient;
use crate::session::{FileStorage, SessionStore, SystemClock};
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

pub fn init_tracing(log_level: &str, json_format: bool) {
    // RUST_LOG still wins for fine-grained control per module, e.g.
    //   RUST_LOG=wedplan::session=debug
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    let subscriber = tracing_subscriber::fmt().with_env_filter(filter).with_target(true).with_line_number(true);

    if json_format {
        subscriber.json().init();
    } else {
        subscriber.init();
    }
}

/// Explicit single-owner context: the one REST client and the one session
/// store, handed to the routing layer and screens instead of living in an
/// ambient global.
pub struct AppContext {
    pub config: Config,
    pub api: Arc<RestClient>,
    pub session: Arc<SessionStore>,
}

impl AppContext {
    pub fn build(config: Config) -> Result<Self, AppError> {
        let api = Arc::new(RestClient::new(&config.api)?);
        let storage = Arc::new(FileStorage::new(config.session.storage_dir.as_str())?);
        let session = Arc::new(SessionStore::new(
            api.clone(),
            storage,
            Arc::new(SystemClock),
            config.session.clone(),
        ));
        Ok(Self { config, api, session })
    }
}

/// App entry: load .env and Wedplan.toml, start logging, build the context.
pub fn bootstrap() -> Result<AppContext, AppError> {
    dotenvy::dotenv().ok();
    let config = Config::load()?;
    init_tracing(&config.logging.level, config.logging.json_format);
    AppContext::build(config)
}
