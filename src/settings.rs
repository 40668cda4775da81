use ::config::{Config, Environment, File};
use serde::Deserialize;
use std::env;
use thiserror::Error;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: i64 = 5000;
const DEFAULT_DATA_PATH: &str = "datos/SISTEM.xlsx";
const DEFAULT_WORKERS: i64 = 8;
const DEFAULT_LOG_LEVEL: &str = "info";
const CONFIG_FILE: &str = "config/default";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error(transparent)]
    Source(#[from] ::config::ConfigError),
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

/// Runtime settings. Layered as defaults, then `config/default.*`, then
/// `APP__*` environment variables, then a bare `PORT`.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    /// Workbook with the ENVIOS, ENTREGAS, ENTRADAS, DEVOLUCIONES and SALIDAS sheets.
    pub data_path: String,
    /// Size of the blocking worker pool.
    pub workers: usize,
    pub log_level: String,
    pub log_json: bool,
}

impl AppConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.workers == 0 {
            return Err(ConfigError::Invalid("workers must be at least 1".into()));
        }
        if self.data_path.trim().is_empty() {
            return Err(ConfigError::Invalid("data_path must not be empty".into()));
        }
        Ok(())
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

pub fn load_config() -> Result<AppConfig, ConfigError> {
    load_config_with(env::var("PORT").ok())
}

/// `port_override` is what hosting platforms pass in `PORT`.
pub fn load_config_with(port_override: Option<String>) -> Result<AppConfig, ConfigError> {
    let mut builder = Config::builder()
        .set_default("host", DEFAULT_HOST)?
        .set_default("port", DEFAULT_PORT)?
        .set_default("data_path", DEFAULT_DATA_PATH)?
        .set_default("workers", DEFAULT_WORKERS)?
        .set_default("log_level", DEFAULT_LOG_LEVEL)?
        .set_default("log_json", false)?
        .add_source(File::with_name(CONFIG_FILE).required(false))
        .add_source(Environment::with_prefix("APP").separator("__"));

    if let Some(port) = port_override.filter(|p| !p.trim().is_empty()) {
        builder = builder.set_override("port", port.trim().to_string())?;
    }

    let cfg: AppConfig = builder.build()?.try_deserialize()?;
    cfg.validate()?;
    Ok(cfg)
}

/// `RUST_LOG` wins over the configured level when set.
pub fn init_tracing(level: &str, json: bool) {
    use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

    let default_directive = format!("ot_tracker={level}");
    let filter_directive = env::var("RUST_LOG")
        .ok()
        .filter(|s| !s.trim().is_empty())
        .unwrap_or(default_directive);

    let filter = EnvFilter::try_new(filter_directive)
        .unwrap_or_else(|_| EnvFilter::new(format!("ot_tracker={DEFAULT_LOG_LEVEL}")));

    let registry = tracing_subscriber::registry().with(filter);
    let result = if json {
        registry.with(fmt::layer().json()).try_init()
    } else {
        registry.with(fmt::layer()).try_init()
    };

    if let Err(e) = result {
        eprintln!("tracing already initialized: {e}");
    }
}
