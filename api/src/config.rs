//! Configuration loading for the API binary
//!
//! Values come from three layers, later ones winning:
//! 1. [`AppConfig::from_env`] (plain variables such as `PORT` or `JWT_SECRET`, `.env` included)
//! 2. an optional file named by `KK_CONFIG_FILE` (default `config/kasi-konnect`, any format `config` understands)
//! 3. `KK__SECTION__KEY` overrides, e.g. `KK__SERVER__PORT=8080`

use config::{Config, ConfigError, Environment, File};
use kk_shared::{AppConfig, LoggingConfig};

pub const CONFIG_FILE_VAR: &str = "KK_CONFIG_FILE";
pub const DEFAULT_CONFIG_FILE: &str = "config/kasi-konnect";

pub fn load() -> Result<AppConfig, ConfigError> {
    let path = std::env::var(CONFIG_FILE_VAR).unwrap_or_else(|_| DEFAULT_CONFIG_FILE.to_string());
    load_from(AppConfig::from_env(), &path)
}

/// Overlay the file at `path` and `KK__` variables onto `base`. A missing file is not an error.
pub fn load_from(base: AppConfig, path: &str) -> Result<AppConfig, ConfigError> {
    Config::builder()
        .add_source(Config::try_from(&base)?)
        .add_source(File::with_name(path).required(false))
        .add_source(
            Environment::with_prefix("KK")
                .separator("__")
                .try_parsing(true)
                .list_separator(",")
                .with_list_parse_key("cors.allowed_origins"),
        )
        .build()?
        .try_deserialize()
}

/// env_logger builder for `logging`; `RUST_LOG` still overrides the configured level
pub fn logger_builder(logging: &LoggingConfig) -> env_logger::Builder {
    let mut builder = env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(logging.level.as_str()),
    );
    if !logging.timestamp {
        builder.format_timestamp(None);
    }
    builder
        .format_target(logging.source_location)
        .format_module_path(false);
    builder
}
