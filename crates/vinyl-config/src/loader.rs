//! Configuration loader with layered sources.

use crate::{AppConfig, ConfigValidator, DEFAULT_JWT_SECRET};
use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, Environment, File};
use std::path::Path;
use tracing::{debug, info, warn};
use vinyl_core::VinylError;

/// Flat environment variables honoured on top of every other source,
/// paired with the configuration key each one overrides.
pub const LEGACY_ENV_OVERRIDES: &[(&str, &str)] = &[
    ("DB_DRIVER", "database.driver"),
    ("DB_HOST", "database.host"),
    ("DB_PORT", "database.port"),
    ("DB_USER", "database.user"),
    ("DB_PASSWORD", "database.password"),
    ("DB_NAME", "database.name"),
    ("REDIS_ADDR", "redis.addr"),
    ("JWT_SECRET", "security.jwt_secret"),
];

/// Configuration loaded once at startup from layered sources.
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: AppConfig,
    config_dir: String,
}

impl ConfigLoader {
    /// Creates a new configuration loader.
    ///
    /// Configuration is loaded from multiple sources in order:
    /// 1. `config/default.toml` - Default values
    /// 2. `config/{environment}.toml` - Environment-specific overrides
    /// 3. `config/local.toml` - Local overrides
    /// 4. Environment variables with the `VINYL` prefix (`VINYL__SERVER__PORT`)
    /// 5. Legacy flat variables (`DB_HOST`, `JWT_SECRET`, ...)
    pub fn new(config_dir: impl Into<String>) -> Result<Self, VinylError> {
        let config_dir = config_dir.into();

        // Load .env file if present
        if let Err(e) = dotenvy::dotenv() {
            debug!("No .env file found or error loading it: {}", e);
        }

        let config = load_config_with(&config_dir, |key| std::env::var(key).ok())?;

        Ok(Self { config, config_dir })
    }

    /// Loads configuration from the default location (`./config`).
    pub fn from_default_location() -> Result<Self, VinylError> {
        Self::new("./config")
    }

    /// Returns the loaded configuration.
    #[must_use]
    pub fn get(&self) -> &AppConfig {
        &self.config
    }

    /// Directory the configuration files were read from.
    #[must_use]
    pub fn config_dir(&self) -> &str {
        &self.config_dir
    }
}

/// Loads configuration from `config_dir`, resolving plain environment
/// lookups (environment name, legacy overrides) through `lookup`.
pub fn load_config_with<F>(config_dir: &str, lookup: F) -> Result<AppConfig, VinylError>
where
    F: Fn(&str) -> Option<String>,
{
    let environment = lookup("VINYL_ENVIRONMENT").unwrap_or_else(|| "development".to_string());
    info!("Loading configuration for environment: {}", environment);

    let mut builder = Config::builder();

    for name in ["default", environment.as_str(), "local"] {
        let path = format!("{}/{}.toml", config_dir, name);
        if Path::new(&path).exists() {
            debug!("Loading config from: {}", path);
            builder = builder.add_source(File::with_name(&path).required(false));
        }
    }

    builder = builder.add_source(
        Environment::with_prefix("VINYL")
            .separator("__")
            .try_parsing(true),
    );

    builder = apply_legacy_overrides(builder, &lookup).map_err(config_error_to_vinyl_error)?;

    let app_config: AppConfig = builder
        .build()
        .and_then(|config| config.try_deserialize())
        .map_err(config_error_to_vinyl_error)?;

    validate_config(&app_config)?;

    Ok(app_config)
}

fn apply_legacy_overrides<F>(
    mut builder: ConfigBuilder<DefaultState>,
    lookup: &F,
) -> Result<ConfigBuilder<DefaultState>, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    for (var, key) in LEGACY_ENV_OVERRIDES {
        let value = lookup(var).filter(|v| !v.is_empty());
        if value.is_some() {
            debug!("Applying legacy override {} -> {}", var, key);
        }
        builder = builder.set_override_option(*key, value)?;
    }
    Ok(builder)
}

/// Validates the configuration, failing on the first load with every
/// problem listed.
fn validate_config(config: &AppConfig) -> Result<(), VinylError> {
    if config.app.environment == "production" && config.security.jwt_secret == DEFAULT_JWT_SECRET {
        warn!("Using default JWT secret in production! This is a security risk.");
    }

    ConfigValidator::validate(config).map_err(|errors| {
        let joined = errors
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("; ");
        VinylError::Configuration(joined)
    })
}

fn config_error_to_vinyl_error(err: ConfigError) -> VinylError {
    VinylError::Configuration(err.to_string())
}
