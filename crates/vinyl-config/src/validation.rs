//! Configuration validation module.
//!
//! Fails fast on invalid configuration rather than at the first request.

use crate::AppConfig;
use std::fmt;

/// Configuration validation error variants.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigValidationError {
    /// JWT secret is empty.
    EmptyJwtSecret,
    /// Port number is invalid (must be 1-65535).
    InvalidPort { name: String, value: u16 },
    /// Pool size configuration is invalid (min must be <= max).
    InvalidPoolSize { min: u32, max: u32 },
    /// A SQL driver was selected without a server host.
    MissingDatabaseHost,
    /// A SQL driver was selected without a database name.
    MissingDatabaseName,
    /// Redis is enabled without an address.
    MissingRedisAddr,
    /// Timeout or lifetime must be positive.
    NonPositiveTimeout { name: String },
    /// Log level is invalid.
    InvalidLogLevel { value: String },
    /// Log format is invalid.
    InvalidLogFormat { value: String },
}

impl fmt::Display for ConfigValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyJwtSecret => write!(f, "JWT secret must not be empty"),
            Self::InvalidPort { name, value } => {
                write!(f, "Invalid port for {}: {} (must be 1-65535)", name, value)
            }
            Self::InvalidPoolSize { min, max } => write!(
                f,
                "Invalid pool size: min ({}) cannot be greater than max ({})",
                min, max
            ),
            Self::MissingDatabaseHost => write!(f, "database.host is required for SQL drivers"),
            Self::MissingDatabaseName => write!(f, "database.name is required for SQL drivers"),
            Self::MissingRedisAddr => write!(f, "redis.addr is required when Redis is enabled"),
            Self::NonPositiveTimeout { name } => write!(f, "'{}' must be positive", name),
            Self::InvalidLogLevel { value } => write!(
                f,
                "Invalid log level: '{}' (valid: trace, debug, info, warn, error)",
                value
            ),
            Self::InvalidLogFormat { value } => {
                write!(f, "Invalid log format: '{}' (valid: pretty, json)", value)
            }
        }
    }
}

impl std::error::Error for ConfigValidationError {}

/// Configuration validator.
pub struct ConfigValidator;

impl ConfigValidator {
    /// Valid log levels.
    const VALID_LOG_LEVELS: &'static [&'static str] = &["trace", "debug", "info", "warn", "error"];

    /// Validates the entire application configuration.
    ///
    /// Returns every problem found, not just the first.
    pub fn validate(config: &AppConfig) -> Result<(), Vec<ConfigValidationError>> {
        let mut errors = Vec::new();

        Self::validate_server(config, &mut errors);
        Self::validate_database(config, &mut errors);
        Self::validate_redis(config, &mut errors);
        Self::validate_security(config, &mut errors);
        Self::validate_observability(config, &mut errors);

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    fn validate_server(config: &AppConfig, errors: &mut Vec<ConfigValidationError>) {
        if config.server.port == 0 {
            errors.push(ConfigValidationError::InvalidPort {
                name: "server.port".to_string(),
                value: 0,
            });
        }
        if config.server.request_timeout_secs == 0 {
            errors.push(ConfigValidationError::NonPositiveTimeout {
                name: "server.request_timeout_secs".to_string(),
            });
        }
    }

    fn validate_database(config: &AppConfig, errors: &mut Vec<ConfigValidationError>) {
        let db = &config.database;
        if !db.driver.is_sql() {
            return;
        }

        if db.host.trim().is_empty() {
            errors.push(ConfigValidationError::MissingDatabaseHost);
        }
        if db.name.trim().is_empty() {
            errors.push(ConfigValidationError::MissingDatabaseName);
        }
        if db.port == Some(0) {
            errors.push(ConfigValidationError::InvalidPort {
                name: "database.port".to_string(),
                value: 0,
            });
        }
        if db.min_connections > db.max_connections {
            errors.push(ConfigValidationError::InvalidPoolSize {
                min: db.min_connections,
                max: db.max_connections,
            });
        }
        if db.connect_timeout_secs == 0 {
            errors.push(ConfigValidationError::NonPositiveTimeout {
                name: "database.connect_timeout_secs".to_string(),
            });
        }
    }

    fn validate_redis(config: &AppConfig, errors: &mut Vec<ConfigValidationError>) {
        if !config.redis.enabled {
            return;
        }
        if config.redis.addr.trim().is_empty() {
            errors.push(ConfigValidationError::MissingRedisAddr);
        }
        if config.redis.album_ttl_secs == 0 {
            errors.push(ConfigValidationError::NonPositiveTimeout {
                name: "redis.album_ttl_secs".to_string(),
            });
        }
    }

    fn validate_security(config: &AppConfig, errors: &mut Vec<ConfigValidationError>) {
        if config.security.jwt_secret.is_empty() {
            errors.push(ConfigValidationError::EmptyJwtSecret);
        }
        if config.security.jwt_expiration_secs == 0 {
            errors.push(ConfigValidationError::NonPositiveTimeout {
                name: "security.jwt_expiration_secs".to_string(),
            });
        }
    }

    fn validate_observability(config: &AppConfig, errors: &mut Vec<ConfigValidationError>) {
        let level = config.observability.log_level.to_lowercase();
        if !Self::VALID_LOG_LEVELS.contains(&level.as_str()) {
            errors.push(ConfigValidationError::InvalidLogLevel {
                value: config.observability.log_level.clone(),
            });
        }
        let format = config.observability.log_format.to_lowercase();
        if format != "pretty" && format != "json" {
            errors.push(ConfigValidationError::InvalidLogFormat {
                value: config.observability.log_format.clone(),
            });
        }
    }
}
