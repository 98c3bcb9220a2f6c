//! Application configuration structures.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;

/// Root application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Application name and metadata.
    #[serde(default)]
    pub app: AppMetadata,

    /// HTTP server configuration.
    #[serde(default)]
    pub server: ServerConfig,

    /// Relational store configuration.
    #[serde(default)]
    pub database: DatabaseConfig,

    /// Redis cache configuration.
    #[serde(default)]
    pub redis: RedisConfig,

    /// Token signing configuration.
    #[serde(default)]
    pub security: SecurityConfig,

    /// Login credential configuration.
    #[serde(default)]
    pub auth: AuthConfig,

    /// Logging configuration.
    #[serde(default)]
    pub observability: ObservabilityConfig,
}

/// Application metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AppMetadata {
    /// Application name.
    pub name: String,
    /// Application version.
    pub version: String,
    /// Environment (development, staging, production).
    pub environment: String,
}

impl Default for AppMetadata {
    fn default() -> Self {
        Self {
            name: "vinyl".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            environment: "development".to_string(),
        }
    }
}

/// HTTP server configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Bind host.
    pub host: String,
    /// Bind port.
    pub port: u16,
    /// Per-request timeout in seconds.
    pub request_timeout_secs: u64,
    /// Enable CORS.
    pub cors_enabled: bool,
    /// CORS allowed origins.
    pub cors_origins: Vec<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
            request_timeout_secs: 30,
            cors_enabled: true,
            cors_origins: vec!["*".to_string()],
        }
    }
}

impl ServerConfig {
    /// Returns the bind address.
    #[must_use]
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Returns the request timeout as a Duration.
    #[must_use]
    pub const fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

/// Which album store backs the repository.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DatabaseDriver {
    /// PostgreSQL via SQLx.
    #[default]
    #[serde(alias = "postgresql")]
    Postgres,
    /// MySQL via SQLx.
    Mysql,
    /// Process-local store, for development and tests.
    Memory,
}

impl DatabaseDriver {
    /// Default TCP port for the driver, if it talks to a server.
    #[must_use]
    pub const fn default_port(self) -> Option<u16> {
        match self {
            Self::Postgres => Some(5432),
            Self::Mysql => Some(3306),
            Self::Memory => None,
        }
    }

    /// Returns true for drivers backed by a SQL server.
    #[must_use]
    pub const fn is_sql(self) -> bool {
        !matches!(self, Self::Memory)
    }
}

impl fmt::Display for DatabaseDriver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Postgres => write!(f, "postgres"),
            Self::Mysql => write!(f, "mysql"),
            Self::Memory => write!(f, "memory"),
        }
    }
}

/// Database configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DatabaseConfig {
    /// Store driver.
    pub driver: DatabaseDriver,
    /// Server host.
    pub host: String,
    /// Server port; falls back to the driver's default.
    pub port: Option<u16>,
    /// Login user.
    pub user: String,
    /// Login password.
    pub password: String,
    /// Database name.
    pub name: String,
    /// Minimum connection pool size.
    pub min_connections: u32,
    /// Maximum connection pool size.
    pub max_connections: u32,
    /// Connection timeout in seconds.
    pub connect_timeout_secs: u64,
    /// Idle timeout in seconds.
    pub idle_timeout_secs: u64,
    /// Apply bundled migrations at startup.
    pub run_migrations: bool,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            driver: DatabaseDriver::Postgres,
            host: "localhost".to_string(),
            port: None,
            user: "vinyl".to_string(),
            password: "vinyl".to_string(),
            name: "vinyl".to_string(),
            min_connections: 1,
            max_connections: 10,
            connect_timeout_secs: 30,
            idle_timeout_secs: 600,
            run_migrations: true,
        }
    }
}

impl DatabaseConfig {
    /// Returns the configured port or the driver default.
    #[must_use]
    pub fn port(&self) -> u16 {
        self.port
            .or_else(|| self.driver.default_port())
            .unwrap_or_default()
    }

    /// Returns the connect timeout as a Duration.
    #[must_use]
    pub const fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout_secs)
    }

    /// Returns the idle timeout as a Duration.
    #[must_use]
    pub const fn idle_timeout(&self) -> Duration {
        Duration::from_secs(self.idle_timeout_secs)
    }
}

/// Redis configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RedisConfig {
    /// Redis address, either `host:port` or a full `redis://` URL.
    pub addr: String,
    /// Connection pool size.
    pub pool_size: usize,
    /// Enable Redis (disabled means every lookup is a miss).
    pub enabled: bool,
    /// Lifetime of a cached album in seconds.
    pub album_ttl_secs: u64,
}

impl Default for RedisConfig {
    fn default() -> Self {
        Self {
            addr: "localhost:6379".to_string(),
            pool_size: 10,
            enabled: true,
            album_ttl_secs: 3600,
        }
    }
}

impl RedisConfig {
    /// Returns the connection URL for the configured address.
    #[must_use]
    pub fn url(&self) -> String {
        if self.addr.starts_with("redis://") || self.addr.starts_with("rediss://") {
            self.addr.clone()
        } else {
            format!("redis://{}", self.addr)
        }
    }

    /// Returns the album cache TTL as a Duration.
    #[must_use]
    pub const fn album_ttl(&self) -> Duration {
        Duration::from_secs(self.album_ttl_secs)
    }
}

/// Token signing configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SecurityConfig {
    /// HMAC secret used to sign and verify tokens.
    pub jwt_secret: String,
    /// Token lifetime in seconds.
    pub jwt_expiration_secs: u64,
}

/// Placeholder secret shipped in the defaults.
pub const DEFAULT_JWT_SECRET: &str = "change-me-in-production";

impl Default for SecurityConfig {
    fn default() -> Self {
        Self {
            jwt_secret: DEFAULT_JWT_SECRET.to_string(),
            jwt_expiration_secs: 3600,
        }
    }
}

impl SecurityConfig {
    /// Returns the token lifetime as a Duration.
    #[must_use]
    pub const fn token_lifetime(&self) -> Duration {
        Duration::from_secs(self.jwt_expiration_secs)
    }
}

/// The single account allowed to log in.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AuthConfig {
    /// Identifier placed in the token subject.
    pub user_id: String,
    /// Login email.
    pub email: String,
    /// Login password (hashed in memory at startup).
    pub password: String,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            user_id: "1".to_string(),
            email: "demo@example.com".to_string(),
            password: "password123".to_string(),
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,
    /// Log format (json, pretty).
    pub log_format: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            log_format: "pretty".to_string(),
        }
    }
}

impl ObservabilityConfig {
    /// Returns true when logs should be emitted as JSON lines.
    #[must_use]
    pub fn is_json(&self) -> bool {
        self.log_format.eq_ignore_ascii_case("json")
    }
}
