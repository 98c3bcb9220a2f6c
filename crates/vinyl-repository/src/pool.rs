//! Database connection pool management.

use crate::memory::InMemoryAlbumRepository;
use crate::mysql::MySqlAlbumRepository;
use crate::postgres::PgAlbumRepository;
use crate::traits::AlbumRepository;
use sqlx::mysql::{MySqlConnectOptions, MySqlPool, MySqlPoolOptions};
use sqlx::postgres::{PgConnectOptions, PgPool, PgPoolOptions};
use std::sync::Arc;
use tracing::{info, warn};
use vinyl_config::{DatabaseConfig, DatabaseDriver};
use vinyl_core::{VinylError, VinylResult};

/// Connection pool for the configured driver.
///
/// Built once at startup and shared; the `Memory` variant holds no
/// connections and every check on it succeeds.
pub enum DatabasePool {
    Postgres(PgPool),
    MySql(MySqlPool),
    Memory,
}

impl DatabasePool {
    /// Opens a pool for the configured driver.
    pub async fn connect(config: &DatabaseConfig) -> VinylResult<Self> {
        match config.driver {
            DatabaseDriver::Postgres => {
                info!(
                    "Connecting to PostgreSQL at {}:{}/{}...",
                    config.host,
                    config.port(),
                    config.name
                );
                let options = PgConnectOptions::new()
                    .host(&config.host)
                    .port(config.port())
                    .username(&config.user)
                    .password(&config.password)
                    .database(&config.name);

                let pool = PgPoolOptions::new()
                    .min_connections(config.min_connections)
                    .max_connections(config.max_connections)
                    .acquire_timeout(config.connect_timeout())
                    .idle_timeout(Some(config.idle_timeout()))
                    .connect_with(options)
                    .await
                    .map_err(connect_error)?;

                info!("PostgreSQL connection pool established");
                Ok(Self::Postgres(pool))
            }
            DatabaseDriver::Mysql => {
                info!(
                    "Connecting to MySQL at {}:{}/{}...",
                    config.host,
                    config.port(),
                    config.name
                );
                let options = MySqlConnectOptions::new()
                    .host(&config.host)
                    .port(config.port())
                    .username(&config.user)
                    .password(&config.password)
                    .database(&config.name)
                    .charset("utf8mb4");

                let pool = MySqlPoolOptions::new()
                    .min_connections(config.min_connections)
                    .max_connections(config.max_connections)
                    .acquire_timeout(config.connect_timeout())
                    .idle_timeout(Some(config.idle_timeout()))
                    .connect_with(options)
                    .await
                    .map_err(connect_error)?;

                info!("MySQL connection pool established");
                Ok(Self::MySql(pool))
            }
            DatabaseDriver::Memory => {
                warn!("Using the in-memory album store; data is lost on restart");
                Ok(Self::Memory)
            }
        }
    }

    /// Returns the driver behind this pool.
    #[must_use]
    pub const fn driver(&self) -> DatabaseDriver {
        match self {
            Self::Postgres(_) => DatabaseDriver::Postgres,
            Self::MySql(_) => DatabaseDriver::Mysql,
            Self::Memory => DatabaseDriver::Memory,
        }
    }

    /// Checks if the database connection is healthy.
    pub async fn health_check(&self) -> VinylResult<()> {
        let result = match self {
            Self::Postgres(pool) => sqlx::query("SELECT 1").execute(pool).await.map(|_| ()),
            Self::MySql(pool) => sqlx::query("SELECT 1").execute(pool).await.map(|_| ()),
            Self::Memory => Ok(()),
        };
        result.map_err(|e| VinylError::Database(format!("Health check failed: {}", e)))
    }

    /// Runs the bundled migrations for the driver's dialect.
    pub async fn run_migrations(&self) -> VinylResult<()> {
        info!("Running database migrations...");
        let result = match self {
            Self::Postgres(pool) => sqlx::migrate!("../../migrations/postgres").run(pool).await,
            Self::MySql(pool) => sqlx::migrate!("../../migrations/mysql").run(pool).await,
            Self::Memory => Ok(()),
        };
        result.map_err(|e| VinylError::Database(format!("Migration failed: {}", e)))?;
        info!("Database migrations completed");
        Ok(())
    }

    /// Builds the album repository backed by this pool.
    #[must_use]
    pub fn album_repository(&self) -> Arc<dyn AlbumRepository> {
        match self {
            Self::Postgres(pool) => Arc::new(PgAlbumRepository::new(pool.clone())),
            Self::MySql(pool) => Arc::new(MySqlAlbumRepository::new(pool.clone())),
            Self::Memory => Arc::new(InMemoryAlbumRepository::new()),
        }
    }

    /// Closes the database pool.
    pub async fn close(&self) {
        info!("Closing database connection pool...");
        match self {
            Self::Postgres(pool) => pool.close().await,
            Self::MySql(pool) => pool.close().await,
            Self::Memory => {}
        }
        info!("Database connection pool closed");
    }
}

impl std::fmt::Debug for DatabasePool {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Postgres(pool) => f
                .debug_struct("DatabasePool::Postgres")
                .field("size", &pool.size())
                .field("num_idle", &pool.num_idle())
                .finish(),
            Self::MySql(pool) => f
                .debug_struct("DatabasePool::MySql")
                .field("size", &pool.size())
                .field("num_idle", &pool.num_idle())
                .finish(),
            Self::Memory => f.write_str("DatabasePool::Memory"),
        }
    }
}

fn connect_error(e: sqlx::Error) -> VinylError {
    warn!("Failed to connect to database: {}", e);
    VinylError::Database(format!("Failed to connect: {}", e))
}

/// Creates a shared database pool, applying migrations when configured.
pub async fn create_pool(config: &DatabaseConfig) -> VinylResult<Arc<DatabasePool>> {
    let pool = DatabasePool::connect(config).await?;
    if config.run_migrations {
        pool.run_migrations().await?;
    }
    Ok(Arc::new(pool))
}
