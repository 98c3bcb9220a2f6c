//! Common test infrastructure for database integration tests.

#![allow(dead_code)]

use std::sync::Arc;
use testcontainers::{runners::AsyncRunner, ContainerAsync};
use testcontainers_modules::{mysql::Mysql, postgres::Postgres};
use vinyl_config::{DatabaseConfig, DatabaseDriver};
use vinyl_repository::{AlbumRepository, DatabasePool};

/// Running database container, kept alive for the lifetime of the test.
enum TestContainer {
    Postgres(ContainerAsync<Postgres>),
    MySql(ContainerAsync<Mysql>),
}

/// Test database container wrapper.
///
/// Manages a testcontainer lifecycle and provides a migrated pool.
pub struct TestDatabase {
    _container: TestContainer,
    pool: Arc<DatabasePool>,
}

impl TestDatabase {
    /// Creates a new test database with a fresh PostgreSQL container.
    pub async fn new() -> Self {
        Self::postgres().await
    }

    /// Starts PostgreSQL and runs the Postgres migrations.
    pub async fn postgres() -> Self {
        let container = Postgres::default()
            .start()
            .await
            .expect("Failed to start PostgreSQL container");

        let port = container
            .get_host_port_ipv4(5432)
            .await
            .expect("Failed to get PostgreSQL port");

        let config = DatabaseConfig {
            driver: DatabaseDriver::Postgres,
            host: "127.0.0.1".to_string(),
            port: Some(port),
            user: "postgres".to_string(),
            password: "postgres".to_string(),
            name: "postgres".to_string(),
            max_connections: 5,
            ..DatabaseConfig::default()
        };

        Self::migrated(TestContainer::Postgres(container), &config).await
    }

    /// Starts MySQL and runs the MySQL migrations.
    ///
    /// The module's image creates database `test` for `root` with an empty
    /// password.
    pub async fn mysql() -> Self {
        let container = Mysql::default()
            .start()
            .await
            .expect("Failed to start MySQL container");

        let port = container
            .get_host_port_ipv4(3306)
            .await
            .expect("Failed to get MySQL port");

        let config = DatabaseConfig {
            driver: DatabaseDriver::Mysql,
            host: "127.0.0.1".to_string(),
            port: Some(port),
            user: "root".to_string(),
            password: String::new(),
            name: "test".to_string(),
            max_connections: 5,
            ..DatabaseConfig::default()
        };

        Self::migrated(TestContainer::MySql(container), &config).await
    }

    async fn migrated(container: TestContainer, config: &DatabaseConfig) -> Self {
        let pool = Self::connect_with_retry(config, 30).await;

        pool.run_migrations()
            .await
            .expect("Failed to run migrations");

        Self {
            _container: container,
            pool: Arc::new(pool),
        }
    }

    /// Returns the album repository backed by the container.
    pub fn repository(&self) -> Arc<dyn AlbumRepository> {
        self.pool.album_repository()
    }

    /// Returns the pool itself.
    pub fn pool(&self) -> Arc<DatabasePool> {
        self.pool.clone()
    }

    /// Connects to the database with retry logic.
    async fn connect_with_retry(config: &DatabaseConfig, max_attempts: u32) -> DatabasePool {
        let mut attempts = 0;
        loop {
            attempts += 1;
            match DatabasePool::connect(config).await {
                Ok(pool) => return pool,
                Err(e) => {
                    if attempts >= max_attempts {
                        panic!("Failed to connect to database after {} attempts: {}", max_attempts, e);
                    }
                    tokio::time::sleep(std::time::Duration::from_secs(1)).await;
                }
            }
        }
    }
}
