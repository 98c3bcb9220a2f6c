//! Dependency wiring.
//!
//! Every adapter is created once here and handed to its consumers as an
//! `Arc<dyn Trait>`; nothing is reachable through globals.

use std::sync::Arc;
use tracing::info;
use vinyl_config::AppConfig;
use vinyl_core::VinylResult;
use vinyl_repository::{create_pool, AlbumRepository, DatabasePool};
use vinyl_rest::AppState;
use vinyl_security::{CredentialProvider, StaticCredentialProvider, TokenProvider};
use vinyl_service::{
    AlbumService, AlbumServiceImpl, AuthService, AuthServiceImpl, CacheInterface,
    RedisCacheService,
};

/// Fully wired application components.
pub struct AppContainer {
    db_pool: Arc<DatabasePool>,
    cache: Arc<dyn CacheInterface>,
    album_service: Arc<dyn AlbumService>,
    auth_service: Arc<dyn AuthService>,
}

impl AppContainer {
    /// Builds every component from configuration.
    ///
    /// Opens the database pool (running migrations when enabled), creates
    /// the Redis pool, the token and credential providers, then the
    /// services on top of them.
    pub async fn build(config: &AppConfig) -> VinylResult<Self> {
        let db_pool = create_pool(&config.database).await?;
        let repository: Arc<dyn AlbumRepository> = db_pool.album_repository();

        let cache: Arc<dyn CacheInterface> =
            Arc::new(RedisCacheService::from_config(&config.redis)?);

        let token_provider = Arc::new(TokenProvider::new(&config.security)?);
        let credentials: Arc<dyn CredentialProvider> =
            Arc::new(StaticCredentialProvider::from_config(&config.auth)?);

        let album_service: Arc<dyn AlbumService> = Arc::new(AlbumServiceImpl::new(
            repository,
            cache.clone(),
            config.redis.album_ttl(),
        ));
        let auth_service: Arc<dyn AuthService> =
            Arc::new(AuthServiceImpl::new(credentials, token_provider));

        info!(
            "Components wired: driver={}, cache_enabled={}",
            db_pool.driver(),
            cache.is_enabled()
        );

        Ok(Self {
            db_pool,
            cache,
            album_service,
            auth_service,
        })
    }

    /// Returns the shared database pool.
    pub fn db_pool(&self) -> Arc<DatabasePool> {
        self.db_pool.clone()
    }

    /// Returns the album cache.
    pub fn cache(&self) -> Arc<dyn CacheInterface> {
        self.cache.clone()
    }

    /// Returns the album service.
    pub fn album_service(&self) -> Arc<dyn AlbumService> {
        self.album_service.clone()
    }

    /// Returns the authentication service.
    pub fn auth_service(&self) -> Arc<dyn AuthService> {
        self.auth_service.clone()
    }

    /// Builds the state shared by the HTTP handlers.
    pub fn app_state(&self) -> AppState {
        AppState::new(self.album_service(), self.auth_service(), self.db_pool())
    }
}
