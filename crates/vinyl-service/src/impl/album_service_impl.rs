//! Album service implementation.

use crate::album_service::AlbumService;
use crate::cache::{cache_keys, CacheExt, CacheInterface};
use crate::dto::{AlbumRequest, MessageResponse, PatchAlbumRequest};
use async_trait::async_trait;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info, warn};
use vinyl_core::{Album, ValidateExt, VinylResult};
use vinyl_repository::AlbumRepository;

/// Cache-aside album service.
///
/// Reads of a single album go through the cache; every other operation
/// goes to the repository. Only a successful delete evicts, so an update
/// or patch can be shadowed by the cached copy until its TTL runs out.
pub struct AlbumServiceImpl {
    repository: Arc<dyn AlbumRepository>,
    cache: Arc<dyn CacheInterface>,
    ttl: Duration,
}

impl AlbumServiceImpl {
    /// Creates a new album service.
    pub fn new(
        repository: Arc<dyn AlbumRepository>,
        cache: Arc<dyn CacheInterface>,
        ttl: Duration,
    ) -> Self {
        Self {
            repository,
            cache,
            ttl,
        }
    }
}

#[async_trait]
impl AlbumService for AlbumServiceImpl {
    async fn list_albums(&self) -> VinylResult<Vec<Album>> {
        debug!("Listing albums");
        self.repository.find_all().await
    }

    async fn get_album(&self, id: &str) -> VinylResult<Album> {
        debug!("Getting album: {}", id);

        let cache_key = cache_keys::album_by_id(id);

        // Unreadable or undecodable entries count as a miss.
        match self.cache.get::<Album>(&cache_key).await {
            Ok(Some(cached)) => {
                debug!("Cache hit for album: {}", id);
                return Ok(cached);
            }
            Ok(None) => debug!("Cache miss for album: {}", id),
            Err(e) => warn!("Cache read failed for '{}', using store: {}", cache_key, e),
        }

        let album = self.repository.find_by_id(id).await?;

        // Populate under the store's id so eviction by that id always hits.
        let cache_key = cache_keys::album_by_id(&album.id);
        if let Err(e) = self.cache.set(&cache_key, &album, self.ttl).await {
            warn!("Failed to cache album '{}': {}", cache_key, e);
        }

        Ok(album)
    }

    async fn create_album(&self, request: AlbumRequest) -> VinylResult<Album> {
        request.validate_request()?;
        debug!("Creating album: {}", request.title);

        let album = self.repository.create(request.into()).await?;
        info!("Album created: {}", album.id);
        Ok(album)
    }

    async fn update_album(&self, id: &str, request: AlbumRequest) -> VinylResult<Album> {
        request.validate_request()?;
        debug!("Updating album: {}", id);

        let album = self.repository.update(id, request.into()).await?;
        info!("Album updated: {}", id);
        Ok(album)
    }

    async fn patch_album(&self, id: &str, request: PatchAlbumRequest) -> VinylResult<Album> {
        request.validate_request()?;
        debug!("Patching album: {}", id);

        let album = self.repository.patch(id, request.into()).await?;
        info!("Album patched: {}", id);
        Ok(album)
    }

    async fn delete_album(&self, id: &str) -> VinylResult<MessageResponse> {
        debug!("Deleting album: {}", id);

        self.repository.delete(id).await?;

        let cache_key = cache_keys::album_by_id(id);
        match self.cache.delete(&cache_key).await {
            Ok(_) => debug!("Evicted cache entry '{}'", cache_key),
            Err(e) => warn!("Failed to evict cache entry '{}': {}", cache_key, e),
        }

        info!("Album deleted: {}", id);
        Ok(MessageResponse::new("album deleted successfully"))
    }
}
