//! Album service trait definition.

use crate::dto::{AlbumRequest, MessageResponse, PatchAlbumRequest};
use async_trait::async_trait;
use vinyl_core::{Album, VinylResult};

/// Album service trait.
#[async_trait]
pub trait AlbumService: Send + Sync {
    /// Lists every album straight from the store.
    async fn list_albums(&self) -> VinylResult<Vec<Album>>;

    /// Gets an album by ID, serving from the cache when possible.
    async fn get_album(&self, id: &str) -> VinylResult<Album>;

    /// Creates a new album.
    async fn create_album(&self, request: AlbumRequest) -> VinylResult<Album>;

    /// Replaces every field of an album.
    ///
    /// The cached copy is left in place and may be served until it expires.
    async fn update_album(&self, id: &str, request: AlbumRequest) -> VinylResult<Album>;

    /// Changes the provided fields of an album.
    ///
    /// The cached copy is left in place and may be served until it expires.
    async fn patch_album(&self, id: &str, request: PatchAlbumRequest) -> VinylResult<Album>;

    /// Deletes an album and evicts its cache entry.
    async fn delete_album(&self, id: &str) -> VinylResult<MessageResponse>;
}
