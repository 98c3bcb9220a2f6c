//! Repository trait definitions.

use async_trait::async_trait;
use vinyl_core::{Album, AlbumPatch, NewAlbum, VinylResult};

/// Album repository trait.
///
/// Every operation that addresses a single album returns
/// `VinylError::NotFound` when no row matches, including ids that can
/// never be a store key.
#[async_trait]
pub trait AlbumRepository: Send + Sync {
    /// Returns every album, ordered by id.
    async fn find_all(&self) -> VinylResult<Vec<Album>>;

    /// Finds an album by id.
    async fn find_by_id(&self, id: &str) -> VinylResult<Album>;

    /// Inserts a new album; the store assigns the id.
    async fn create(&self, album: NewAlbum) -> VinylResult<Album>;

    /// Replaces every field of an existing album.
    async fn update(&self, id: &str, album: NewAlbum) -> VinylResult<Album>;

    /// Overwrites only the fields the patch provides.
    async fn patch(&self, id: &str, patch: AlbumPatch) -> VinylResult<Album>;

    /// Deletes an album by id.
    async fn delete(&self, id: &str) -> VinylResult<()>;
}
