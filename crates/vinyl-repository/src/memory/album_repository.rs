//! In-memory album repository.
//!
//! Used by the `memory` database driver and as a test double. Ids come from
//! a monotonically increasing sequence, like a `SERIAL` column.

use crate::row::{parse_id, ALBUM};
use crate::traits::AlbumRepository;
use async_trait::async_trait;
use std::collections::BTreeMap;
use tokio::sync::RwLock;
use tracing::{debug, info};
use vinyl_core::{Album, AlbumPatch, NewAlbum, VinylError, VinylResult};

#[derive(Default)]
struct Store {
    albums: BTreeMap<i32, Album>,
    last_id: i32,
}

/// In-memory album repository.
#[derive(Default)]
pub struct InMemoryAlbumRepository {
    store: RwLock<Store>,
}

impl InMemoryAlbumRepository {
    /// Creates an empty repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a repository pre-populated with the given albums, in order.
    pub async fn with_albums(albums: Vec<NewAlbum>) -> Self {
        let repo = Self::new();
        for album in albums {
            repo.insert(album).await;
        }
        repo
    }

    /// Number of stored albums.
    pub async fn len(&self) -> usize {
        self.store.read().await.albums.len()
    }

    /// Returns true when no album is stored.
    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }

    async fn insert(&self, album: NewAlbum) -> Album {
        let mut store = self.store.write().await;
        store.last_id += 1;
        let key = store.last_id;
        let album = Album::from_new(key.to_string(), album);
        store.albums.insert(key, album.clone());
        album
    }
}

#[async_trait]
impl AlbumRepository for InMemoryAlbumRepository {
    async fn find_all(&self) -> VinylResult<Vec<Album>> {
        debug!("Finding all albums");
        Ok(self.store.read().await.albums.values().cloned().collect())
    }

    async fn find_by_id(&self, id: &str) -> VinylResult<Album> {
        debug!("Finding album by id: {}", id);
        let key = parse_id(id)?;
        self.store
            .read()
            .await
            .albums
            .get(&key)
            .cloned()
            .ok_or_else(|| VinylError::not_found(ALBUM, id))
    }

    async fn create(&self, album: NewAlbum) -> VinylResult<Album> {
        debug!("Creating album: {}", album.title);
        let album = self.insert(album).await;
        info!("Album created: {}", album.id);
        Ok(album)
    }

    async fn update(&self, id: &str, album: NewAlbum) -> VinylResult<Album> {
        debug!("Updating album: {}", id);
        let key = parse_id(id)?;
        let mut store = self.store.write().await;
        let existing = store
            .albums
            .get_mut(&key)
            .ok_or_else(|| VinylError::not_found(ALBUM, id))?;
        existing.replace(&album);
        Ok(existing.clone())
    }

    async fn patch(&self, id: &str, patch: AlbumPatch) -> VinylResult<Album> {
        debug!("Patching album: {}", id);
        let key = parse_id(id)?;
        let mut store = self.store.write().await;
        let existing = store
            .albums
            .get_mut(&key)
            .ok_or_else(|| VinylError::not_found(ALBUM, id))?;
        existing.apply_patch(&patch);
        Ok(existing.clone())
    }

    async fn delete(&self, id: &str) -> VinylResult<()> {
        debug!("Deleting album: {}", id);
        let key = parse_id(id)?;
        if self.store.write().await.albums.remove(&key).is_none() {
            return Err(VinylError::not_found(ALBUM, id));
        }

        info!("Album deleted: {}", id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn blue_train() -> NewAlbum {
        NewAlbum::new("Blue Train", "John Coltrane", 56.99)
    }

    fn jeru() -> NewAlbum {
        NewAlbum::new("Jeru", "Gerry Mulligan", 17.99)
    }

    #[tokio::test]
    async fn test_create_assigns_sequential_ids() {
        let repo = InMemoryAlbumRepository::new();

        let first = repo.create(blue_train()).await.unwrap();
        let second = repo.create(jeru()).await.unwrap();

        assert_eq!(first.id, "1");
        assert_eq!(second.id, "2");
        assert_eq!(repo.len().await, 2);
    }

    #[tokio::test]
    async fn test_ids_are_not_reused_after_delete() {
        let repo = InMemoryAlbumRepository::with_albums(vec![blue_train()]).await;
        repo.delete("1").await.unwrap();

        let album = repo.create(jeru()).await.unwrap();
        assert_eq!(album.id, "2");
    }

    #[tokio::test]
    async fn test_find_all_is_ordered_by_id() {
        let repo = InMemoryAlbumRepository::with_albums(vec![blue_train(), jeru()]).await;

        let albums = repo.find_all().await.unwrap();
        let titles: Vec<_> = albums.iter().map(|a| a.title.as_str()).collect();
        assert_eq!(titles, vec!["Blue Train", "Jeru"]);
    }

    #[tokio::test]
    async fn test_find_all_empty() {
        let repo = InMemoryAlbumRepository::new();
        assert!(repo.find_all().await.unwrap().is_empty());
        assert!(repo.is_empty().await);
    }

    #[tokio::test]
    async fn test_find_by_id() {
        let repo = InMemoryAlbumRepository::with_albums(vec![blue_train()]).await;

        let album = repo.find_by_id("1").await.unwrap();
        assert_eq!(album.artist, "John Coltrane");
    }

    #[tokio::test]
    async fn test_find_by_id_not_found() {
        let repo = InMemoryAlbumRepository::new();

        assert!(repo.find_by_id("42").await.unwrap_err().is_not_found());
        assert!(repo.find_by_id("abc").await.unwrap_err().is_not_found());
    }

    #[tokio::test]
    async fn test_update_replaces_all_fields() {
        let repo = InMemoryAlbumRepository::with_albums(vec![blue_train()]).await;

        let album = repo.update("1", jeru()).await.unwrap();
        assert_eq!(album.id, "1");
        assert_eq!(album.title, "Jeru");
        assert_eq!(album.price, 17.99);
        assert_eq!(repo.find_by_id("1").await.unwrap(), album);
    }

    #[tokio::test]
    async fn test_update_unknown_id() {
        let repo = InMemoryAlbumRepository::new();
        assert!(repo.update("5", jeru()).await.unwrap_err().is_not_found());
    }

    #[tokio::test]
    async fn test_patch_ignores_empty_and_zero() {
        let repo = InMemoryAlbumRepository::with_albums(vec![blue_train()]).await;

        let album = repo
            .patch(
                "1",
                AlbumPatch {
                    title: Some(String::new()),
                    artist: None,
                    price: Some(0.0),
                },
            )
            .await
            .unwrap();

        assert_eq!(album.title, "Blue Train");
        assert_eq!(album.price, 56.99);
    }

    #[tokio::test]
    async fn test_patch_changes_only_title() {
        let repo = InMemoryAlbumRepository::with_albums(vec![blue_train()]).await;

        let album = repo
            .patch(
                "1",
                AlbumPatch {
                    title: Some("New".to_string()),
                    ..AlbumPatch::default()
                },
            )
            .await
            .unwrap();

        assert_eq!(album.title, "New");
        assert_eq!(album.artist, "John Coltrane");
        assert_eq!(album.price, 56.99);
    }

    #[tokio::test]
    async fn test_delete() {
        let repo = InMemoryAlbumRepository::with_albums(vec![blue_train()]).await;

        repo.delete("1").await.unwrap();
        assert!(repo.find_by_id("1").await.unwrap_err().is_not_found());
    }

    #[tokio::test]
    async fn test_delete_nonexistent() {
        let repo = InMemoryAlbumRepository::new();
        assert!(repo.delete("1").await.unwrap_err().is_not_found());
    }
}
