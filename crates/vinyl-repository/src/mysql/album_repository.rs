//! MySQL album repository implementation.
//!
//! MySQL has no `RETURNING`, so writes are a statement followed by a read
//! of the same row.

use crate::row::{map_not_found, parse_id, AlbumRow, ALBUM};
use crate::traits::AlbumRepository;
use async_trait::async_trait;
use sqlx::MySqlPool;
use tracing::{debug, info};
use vinyl_core::{Album, AlbumPatch, NewAlbum, VinylError, VinylResult};

/// MySQL album repository implementation.
#[derive(Clone)]
pub struct MySqlAlbumRepository {
    pool: MySqlPool,
}

impl MySqlAlbumRepository {
    /// Creates a new MySQL album repository.
    #[must_use]
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    async fn fetch(&self, id: &str, key: i32) -> VinylResult<Album> {
        let row = sqlx::query_as::<_, AlbumRow>(
            r#"
            SELECT id, title, artist, price
            FROM albums
            WHERE id = ?
            "#,
        )
        .bind(key)
        .fetch_one(&self.pool)
        .await
        .map_err(map_not_found(id))?;

        Ok(row.into())
    }
}

#[async_trait]
impl AlbumRepository for MySqlAlbumRepository {
    async fn find_all(&self) -> VinylResult<Vec<Album>> {
        debug!("Finding all albums");

        let rows = sqlx::query_as::<_, AlbumRow>(
            r#"
            SELECT id, title, artist, price
            FROM albums
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(Album::from).collect())
    }

    async fn find_by_id(&self, id: &str) -> VinylResult<Album> {
        debug!("Finding album by id: {}", id);
        let key = parse_id(id)?;
        self.fetch(id, key).await
    }

    async fn create(&self, album: NewAlbum) -> VinylResult<Album> {
        debug!("Creating album: {}", album.title);

        let result = sqlx::query("INSERT INTO albums (title, artist, price) VALUES (?, ?, ?)")
            .bind(&album.title)
            .bind(&album.artist)
            .bind(album.price)
            .execute(&self.pool)
            .await?;

        let key = i32::try_from(result.last_insert_id())
            .map_err(|e| VinylError::Database(format!("Generated id out of range: {}", e)))?;

        info!("Album created: {}", key);
        Ok(Album::from_new(key.to_string(), album))
    }

    async fn update(&self, id: &str, album: NewAlbum) -> VinylResult<Album> {
        debug!("Updating album: {}", id);
        let key = parse_id(id)?;

        sqlx::query("UPDATE albums SET title = ?, artist = ?, price = ? WHERE id = ?")
            .bind(&album.title)
            .bind(&album.artist)
            .bind(album.price)
            .bind(key)
            .execute(&self.pool)
            .await?;

        // rows_affected is 0 for an unchanged row, so existence is decided by the read.
        self.fetch(id, key).await
    }

    async fn patch(&self, id: &str, patch: AlbumPatch) -> VinylResult<Album> {
        debug!("Patching album: {}", id);
        let key = parse_id(id)?;

        if patch.is_noop() {
            return self.fetch(id, key).await;
        }

        sqlx::query(
            r#"
            UPDATE albums
            SET title  = COALESCE(?, title),
                artist = COALESCE(?, artist),
                price  = COALESCE(?, price)
            WHERE id = ?
            "#,
        )
        .bind(patch.title())
        .bind(patch.artist())
        .bind(patch.price())
        .bind(key)
        .execute(&self.pool)
        .await?;

        self.fetch(id, key).await
    }

    async fn delete(&self, id: &str) -> VinylResult<()> {
        debug!("Deleting album: {}", id);
        let key = parse_id(id)?;

        let result = sqlx::query("DELETE FROM albums WHERE id = ?")
            .bind(key)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(VinylError::not_found(ALBUM, id));
        }

        info!("Album deleted: {}", id);
        Ok(())
    }
}
