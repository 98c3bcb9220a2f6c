//! PostgreSQL album repository implementation.

use crate::row::{map_not_found, parse_id, AlbumRow, ALBUM};
use crate::traits::AlbumRepository;
use async_trait::async_trait;
use sqlx::PgPool;
use tracing::{debug, info};
use vinyl_core::{Album, AlbumPatch, NewAlbum, VinylError, VinylResult};

/// PostgreSQL album repository implementation.
#[derive(Clone)]
pub struct PgAlbumRepository {
    pool: PgPool,
}

impl PgAlbumRepository {
    /// Creates a new PostgreSQL album repository.
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AlbumRepository for PgAlbumRepository {
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

        let row = sqlx::query_as::<_, AlbumRow>(
            r#"
            SELECT id, title, artist, price
            FROM albums
            WHERE id = $1
            "#,
        )
        .bind(key)
        .fetch_one(&self.pool)
        .await
        .map_err(map_not_found(id))?;

        Ok(row.into())
    }

    async fn create(&self, album: NewAlbum) -> VinylResult<Album> {
        debug!("Creating album: {}", album.title);

        let row = sqlx::query_as::<_, AlbumRow>(
            r#"
            INSERT INTO albums (title, artist, price)
            VALUES ($1, $2, $3)
            RETURNING id, title, artist, price
            "#,
        )
        .bind(&album.title)
        .bind(&album.artist)
        .bind(album.price)
        .fetch_one(&self.pool)
        .await?;

        info!("Album created: {}", row.id);
        Ok(row.into())
    }

    async fn update(&self, id: &str, album: NewAlbum) -> VinylResult<Album> {
        debug!("Updating album: {}", id);
        let key = parse_id(id)?;

        let row = sqlx::query_as::<_, AlbumRow>(
            r#"
            UPDATE albums
            SET title = $1, artist = $2, price = $3
            WHERE id = $4
            RETURNING id, title, artist, price
            "#,
        )
        .bind(&album.title)
        .bind(&album.artist)
        .bind(album.price)
        .bind(key)
        .fetch_one(&self.pool)
        .await
        .map_err(map_not_found(id))?;

        Ok(row.into())
    }

    async fn patch(&self, id: &str, patch: AlbumPatch) -> VinylResult<Album> {
        debug!("Patching album: {}", id);
        let key = parse_id(id)?;

        if patch.is_noop() {
            return self.find_by_id(id).await;
        }

        // Absent fields bind as NULL and keep the stored value.
        let row = sqlx::query_as::<_, AlbumRow>(
            r#"
            UPDATE albums
            SET title  = COALESCE($1, title),
                artist = COALESCE($2, artist),
                price  = COALESCE($3, price)
            WHERE id = $4
            RETURNING id, title, artist, price
            "#,
        )
        .bind(patch.title())
        .bind(patch.artist())
        .bind(patch.price())
        .bind(key)
        .fetch_one(&self.pool)
        .await
        .map_err(map_not_found(id))?;

        Ok(row.into())
    }

    async fn delete(&self, id: &str) -> VinylResult<()> {
        debug!("Deleting album: {}", id);
        let key = parse_id(id)?;

        let result = sqlx::query("DELETE FROM albums WHERE id = $1")
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
