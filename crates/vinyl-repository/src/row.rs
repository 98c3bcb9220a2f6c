//! Row mapping shared by the SQL stores.

use sqlx::FromRow;
use vinyl_core::{Album, VinylError, VinylResult};

/// Resource name used in `NotFound` errors.
pub(crate) const ALBUM: &str = "Album";

/// Database row representation of an album.
#[derive(Debug, FromRow)]
pub(crate) struct AlbumRow {
    pub id: i32,
    pub title: String,
    pub artist: String,
    pub price: f64,
}

impl From<AlbumRow> for Album {
    fn from(row: AlbumRow) -> Self {
        Self {
            id: row.id.to_string(),
            title: row.title,
            artist: row.artist,
            price: row.price,
        }
    }
}

/// Parses an opaque album id into a store key.
///
/// Only the canonical decimal form is accepted: `"01"`, `"+1"` or `" 1"`
/// would name the same row under a different cache key, so they are
/// reported as not found just like ids that cannot be a key at all.
pub(crate) fn parse_id(id: &str) -> VinylResult<i32> {
    id.parse::<i32>()
        .ok()
        .filter(|key| key.to_string() == id)
        .ok_or_else(|| VinylError::not_found(ALBUM, id))
}

/// Maps `RowNotFound` to a `NotFound` carrying the album id.
pub(crate) fn map_not_found(id: &str) -> impl FnOnce(sqlx::Error) -> VinylError + '_ {
    move |err| match err {
        sqlx::Error::RowNotFound => VinylError::not_found(ALBUM, id),
        other => VinylError::from(other),
    }
}
