//! Album request DTOs.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;
use vinyl_core::{AlbumPatch, NewAlbum};

/// Request to create or fully replace an album.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct AlbumRequest {
    #[validate(length(min = 1, max = 50, message = "Title must be 1-50 characters"))]
    #[schema(example = "Blue Train")]
    pub title: String,

    #[validate(length(min = 1, message = "Artist is required"))]
    #[schema(example = "John Coltrane")]
    pub artist: String,

    #[validate(range(exclusive_min = 0.0, message = "Price must be greater than zero"))]
    #[schema(example = 56.99)]
    pub price: f64,
}

impl From<AlbumRequest> for NewAlbum {
    fn from(request: AlbumRequest) -> Self {
        Self::new(request.title, request.artist, request.price)
    }
}

/// Request to change some fields of an album.
///
/// Omitted fields, an empty string and a zero price all leave the stored
/// value unchanged.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
pub struct PatchAlbumRequest {
    #[validate(length(max = 50, message = "Title must be at most 50 characters"))]
    #[schema(example = "Giant Steps")]
    pub title: Option<String>,

    pub artist: Option<String>,

    #[validate(range(min = 0.0, message = "Price must not be negative"))]
    pub price: Option<f64>,
}

impl From<PatchAlbumRequest> for AlbumPatch {
    fn from(request: PatchAlbumRequest) -> Self {
        Self {
            title: request.title,
            artist: request.artist,
            price: request.price,
        }
    }
}
