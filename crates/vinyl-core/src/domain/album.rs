//! Album entity and its write-side inputs.

use serde::{Deserialize, Serialize};

/// A music record album.
///
/// The `id` is assigned by the store on creation and is opaque to every
/// other layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct Album {
    /// Store-assigned identifier.
    #[cfg_attr(feature = "openapi", schema(example = "1"))]
    pub id: String,
    /// Album title (1-50 characters).
    #[cfg_attr(feature = "openapi", schema(example = "Blue Train"))]
    pub title: String,
    /// Performing artist.
    #[cfg_attr(feature = "openapi", schema(example = "John Coltrane"))]
    pub artist: String,
    /// Price, always greater than zero.
    #[cfg_attr(feature = "openapi", schema(example = 56.99))]
    pub price: f64,
}

impl Album {
    /// Builds an album from a store-assigned id and its field values.
    #[must_use]
    pub fn from_new(id: impl Into<String>, new: NewAlbum) -> Self {
        Self {
            id: id.into(),
            title: new.title,
            artist: new.artist,
            price: new.price,
        }
    }

    /// Overwrites every field except the id.
    pub fn replace(&mut self, new: &NewAlbum) {
        self.title.clone_from(&new.title);
        self.artist.clone_from(&new.artist);
        self.price = new.price;
    }

    /// Overwrites the fields the patch actually provides.
    ///
    /// Empty strings and a zero price count as "not provided".
    pub fn apply_patch(&mut self, patch: &AlbumPatch) {
        if let Some(title) = patch.title() {
            self.title = title.to_string();
        }
        if let Some(artist) = patch.artist() {
            self.artist = artist.to_string();
        }
        if let Some(price) = patch.price() {
            self.price = price;
        }
    }
}

/// Field values for a new album or a full replacement.
#[derive(Debug, Clone, PartialEq)]
pub struct NewAlbum {
    pub title: String,
    pub artist: String,
    pub price: f64,
}

impl NewAlbum {
    /// Creates a new album input.
    #[must_use]
    pub fn new(title: impl Into<String>, artist: impl Into<String>, price: f64) -> Self {
        Self {
            title: title.into(),
            artist: artist.into(),
            price,
        }
    }
}

/// Partial update of an album.
///
/// Each field is optional. A provided empty string or a provided zero price
/// is treated the same as an absent field, so `apply_patch` and the SQL
/// stores agree on what a patch changes.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AlbumPatch {
    pub title: Option<String>,
    pub artist: Option<String>,
    pub price: Option<f64>,
}

impl AlbumPatch {
    /// Title to write, if any.
    #[must_use]
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref().filter(|t| !t.is_empty())
    }

    /// Artist to write, if any.
    #[must_use]
    pub fn artist(&self) -> Option<&str> {
        self.artist.as_deref().filter(|a| !a.is_empty())
    }

    /// Price to write, if any.
    #[must_use]
    pub fn price(&self) -> Option<f64> {
        self.price.filter(|p| *p != 0.0)
    }

    /// Returns true when the patch would not change anything.
    #[must_use]
    pub fn is_noop(&self) -> bool {
        self.title().is_none() && self.artist().is_none() && self.price().is_none()
    }
}
