//! Application state for Axum handlers.

use std::sync::Arc;
use vinyl_repository::DatabasePool;
use vinyl_service::{AlbumService, AuthService};

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub album_service: Arc<dyn AlbumService>,
    pub auth_service: Arc<dyn AuthService>,
    pub db: Arc<DatabasePool>,
}

impl AppState {
    /// Creates a new application state.
    pub fn new(
        album_service: Arc<dyn AlbumService>,
        auth_service: Arc<dyn AuthService>,
        db: Arc<DatabasePool>,
    ) -> Self {
        Self {
            album_service,
            auth_service,
            db,
        }
    }
}
