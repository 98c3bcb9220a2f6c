//! # Vinyl Service
//!
//! Business logic for the Vinyl album service: the cache-aside album
//! service and the login/token service.

pub mod album_service;
pub mod auth_service;
pub mod cache;
pub mod dto;
pub mod r#impl;

pub use album_service::*;
pub use auth_service::*;
pub use cache::*;
pub use dto::*;
pub use r#impl::AlbumServiceImpl;
