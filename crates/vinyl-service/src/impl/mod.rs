//! Service implementations.
//!
//! Trait definitions live in the parent module (e.g. `album_service.rs`).

pub mod album_service_impl;

pub use album_service_impl::AlbumServiceImpl;
