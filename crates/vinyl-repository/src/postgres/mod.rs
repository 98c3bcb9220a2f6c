//! PostgreSQL implementations.

mod album_repository;

pub use album_repository::PgAlbumRepository;
