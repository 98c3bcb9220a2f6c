//! # Vinyl Repository
//!
//! Data access for albums:
//!
//! ```text
//! Service
//!   ↓  Arc<dyn AlbumRepository>   (repository interface)
//! PgAlbumRepository | MySqlAlbumRepository | InMemoryAlbumRepository
//!   ↓
//! PostgreSQL | MySQL | process memory
//! ```
//!
//! [`DatabasePool`] opens the pool for the configured driver, runs the
//! bundled migrations and hands out the matching repository.

pub mod memory;
pub mod mysql;
pub mod pool;
pub mod postgres;
mod row;
pub mod traits;

pub use memory::InMemoryAlbumRepository;
pub use mysql::MySqlAlbumRepository;
pub use pool::*;
pub use postgres::PgAlbumRepository;
pub use traits::*;
