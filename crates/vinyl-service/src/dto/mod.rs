//! Data Transfer Objects (DTOs).

mod album_dto;
mod auth_dto;

pub use album_dto::*;
pub use auth_dto::*;
