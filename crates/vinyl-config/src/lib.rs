//! # Vinyl Config
//!
//! Configuration management for the Vinyl album service.
//! Layered configuration from TOML files, `VINYL__*` environment variables
//! and the flat legacy variables (`DB_HOST`, `REDIS_ADDR`, `JWT_SECRET`, ...).

mod app_config;
mod loader;
mod validation;

pub use app_config::*;
pub use loader::*;
pub use validation::*;
