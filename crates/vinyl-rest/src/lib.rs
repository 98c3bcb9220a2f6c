//! # Vinyl REST
//!
//! REST API layer using Axum for the Vinyl album service.
//! Provides HTTP endpoints for album management, login, a token-protected
//! hello route and health checks.

pub mod controllers;
pub mod extractors;
pub mod middleware;
pub mod openapi;
pub mod responses;
pub mod router;
pub mod state;

pub use router::*;
pub use state::*;
