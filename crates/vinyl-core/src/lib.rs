//! # Vinyl Core
//!
//! Core types and error definitions for the Vinyl album service.
//! Every other crate in the workspace builds on the album domain model,
//! the unified [`VinylError`] and the [`VinylResult`] alias defined here.

pub mod domain;
pub mod error;
pub mod result;
pub mod validation;

pub use domain::*;
pub use error::*;
pub use result::*;
pub use validation::*;
