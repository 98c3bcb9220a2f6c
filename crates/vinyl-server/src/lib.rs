//! # Vinyl Server Library
//!
//! Dependency wiring, logging setup and startup output for the
//! `vinyl-server` binary.

pub mod di;
pub mod logging;
pub mod startup;
