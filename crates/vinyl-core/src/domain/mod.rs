//! Domain model.

mod album;

pub use album::*;
