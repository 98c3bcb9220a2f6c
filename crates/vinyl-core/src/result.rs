//! Result type aliases for Vinyl.

use crate::VinylError;

/// A specialized `Result` type for Vinyl operations.
pub type VinylResult<T> = Result<T, VinylError>;
