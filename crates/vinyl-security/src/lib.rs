//! # Vinyl Security
//!
//! JWT issuance and validation, Argon2 password hashing, and the
//! credential provider that backs the login endpoint.

pub mod credentials;
pub mod jwt;
pub mod password;

pub use credentials::*;
pub use jwt::*;
pub use password::*;
