//! Login credential verification.

use crate::PasswordHasher;
use tracing::debug;
use vinyl_config::AuthConfig;
use vinyl_core::VinylResult;

/// Source of truth for login credentials.
pub trait CredentialProvider: Send + Sync {
    /// Returns the user id when `email` and `password` match an account,
    /// `None` when they do not.
    fn authenticate(&self, email: &str, password: &str) -> VinylResult<Option<String>>;
}

/// A single configured account whose password is held only as an Argon2
/// hash.
pub struct StaticCredentialProvider {
    user_id: String,
    email: String,
    password_hash: String,
    hasher: PasswordHasher,
}

impl StaticCredentialProvider {
    /// Creates a provider for one account, hashing `password` immediately.
    pub fn new(
        user_id: impl Into<String>,
        email: impl Into<String>,
        password: &str,
        hasher: PasswordHasher,
    ) -> VinylResult<Self> {
        let password_hash = hasher.hash(password)?;
        Ok(Self::with_hash(user_id, email, password_hash, hasher))
    }

    /// Creates a provider for one account from an existing Argon2 hash.
    pub fn with_hash(
        user_id: impl Into<String>,
        email: impl Into<String>,
        password_hash: impl Into<String>,
        hasher: PasswordHasher,
    ) -> Self {
        Self {
            user_id: user_id.into(),
            email: email.into(),
            password_hash: password_hash.into(),
            hasher,
        }
    }

    /// Creates a provider from the `auth` configuration section.
    pub fn from_config(config: &AuthConfig) -> VinylResult<Self> {
        Self::new(
            config.user_id.clone(),
            config.email.clone(),
            &config.password,
            PasswordHasher::new(),
        )
    }
}

impl CredentialProvider for StaticCredentialProvider {
    fn authenticate(&self, email: &str, password: &str) -> VinylResult<Option<String>> {
        // The hash is checked for every email so both rejections cost the same.
        let password_matches = self.hasher.verify(password, &self.password_hash)?;
        let email_matches = email.trim().eq_ignore_ascii_case(&self.email);

        match (email_matches, password_matches) {
            (true, true) => Ok(Some(self.user_id.clone())),
            (false, _) => {
                debug!("Login rejected: unknown email");
                Ok(None)
            }
            (true, false) => {
                debug!("Login rejected: wrong password");
                Ok(None)
            }
        }
    }
}

impl std::fmt::Debug for StaticCredentialProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StaticCredentialProvider")
            .field("user_id", &self.user_id)
            .field("email", &self.email)
            .finish_non_exhaustive()
    }
}
