//! JWT token provider for creating and validating tokens.

use super::Claims;
use chrono::Duration;
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use tracing::{debug, warn};
use vinyl_config::SecurityConfig;
use vinyl_core::{VinylError, VinylResult};

/// Algorithms a token header may name. Anything outside the HMAC family,
/// `none` included, is rejected before the signature is checked.
pub const ACCEPTED_ALGORITHMS: [Algorithm; 3] = [Algorithm::HS256, Algorithm::HS384, Algorithm::HS512];

/// JWT token provider service.
///
/// Issues HS256 tokens and accepts any HMAC-SHA signature made with the
/// same secret.
#[derive(Clone)]
pub struct TokenProvider {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    lifetime: Duration,
    validation: Validation,
}

impl TokenProvider {
    /// Creates a new token provider.
    pub fn new(config: &SecurityConfig) -> VinylResult<Self> {
        if config.jwt_secret.is_empty() {
            return Err(VinylError::Configuration(
                "JWT secret must not be empty".to_string(),
            ));
        }

        let lifetime = Duration::from_std(config.token_lifetime())
            .map_err(|e| VinylError::Configuration(format!("Invalid token lifetime: {}", e)))?;

        let mut validation = Validation::new(Algorithm::HS256);
        validation.algorithms = ACCEPTED_ALGORITHMS.to_vec();
        validation.validate_exp = true;
        validation.leeway = 0;

        Ok(Self {
            encoding_key: EncodingKey::from_secret(config.jwt_secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(config.jwt_secret.as_bytes()),
            lifetime,
            validation,
        })
    }

    /// Returns the lifetime of issued tokens.
    #[must_use]
    pub const fn lifetime(&self) -> Duration {
        self.lifetime
    }

    /// Generates a signed token for `subject`.
    pub fn generate_token(&self, subject: &str) -> VinylResult<String> {
        let claims = Claims::new(subject, self.lifetime);
        let token = encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(|e| VinylError::Internal(format!("Failed to generate token: {}", e)))?;

        debug!("Generated token for user {}", subject);
        Ok(token)
    }

    /// Validates a token and returns the claims.
    pub fn validate_token(&self, token: &str) -> VinylResult<Claims> {
        let token_data = decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map_err(|e| {
                warn!("Token validation failed: {}", e);
                match e.kind() {
                    ErrorKind::ExpiredSignature => VinylError::invalid_token("Token has expired"),
                    ErrorKind::InvalidSignature => {
                        VinylError::invalid_token("Invalid token signature")
                    }
                    ErrorKind::InvalidAlgorithm => {
                        VinylError::invalid_token("Unexpected signing algorithm")
                    }
                    _ => VinylError::invalid_token(e.to_string()),
                }
            })?;

        Ok(token_data.claims)
    }
}

impl std::fmt::Debug for TokenProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenProvider")
            .field("lifetime", &self.lifetime)
            .finish_non_exhaustive()
    }
}
