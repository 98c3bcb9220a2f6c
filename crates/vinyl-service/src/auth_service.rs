//! Authentication service implementation.

use crate::dto::{LoginRequest, TokenResponse};
use async_trait::async_trait;
use std::sync::Arc;
use tracing::{debug, info, warn};
use vinyl_core::{ValidateExt, VinylError, VinylResult};
use vinyl_security::{CredentialProvider, TokenProvider};

/// Authentication service trait.
#[async_trait]
pub trait AuthService: Send + Sync {
    /// Exchanges credentials for a signed token.
    async fn login(&self, request: LoginRequest) -> VinylResult<TokenResponse>;

    /// Validates a token and returns the user id it was issued to.
    async fn validate_token(&self, token: &str) -> VinylResult<String>;
}

/// Authentication service implementation.
pub struct AuthServiceImpl {
    credentials: Arc<dyn CredentialProvider>,
    token_provider: Arc<TokenProvider>,
}

impl AuthServiceImpl {
    /// Creates a new authentication service.
    pub fn new(credentials: Arc<dyn CredentialProvider>, token_provider: Arc<TokenProvider>) -> Self {
        Self {
            credentials,
            token_provider,
        }
    }
}

#[async_trait]
impl AuthService for AuthServiceImpl {
    async fn login(&self, request: LoginRequest) -> VinylResult<TokenResponse> {
        debug!("Login attempt for: {}", request.email);

        request.validate_request()?;

        let user_id = self
            .credentials
            .authenticate(&request.email, &request.password)?
            .ok_or_else(|| {
                warn!("Login failed for: {}", request.email);
                VinylError::InvalidCredentials
            })?;

        let token = self.token_provider.generate_token(&user_id)?;

        info!("User logged in: {}", user_id);
        Ok(TokenResponse { token })
    }

    async fn validate_token(&self, token: &str) -> VinylResult<String> {
        let claims = self.token_provider.validate_token(token)?;
        Ok(claims.sub)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vinyl_config::{AuthConfig, SecurityConfig};
    use vinyl_security::StaticCredentialProvider;

    fn service_with_secret(secret: &str) -> AuthServiceImpl {
        let credentials = StaticCredentialProvider::from_config(&AuthConfig::default()).unwrap();
        let tokens = TokenProvider::new(&SecurityConfig {
            jwt_secret: secret.to_string(),
            jwt_expiration_secs: 3600,
        })
        .unwrap();
        AuthServiceImpl::new(Arc::new(credentials), Arc::new(tokens))
    }

    fn login(email: &str, password: &str) -> LoginRequest {
        LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        }
    }

    #[tokio::test]
    async fn test_login_and_validate_round_trip() {
        let service = service_with_secret("round-trip-secret");

        let response = service
            .login(login("demo@example.com", "password123"))
            .await
            .unwrap();

        assert_eq!(service.validate_token(&response.token).await.unwrap(), "1");
    }

    #[tokio::test]
    async fn test_wrong_password_is_invalid_credentials() {
        let service = service_with_secret("secret");

        let err = service
            .login(login("demo@example.com", "nope"))
            .await
            .unwrap_err();
        assert!(matches!(err, VinylError::InvalidCredentials));
        assert_eq!(err.status_code(), 401);
    }

    #[tokio::test]
    async fn test_unknown_email_is_invalid_credentials() {
        let service = service_with_secret("secret");

        let err = service
            .login(login("other@example.com", "password123"))
            .await
            .unwrap_err();
        assert!(matches!(err, VinylError::InvalidCredentials));
    }

    #[tokio::test]
    async fn test_blank_fields_are_validation_errors() {
        let service = service_with_secret("secret");

        let err = service.login(login("", "")).await.unwrap_err();
        assert_eq!(err.error_code(), "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_token_from_other_secret_rejected() {
        let issuer = service_with_secret("first-secret");
        let verifier = service_with_secret("second-secret");

        let token = issuer
            .login(login("demo@example.com", "password123"))
            .await
            .unwrap()
            .token;

        let err = verifier.validate_token(&token).await.unwrap_err();
        assert!(matches!(err, VinylError::InvalidToken(_)));
    }
}
