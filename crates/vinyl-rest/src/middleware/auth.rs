//! Bearer token middleware.

use crate::{extractors::AuthenticatedUser, responses::AppError, state::AppState};
use axum::{
    body::Body,
    extract::State,
    http::{header::AUTHORIZATION, Request},
    middleware::Next,
    response::{IntoResponse, Response},
};
use tracing::{debug, warn};
use vinyl_core::VinylError;

/// Middleware guarding protected routes.
///
/// Reads the `Authorization: Bearer <token>` header, validates the token
/// and stores the caller as an [`AuthenticatedUser`] extension. A missing
/// header, a non-bearer scheme or a rejected token ends the request with
/// 401.
pub async fn auth_middleware(
    State(state): State<AppState>,
    mut request: Request<Body>,
    next: Next,
) -> Response {
    let token = match bearer_token(&request) {
        Some(token) => token.to_string(),
        None => {
            debug!("Missing or malformed authorization header");
            return AppError(VinylError::unauthorized("Missing bearer token")).into_response();
        }
    };

    match state.auth_service.validate_token(&token).await {
        Ok(user_id) => {
            debug!("Authenticated user: {}", user_id);
            request.extensions_mut().insert(AuthenticatedUser::new(user_id));
            next.run(request).await
        }
        Err(e) => {
            warn!("Token validation failed: {}", e);
            AppError(e).into_response()
        }
    }
}

fn bearer_token(request: &Request<Body>) -> Option<&str> {
    request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .and_then(|h| h.strip_prefix("Bearer "))
        .map(str::trim)
        .filter(|t| !t.is_empty())
}
