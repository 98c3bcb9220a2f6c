//! Token-protected hello route.

use crate::{
    extractors::AuthenticatedUser,
    responses::{ok, ApiResult},
    state::AppState,
};
use axum::{routing::get, Router};
use tracing::debug;
use vinyl_core::ErrorResponse;
use vinyl_service::MessageResponse;

/// Creates the router for routes that sit behind the auth middleware.
pub fn router() -> Router<AppState> {
    Router::new().route("/protected", get(protected))
}

/// Confirms that the bearer token was accepted.
#[utoipa::path(
    get,
    path = "/hello/protected",
    tag = "hello",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Token accepted", body = MessageResponse),
        (status = 401, description = "Missing, invalid or expired token", body = ErrorResponse)
    )
)]
pub async fn protected(user: AuthenticatedUser) -> ApiResult<MessageResponse> {
    debug!("Protected route accessed by: {}", user.user_id);

    ok(MessageResponse::new("You have accessed a protected route"))
}
