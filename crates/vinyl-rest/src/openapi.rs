//! OpenAPI documentation configuration.

use crate::controllers::HealthResponse;
use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};
use vinyl_core::{Album, ErrorResponse, FieldError};
use vinyl_service::{AlbumRequest, LoginRequest, MessageResponse, PatchAlbumRequest, TokenResponse};

/// OpenAPI documentation for the Vinyl album API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Vinyl Album API",
        version = "1.0.0",
        description = "Album catalogue with cache-aside reads and token-protected routes",
        license(
            name = "MIT",
            url = "https://opensource.org/licenses/MIT"
        )
    ),
    servers(
        (url = "/api/v1", description = "API v1")
    ),
    paths(
        crate::controllers::album_controller::list_albums,
        crate::controllers::album_controller::get_album,
        crate::controllers::album_controller::create_album,
        crate::controllers::album_controller::update_album,
        crate::controllers::album_controller::patch_album,
        crate::controllers::album_controller::delete_album,
        crate::controllers::auth_controller::login,
        crate::controllers::hello_controller::protected,
        crate::controllers::health_controller::health_check,
        crate::controllers::health_controller::readiness_check,
        crate::controllers::health_controller::liveness_check,
    ),
    components(
        schemas(
            Album,
            AlbumRequest,
            PatchAlbumRequest,
            LoginRequest,
            TokenResponse,
            MessageResponse,
            ErrorResponse,
            FieldError,
            HealthResponse,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "albums", description = "Album catalogue"),
        (name = "auth", description = "Login"),
        (name = "hello", description = "Token-protected routes"),
        (name = "health", description = "Health checks")
    )
)]
pub struct ApiDoc;

/// Registers the JWT bearer scheme.
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .description(Some("JWT Bearer token authentication"))
                        .build(),
                ),
            );
        }
    }
}
