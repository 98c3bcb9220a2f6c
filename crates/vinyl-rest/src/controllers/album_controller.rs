//! Album controller.

use crate::{
    extractors::ValidatedJson,
    responses::{created, ok, ApiResult, AppError},
    state::AppState,
};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use tracing::debug;
use vinyl_core::{Album, ErrorResponse};
use vinyl_service::{AlbumRequest, MessageResponse, PatchAlbumRequest};

/// Creates the album router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_albums).post(create_album))
        .route(
            "/:id",
            get(get_album)
                .put(update_album)
                .patch(patch_album)
                .delete(delete_album),
        )
}

/// List every album.
#[utoipa::path(
    get,
    path = "/albums",
    tag = "albums",
    responses(
        (status = 200, description = "All albums", body = [Album]),
        (status = 500, description = "Store unavailable", body = ErrorResponse)
    )
)]
pub async fn list_albums(State(state): State<AppState>) -> ApiResult<Vec<Album>> {
    debug!("List albums request");

    let albums = state.album_service.list_albums().await?;
    ok(albums)
}

/// Get one album, served from the cache when present.
#[utoipa::path(
    get,
    path = "/albums/{id}",
    tag = "albums",
    params(("id" = String, Path, description = "Album ID")),
    responses(
        (status = 200, description = "The album", body = Album),
        (status = 404, description = "No album with this ID", body = ErrorResponse)
    )
)]
pub async fn get_album(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Album> {
    debug!("Get album request: {}", id);

    let album = state.album_service.get_album(&id).await?;
    ok(album)
}

/// Create an album. The store assigns the ID.
#[utoipa::path(
    post,
    path = "/albums",
    tag = "albums",
    request_body = AlbumRequest,
    responses(
        (status = 201, description = "Album created", body = Album),
        (status = 400, description = "Invalid album", body = ErrorResponse)
    )
)]
pub async fn create_album(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<AlbumRequest>,
) -> Result<(StatusCode, Json<Album>), AppError> {
    debug!("Create album request: {}", request.title);

    let album = state.album_service.create_album(request).await?;
    Ok(created(album))
}

/// Replace every field of an album.
#[utoipa::path(
    put,
    path = "/albums/{id}",
    tag = "albums",
    params(("id" = String, Path, description = "Album ID")),
    request_body = AlbumRequest,
    responses(
        (status = 200, description = "Album updated", body = Album),
        (status = 400, description = "Invalid album", body = ErrorResponse),
        (status = 404, description = "No album with this ID", body = ErrorResponse)
    )
)]
pub async fn update_album(
    State(state): State<AppState>,
    Path(id): Path<String>,
    ValidatedJson(request): ValidatedJson<AlbumRequest>,
) -> ApiResult<Album> {
    debug!("Update album request: {}", id);

    let album = state.album_service.update_album(&id, request).await?;
    ok(album)
}

/// Change only the provided fields of an album.
///
/// Empty strings and a zero price count as not provided.
#[utoipa::path(
    patch,
    path = "/albums/{id}",
    tag = "albums",
    params(("id" = String, Path, description = "Album ID")),
    request_body = PatchAlbumRequest,
    responses(
        (status = 200, description = "Album patched", body = Album),
        (status = 400, description = "Invalid field", body = ErrorResponse),
        (status = 404, description = "No album with this ID", body = ErrorResponse)
    )
)]
pub async fn patch_album(
    State(state): State<AppState>,
    Path(id): Path<String>,
    ValidatedJson(request): ValidatedJson<PatchAlbumRequest>,
) -> ApiResult<Album> {
    debug!("Patch album request: {}", id);

    let album = state.album_service.patch_album(&id, request).await?;
    ok(album)
}

/// Delete an album.
#[utoipa::path(
    delete,
    path = "/albums/{id}",
    tag = "albums",
    params(("id" = String, Path, description = "Album ID")),
    responses(
        (status = 200, description = "Album deleted", body = MessageResponse),
        (status = 404, description = "No album with this ID", body = ErrorResponse)
    )
)]
pub async fn delete_album(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<MessageResponse> {
    debug!("Delete album request: {}", id);

    let response = state.album_service.delete_album(&id).await?;
    ok(response)
}
