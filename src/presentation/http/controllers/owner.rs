// src/presentation/http/controllers/owner.rs
use crate::application::{
    commands::listings::{CreateListingCommand, DeleteListingCommand, UpdateListingCommand},
    dto::ListingDto,
};
use crate::presentation::http::error::{ErrorResponse, HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::Authenticated;
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, Json,
    extract::Path,
    http::StatusCode,
};
use serde::Deserialize;
use serde_json::json;
use utoipa::ToSchema;

fn default_available() -> bool {
    true
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateListingRequest {
    pub category_id: i64,
    pub location_id: i64,
    pub title: String,
    /// Square feet.
    pub flat_size: i32,
    pub room: i32,
    pub bath: i32,
    pub kitchen: i32,
    /// Up to four public ids of already uploaded images.
    #[serde(default)]
    pub images: Vec<String>,
    /// Exactly five entries.
    pub features: Vec<String>,
    /// Exactly five entries.
    pub descriptions: Vec<String>,
    #[serde(default = "default_available")]
    pub available: bool,
}

#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct UpdateListingRequest {
    pub category_id: Option<i64>,
    pub location_id: Option<i64>,
    pub title: Option<String>,
    pub flat_size: Option<i32>,
    pub room: Option<i32>,
    pub bath: Option<i32>,
    pub kitchen: Option<i32>,
    pub images: Option<Vec<String>>,
    pub features: Option<Vec<String>>,
    pub descriptions: Option<Vec<String>>,
    pub available: Option<bool>,
}

#[utoipa::path(
    post,
    path = "/api/v1/owner/flats",
    request_body = CreateListingRequest,
    responses(
        (status = 201, description = "Listing created with a unique slug.", body = ListingDto),
        (status = 400, description = "Invalid listing.", body = ErrorResponse),
        (status = 403, description = "Caller is not an owner.", body = ErrorResponse),
        (status = 404, description = "Unknown category or location.", body = ErrorResponse)
    ),
    tag = "Owner"
)]
pub async fn create_listing(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Json(payload): Json<CreateListingRequest>,
) -> HttpResult<(StatusCode, Json<ListingDto>)> {
    let command = CreateListingCommand {
        category_id: payload.category_id,
        location_id: payload.location_id,
        title: payload.title,
        flat_size: payload.flat_size,
        room: payload.room,
        bath: payload.bath,
        kitchen: payload.kitchen,
        images: payload.images,
        features: payload.features,
        descriptions: payload.descriptions,
        available: Some(payload.available),
    };

    let listing = state
        .services
        .listing_commands
        .create_listing(&user, command)
        .await
        .into_http()?;

    Ok((StatusCode::CREATED, Json(listing)))
}

#[utoipa::path(
    get,
    path = "/api/v1/owner/flats",
    responses(
        (status = 200, description = "Caller's listings, newest first.", body = Vec<ListingDto>),
        (status = 403, description = "Caller is not an owner.", body = ErrorResponse)
    ),
    tag = "Owner"
)]
pub async fn list_owner_listings(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
) -> HttpResult<Json<Vec<ListingDto>>> {
    state
        .services
        .listing_queries
        .list_owner_listings(&user)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    put,
    path = "/api/v1/owner/flats/{id}",
    params(("id" = i64, Path, description = "Listing id")),
    request_body = UpdateListingRequest,
    responses(
        (status = 200, description = "Updated listing.", body = ListingDto),
        (status = 400, description = "Invalid update.", body = ErrorResponse),
        (status = 404, description = "Listing not found or not owned by the caller.", body = ErrorResponse)
    ),
    tag = "Owner"
)]
pub async fn update_listing(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Path(id): Path<i64>,
    Json(payload): Json<UpdateListingRequest>,
) -> HttpResult<Json<ListingDto>> {
    let command = UpdateListingCommand {
        id,
        category_id: payload.category_id,
        location_id: payload.location_id,
        title: payload.title,
        flat_size: payload.flat_size,
        room: payload.room,
        bath: payload.bath,
        kitchen: payload.kitchen,
        images: payload.images,
        features: payload.features,
        descriptions: payload.descriptions,
        available: payload.available,
    };

    state
        .services
        .listing_commands
        .update_listing(&user, command)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    delete,
    path = "/api/v1/owner/flats/{id}",
    params(("id" = i64, Path, description = "Listing id")),
    responses(
        (status = 200, description = "Listing deleted.", body = crate::presentation::http::openapi::StatusResponse),
        (status = 404, description = "Listing not found or not owned by the caller.", body = ErrorResponse)
    ),
    tag = "Owner"
)]
pub async fn delete_listing(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Path(id): Path<i64>,
) -> HttpResult<Json<serde_json::Value>> {
    state
        .services
        .listing_commands
        .delete_listing(&user, DeleteListingCommand { id })
        .await
        .into_http()?;

    Ok(Json(json!({ "status": "deleted" })))
}
