use crate::application::{
    commands::taxonomy::{CreateTermCommand, RenameTermCommand},
    dto::{CategoryDto, LocationDto},
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
use utoipa::ToSchema;

#[derive(Debug, Deserialize, ToSchema)]
pub struct TermRequest {
    pub title: String,
}

#[utoipa::path(
    get,
    path = "/api/v1/categories",
    responses((status = 200, description = "Categories ordered by title.", body = Vec<CategoryDto>)),
    security(()),
    tag = "Taxonomy"
)]
pub async fn list_categories(
    Extension(state): Extension<HttpState>,
) -> HttpResult<Json<Vec<CategoryDto>>> {
    state
        .services
        .taxonomy_queries
        .list_categories()
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    post,
    path = "/api/v1/categories",
    request_body = TermRequest,
    responses(
        (status = 201, description = "Category created.", body = CategoryDto),
        (status = 403, description = "Caller is not an admin.", body = ErrorResponse),
        (status = 409, description = "Title already exists.", body = ErrorResponse)
    ),
    tag = "Taxonomy"
)]
pub async fn create_category(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Json(payload): Json<TermRequest>,
) -> HttpResult<(StatusCode, Json<CategoryDto>)> {
    let category = state
        .services
        .taxonomy_commands
        .create_category(&user, CreateTermCommand { title: payload.title })
        .await
        .into_http()?;
    Ok((StatusCode::CREATED, Json(category)))
}

#[utoipa::path(
    put,
    path = "/api/v1/categories/{id}",
    params(("id" = i64, Path, description = "Category id")),
    request_body = TermRequest,
    responses(
        (status = 200, description = "Category renamed.", body = CategoryDto),
        (status = 404, description = "Unknown category.", body = ErrorResponse),
        (status = 409, description = "Title already exists.", body = ErrorResponse)
    ),
    tag = "Taxonomy"
)]
pub async fn rename_category(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Path(id): Path<i64>,
    Json(payload): Json<TermRequest>,
) -> HttpResult<Json<CategoryDto>> {
    state
        .services
        .taxonomy_commands
        .rename_category(
            &user,
            RenameTermCommand {
                id,
                title: payload.title,
            },
        )
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/api/v1/locations",
    responses((status = 200, description = "Locations ordered by title.", body = Vec<LocationDto>)),
    security(()),
    tag = "Taxonomy"
)]
pub async fn list_locations(
    Extension(state): Extension<HttpState>,
) -> HttpResult<Json<Vec<LocationDto>>> {
    state
        .services
        .taxonomy_queries
        .list_locations()
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    post,
    path = "/api/v1/locations",
    request_body = TermRequest,
    responses(
        (status = 201, description = "Location created.", body = LocationDto),
        (status = 403, description = "Caller is not an admin.", body = ErrorResponse),
        (status = 409, description = "Title already exists.", body = ErrorResponse)
    ),
    tag = "Taxonomy"
)]
pub async fn create_location(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Json(payload): Json<TermRequest>,
) -> HttpResult<(StatusCode, Json<LocationDto>)> {
    let location = state
        .services
        .taxonomy_commands
        .create_location(&user, CreateTermCommand { title: payload.title })
        .await
        .into_http()?;
    Ok((StatusCode::CREATED, Json(location)))
}

#[utoipa::path(
    put,
    path = "/api/v1/locations/{id}",
    params(("id" = i64, Path, description = "Location id")),
    request_body = TermRequest,
    responses(
        (status = 200, description = "Location renamed.", body = LocationDto),
        (status = 404, description = "Unknown location.", body = ErrorResponse),
        (status = 409, description = "Title already exists.", body = ErrorResponse)
    ),
    tag = "Taxonomy"
)]
pub async fn rename_location(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Path(id): Path<i64>,
    Json(payload): Json<TermRequest>,
) -> HttpResult<Json<LocationDto>> {
    state
        .services
        .taxonomy_commands
        .rename_location(
            &user,
            RenameTermCommand {
                id,
                title: payload.title,
            },
        )
        .await
        .into_http()
        .map(Json)
}
