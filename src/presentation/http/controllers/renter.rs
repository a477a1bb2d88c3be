use crate::application::{
    commands::listings::{ContactOwnerCommand, WithdrawContactCommand},
    dto::ListingDto,
};
use crate::presentation::http::error::{ErrorResponse, HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::Authenticated;
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json, extract::Path};
use serde::Deserialize;
use serde_json::json;
use utoipa::ToSchema;

#[derive(Debug, Deserialize, ToSchema)]
pub struct ContactOwnerRequest {
    pub first_name: String,
    pub last_name: String,
    /// Reply-to address for the owner.
    pub email: String,
    pub phone: String,
    pub message: String,
}

#[utoipa::path(
    get,
    path = "/api/v1/renter/bookings",
    responses(
        (status = 200, description = "Listings the caller has messaged.", body = Vec<ListingDto>),
        (status = 401, description = "Missing or invalid token.", body = ErrorResponse)
    ),
    tag = "Renter"
)]
pub async fn list_bookings(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
) -> HttpResult<Json<Vec<ListingDto>>> {
    state
        .services
        .listing_queries
        .list_renter_bookings(&user)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    delete,
    path = "/api/v1/renter/bookings/{slug}",
    params(("slug" = String, Path, description = "Listing slug")),
    responses(
        (status = 200, description = "Booking withdrawn.", body = crate::presentation::http::openapi::StatusResponse),
        (status = 400, description = "No booking for this listing.", body = ErrorResponse),
        (status = 404, description = "Listing not found.", body = ErrorResponse)
    ),
    tag = "Renter"
)]
pub async fn withdraw_booking(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Path(slug): Path<String>,
) -> HttpResult<Json<serde_json::Value>> {
    state
        .services
        .listing_commands
        .withdraw_contact(&user, WithdrawContactCommand { slug })
        .await
        .into_http()?;

    Ok(Json(json!({ "status": "withdrawn" })))
}

#[utoipa::path(
    post,
    path = "/api/v1/renter/messages/{slug}",
    params(("slug" = String, Path, description = "Listing slug")),
    request_body = ContactOwnerRequest,
    responses(
        (status = 200, description = "Owner notified.", body = crate::presentation::http::openapi::StatusResponse),
        (status = 400, description = "Invalid message or already contacted.", body = ErrorResponse),
        (status = 403, description = "Caller is not a renter.", body = ErrorResponse),
        (status = 404, description = "Listing not found.", body = ErrorResponse)
    ),
    tag = "Renter"
)]
pub async fn contact_owner(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Path(slug): Path<String>,
    Json(payload): Json<ContactOwnerRequest>,
) -> HttpResult<Json<serde_json::Value>> {
    let command = ContactOwnerCommand {
        slug,
        first_name: payload.first_name,
        last_name: payload.last_name,
        email: payload.email,
        phone: payload.phone,
        message: payload.message,
    };

    state
        .services
        .listing_commands
        .contact_owner(&user, command)
        .await
        .into_http()?;

    Ok(Json(json!({ "status": "sent" })))
}
