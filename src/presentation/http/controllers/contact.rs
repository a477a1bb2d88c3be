use crate::application::commands::contact::ContactFormCommand;
use crate::presentation::http::error::{ErrorResponse, HttpResult, IntoHttpResult};
use crate::presentation::http::openapi::StatusResponse;
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json};
use serde::Deserialize;
use utoipa::ToSchema;

#[derive(Debug, Deserialize, ToSchema)]
pub struct ContactFormRequest {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub message: String,
}

#[utoipa::path(
    post,
    path = "/api/v1/contact",
    request_body = ContactFormRequest,
    responses(
        (status = 200, description = "Message forwarded to support.", body = StatusResponse),
        (status = 400, description = "Missing field or invalid email.", body = ErrorResponse)
    ),
    security(()),
    tag = "Contact"
)]
pub async fn submit_contact_form(
    Extension(state): Extension<HttpState>,
    Json(payload): Json<ContactFormRequest>,
) -> HttpResult<Json<StatusResponse>> {
    let command = ContactFormCommand {
        name: payload.name,
        email: payload.email,
        phone: payload.phone,
        address: payload.address,
        message: payload.message,
    };

    state.services.contact_form.submit(command).await.into_http()?;

    Ok(Json(StatusResponse {
        status: "sent".into(),
    }))
}
