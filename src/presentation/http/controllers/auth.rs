// src/presentation/http/controllers/auth.rs
use crate::application::{
    commands::users::{LoginUserCommand, RefreshTokenCommand, RegisterUserCommand},
    dto::{AuthTokenDto, UserDto},
};
use crate::domain::user::Role;
use crate::presentation::http::error::{ErrorResponse, HttpResult, IntoHttpResult};
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, Json,
    extract::Path,
    http::StatusCode,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Deserialize, ToSchema)]
pub struct RegisterRequest {
    /// `owner` or `renter`.
    pub user_type: Role,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone_number: String,
    pub password: String,
    pub confirm_password: String,
    /// Owners only.
    #[serde(default)]
    pub house_holding_number: Option<String>,
    /// Owners only.
    #[serde(default)]
    pub address: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct RegisterResponse {
    pub user: UserDto,
    pub message: String,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct LoginResponse {
    pub token: AuthTokenDto,
    pub user: UserDto,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct RefreshTokenRequest {
    pub refresh_token: String,
}

#[utoipa::path(
    post,
    path = "/api/v1/auth/register",
    request_body = RegisterRequest,
    responses(
        (status = 201, description = "Account created; activation email sent.", body = RegisterResponse),
        (status = 400, description = "Invalid input.", body = ErrorResponse),
        (status = 409, description = "Email already registered.", body = ErrorResponse)
    ),
    security(()),
    tag = "Auth"
)]
pub async fn register(
    Extension(state): Extension<HttpState>,
    Json(payload): Json<RegisterRequest>,
) -> HttpResult<(StatusCode, Json<RegisterResponse>)> {
    let command = RegisterUserCommand {
        user_type: payload.user_type,
        first_name: payload.first_name,
        last_name: payload.last_name,
        email: payload.email,
        phone_number: payload.phone_number,
        password: payload.password,
        confirm_password: payload.confirm_password,
        house_holding_number: payload.house_holding_number,
        address: payload.address,
    };

    let user = state
        .services
        .user_commands
        .register(command)
        .await
        .into_http()?;

    Ok((
        StatusCode::CREATED,
        Json(RegisterResponse {
            user,
            message: "check your email to activate your account".into(),
        }),
    ))
}

#[utoipa::path(
    get,
    path = "/api/v1/auth/activate/{token}",
    params(("token" = String, Path, description = "Activation token from the email link")),
    responses(
        (status = 200, description = "Account activated.", body = UserDto),
        (status = 400, description = "Invalid, expired or already used token.", body = ErrorResponse)
    ),
    security(()),
    tag = "Auth"
)]
pub async fn activate(
    Extension(state): Extension<HttpState>,
    Path(token): Path<String>,
) -> HttpResult<Json<UserDto>> {
    state
        .services
        .user_commands
        .activate(&token)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    post,
    path = "/api/v1/auth/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Access and refresh tokens.", body = LoginResponse),
        (status = 401, description = "Invalid credentials.", body = ErrorResponse),
        (status = 403, description = "Account not activated.", body = ErrorResponse)
    ),
    security(()),
    tag = "Auth"
)]
pub async fn login(
    Extension(state): Extension<HttpState>,
    Json(payload): Json<LoginRequest>,
) -> HttpResult<Json<LoginResponse>> {
    let command = LoginUserCommand {
        email: payload.email,
        password: payload.password,
    };

    let result = state
        .services
        .user_commands
        .login(command)
        .await
        .into_http()?;

    Ok(Json(LoginResponse {
        token: result.token,
        user: result.user,
    }))
}

#[utoipa::path(
    post,
    path = "/api/v1/auth/token/refresh",
    request_body = RefreshTokenRequest,
    responses(
        (status = 200, description = "Fresh access token.", body = AuthTokenDto),
        (status = 401, description = "Invalid refresh token.", body = ErrorResponse)
    ),
    security(()),
    tag = "Auth"
)]
pub async fn refresh_token(
    Extension(state): Extension<HttpState>,
    Json(payload): Json<RefreshTokenRequest>,
) -> HttpResult<Json<AuthTokenDto>> {
    state
        .services
        .user_commands
        .refresh_token(RefreshTokenCommand {
            refresh_token: payload.refresh_token,
        })
        .await
        .into_http()
        .map(Json)
}
