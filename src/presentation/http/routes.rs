// src/presentation/http/routes.rs
use crate::presentation::http::state::HttpState;
use crate::presentation::http::{
    controllers::{auth, contact, listings, owner, profile, renter, taxonomy},
    middleware::{rate_limit::auth_rate_limit_layer, require_capabilities::require_capability},
    openapi::{self, StatusResponse},
};
use axum::{
    Extension, Router,
    body::Body,
    http::{HeaderValue, Method, Request},
    middleware::{self, Next},
    routing::{get, post, put},
};
use std::time::Duration;
use tower_http::{
    compression::CompressionLayer,
    cors::{AllowOrigin, Any, CorsLayer},
    trace::TraceLayer,
};

pub const API_PREFIX: &str = "/api/v1";

pub fn build_router(state: HttpState, allowed_origins: &[String]) -> Router {
    build_router_with_rate_limiter(state, allowed_origins, true)
}

/// The per-IP limiter needs the peer address from `ConnectInfo`; in-process
/// tests that call the router directly disable it.
pub fn build_router_with_rate_limiter(
    state: HttpState,
    allowed_origins: &[String],
    enable_rate_limiter: bool,
) -> Router {
    let mut credentials = Router::new()
        .route("/auth/register", post(auth::register))
        .route("/auth/login", post(auth::login))
        .route("/auth/token/refresh", post(auth::refresh_token));
    if enable_rate_limiter {
        credentials = credentials.layer(auth_rate_limit_layer());
    }

    let taxonomy_admin = || {
        middleware::from_fn(|req: Request<Body>, next: Next| {
            require_capability(req, next, "taxonomy", "manage")
        })
    };

    let api = Router::new()
        .route("/health", get(health))
        .merge(credentials)
        .route("/auth/activate/{token}", get(auth::activate))
        .route(
            "/profile",
            get(profile::get_profile).patch(profile::update_profile),
        )
        .route("/home", get(listings::home))
        .route(
            "/categories",
            post(taxonomy::create_category)
                .route_layer(taxonomy_admin())
                .get(taxonomy::list_categories),
        )
        .route(
            "/categories/{id}",
            put(taxonomy::rename_category).route_layer(taxonomy_admin()),
        )
        .route(
            "/locations",
            post(taxonomy::create_location)
                .route_layer(taxonomy_admin())
                .get(taxonomy::list_locations),
        )
        .route(
            "/locations/{id}",
            put(taxonomy::rename_location).route_layer(taxonomy_admin()),
        )
        .route("/flats", get(listings::list_listings))
        .route("/flats/by-slug/{slug}", get(listings::get_listing_by_slug))
        .route("/flats/filter-category", get(listings::filter_by_category))
        .route("/flats/search", get(listings::search))
        .route(
            "/owner/flats",
            get(owner::list_owner_listings).post(owner::create_listing),
        )
        .route(
            "/owner/flats/{id}",
            put(owner::update_listing).delete(owner::delete_listing),
        )
        .route("/renter/bookings", get(renter::list_bookings))
        .route(
            "/renter/bookings/{slug}",
            axum::routing::delete(renter::withdraw_booking),
        )
        .route("/renter/messages/{slug}", post(renter::contact_owner))
        .route("/contact", post(contact::submit_contact_form));

    Router::new()
        .merge(openapi::docs_router())
        .nest(API_PREFIX, api)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer(allowed_origins))
        .layer(Extension(state))
}

fn cors_layer(allowed_origins: &[String]) -> CorsLayer {
    let cors = CorsLayer::new()
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::PATCH,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers(Any)
        .max_age(Duration::from_secs(3600));

    let origins: Vec<HeaderValue> = allowed_origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(err) => {
                tracing::warn!(origin = %origin, error = %err, "ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    if origins.is_empty() {
        cors.allow_origin(Any)
    } else {
        cors.allow_origin(AllowOrigin::list(origins))
    }
}

#[utoipa::path(
    get,
    path = "/api/v1/health",
    responses(
        (status = 200, description = "Service health check.", body = StatusResponse)
    ),
    security(()),
    tag = "System"
)]
pub async fn health() -> axum::Json<StatusResponse> {
    axum::Json(StatusResponse {
        status: "ok".into(),
    })
}
