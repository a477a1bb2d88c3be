// src/presentation/http/openapi.rs
use axum::{Router, response::Redirect, routing::get};
use serde::{Deserialize, Serialize};
use std::{collections::HashSet, env, fs::File, io::BufWriter, path::Path};
use utoipa::openapi::{
    Components,
    security::{Http, HttpAuthScheme, SecurityScheme},
    server::Server,
};
use utoipa::{Modify, OpenApi, ToSchema};
use utoipa_redoc::{Redoc, Servable};
use utoipa_swagger_ui::SwaggerUi;

pub const DEFAULT_SNAPSHOT_PATH: &str = "spec/openapi.json";

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct StatusResponse {
    pub status: String,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        super::routes::health,
        crate::presentation::http::controllers::auth::register,
        crate::presentation::http::controllers::auth::activate,
        crate::presentation::http::controllers::auth::login,
        crate::presentation::http::controllers::auth::refresh_token,
        crate::presentation::http::controllers::profile::get_profile,
        crate::presentation::http::controllers::profile::update_profile,
        crate::presentation::http::controllers::listings::home,
        crate::presentation::http::controllers::listings::list_listings,
        crate::presentation::http::controllers::listings::get_listing_by_slug,
        crate::presentation::http::controllers::listings::filter_by_category,
        crate::presentation::http::controllers::listings::search,
        crate::presentation::http::controllers::owner::create_listing,
        crate::presentation::http::controllers::owner::list_owner_listings,
        crate::presentation::http::controllers::owner::update_listing,
        crate::presentation::http::controllers::owner::delete_listing,
        crate::presentation::http::controllers::renter::list_bookings,
        crate::presentation::http::controllers::renter::withdraw_booking,
        crate::presentation::http::controllers::renter::contact_owner,
        crate::presentation::http::controllers::taxonomy::list_categories,
        crate::presentation::http::controllers::taxonomy::create_category,
        crate::presentation::http::controllers::taxonomy::rename_category,
        crate::presentation::http::controllers::taxonomy::list_locations,
        crate::presentation::http::controllers::taxonomy::create_location,
        crate::presentation::http::controllers::taxonomy::rename_location,
        crate::presentation::http::controllers::contact::submit_contact_form
    ),
    components(
        schemas(
            StatusResponse,
            crate::presentation::http::error::ErrorResponse,
            crate::presentation::http::controllers::auth::RegisterRequest,
            crate::presentation::http::controllers::auth::RegisterResponse,
            crate::presentation::http::controllers::auth::LoginRequest,
            crate::presentation::http::controllers::auth::LoginResponse,
            crate::presentation::http::controllers::auth::RefreshTokenRequest,
            crate::presentation::http::controllers::profile::UpdateProfileRequest,
            crate::presentation::http::controllers::owner::CreateListingRequest,
            crate::presentation::http::controllers::owner::UpdateListingRequest,
            crate::presentation::http::controllers::renter::ContactOwnerRequest,
            crate::presentation::http::controllers::taxonomy::TermRequest,
            crate::presentation::http::controllers::contact::ContactFormRequest,
            crate::application::dto::UserDto,
            crate::application::dto::UserProfileDto,
            crate::application::dto::AuthTokenDto,
            crate::application::dto::CapabilityView,
            crate::application::dto::ListingDto,
            crate::application::dto::OwnerContactDto,
            crate::application::dto::TermRefDto,
            crate::application::dto::CategoryDto,
            crate::application::dto::LocationDto,
            crate::domain::user::Role
        )
    ),
    tags(
        (name = "Auth", description = "Registration, activation and tokens"),
        (name = "Profile", description = "The caller's own account"),
        (name = "Listings", description = "Public listing browsing and search"),
        (name = "Owner", description = "Listing management for owners"),
        (name = "Renter", description = "Messages and bookings for renters"),
        (name = "Taxonomy", description = "Categories and locations"),
        (name = "Contact", description = "Public contact form"),
        (name = "System", description = "System level endpoints")
    ),
    modifiers(&ApiDocCustomizer),
    security(("bearerAuth" = [])),
    info(
        title = "EasyRent API",
        description = "Property-rental listing backend",
        version = "0.1.0"
    )
)]
pub struct ApiDoc;

struct ApiDocCustomizer;

impl Modify for ApiDocCustomizer {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Components::default);
        let mut http = Http::new(HttpAuthScheme::Bearer);
        http.bearer_format = Some("Biscuit".into());
        components.add_security_scheme("bearerAuth", SecurityScheme::Http(http));

        let servers = openapi.servers.get_or_insert_with(Vec::new);
        servers.clear();

        let mut urls: Vec<String> = env::var("PUBLIC_BASE_URL")
            .ok()
            .map(|value| value.trim().trim_end_matches('/').to_string())
            .filter(|url| !url.is_empty())
            .into_iter()
            .collect();

        if !urls.iter().any(|url| url == "http://localhost:8000") {
            urls.push("http://localhost:8000".to_string());
        }

        let mut seen = HashSet::new();
        for url in urls {
            if seen.insert(url.clone()) {
                servers.push(Server::new(url));
            }
        }
    }
}

/// Swagger UI at `/docs` (which also serves `/openapi.json`) and Redoc at
/// `/redoc`.
pub fn docs_router() -> Router {
    let openapi = ApiDoc::openapi();
    let swagger = SwaggerUi::new("/docs").url("/openapi.json", openapi.clone());
    let redoc = Redoc::with_url("/redoc", openapi);
    Router::new()
        .merge(swagger)
        .merge(redoc)
        .route("/", get(|| async { Redirect::permanent("/docs") }))
}

/// Writes the document to `OPENAPI_SNAPSHOT_PATH` (default
/// [`DEFAULT_SNAPSHOT_PATH`]) and returns the path used.
pub fn write_openapi_snapshot() -> std::io::Result<String> {
    let spec = ApiDoc::openapi();
    let output_path =
        env::var("OPENAPI_SNAPSHOT_PATH").unwrap_or_else(|_| DEFAULT_SNAPSHOT_PATH.to_string());
    let path = Path::new(&output_path);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let file = File::create(path)?;
    let writer = BufWriter::new(file);
    serde_json::to_writer_pretty(writer, &spec)?;
    Ok(output_path)
}
