// src/presentation/http/controllers/listings.rs
use crate::application::dto::{ListingDto, Page, PageRequest};
use crate::presentation::http::error::{ErrorResponse, HttpResult, IntoHttpResult};
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, Json,
    extract::{Path, Query},
};
use serde::Deserialize;
use utoipa::IntoParams;

#[derive(Debug, Default, Deserialize, IntoParams)]
pub struct PageParams {
    /// 1-based page number, defaults to 1.
    pub page: Option<u64>,
    /// Defaults to 2.
    pub page_size: Option<u64>,
}

impl PageParams {
    fn request(&self) -> PageRequest {
        PageRequest::new(self.page, self.page_size)
    }
}

#[derive(Debug, Default, Deserialize, IntoParams)]
pub struct CategoryFilterParams {
    /// Category id.
    pub category: Option<i64>,
    pub page: Option<u64>,
    pub page_size: Option<u64>,
}

#[derive(Debug, Default, Deserialize, IntoParams)]
pub struct SearchParams {
    /// Substring of the category title.
    pub category: Option<String>,
    /// Substring of the location title.
    pub location: Option<String>,
    pub page: Option<u64>,
    pub page_size: Option<u64>,
}

#[utoipa::path(
    get,
    path = "/api/v1/home",
    responses(
        (status = 200, description = "Newest six listings.", body = Vec<ListingDto>)
    ),
    security(()),
    tag = "Listings"
)]
pub async fn home(Extension(state): Extension<HttpState>) -> HttpResult<Json<Vec<ListingDto>>> {
    state
        .services
        .listing_queries
        .home()
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/api/v1/flats",
    params(PageParams),
    responses(
        (status = 200, description = "All listings, newest first.", body = Page<ListingDto>),
        (status = 404, description = "Page out of range.", body = ErrorResponse)
    ),
    security(()),
    tag = "Listings"
)]
pub async fn list_listings(
    Extension(state): Extension<HttpState>,
    Query(params): Query<PageParams>,
) -> HttpResult<Json<Page<ListingDto>>> {
    state
        .services
        .listing_queries
        .list_listings(params.request())
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/api/v1/flats/by-slug/{slug}",
    params(("slug" = String, Path, description = "Listing slug")),
    responses(
        (status = 200, description = "Listing detail.", body = ListingDto),
        (status = 404, description = "No listing with this slug.", body = ErrorResponse)
    ),
    security(()),
    tag = "Listings"
)]
pub async fn get_listing_by_slug(
    Extension(state): Extension<HttpState>,
    Path(slug): Path<String>,
) -> HttpResult<Json<ListingDto>> {
    state
        .services
        .listing_queries
        .get_listing_by_slug(&slug)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/api/v1/flats/filter-category",
    params(CategoryFilterParams),
    responses(
        (status = 200, description = "Listings in the category.", body = Page<ListingDto>),
        (status = 400, description = "Missing category id.", body = ErrorResponse),
        (status = 404, description = "Page out of range.", body = ErrorResponse)
    ),
    security(()),
    tag = "Listings"
)]
pub async fn filter_by_category(
    Extension(state): Extension<HttpState>,
    Query(params): Query<CategoryFilterParams>,
) -> HttpResult<Json<Page<ListingDto>>> {
    state
        .services
        .listing_queries
        .filter_by_category(
            params.category,
            PageRequest::new(params.page, params.page_size),
        )
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/api/v1/flats/search",
    params(SearchParams),
    responses(
        (status = 200, description = "Listings matching category and location titles.", body = Page<ListingDto>),
        (status = 404, description = "Page out of range.", body = ErrorResponse)
    ),
    security(()),
    tag = "Listings"
)]
pub async fn search(
    Extension(state): Extension<HttpState>,
    Query(params): Query<SearchParams>,
) -> HttpResult<Json<Page<ListingDto>>> {
    let request = PageRequest::new(params.page, params.page_size);
    state
        .services
        .listing_queries
        .search(params.category, params.location, request)
        .await
        .into_http()
        .map(Json)
}
