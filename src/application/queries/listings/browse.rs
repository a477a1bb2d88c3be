use super::ListingQueryService;
use crate::{
    application::{
        dto::{ListingDto, Page, PageRequest},
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        listing::ListingFilter,
        slug::Slug,
        taxonomy::CategoryId,
    },
};

/// Newest listings shown on the landing page.
pub const HOME_LISTING_COUNT: u64 = 6;

impl ListingQueryService {
    pub async fn home(&self) -> ApplicationResult<Vec<ListingDto>> {
        let records = self.read_repo.latest(HOME_LISTING_COUNT).await?;
        Ok(records.into_iter().map(Into::into).collect())
    }

    pub async fn list_listings(&self, request: PageRequest) -> ApplicationResult<Page<ListingDto>> {
        self.paginate(ListingFilter::all(), request).await
    }

    pub async fn get_listing_by_slug(&self, slug: &str) -> ApplicationResult<ListingDto> {
        let slug = Slug::new(slug).map_err(|_| ApplicationError::not_found("listing not found"))?;
        self.read_repo
            .find_by_slug(&slug)
            .await?
            .map(Into::into)
            .ok_or_else(|| ApplicationError::not_found("listing not found"))
    }

    pub async fn filter_by_category(
        &self,
        category_id: Option<i64>,
        request: PageRequest,
    ) -> ApplicationResult<Page<ListingDto>> {
        let raw = category_id.ok_or_else(|| ApplicationError::validation("category id is required"))?;
        let category_id = CategoryId::new(raw)?;
        self.paginate(ListingFilter::by_category(category_id), request)
            .await
    }

    /// Case-insensitive substring match on category and location titles.
    pub async fn search(
        &self,
        category: Option<String>,
        location: Option<String>,
        request: PageRequest,
    ) -> ApplicationResult<Page<ListingDto>> {
        self.paginate(ListingFilter::search(category, location), request)
            .await
    }
}
