// src/application/commands/listings/service.rs
use std::sync::Arc;

use crate::{
    application::{
        dto::ListingDto,
        error::{ApplicationError, ApplicationResult},
        ports::{image_store::ImageStore, mailer::Mailer, time::Clock},
    },
    domain::{
        listing::{
            Listing, ListingContactRepository, ListingReadRepository, ListingWriteRepository,
            services::ListingSlugService,
        },
        taxonomy::{CategoryId, CategoryRepository, LocationId, LocationRepository},
    },
};

/// Writes rejected by the slug unique constraint are re-derived and retried
/// at most this many times in total.
pub const MAX_SLUG_ATTEMPTS: u32 = 5;

pub struct ListingCommandService {
    pub(super) write_repo: Arc<dyn ListingWriteRepository>,
    pub(super) read_repo: Arc<dyn ListingReadRepository>,
    pub(super) contact_repo: Arc<dyn ListingContactRepository>,
    pub(super) category_repo: Arc<dyn CategoryRepository>,
    pub(super) location_repo: Arc<dyn LocationRepository>,
    pub(super) slug_service: Arc<ListingSlugService>,
    pub(super) mailer: Arc<dyn Mailer>,
    pub(super) image_store: Arc<dyn ImageStore>,
    pub(super) clock: Arc<dyn Clock>,
}

impl ListingCommandService {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        write_repo: Arc<dyn ListingWriteRepository>,
        read_repo: Arc<dyn ListingReadRepository>,
        contact_repo: Arc<dyn ListingContactRepository>,
        category_repo: Arc<dyn CategoryRepository>,
        location_repo: Arc<dyn LocationRepository>,
        slug_service: Arc<ListingSlugService>,
        mailer: Arc<dyn Mailer>,
        image_store: Arc<dyn ImageStore>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            write_repo,
            read_repo,
            contact_repo,
            category_repo,
            location_repo,
            slug_service,
            mailer,
            image_store,
            clock,
        }
    }

    pub(super) async fn ensure_category(&self, id: CategoryId) -> ApplicationResult<()> {
        self.category_repo
            .find_by_id(id)
            .await?
            .map(|_| ())
            .ok_or_else(|| ApplicationError::not_found("category not found"))
    }

    pub(super) async fn ensure_location(&self, id: LocationId) -> ApplicationResult<()> {
        self.location_repo
            .find_by_id(id)
            .await?
            .map(|_| ())
            .ok_or_else(|| ApplicationError::not_found("location not found"))
    }

    pub(super) async fn to_dto(&self, listing: Listing) -> ApplicationResult<ListingDto> {
        self.read_repo
            .find_by_slug(&listing.slug)
            .await?
            .map(ListingDto::from)
            .ok_or_else(|| ApplicationError::not_found("listing not found"))
    }
}

pub(super) fn slug_attempts_exhausted(slug: &str) -> ApplicationError {
    ApplicationError::conflict(format!(
        "could not assign a unique slug after {MAX_SLUG_ATTEMPTS} attempts (last tried '{slug}')"
    ))
}
