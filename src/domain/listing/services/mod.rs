// src/domain/listing/services/mod.rs
use std::sync::Arc;

use crate::application::ports::util::SlugGenerator;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::listing::repository::ListingReadRepository;
use crate::domain::listing::value_objects::{ListingId, ListingTitle};
use crate::domain::slug::{derive_slug, Slug};

/// Base slug for titles that normalise to nothing.
pub const FALLBACK_LISTING_SLUG: &str = "flat";

/// Produces listing slugs that are unique across the listing table.
pub struct ListingSlugService {
    read_repo: Arc<dyn ListingReadRepository>,
    generator: Arc<dyn SlugGenerator>,
}

impl ListingSlugService {
    pub fn new(
        read_repo: Arc<dyn ListingReadRepository>,
        generator: Arc<dyn SlugGenerator>,
    ) -> Self {
        Self {
            read_repo,
            generator,
        }
    }

    pub fn base_slug(&self, title: &ListingTitle) -> DomainResult<Slug> {
        derive_slug(self.generator.as_ref(), title.as_str(), FALLBACK_LISTING_SLUG)
    }

    /// First free candidate among `base`, `base-2`, `base-3`, ... The row
    /// identified by `ignore_id` does not count as a collision.
    pub async fn generate_unique_slug(
        &self,
        title: &ListingTitle,
        ignore_id: Option<ListingId>,
    ) -> DomainResult<Slug> {
        let base = self.base_slug(title)?;
        if !self.read_repo.slug_exists(&base, ignore_id).await? {
            return Ok(base);
        }

        let mut suffix: u32 = 2;
        loop {
            let candidate = base.with_suffix(suffix);
            if !self.read_repo.slug_exists(&candidate, ignore_id).await? {
                return Ok(candidate);
            }
            suffix = suffix.checked_add(1).ok_or_else(|| {
                DomainError::Conflict(format!("no free slug left for '{base}'"))
            })?;
        }
    }

    /// Slug to persist on update, or `None` when the title is unchanged.
    pub async fn slug_for_update(
        &self,
        id: ListingId,
        persisted_title: &ListingTitle,
        incoming_title: Option<&ListingTitle>,
    ) -> DomainResult<Option<Slug>> {
        match incoming_title {
            Some(title) if title != persisted_title => {
                self.generate_unique_slug(title, Some(id)).await.map(Some)
            }
            _ => Ok(None),
        }
    }
}
