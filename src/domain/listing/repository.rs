use crate::domain::errors::DomainResult;
use crate::domain::listing::entity::{Listing, ListingUpdate, ListingView, NewListing};
use crate::domain::listing::filter::ListingFilter;
use crate::domain::listing::value_objects::ListingId;
use crate::domain::slug::Slug;
use crate::domain::user::UserId;
use async_trait::async_trait;

/// Writes report a slug unique-constraint violation as `DomainError::SlugTaken`.
#[async_trait]
pub trait ListingWriteRepository: Send + Sync {
    async fn insert(&self, listing: NewListing) -> DomainResult<Listing>;
    async fn update(&self, update: ListingUpdate) -> DomainResult<Listing>;
    async fn delete(&self, id: ListingId) -> DomainResult<()>;
}

#[async_trait]
pub trait ListingReadRepository: Send + Sync {
    async fn find_by_id(&self, id: ListingId) -> DomainResult<Option<Listing>>;
    async fn find_by_slug(&self, slug: &Slug) -> DomainResult<Option<ListingView>>;
    async fn slug_exists(&self, slug: &Slug, excluding: Option<ListingId>) -> DomainResult<bool>;
    async fn latest(&self, limit: u64) -> DomainResult<Vec<ListingView>>;
    async fn count(&self, filter: &ListingFilter) -> DomainResult<u64>;
    async fn list(
        &self,
        filter: &ListingFilter,
        offset: u64,
        limit: u64,
    ) -> DomainResult<Vec<ListingView>>;
    async fn list_by_owner(&self, owner_id: UserId) -> DomainResult<Vec<ListingView>>;
    async fn list_contacted_by(&self, renter_id: UserId) -> DomainResult<Vec<ListingView>>;
}

/// Renters who messaged a listing's owner.
#[async_trait]
pub trait ListingContactRepository: Send + Sync {
    async fn exists(&self, listing_id: ListingId, renter_id: UserId) -> DomainResult<bool>;
    /// Returns `false` when the pair was already recorded.
    async fn add(&self, listing_id: ListingId, renter_id: UserId) -> DomainResult<bool>;
    /// Returns `false` when there was nothing to remove.
    async fn remove(&self, listing_id: ListingId, renter_id: UserId) -> DomainResult<bool>;
}
