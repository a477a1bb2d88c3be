// src/domain/listing/mod.rs
pub mod entity;
pub mod filter;
pub mod repository;
pub mod services;
pub mod specifications;
pub mod value_objects;

pub use entity::{Listing, ListingUpdate, ListingView, NewListing, OwnerContact};
pub use filter::ListingFilter;
pub use repository::{ListingContactRepository, ListingReadRepository, ListingWriteRepository};
pub use services::{ListingSlugService, FALLBACK_LISTING_SLUG};
pub use specifications::{CanDeleteListingSpec, CanUpdateListingSpec};
pub use value_objects::{
    ImageRef, ListingDescriptions, ListingFeatures, ListingId, ListingImages, ListingLayout,
    ListingTitle,
};
