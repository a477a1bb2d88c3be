// src/domain/listing/entity.rs
use crate::domain::listing::value_objects::{
    ListingDescriptions, ListingFeatures, ListingId, ListingImages, ListingLayout, ListingTitle,
};
use crate::domain::slug::Slug;
use crate::domain::taxonomy::{CategoryId, LocationId};
use crate::domain::user::{Email, PersonName, PhoneNumber, UserId};
use chrono::{DateTime, Utc};

#[derive(Debug, Clone)]
pub struct Listing {
    pub id: ListingId,
    pub owner_id: UserId,
    pub category_id: CategoryId,
    pub location_id: LocationId,
    pub title: ListingTitle,
    pub slug: Slug,
    pub layout: ListingLayout,
    pub images: ListingImages,
    pub features: ListingFeatures,
    pub descriptions: ListingDescriptions,
    pub available: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Listing {
    pub fn is_owned_by(&self, user_id: UserId) -> bool {
        self.owner_id == user_id
    }
}

/// Owner fields shown to prospective renters.
#[derive(Debug, Clone)]
pub struct OwnerContact {
    pub first_name: PersonName,
    pub last_name: PersonName,
    pub phone_number: PhoneNumber,
    pub email: Email,
}

/// A listing joined with its owner and taxonomy titles.
#[derive(Debug, Clone)]
pub struct ListingView {
    pub listing: Listing,
    pub owner: OwnerContact,
    pub category_title: String,
    pub location_title: String,
}

#[derive(Debug, Clone)]
pub struct NewListing {
    pub owner_id: UserId,
    pub category_id: CategoryId,
    pub location_id: LocationId,
    pub title: ListingTitle,
    pub slug: Slug,
    pub layout: ListingLayout,
    pub images: ListingImages,
    pub features: ListingFeatures,
    pub descriptions: ListingDescriptions,
    pub available: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct ListingUpdate {
    pub id: ListingId,
    pub category_id: Option<CategoryId>,
    pub location_id: Option<LocationId>,
    pub title: Option<ListingTitle>,
    pub slug: Option<Slug>,
    pub layout: Option<ListingLayout>,
    pub images: Option<ListingImages>,
    pub features: Option<ListingFeatures>,
    pub descriptions: Option<ListingDescriptions>,
    pub available: Option<bool>,
    pub updated_at: DateTime<Utc>,
}

impl ListingUpdate {
    pub fn new(id: ListingId, updated_at: DateTime<Utc>) -> Self {
        Self {
            id,
            category_id: None,
            location_id: None,
            title: None,
            slug: None,
            layout: None,
            images: None,
            features: None,
            descriptions: None,
            available: None,
            updated_at,
        }
    }

    pub fn with_category(mut self, category_id: CategoryId) -> Self {
        self.category_id = Some(category_id);
        self
    }

    pub fn with_location(mut self, location_id: LocationId) -> Self {
        self.location_id = Some(location_id);
        self
    }

    pub fn with_title(mut self, title: ListingTitle) -> Self {
        self.title = Some(title);
        self
    }

    pub fn with_slug(mut self, slug: Slug) -> Self {
        self.slug = Some(slug);
        self
    }

    pub fn with_layout(mut self, layout: ListingLayout) -> Self {
        self.layout = Some(layout);
        self
    }

    pub fn with_images(mut self, images: ListingImages) -> Self {
        self.images = Some(images);
        self
    }

    pub fn with_features(mut self, features: ListingFeatures) -> Self {
        self.features = Some(features);
        self
    }

    pub fn with_descriptions(mut self, descriptions: ListingDescriptions) -> Self {
        self.descriptions = Some(descriptions);
        self
    }

    pub fn with_available(mut self, available: bool) -> Self {
        self.available = Some(available);
        self
    }
}
