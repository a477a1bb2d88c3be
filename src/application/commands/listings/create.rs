use tracing::warn;

use super::service::{ListingCommandService, MAX_SLUG_ATTEMPTS, slug_attempts_exhausted};
use crate::{
    application::{
        commands::capability::ensure_capability,
        dto::{AuthenticatedUser, ListingDto},
        error::ApplicationResult,
    },
    domain::{
        errors::DomainError,
        listing::{
            ListingDescriptions, ListingFeatures, ListingImages, ListingLayout, ListingTitle,
            NewListing,
        },
        taxonomy::{CategoryId, LocationId},
    },
};

pub struct CreateListingCommand {
    pub category_id: i64,
    pub location_id: i64,
    pub title: String,
    pub flat_size: i32,
    pub room: i32,
    pub bath: i32,
    pub kitchen: i32,
    pub images: Vec<String>,
    pub features: Vec<String>,
    pub descriptions: Vec<String>,
    pub available: Option<bool>,
}

impl ListingCommandService {
    pub async fn create_listing(
        &self,
        actor: &AuthenticatedUser,
        command: CreateListingCommand,
    ) -> ApplicationResult<ListingDto> {
        ensure_capability(actor, "listings", "create")?;

        let title = ListingTitle::new(command.title)?;
        let layout = ListingLayout::new(
            command.flat_size,
            command.room,
            command.bath,
            command.kitchen,
        )?;
        let images = ListingImages::new(command.images)?;
        let features = ListingFeatures::new(command.features)?;
        let descriptions = ListingDescriptions::new(command.descriptions)?;
        let category_id = CategoryId::new(command.category_id)?;
        let location_id = LocationId::new(command.location_id)?;

        self.ensure_category(category_id).await?;
        self.ensure_location(location_id).await?;

        let now = self.clock.now();
        let mut attempt = 1;
        let created = loop {
            let slug = self.slug_service.generate_unique_slug(&title, None).await?;
            let new_listing = NewListing {
                owner_id: actor.id,
                category_id,
                location_id,
                title: title.clone(),
                slug,
                layout,
                images: images.clone(),
                features: features.clone(),
                descriptions: descriptions.clone(),
                available: command.available.unwrap_or(true),
                created_at: now,
                updated_at: now,
            };

            match self.write_repo.insert(new_listing).await {
                Ok(listing) => break listing,
                Err(DomainError::SlugTaken(slug)) if attempt < MAX_SLUG_ATTEMPTS => {
                    warn!(%slug, attempt, "listing slug taken concurrently, retrying");
                    attempt += 1;
                }
                Err(DomainError::SlugTaken(slug)) => return Err(slug_attempts_exhausted(&slug)),
                Err(err) => return Err(err.into()),
            }
        };

        self.to_dto(created).await
    }
}
