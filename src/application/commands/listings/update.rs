use tracing::warn;

use super::service::{ListingCommandService, MAX_SLUG_ATTEMPTS, slug_attempts_exhausted};
use crate::{
    application::{
        dto::{AuthenticatedUser, ListingDto},
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        errors::DomainError,
        listing::{
            CanUpdateListingSpec, Listing, ListingDescriptions, ListingFeatures, ListingId,
            ListingImages, ListingLayout, ListingTitle, ListingUpdate,
        },
        taxonomy::{CategoryId, LocationId},
    },
};

/// Partial update; `None` leaves the field untouched.
#[derive(Default)]
pub struct UpdateListingCommand {
    pub id: i64,
    pub category_id: Option<i64>,
    pub location_id: Option<i64>,
    pub title: Option<String>,
    pub flat_size: Option<i32>,
    pub room: Option<i32>,
    pub bath: Option<i32>,
    pub kitchen: Option<i32>,
    pub images: Option<Vec<String>>,
    pub features: Option<Vec<String>>,
    pub descriptions: Option<Vec<String>>,
    pub available: Option<bool>,
}

impl UpdateListingCommand {
    fn touches_layout(&self) -> bool {
        self.flat_size.is_some()
            || self.room.is_some()
            || self.bath.is_some()
            || self.kitchen.is_some()
    }
}

impl ListingCommandService {
    pub async fn update_listing(
        &self,
        actor: &AuthenticatedUser,
        command: UpdateListingCommand,
    ) -> ApplicationResult<ListingDto> {
        let id = ListingId::new(command.id)?;
        let listing = self
            .read_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("listing not found or unauthorized"))?;

        if !CanUpdateListingSpec::new(&actor.capabilities, &listing, actor.id).is_satisfied() {
            return Err(ApplicationError::not_found(
                "listing not found or unauthorized",
            ));
        }

        let title = command.title.clone().map(ListingTitle::new).transpose()?;
        let base = self.build_update(&listing, command).await?;

        let mut attempt = 1;
        let updated = loop {
            let slug = self
                .slug_service
                .slug_for_update(id, &listing.title, title.as_ref())
                .await?;
            let mut update = base.clone();
            if let Some(title) = &title {
                update = update.with_title(title.clone());
            }
            if let Some(slug) = slug {
                update = update.with_slug(slug);
            }

            match self.write_repo.update(update).await {
                Ok(listing) => break listing,
                Err(DomainError::SlugTaken(slug)) if attempt < MAX_SLUG_ATTEMPTS => {
                    warn!(%slug, attempt, listing_id = id.0, "listing slug taken concurrently, retrying");
                    attempt += 1;
                }
                Err(DomainError::SlugTaken(slug)) => return Err(slug_attempts_exhausted(&slug)),
                Err(err) => return Err(err.into()),
            }
        };

        self.to_dto(updated).await
    }

    async fn build_update(
        &self,
        listing: &Listing,
        command: UpdateListingCommand,
    ) -> ApplicationResult<ListingUpdate> {
        let mut update = ListingUpdate::new(listing.id, self.clock.now());

        if command.touches_layout() {
            let current = listing.layout;
            let layout = ListingLayout::new(
                command.flat_size.unwrap_or(current.flat_size),
                command.room.unwrap_or(current.room),
                command.bath.unwrap_or(current.bath),
                command.kitchen.unwrap_or(current.kitchen),
            )?;
            update = update.with_layout(layout);
        }
        if let Some(raw) = command.category_id {
            let category_id = CategoryId::new(raw)?;
            self.ensure_category(category_id).await?;
            update = update.with_category(category_id);
        }
        if let Some(raw) = command.location_id {
            let location_id = LocationId::new(raw)?;
            self.ensure_location(location_id).await?;
            update = update.with_location(location_id);
        }
        if let Some(images) = command.images {
            update = update.with_images(ListingImages::new(images)?);
        }
        if let Some(features) = command.features {
            update = update.with_features(ListingFeatures::new(features)?);
        }
        if let Some(descriptions) = command.descriptions {
            update = update.with_descriptions(ListingDescriptions::new(descriptions)?);
        }
        if let Some(available) = command.available {
            update = update.with_available(available);
        }

        Ok(update)
    }
}
