use tracing::{info, warn};

use super::ListingCommandService;
use crate::{
    application::{
        dto::AuthenticatedUser,
        error::{ApplicationError, ApplicationResult},
    },
    domain::listing::{CanDeleteListingSpec, ListingId},
};

pub struct DeleteListingCommand {
    pub id: i64,
}

impl ListingCommandService {
    /// Removes the listing and its contacts, then asks the image store to drop
    /// its images. Image cleanup failures are logged and never surfaced.
    pub async fn delete_listing(
        &self,
        actor: &AuthenticatedUser,
        command: DeleteListingCommand,
    ) -> ApplicationResult<()> {
        let id = ListingId::new(command.id)?;
        let listing = self
            .read_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("listing not found or unauthorized"))?;

        if !CanDeleteListingSpec::new(&actor.capabilities, &listing, actor.id).is_satisfied() {
            return Err(ApplicationError::not_found(
                "listing not found or unauthorized",
            ));
        }

        self.write_repo.delete(id).await?;
        info!(listing_id = id.0, slug = %listing.slug, "listing deleted");

        for image in listing.images.iter() {
            if let Err(err) = self.image_store.delete(image.as_str()).await {
                warn!(error = %err, image = image.as_str(), "failed to delete listing image");
            }
        }

        Ok(())
    }
}
