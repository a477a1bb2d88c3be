use super::ListingQueryService;
use crate::application::{
    dto::{AuthenticatedUser, ListingDto},
    error::{ApplicationError, ApplicationResult},
};

impl ListingQueryService {
    pub async fn list_owner_listings(
        &self,
        actor: &AuthenticatedUser,
    ) -> ApplicationResult<Vec<ListingDto>> {
        if !actor.has_capability("listings", "view:own") {
            return Err(ApplicationError::forbidden("only owners have listings"));
        }
        let records = self.read_repo.list_by_owner(actor.id).await?;
        Ok(records.into_iter().map(Into::into).collect())
    }

    /// Listings whose owners the actor has messaged.
    pub async fn list_renter_bookings(
        &self,
        actor: &AuthenticatedUser,
    ) -> ApplicationResult<Vec<ListingDto>> {
        let records = self.read_repo.list_contacted_by(actor.id).await?;
        Ok(records.into_iter().map(Into::into).collect())
    }
}
