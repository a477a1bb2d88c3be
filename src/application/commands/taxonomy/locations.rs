use super::{CreateTermCommand, RenameTermCommand, TaxonomyCommandService};
use crate::{
    application::{
        commands::capability::ensure_capability,
        dto::{AuthenticatedUser, LocationDto},
        error::{ApplicationError, ApplicationResult},
    },
    domain::taxonomy::{
        LOCATION_SLUG_FALLBACK, LocationId, NewLocation, TermTitle, derive_term_slug,
    },
};

impl TaxonomyCommandService {
    pub async fn create_location(
        &self,
        actor: &AuthenticatedUser,
        command: CreateTermCommand,
    ) -> ApplicationResult<LocationDto> {
        ensure_capability(actor, "taxonomy", "manage")?;

        let title = TermTitle::new(command.title)?;
        let slug = derive_term_slug(self.slugger.as_ref(), &title, LOCATION_SLUG_FALLBACK)?;
        let location = self
            .location_repo
            .insert(NewLocation {
                title,
                slug,
                created_at: self.clock.now(),
            })
            .await?;
        Ok(location.into())
    }

    pub async fn rename_location(
        &self,
        actor: &AuthenticatedUser,
        command: RenameTermCommand,
    ) -> ApplicationResult<LocationDto> {
        ensure_capability(actor, "taxonomy", "manage")?;

        let id = LocationId::new(command.id)?;
        if self.location_repo.find_by_id(id).await?.is_none() {
            return Err(ApplicationError::not_found("location not found"));
        }
        let title = TermTitle::new(command.title)?;
        let slug = derive_term_slug(self.slugger.as_ref(), &title, LOCATION_SLUG_FALLBACK)?;
        let location = self.location_repo.rename(id, title, slug).await?;
        Ok(location.into())
    }
}
