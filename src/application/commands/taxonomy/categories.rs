use super::{CreateTermCommand, RenameTermCommand, TaxonomyCommandService};
use crate::{
    application::{
        commands::capability::ensure_capability,
        dto::{AuthenticatedUser, CategoryDto},
        error::{ApplicationError, ApplicationResult},
    },
    domain::taxonomy::{
        CATEGORY_SLUG_FALLBACK, CategoryId, NewCategory, TermTitle, derive_term_slug,
    },
};

impl TaxonomyCommandService {
    pub async fn create_category(
        &self,
        actor: &AuthenticatedUser,
        command: CreateTermCommand,
    ) -> ApplicationResult<CategoryDto> {
        ensure_capability(actor, "taxonomy", "manage")?;

        let title = TermTitle::new(command.title)?;
        let slug = derive_term_slug(self.slugger.as_ref(), &title, CATEGORY_SLUG_FALLBACK)?;
        let category = self
            .category_repo
            .insert(NewCategory {
                title,
                slug,
                created_at: self.clock.now(),
            })
            .await?;
        Ok(category.into())
    }

    pub async fn rename_category(
        &self,
        actor: &AuthenticatedUser,
        command: RenameTermCommand,
    ) -> ApplicationResult<CategoryDto> {
        ensure_capability(actor, "taxonomy", "manage")?;

        let id = CategoryId::new(command.id)?;
        if self.category_repo.find_by_id(id).await?.is_none() {
            return Err(ApplicationError::not_found("category not found"));
        }
        let title = TermTitle::new(command.title)?;
        let slug = derive_term_slug(self.slugger.as_ref(), &title, CATEGORY_SLUG_FALLBACK)?;
        let category = self.category_repo.rename(id, title, slug).await?;
        Ok(category.into())
    }
}
