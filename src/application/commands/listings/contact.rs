use tracing::info;

use super::ListingCommandService;
use crate::{
    application::{
        commands::capability::ensure_capability,
        dto::AuthenticatedUser,
        error::{ApplicationError, ApplicationResult},
        notifications::{ListingInquiry, listing_inquiry_email},
    },
    domain::{
        listing::ListingView,
        slug::Slug,
        user::{Email, PersonName, PhoneNumber},
    },
};

pub struct ContactOwnerCommand {
    pub slug: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub message: String,
}

pub struct WithdrawContactCommand {
    pub slug: String,
}

impl ListingCommandService {
    /// Emails the owner once per renter and records the contact.
    pub async fn contact_owner(
        &self,
        actor: &AuthenticatedUser,
        command: ContactOwnerCommand,
    ) -> ApplicationResult<()> {
        ensure_capability(actor, "listings", "contact")?;

        let first_name = PersonName::new(command.first_name)?;
        let last_name = PersonName::new(command.last_name)?;
        let email = Email::new(command.email)?;
        let phone = PhoneNumber::new(command.phone)?;
        if command.message.trim().is_empty() {
            return Err(ApplicationError::validation("message cannot be empty"));
        }

        let view = self.find_view(&command.slug).await?;
        let listing_id = view.listing.id;

        if self.contact_repo.exists(listing_id, actor.id).await? {
            return Err(ApplicationError::validation(
                "you have already sent a message for this flat",
            ));
        }

        let notification = listing_inquiry_email(&ListingInquiry {
            owner_email: view.owner.email.as_str(),
            owner_first_name: view.owner.first_name.as_str(),
            listing_title: view.listing.title.as_str(),
            first_name: first_name.as_str(),
            last_name: last_name.as_str(),
            email: email.as_str(),
            phone: phone.as_str(),
            message: &command.message,
        });
        self.mailer.send(notification).await?;

        self.contact_repo.add(listing_id, actor.id).await?;
        info!(listing_id = listing_id.0, renter_id = actor.id.0, "renter contacted owner");
        Ok(())
    }

    pub async fn withdraw_contact(
        &self,
        actor: &AuthenticatedUser,
        command: WithdrawContactCommand,
    ) -> ApplicationResult<()> {
        let view = self.find_view(&command.slug).await?;
        if !self.contact_repo.remove(view.listing.id, actor.id).await? {
            return Err(ApplicationError::validation("you have not booked this flat"));
        }
        Ok(())
    }

    async fn find_view(&self, raw_slug: &str) -> ApplicationResult<ListingView> {
        let slug =
            Slug::new(raw_slug).map_err(|_| ApplicationError::not_found("listing not found"))?;
        self.read_repo
            .find_by_slug(&slug)
            .await?
            .ok_or_else(|| ApplicationError::not_found("listing not found"))
    }
}
