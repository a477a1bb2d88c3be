use super::UserCommandService;
use crate::{
    application::{
        dto::{AuthenticatedUser, UserDto},
        error::{ApplicationError, ApplicationResult},
    },
    domain::user::{PersonName, PhoneNumber, UserUpdate},
};

/// Email and role are not editable.
#[derive(Default)]
pub struct UpdateProfileCommand {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub phone_number: Option<String>,
}

impl UserCommandService {
    pub async fn update_profile(
        &self,
        actor: &AuthenticatedUser,
        command: UpdateProfileCommand,
    ) -> ApplicationResult<UserDto> {
        let mut update = UserUpdate::new(actor.id);

        if let Some(first_name) = command.first_name {
            update = update.with_first_name(PersonName::new(first_name)?);
        }
        if let Some(last_name) = command.last_name {
            update = update.with_last_name(PersonName::new(last_name)?);
        }
        if let Some(phone_number) = command.phone_number {
            update = update.with_phone_number(PhoneNumber::new(phone_number)?);
        }

        if update.is_empty() {
            return Err(ApplicationError::validation(
                "at least one field must be provided",
            ));
        }

        let user = self.user_repo.update(update).await?;
        Ok(user.into())
    }
}
