use tracing::info;

use super::{UserCommandService, password::validate_password};
use crate::{
    application::{
        dto::UserDto,
        error::{ApplicationError, ApplicationResult},
        notifications::activation_email,
    },
    domain::user::{Email, NewUser, PasswordHash, PersonName, PhoneNumber, Role},
};

pub struct RegisterUserCommand {
    pub user_type: Role,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone_number: String,
    pub password: String,
    pub confirm_password: String,
    pub house_holding_number: Option<String>,
    pub address: Option<String>,
}

impl UserCommandService {
    /// Creates an inactive account and emails its activation link.
    pub async fn register(&self, command: RegisterUserCommand) -> ApplicationResult<UserDto> {
        if !command.user_type.is_self_registrable() {
            return Err(ApplicationError::validation(
                "user_type must be owner or renter",
            ));
        }

        let first_name = PersonName::new(command.first_name)?;
        let last_name = PersonName::new(command.last_name)?;
        let email = Email::new(command.email)?;
        let phone_number = PhoneNumber::new(command.phone_number)?;

        if command.password != command.confirm_password {
            return Err(ApplicationError::validation("passwords do not match"));
        }
        validate_password(&command.password)?;

        // Household number and address only apply to owners.
        let (house_holding_number, address) = match command.user_type {
            Role::Owner => (
                optional_text(command.house_holding_number),
                optional_text(command.address),
            ),
            _ => (None, None),
        };

        if self.user_repo.find_by_email(&email).await?.is_some() {
            return Err(ApplicationError::conflict("email already registered"));
        }

        let hashed = self.password_hasher.hash(&command.password).await?;
        let new_user = NewUser {
            role: command.user_type,
            first_name,
            last_name,
            email,
            phone_number,
            house_holding_number,
            address,
            password_hash: PasswordHash::new(hashed)?,
            is_active: false,
            created_at: self.clock.now(),
        };
        let user = self.user_repo.insert(new_user).await?;

        let token = self.token_manager.issue_activation(user.id).await?;
        let notification = activation_email(user.email.as_str(), &self.activation_url(&token));
        self.mailer.send(notification).await?;
        info!(user_id = user.id.0, role = %user.role, "user registered");

        Ok(user.into())
    }
}

fn optional_text(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
