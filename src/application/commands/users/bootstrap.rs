use tracing::info;

use super::{UserCommandService, password::validate_password};
use crate::{
    application::error::ApplicationResult,
    domain::user::{Email, NewUser, PasswordHash, PersonName, PhoneNumber, Role},
};

const ADMIN_PLACEHOLDER_PHONE: &str = "0000000000";

pub struct BootstrapAdminCommand {
    pub email: String,
    pub password: String,
}

impl UserCommandService {
    /// Creates an active admin unless an account with that email exists.
    /// Returns whether a user was created.
    pub async fn ensure_admin(&self, command: BootstrapAdminCommand) -> ApplicationResult<bool> {
        let email = Email::new(command.email)?;
        if self.user_repo.find_by_email(&email).await?.is_some() {
            return Ok(false);
        }
        validate_password(&command.password)?;

        let hashed = self.password_hasher.hash(&command.password).await?;
        let admin = NewUser {
            role: Role::Admin,
            first_name: PersonName::new("EasyRent")?,
            last_name: PersonName::new("Admin")?,
            email,
            phone_number: PhoneNumber::new(ADMIN_PLACEHOLDER_PHONE)?,
            house_holding_number: None,
            address: None,
            password_hash: PasswordHash::new(hashed)?,
            is_active: true,
            created_at: self.clock.now(),
        };
        let user = self.user_repo.insert(admin).await?;
        info!(user_id = user.id.0, email = %user.email, "admin account created");
        Ok(true)
    }
}
