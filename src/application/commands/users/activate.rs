use super::UserCommandService;
use crate::{
    application::{
        dto::UserDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::user::UserUpdate,
};

impl UserCommandService {
    pub async fn activate(&self, token: &str) -> ApplicationResult<UserDto> {
        let user_id = self.token_manager.verify_activation(token).await?;
        let user = self
            .user_repo
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("user not found"))?;

        if user.is_active {
            return Err(ApplicationError::validation("account already activated"));
        }

        let user = self
            .user_repo
            .update(UserUpdate::new(user.id).with_is_active(true))
            .await?;
        Ok(user.into())
    }
}
