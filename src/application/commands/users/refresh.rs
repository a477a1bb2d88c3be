use super::UserCommandService;
use crate::application::{
    dto::{AuthTokenDto, TokenSubject},
    error::{ApplicationError, ApplicationResult},
};

pub struct RefreshTokenCommand {
    pub refresh_token: String,
}

impl UserCommandService {
    pub async fn refresh_token(
        &self,
        command: RefreshTokenCommand,
    ) -> ApplicationResult<AuthTokenDto> {
        let user_id = self
            .token_manager
            .verify_refresh(&command.refresh_token)
            .await?;
        let user = self
            .user_repo
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| ApplicationError::unauthorized("invalid refresh token"))?;

        if !user.is_active {
            return Err(ApplicationError::forbidden("account is not activated"));
        }

        let subject = TokenSubject::for_user(user.id, &user.email, user.role);
        self.token_manager.issue(subject).await
    }
}
