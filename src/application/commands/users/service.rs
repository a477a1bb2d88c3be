use std::sync::Arc;

use crate::application::ports::{
    mailer::Mailer,
    security::{PasswordHasher, TokenManager},
    time::Clock,
};
use crate::domain::user::UserRepository;

pub struct UserCommandService {
    pub(super) user_repo: Arc<dyn UserRepository>,
    pub(super) password_hasher: Arc<dyn PasswordHasher>,
    pub(super) token_manager: Arc<dyn TokenManager>,
    pub(super) mailer: Arc<dyn Mailer>,
    pub(super) clock: Arc<dyn Clock>,
    pub(super) public_base_url: String,
}

impl UserCommandService {
    pub fn new(
        user_repo: Arc<dyn UserRepository>,
        password_hasher: Arc<dyn PasswordHasher>,
        token_manager: Arc<dyn TokenManager>,
        mailer: Arc<dyn Mailer>,
        clock: Arc<dyn Clock>,
        public_base_url: impl Into<String>,
    ) -> Self {
        Self {
            user_repo,
            password_hasher,
            token_manager,
            mailer,
            clock,
            public_base_url: public_base_url.into(),
        }
    }

    pub(super) fn activation_url(&self, token: &str) -> String {
        format!(
            "{}/api/v1/auth/activate/{token}",
            self.public_base_url.trim_end_matches('/')
        )
    }
}
