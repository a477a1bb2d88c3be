// tests/support/mocks/security.rs
use async_trait::async_trait;
use chrono::Duration;
use easyrent::application::{
    ApplicationResult,
    dto::{AuthTokenDto, AuthenticatedUser, TokenSubject},
    error::ApplicationError,
    ports::security::{PasswordHasher, TokenManager},
};
use easyrent::domain::user::{Role, UserId};

use super::time::fixed_now;

/// Bearer tokens understood by [`StubTokenManager`]. The user ids match the
/// accounts seeded by `TestContext`.
pub const OWNER_TOKEN: &str = "owner-token";
pub const OTHER_OWNER_TOKEN: &str = "other-owner-token";
pub const RENTER_TOKEN: &str = "renter-token";
pub const ADMIN_TOKEN: &str = "admin-token";

pub const OWNER_ID: i64 = 1;
pub const OTHER_OWNER_ID: i64 = 2;
pub const RENTER_ID: i64 = 3;
pub const ADMIN_ID: i64 = 4;

pub fn actor(role: Role, id: i64) -> AuthenticatedUser {
    let now = fixed_now();
    AuthenticatedUser {
        id: UserId::new(id).expect("invalid user id"),
        email: format!("{}{id}@example.com", role.as_str()),
        role,
        capabilities: role.default_capabilities(),
        issued_at: now,
        expires_at: now + Duration::hours(1),
    }
}

/// Deterministic token manager: `activate::{id}` and `refresh::{id}` tokens
/// round-trip, the fixed bearer constants authenticate.
#[derive(Clone, Debug, Default)]
pub struct StubTokenManager;

fn parse_id(token: &str, prefix: &str) -> Option<UserId> {
    token
        .strip_prefix(prefix)
        .and_then(|raw| raw.parse::<i64>().ok())
        .and_then(|id| UserId::new(id).ok())
}

#[async_trait]
impl TokenManager for StubTokenManager {
    async fn issue(&self, subject: TokenSubject) -> ApplicationResult<AuthTokenDto> {
        let now = fixed_now();
        Ok(AuthTokenDto {
            token: format!("access::{}", subject.user_id.0),
            issued_at: now,
            expires_at: now + Duration::hours(1),
            expires_in: 3600,
            refresh_token: Some(format!("refresh::{}", subject.user_id.0)),
        })
    }

    async fn authenticate(&self, token: &str) -> ApplicationResult<AuthenticatedUser> {
        match token {
            OWNER_TOKEN => Ok(actor(Role::Owner, OWNER_ID)),
            OTHER_OWNER_TOKEN => Ok(actor(Role::Owner, OTHER_OWNER_ID)),
            RENTER_TOKEN => Ok(actor(Role::Renter, RENTER_ID)),
            ADMIN_TOKEN => Ok(actor(Role::Admin, ADMIN_ID)),
            _ => Err(ApplicationError::unauthorized("invalid token")),
        }
    }

    async fn issue_activation(&self, user_id: UserId) -> ApplicationResult<String> {
        Ok(format!("activate::{}", user_id.0))
    }

    async fn verify_activation(&self, token: &str) -> ApplicationResult<UserId> {
        parse_id(token, "activate::")
            .ok_or_else(|| ApplicationError::validation("invalid or expired activation link"))
    }

    async fn verify_refresh(&self, token: &str) -> ApplicationResult<UserId> {
        parse_id(token, "refresh::")
            .ok_or_else(|| ApplicationError::unauthorized("invalid refresh token"))
    }
}

/// Hashes as `hash::{password}` and verifies exactly.
#[derive(Clone, Debug, Default)]
pub struct StrictPasswordHasher;

#[async_trait]
impl PasswordHasher for StrictPasswordHasher {
    async fn hash(&self, password: &str) -> ApplicationResult<String> {
        Ok(format!("hash::{password}"))
    }

    async fn verify(&self, password: &str, expected_hash: &str) -> ApplicationResult<()> {
        if format!("hash::{password}") == expected_hash {
            Ok(())
        } else {
            Err(ApplicationError::unauthorized("invalid credentials"))
        }
    }
}
