// tests/user_command_service_unit.rs
use easyrent::application::{
    commands::users::{
        BootstrapAdminCommand, LoginUserCommand, RefreshTokenCommand, RegisterUserCommand,
        UpdateProfileCommand,
    },
    error::ApplicationError,
};
use easyrent::domain::user::Role;

mod support;
use support::{TestContext, owner, renter};

fn registration(role: Role, email: &str) -> RegisterUserCommand {
    RegisterUserCommand {
        user_type: role,
        first_name: "Nadia".into(),
        last_name: "Newcomer".into(),
        email: email.into(),
        phone_number: "01712345678".into(),
        password: "flatmate42".into(),
        confirm_password: "flatmate42".into(),
        house_holding_number: Some("12/B".into()),
        address: Some("Road 5, Dhanmondi".into()),
    }
}

fn login(email: &str, password: &str) -> LoginUserCommand {
    LoginUserCommand {
        email: email.into(),
        password: password.into(),
    }
}

#[tokio::test]
async fn register_creates_inactive_user_and_mails_activation_link() {
    let ctx = TestContext::new().await;
    let user = ctx
        .services
        .user_commands
        .register(registration(Role::Owner, "Nadia@Example.com"))
        .await
        .unwrap();

    assert_eq!(user.id, 5);
    assert_eq!(user.email, "nadia@example.com");
    assert_eq!(user.user_type, Role::Owner);
    assert!(!user.is_active);
    assert_eq!(user.house_holding_number.as_deref(), Some("12/B"));

    let email = ctx.mailer.last().expect("activation email");
    assert_eq!(email.to, "nadia@example.com");
    assert_eq!(email.subject, "Activate Your EasyRent Account");
    assert!(
        email
            .text_body
            .contains("http://easyrent.test/api/v1/auth/activate/activate::5")
    );
}

#[tokio::test]
async fn renter_registration_drops_owner_only_fields() {
    let ctx = TestContext::new().await;
    let user = ctx
        .services
        .user_commands
        .register(registration(Role::Renter, "nadia@example.com"))
        .await
        .unwrap();
    assert_eq!(user.house_holding_number, None);
    assert_eq!(user.address, None);
}

#[tokio::test]
async fn register_rejects_invalid_input() {
    let ctx = TestContext::new().await;
    let commands = &ctx.services.user_commands;

    let err = commands
        .register(registration(Role::Admin, "nadia@example.com"))
        .await
        .unwrap_err();
    assert!(matches!(err, ApplicationError::Validation(_)));

    let mut mismatch = registration(Role::Renter, "nadia@example.com");
    mismatch.confirm_password = "flatmate43".into();
    let err = commands.register(mismatch).await.unwrap_err();
    assert!(matches!(err, ApplicationError::Validation(ref m) if m == "passwords do not match"));

    let mut short = registration(Role::Renter, "nadia@example.com");
    short.password = "abc12".into();
    short.confirm_password = "abc12".into();
    let err = commands.register(short).await.unwrap_err();
    assert!(matches!(err, ApplicationError::Validation(_)));

    assert!(ctx.mailer.sent().is_empty());
}

#[tokio::test]
async fn duplicate_email_is_a_conflict() {
    let ctx = TestContext::new().await;
    let err = ctx
        .services
        .user_commands
        .register(registration(Role::Renter, "OLIVIA@example.com"))
        .await
        .unwrap_err();
    assert!(matches!(err, ApplicationError::Conflict(ref m) if m == "email already registered"));
}

#[tokio::test]
async fn activation_enables_login_once() {
    let ctx = TestContext::new().await;
    let commands = &ctx.services.user_commands;
    commands
        .register(registration(Role::Renter, "nadia@example.com"))
        .await
        .unwrap();

    let err = commands
        .login(login("nadia@example.com", "flatmate42"))
        .await
        .unwrap_err();
    assert!(matches!(err, ApplicationError::Forbidden(ref m) if m == "account is not activated"));

    let activated = commands.activate("activate::5").await.unwrap();
    assert!(activated.is_active);

    let err = commands.activate("activate::5").await.unwrap_err();
    assert!(matches!(err, ApplicationError::Validation(ref m) if m == "account already activated"));

    let session = commands
        .login(login("nadia@example.com", "flatmate42"))
        .await
        .unwrap();
    assert_eq!(session.token.token, "access::5");
    assert_eq!(session.user.email, "nadia@example.com");
}

#[tokio::test]
async fn activation_with_bad_token_fails() {
    let ctx = TestContext::new().await;
    let commands = &ctx.services.user_commands;

    let err = commands.activate("garbage").await.unwrap_err();
    assert!(matches!(err, ApplicationError::Validation(_)));

    let err = commands.activate("activate::77").await.unwrap_err();
    assert!(matches!(err, ApplicationError::NotFound(_)));
}

#[tokio::test]
async fn login_with_wrong_credentials_is_unauthorized() {
    let ctx = TestContext::new().await;
    let commands = &ctx.services.user_commands;

    for (email, password) in [
        ("olivia@example.com", "wrong-password"),
        ("nobody@example.com", "secret123"),
        ("not-an-email", "secret123"),
    ] {
        let err = commands.login(login(email, password)).await.unwrap_err();
        assert!(
            matches!(err, ApplicationError::Unauthorized(ref m) if m == "invalid credentials"),
            "{email}: {err:?}"
        );
    }
}

#[tokio::test]
async fn login_issues_token_pair() {
    let ctx = TestContext::new().await;
    let session = ctx
        .services
        .user_commands
        .login(login("Olivia@example.com", "secret123"))
        .await
        .unwrap();
    assert_eq!(session.token.token, "access::1");
    assert_eq!(session.token.refresh_token.as_deref(), Some("refresh::1"));
    assert_eq!(session.user.user_type, Role::Owner);
}

#[tokio::test]
async fn refresh_reissues_for_active_user() {
    let ctx = TestContext::new().await;
    let commands = &ctx.services.user_commands;

    let token = commands
        .refresh_token(RefreshTokenCommand {
            refresh_token: "refresh::3".into(),
        })
        .await
        .unwrap();
    assert_eq!(token.token, "access::3");

    let err = commands
        .refresh_token(RefreshTokenCommand {
            refresh_token: "access::3".into(),
        })
        .await
        .unwrap_err();
    assert!(matches!(err, ApplicationError::Unauthorized(_)));

    let err = commands
        .refresh_token(RefreshTokenCommand {
            refresh_token: "refresh::99".into(),
        })
        .await
        .unwrap_err();
    assert!(matches!(err, ApplicationError::Unauthorized(_)));
}

#[tokio::test]
async fn refresh_is_refused_for_inactive_user() {
    let ctx = TestContext::new().await;
    let user = ctx
        .seed_user(Role::Renter, "sleepy@example.com", "Sam", false)
        .await;
    let err = ctx
        .services
        .user_commands
        .refresh_token(RefreshTokenCommand {
            refresh_token: format!("refresh::{}", user.id.0),
        })
        .await
        .unwrap_err();
    assert!(matches!(err, ApplicationError::Forbidden(_)));
}

#[tokio::test]
async fn profile_update_changes_only_given_fields() {
    let ctx = TestContext::new().await;
    let commands = &ctx.services.user_commands;

    let updated = commands
        .update_profile(
            &renter(),
            UpdateProfileCommand {
                first_name: Some("Rina".into()),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    assert_eq!(updated.first_name, "Rina");
    assert_eq!(updated.last_name, "Tester");
    assert_eq!(updated.email, "rita@example.com");

    let err = commands
        .update_profile(&renter(), UpdateProfileCommand::default())
        .await
        .unwrap_err();
    assert!(matches!(err, ApplicationError::Validation(_)));
}

#[tokio::test]
async fn profile_reports_capabilities() {
    let ctx = TestContext::new().await;
    let profile = ctx.services.user_queries.get_profile(&owner()).await.unwrap();
    assert_eq!(profile.user.first_name, "Olivia");
    assert!(
        profile
            .capabilities
            .iter()
            .any(|cap| cap.resource == "listings" && cap.action == "create")
    );
    assert_eq!(profile.expires_in, 3600);
}

#[tokio::test]
async fn ensure_admin_is_idempotent() {
    let ctx = TestContext::new().await;
    let commands = &ctx.services.user_commands;
    let command = || BootstrapAdminCommand {
        email: "root@easyrent.test".into(),
        password: "letmein42".into(),
    };

    assert!(commands.ensure_admin(command()).await.unwrap());
    assert!(!commands.ensure_admin(command()).await.unwrap());

    let session = commands
        .login(login("root@easyrent.test", "letmein42"))
        .await
        .unwrap();
    assert_eq!(session.user.user_type, Role::Admin);
}
