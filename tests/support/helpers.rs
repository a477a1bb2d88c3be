// tests/support/helpers.rs
use super::mocks::{
    CapturingMailer, FixedClock, InMemoryStore, RecordingImageStore, StrictPasswordHasher,
    StubTokenManager, fixed_now,
};
use axum::body::{self, Body};
use axum::http::{Request, StatusCode, header};
use axum::response::Response;
use easyrent::application::{
    dto::AuthenticatedUser,
    services::{ApplicationServices, ApplicationSettings, Ports, Repositories},
};
use easyrent::domain::{
    taxonomy::{CategoryRepository, LocationRepository, NewCategory, NewLocation, TermTitle},
    slug::Slug,
    user::{Email, NewUser, PasswordHash, PersonName, PhoneNumber, Role, User, UserRepository},
};
use easyrent::infrastructure::util::DefaultSlugGenerator;
use easyrent::presentation::http::{routes::build_router_with_rate_limiter, state::HttpState};
use serde_json::Value;
use std::sync::Arc;

pub const PUBLIC_BASE_URL: &str = "http://easyrent.test";
pub const CONTACT_INBOX: &str = "support@easyrent.test";

/// Application services wired to in-memory adapters, with handles to the
/// fakes so tests can inspect side effects.
pub struct TestContext {
    pub services: Arc<ApplicationServices>,
    pub store: Arc<InMemoryStore>,
    pub mailer: Arc<CapturingMailer>,
    pub images: Arc<RecordingImageStore>,
}

impl TestContext {
    /// Seeds owner (1), second owner (2), renter (3) and admin (4), plus
    /// category "Apartment" (1) and location "Dhaka" (1).
    pub async fn new() -> Self {
        Self::with_image_store(RecordingImageStore::default()).await
    }

    pub async fn with_image_store(images: RecordingImageStore) -> Self {
        let store = Arc::new(InMemoryStore::new());
        let mailer = Arc::new(CapturingMailer::default());
        let images = Arc::new(images);

        let repos = Repositories {
            users: store.clone(),
            listing_write: store.clone(),
            listing_read: store.clone(),
            listing_contacts: store.clone(),
            categories: store.clone(),
            locations: store.clone(),
        };
        let ports = Ports {
            password_hasher: Arc::new(StrictPasswordHasher),
            token_manager: Arc::new(StubTokenManager),
            mailer: mailer.clone(),
            image_store: images.clone(),
            clock: Arc::new(FixedClock),
            slugger: Arc::new(DefaultSlugGenerator),
        };
        let settings = ApplicationSettings {
            public_base_url: PUBLIC_BASE_URL.into(),
            contact_inbox: CONTACT_INBOX.into(),
        };
        let services = Arc::new(ApplicationServices::new(repos, ports, settings));

        let ctx = Self {
            services,
            store,
            mailer,
            images,
        };
        ctx.seed_user(Role::Owner, "olivia@example.com", "Olivia", true).await;
        ctx.seed_user(Role::Owner, "oscar@example.com", "Oscar", true).await;
        ctx.seed_user(Role::Renter, "rita@example.com", "Rita", true).await;
        ctx.seed_user(Role::Admin, "admin@example.com", "Ada", true).await;
        ctx.seed_category("Apartment").await;
        ctx.seed_location("Dhaka").await;
        ctx
    }

    /// Password is always `secret123`.
    pub async fn seed_user(&self, role: Role, email: &str, first_name: &str, active: bool) -> User {
        UserRepository::insert(
            self.store.as_ref(),
            NewUser {
                role,
                first_name: PersonName::new(first_name).unwrap(),
                last_name: PersonName::new("Tester").unwrap(),
                email: Email::new(email).unwrap(),
                phone_number: PhoneNumber::new("+880 1712-345678").unwrap(),
                house_holding_number: None,
                address: None,
                password_hash: PasswordHash::new("hash::secret123").unwrap(),
                is_active: active,
                created_at: fixed_now(),
            },
        )
        .await
        .unwrap()
    }

    pub async fn seed_category(&self, title: &str) -> i64 {
        let category = CategoryRepository::insert(
            self.store.as_ref(),
            NewCategory {
                title: TermTitle::new(title).unwrap(),
                slug: Slug::new(slug::slugify(title)).unwrap(),
                created_at: fixed_now(),
            },
        )
        .await
        .unwrap();
        category.id.into()
    }

    pub async fn seed_location(&self, title: &str) -> i64 {
        let location = LocationRepository::insert(
            self.store.as_ref(),
            NewLocation {
                title: TermTitle::new(title).unwrap(),
                slug: Slug::new(slug::slugify(title)).unwrap(),
                created_at: fixed_now(),
            },
        )
        .await
        .unwrap();
        location.id.into()
    }

    pub fn router(&self) -> axum::Router {
        let state = HttpState {
            services: Arc::clone(&self.services),
        };
        build_router_with_rate_limiter(state, &[], false)
    }
}

pub async fn make_test_router() -> axum::Router {
    TestContext::new().await.router()
}

pub fn owner() -> AuthenticatedUser {
    super::mocks::actor(Role::Owner, super::mocks::OWNER_ID)
}

pub fn other_owner() -> AuthenticatedUser {
    super::mocks::actor(Role::Owner, super::mocks::OTHER_OWNER_ID)
}

pub fn renter() -> AuthenticatedUser {
    super::mocks::actor(Role::Renter, super::mocks::RENTER_ID)
}

pub fn admin() -> AuthenticatedUser {
    super::mocks::actor(Role::Admin, super::mocks::ADMIN_ID)
}

pub fn json_request(method: &str, uri: &str, token: Option<&str>, body: Value) -> Request<Body> {
    let mut builder = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json");
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
    }
    builder.body(Body::from(body.to_string())).unwrap()
}

pub fn empty_request(method: &str, uri: &str, token: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
    }
    builder.body(Body::empty()).unwrap()
}

pub async fn read_json(resp: Response) -> Value {
    let (parts, body_stream) = resp.into_parts();
    let bytes = body::to_bytes(body_stream, 1024 * 1024).await.expect("read body");
    let ct = parts
        .headers
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("");
    assert!(ct.starts_with("application/json"), "unexpected content-type: {ct}");
    serde_json::from_slice(&bytes).expect("valid json body")
}

/// Asserts the `{ "error", "message" }` body with the expected status.
pub async fn assert_error_response(resp: Response, expected_status: StatusCode, expected_error: &str) {
    assert_eq!(resp.status(), expected_status);
    let json = read_json(resp).await;
    let err_field = json.get("error").and_then(|v| v.as_str()).unwrap_or("");
    let msg_field = json.get("message").and_then(|v| v.as_str()).unwrap_or("");
    assert_eq!(err_field, expected_error, "unexpected error field: {err_field}");
    assert!(!msg_field.is_empty(), "expected non-empty message field");
}
