// tests/support/mocks/mod.rs
#![allow(dead_code)]
#![allow(unused_imports)]

pub mod mail;
pub mod repos;
pub mod security;
pub mod storage;
pub mod time;

pub use mail::CapturingMailer;
pub use repos::InMemoryStore;
pub use security::{
    ADMIN_ID, ADMIN_TOKEN, OTHER_OWNER_ID, OTHER_OWNER_TOKEN, OWNER_ID, OWNER_TOKEN, RENTER_ID,
    RENTER_TOKEN, StrictPasswordHasher, StubTokenManager, actor,
};
pub use storage::RecordingImageStore;
pub use time::{FixedClock, fixed_now};
