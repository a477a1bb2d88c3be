pub mod auth;
pub mod listings;
pub mod pagination;
pub mod serde_time;
pub mod taxonomy;
pub mod users;

pub use auth::{AuthTokenDto, AuthenticatedUser, TokenSubject};
pub use listings::{ListingDto, OwnerContactDto, TermRefDto};
pub use pagination::{Page, PageRequest, PageWindow};
pub use taxonomy::{CategoryDto, LocationDto};
pub use users::{CapabilityView, UserDto, UserProfileDto};
