mod capability;
pub mod contact;
pub mod listings;
pub mod taxonomy;
pub mod users;
