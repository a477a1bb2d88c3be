pub mod listings;
pub mod taxonomy;
pub mod users;
