pub mod errors;
pub mod listing;
pub mod slug;
pub mod taxonomy;
pub mod user;
