// src/application/commands/listings/mod.rs
mod contact;
mod create;
mod delete;
mod service;
mod update;

pub use contact::{ContactOwnerCommand, WithdrawContactCommand};
pub use create::CreateListingCommand;
pub use delete::DeleteListingCommand;
pub use service::{ListingCommandService, MAX_SLUG_ATTEMPTS};
pub use update::UpdateListingCommand;
