mod categories;
mod locations;
mod service;

pub use service::{CreateTermCommand, RenameTermCommand, TaxonomyCommandService};
