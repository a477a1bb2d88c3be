// src/domain/taxonomy/mod.rs
pub mod entity;
pub mod repository;
pub mod services;
pub mod value_objects;

pub use entity::{Category, Location, NewCategory, NewLocation};
pub use repository::{CategoryRepository, LocationRepository};
pub use services::derive_term_slug;
pub use value_objects::{
    CATEGORY_SLUG_FALLBACK, CategoryId, LOCATION_SLUG_FALLBACK, LocationId, TermTitle,
};
