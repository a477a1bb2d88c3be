// src/infrastructure/repositories/mod.rs
mod error;
mod postgres_listing;
mod postgres_taxonomy;
mod postgres_user;

pub use error::map_sqlx;
pub use postgres_listing::{
    PostgresListingContactRepository, PostgresListingReadRepository,
    PostgresListingWriteRepository,
};
pub use postgres_taxonomy::{PostgresCategoryRepository, PostgresLocationRepository};
pub use postgres_user::PostgresUserRepository;
