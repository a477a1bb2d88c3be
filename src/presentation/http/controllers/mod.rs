// src/presentation/http/controllers/mod.rs
pub mod auth;
pub mod contact;
pub mod listings;
pub mod owner;
pub mod profile;
pub mod renter;
pub mod taxonomy;
