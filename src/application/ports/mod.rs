// src/application/ports/mod.rs
pub mod image_store;
pub mod mailer;
pub mod security;
pub mod time;
pub mod util;

