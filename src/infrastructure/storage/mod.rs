//! Listing image cleanup against the external object store.
mod cloudinary;
mod noop;

pub use cloudinary::CloudinaryImageStore;
pub use noop::NoopImageStore;
