mod service;

pub use service::{ContactFormCommand, ContactFormService};
