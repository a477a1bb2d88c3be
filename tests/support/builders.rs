// tests/support/builders.rs
use easyrent::application::commands::listings::{CreateListingCommand, UpdateListingCommand};

/// Valid listing payload; tweak what the test cares about.
pub struct ListingBuilder {
    title: String,
    category_id: i64,
    location_id: i64,
    images: Vec<String>,
    available: Option<bool>,
}

impl ListingBuilder {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            category_id: 1,
            location_id: 1,
            images: Vec::new(),
            available: None,
        }
    }

    pub fn category(mut self, id: i64) -> Self {
        self.category_id = id;
        self
    }

    pub fn location(mut self, id: i64) -> Self {
        self.location_id = id;
        self
    }

    pub fn images(mut self, images: &[&str]) -> Self {
        self.images = images.iter().map(|image| image.to_string()).collect();
        self
    }

    pub fn unavailable(mut self) -> Self {
        self.available = Some(false);
        self
    }

    pub fn build(self) -> CreateListingCommand {
        CreateListingCommand {
            category_id: self.category_id,
            location_id: self.location_id,
            title: self.title,
            flat_size: 850,
            room: 2,
            bath: 1,
            kitchen: 1,
            images: self.images,
            features: five("Feature"),
            descriptions: five("Description"),
            available: self.available,
        }
    }
}

pub fn five(prefix: &str) -> Vec<String> {
    (1..=5).map(|i| format!("{prefix} {i}")).collect()
}

pub fn retitle(id: i64, title: &str) -> UpdateListingCommand {
    UpdateListingCommand {
        id,
        title: Some(title.to_string()),
        ..Default::default()
    }
}
