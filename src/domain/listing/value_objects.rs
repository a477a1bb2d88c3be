use crate::domain::errors::{DomainError, DomainResult};
use std::fmt;

pub const FEATURE_COUNT: usize = 5;
pub const DESCRIPTION_COUNT: usize = 5;
pub const MAX_IMAGES: usize = 4;
const MAX_TEXT_LEN: usize = 255;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListingId(pub i64);

impl ListingId {
    pub fn new(id: i64) -> DomainResult<Self> {
        if id <= 0 {
            Err(DomainError::Validation("listing id must be positive".into()))
        } else {
            Ok(Self(id))
        }
    }
}

impl From<ListingId> for i64 {
    fn from(value: ListingId) -> Self {
        value.0
    }
}

/// Listing titles are not unique; the slug disambiguates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListingTitle(String);

impl ListingTitle {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(DomainError::Validation("title cannot be empty".into()));
        }
        if value.chars().count() > MAX_TEXT_LEN {
            return Err(DomainError::Validation(format!(
                "title must be at most {MAX_TEXT_LEN} characters"
            )));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for ListingTitle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<ListingTitle> for String {
    fn from(value: ListingTitle) -> Self {
        value.0
    }
}

/// Size in square feet and room counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListingLayout {
    pub flat_size: i32,
    pub room: i32,
    pub bath: i32,
    pub kitchen: i32,
}

impl ListingLayout {
    pub fn new(flat_size: i32, room: i32, bath: i32, kitchen: i32) -> DomainResult<Self> {
        for (label, value) in [
            ("flat_size", flat_size),
            ("room", room),
            ("bath", bath),
            ("kitchen", kitchen),
        ] {
            if value < 0 {
                return Err(DomainError::Validation(format!(
                    "{label} cannot be negative"
                )));
            }
        }
        Ok(Self {
            flat_size,
            room,
            bath,
            kitchen,
        })
    }
}

fn fixed_text_list(values: Vec<String>, expected: usize, label: &str) -> DomainResult<Vec<String>> {
    if values.len() != expected {
        return Err(DomainError::Validation(format!(
            "exactly {expected} {label} entries are required"
        )));
    }
    for (index, value) in values.iter().enumerate() {
        if value.trim().is_empty() {
            return Err(DomainError::Validation(format!(
                "{label} {} cannot be empty",
                index + 1
            )));
        }
        if value.chars().count() > MAX_TEXT_LEN {
            return Err(DomainError::Validation(format!(
                "{label} {} must be at most {MAX_TEXT_LEN} characters",
                index + 1
            )));
        }
    }
    Ok(values)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListingFeatures(Vec<String>);

impl ListingFeatures {
    pub fn new(values: Vec<String>) -> DomainResult<Self> {
        fixed_text_list(values, FEATURE_COUNT, "feature").map(Self)
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    pub fn into_inner(self) -> Vec<String> {
        self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListingDescriptions(Vec<String>);

impl ListingDescriptions {
    pub fn new(values: Vec<String>) -> DomainResult<Self> {
        fixed_text_list(values, DESCRIPTION_COUNT, "description").map(Self)
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    pub fn into_inner(self) -> Vec<String> {
        self.0
    }
}

/// Public id of an image held by the external object store.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ImageRef(String);

impl ImageRef {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into().trim().to_string();
        if value.is_empty() {
            return Err(DomainError::Validation("image reference cannot be empty".into()));
        }
        if value.chars().count() > MAX_TEXT_LEN {
            return Err(DomainError::Validation(format!(
                "image reference must be at most {MAX_TEXT_LEN} characters"
            )));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<ImageRef> for String {
    fn from(value: ImageRef) -> Self {
        value.0
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListingImages(Vec<ImageRef>);

impl ListingImages {
    pub fn new(values: Vec<String>) -> DomainResult<Self> {
        if values.len() > MAX_IMAGES {
            return Err(DomainError::Validation(format!(
                "at most {MAX_IMAGES} images are allowed"
            )));
        }
        values
            .into_iter()
            .map(ImageRef::new)
            .collect::<DomainResult<Vec<_>>>()
            .map(Self)
    }

    pub fn iter(&self) -> impl Iterator<Item = &ImageRef> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn to_strings(&self) -> Vec<String> {
        self.0.iter().map(|image| image.as_str().to_string()).collect()
    }
}
