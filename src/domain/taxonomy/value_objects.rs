use crate::domain::errors::{DomainError, DomainResult};
use std::fmt;

pub const CATEGORY_SLUG_FALLBACK: &str = "category";
pub const LOCATION_SLUG_FALLBACK: &str = "location";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CategoryId(pub i64);

impl CategoryId {
    pub fn new(id: i64) -> DomainResult<Self> {
        if id <= 0 {
            Err(DomainError::Validation("category id must be positive".into()))
        } else {
            Ok(Self(id))
        }
    }
}

impl From<CategoryId> for i64 {
    fn from(value: CategoryId) -> Self {
        value.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LocationId(pub i64);

impl LocationId {
    pub fn new(id: i64) -> DomainResult<Self> {
        if id <= 0 {
            Err(DomainError::Validation("location id must be positive".into()))
        } else {
            Ok(Self(id))
        }
    }
}

impl From<LocationId> for i64 {
    fn from(value: LocationId) -> Self {
        value.0
    }
}

/// Title of a category or location. Unique per table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TermTitle(String);

impl TermTitle {
    pub const MAX_LEN: usize = 150;

    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into().trim().to_string();
        if value.is_empty() {
            return Err(DomainError::Validation("title cannot be empty".into()));
        }
        if value.chars().count() > Self::MAX_LEN {
            return Err(DomainError::Validation(format!(
                "title must be at most {} characters",
                Self::MAX_LEN
            )));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TermTitle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<TermTitle> for String {
    fn from(value: TermTitle) -> Self {
        value.0
    }
}
