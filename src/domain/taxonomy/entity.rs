// src/domain/taxonomy/entity.rs
use crate::domain::slug::Slug;
use crate::domain::taxonomy::value_objects::{CategoryId, LocationId, TermTitle};
use chrono::{DateTime, Utc};

#[derive(Debug, Clone)]
pub struct Category {
    pub id: CategoryId,
    pub title: TermTitle,
    pub slug: Slug,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewCategory {
    pub title: TermTitle,
    pub slug: Slug,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct Location {
    pub id: LocationId,
    pub title: TermTitle,
    pub slug: Slug,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewLocation {
    pub title: TermTitle,
    pub slug: Slug,
    pub created_at: DateTime<Utc>,
}
