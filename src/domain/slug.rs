// src/domain/slug.rs
use crate::application::ports::util::SlugGenerator;
use crate::domain::errors::{DomainError, DomainResult};
use std::fmt;

/// URL-safe lookup key: lowercase ASCII letters, digits and single hyphens.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Slug(String);

impl Slug {
    /// Longest derived base. Leaves room for a `-N` suffix within the
    /// listing slug column and fits the taxonomy slug columns as is.
    pub const MAX_BASE_LEN: usize = 150;

    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(DomainError::Validation("slug cannot be empty".into()));
        }
        let well_formed = value
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
            && !value.starts_with('-')
            && !value.ends_with('-')
            && !value.contains("--");
        if !well_formed {
            return Err(DomainError::Validation(format!("invalid slug '{value}'")));
        }
        Ok(Self(value))
    }

    /// `base-N`, used to disambiguate colliding listing slugs.
    pub fn with_suffix(&self, suffix: u32) -> Self {
        Self(format!("{}-{suffix}", self.0))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for Slug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<Slug> for String {
    fn from(value: Slug) -> Self {
        value.0
    }
}

/// Normalise `source` into a base slug. Titles made only of characters the
/// generator strips fall back to `fallback`. Transliteration can make the
/// base much longer than the title, so it is cut back to whole words within
/// [`Slug::MAX_BASE_LEN`].
pub fn derive_slug(
    generator: &dyn SlugGenerator,
    source: &str,
    fallback: &str,
) -> DomainResult<Slug> {
    if source.trim().is_empty() {
        return Err(DomainError::Validation("title cannot be empty".into()));
    }
    let base = generator.slugify(source);
    let base = truncate_at_hyphen(&base, Slug::MAX_BASE_LEN);
    if base.is_empty() {
        Slug::new(fallback)
    } else {
        Slug::new(base)
    }
}

fn truncate_at_hyphen(base: &str, max_len: usize) -> &str {
    if base.len() <= max_len {
        return base;
    }
    let mut end = max_len;
    while !base.is_char_boundary(end) {
        end -= 1;
    }
    let head = &base[..end];
    let head = if base[end..].starts_with('-') {
        head
    } else {
        head.rfind('-').map_or(head, |idx| &head[..idx])
    };
    head.trim_end_matches('-')
}
