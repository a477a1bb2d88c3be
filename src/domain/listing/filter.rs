use crate::domain::taxonomy::CategoryId;

/// Narrowing applied to public listing queries. Title filters are
/// case-insensitive substring matches.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListingFilter {
    pub category_id: Option<CategoryId>,
    pub category_title: Option<String>,
    pub location_title: Option<String>,
}

impl ListingFilter {
    pub fn all() -> Self {
        Self::default()
    }

    pub fn by_category(category_id: CategoryId) -> Self {
        Self {
            category_id: Some(category_id),
            ..Self::default()
        }
    }

    pub fn search(category: Option<String>, location: Option<String>) -> Self {
        Self {
            category_id: None,
            category_title: normalize(category),
            location_title: normalize(location),
        }
    }

    pub fn is_unfiltered(&self) -> bool {
        self.category_id.is_none() && self.category_title.is_none() && self.location_title.is_none()
    }
}

fn normalize(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
