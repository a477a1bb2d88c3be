use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::error::{ApplicationError, ApplicationResult};

pub const DEFAULT_PAGE_SIZE: u64 = 2;
pub const MIN_PAGE_SIZE_CAP: u64 = 50;

/// Page-number request as received from query parameters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PageRequest {
    pub page: Option<u64>,
    pub page_size: Option<u64>,
}

impl PageRequest {
    pub fn new(page: Option<u64>, page_size: Option<u64>) -> Self {
        Self { page, page_size }
    }
}

/// Resolved slice of a collection of `total` rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageWindow {
    pub page: u64,
    pub page_size: u64,
    pub total: u64,
    pub total_pages: u64,
}

impl PageWindow {
    /// Page size is capped at `max(50, total / 2)`. An empty collection has a
    /// single empty page; any page outside `1..=total_pages` is not found.
    pub fn resolve(request: PageRequest, total: u64) -> ApplicationResult<Self> {
        let cap = MIN_PAGE_SIZE_CAP.max(total / 2);
        let page_size = match request.page_size {
            None | Some(0) => DEFAULT_PAGE_SIZE,
            Some(size) => size.min(cap),
        };
        let total_pages = total.div_ceil(page_size).max(1);
        let page = request.page.unwrap_or(1);
        if page == 0 || page > total_pages {
            return Err(ApplicationError::not_found("invalid page"));
        }
        Ok(Self {
            page,
            page_size,
            total,
            total_pages,
        })
    }

    pub fn offset(&self) -> u64 {
        (self.page - 1) * self.page_size
    }

    pub fn limit(&self) -> u64 {
        self.page_size
    }

    pub fn into_page<T>(self, results: Vec<T>) -> Page<T> {
        Page {
            count: self.total,
            total_pages: self.total_pages,
            current_page: self.page,
            page_size: self.page_size,
            next_page: (self.page < self.total_pages).then(|| self.page + 1),
            previous_page: (self.page > 1).then(|| self.page - 1),
            results,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(bound(
    serialize = "T: Serialize",
    deserialize = "T: serde::de::DeserializeOwned"
))]
pub struct Page<T> {
    pub count: u64,
    pub total_pages: u64,
    pub current_page: u64,
    pub page_size: u64,
    pub next_page: Option<u64>,
    pub previous_page: Option<u64>,
    pub results: Vec<T>,
}

impl<T> Page<T> {
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Page<U> {
        Page {
            count: self.count,
            total_pages: self.total_pages,
            current_page: self.current_page,
            page_size: self.page_size,
            next_page: self.next_page,
            previous_page: self.previous_page,
            results: self.results.into_iter().map(f).collect(),
        }
    }
}
