/// Search query and pagination value objects
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::base::{DomainError, DomainResult, ValueObject};
use super::validation::ValidationError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    pub fn as_str(self) -> &'static str {
        match self {
            SortDirection::Asc => "asc",
            SortDirection::Desc => "desc",
        }
    }
}

impl FromStr for SortDirection {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "asc" => Ok(SortDirection::Asc),
            "desc" => Ok(SortDirection::Desc),
            _ => Err(DomainError::with_error(ValidationError::new(
                "'direction' should be 'asc' or 'desc'",
            ))),
        }
    }
}

impl fmt::Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One page request against a searchable index
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct SearchQuery {
    page: u32,
    per_page: u32,
    terms: String,
    sort: String,
    direction: SortDirection,
}

impl SearchQuery {
    /// `page` is zero-based; `per_page` must be positive
    pub fn new(
        page: u32,
        per_page: u32,
        terms: impl Into<String>,
        sort: impl Into<String>,
        direction: SortDirection,
    ) -> DomainResult<Self> {
        if per_page == 0 {
            return Err(DomainError::with_error(ValidationError::new(
                "'perPage' should be greater than zero",
            )));
        }
        Ok(SearchQuery {
            page,
            per_page,
            terms: terms.into(),
            sort: sort.into(),
            direction,
        })
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn per_page(&self) -> u32 {
        self.per_page
    }

    pub fn terms(&self) -> &str {
        &self.terms
    }

    pub fn sort(&self) -> &str {
        &self.sort
    }

    pub fn direction(&self) -> SortDirection {
        self.direction
    }

    /// Number of items that precede the requested page
    pub fn offset(&self) -> u64 {
        u64::from(self.page) * u64::from(self.per_page)
    }
}

impl ValueObject for SearchQuery {}

/// A page of items plus paging metadata.
///
/// `total` counts every match, not just the items on this page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Pagination<T> {
    current_page: u32,
    per_page: u32,
    total: u64,
    items: Vec<T>,
}

impl<T> Pagination<T> {
    pub fn new(current_page: u32, per_page: u32, total: u64, items: Vec<T>) -> Self {
        Pagination {
            current_page,
            per_page,
            total,
            items,
        }
    }

    pub fn current_page(&self) -> u32 {
        self.current_page
    }

    pub fn per_page(&self) -> u32 {
        self.per_page
    }

    pub fn total(&self) -> u64 {
        self.total
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn map<U, F>(self, f: F) -> Pagination<U>
    where
        F: FnMut(T) -> U,
    {
        Pagination {
            current_page: self.current_page,
            per_page: self.per_page,
            total: self.total,
            items: self.items.into_iter().map(f).collect(),
        }
    }
}
