use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::{
    category::Category,
    pagination::{SearchQuery, SortDirection},
    validation::{Notification, ValidationHandler},
    DomainError, DomainResult,
};

pub const DEFAULT_PAGE: u32 = 0;
pub const DEFAULT_PER_PAGE: u32 = 10;
pub const DEFAULT_SORT: &str = "name";

/// Search request parameters as they arrive from the query API.
///
/// Every field is optional; missing ones fall back to the defaults above
/// and to ascending order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryListRequest {
    pub search: Option<String>,
    pub page: Option<u32>,
    pub per_page: Option<u32>,
    pub sort: Option<String>,
    pub direction: Option<String>,
}

impl CategoryListRequest {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = Some(search.into());
        self
    }

    pub fn with_page(mut self, page: u32, per_page: u32) -> Self {
        self.page = Some(page);
        self.per_page = Some(per_page);
        self
    }

    pub fn with_sort(mut self, sort: impl Into<String>, direction: impl Into<String>) -> Self {
        self.sort = Some(sort.into());
        self.direction = Some(direction.into());
        self
    }

    /// Convert into a [`SearchQuery`], reporting every invalid parameter at once
    pub fn into_search_query(self) -> DomainResult<SearchQuery> {
        let mut notification = Notification::create();

        let direction = match self.direction.as_deref() {
            Some(direction) => notification.validate(|| direction.parse::<SortDirection>())?,
            None => Some(SortDirection::default()),
        };

        let query = notification.validate(|| {
            SearchQuery::new(
                self.page.unwrap_or(DEFAULT_PAGE),
                self.per_page.unwrap_or(DEFAULT_PER_PAGE),
                self.search.unwrap_or_default(),
                self.sort.unwrap_or_else(|| DEFAULT_SORT.to_string()),
                direction.unwrap_or_default(),
            )
        })?;

        match query {
            Some(query) if !notification.has_errors() => Ok(query),
            _ => Err(DomainError::with_notification(
                "Invalid search request",
                &notification,
            )),
        }
    }
}

/// Full view of a category
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryOutput {
    pub id: String,
    pub name: String,
    pub description: String,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
}

impl From<&Category> for CategoryOutput {
    fn from(category: &Category) -> Self {
        CategoryOutput {
            id: category.id().to_string(),
            name: category.name().to_string(),
            description: category.description().to_string(),
            is_active: category.is_active(),
            created_at: category.created_at(),
            updated_at: category.updated_at(),
            deleted_at: category.deleted_at(),
        }
    }
}

/// List entry for a category
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ListCategoryOutput {
    pub id: String,
    pub name: String,
}

impl From<Category> for ListCategoryOutput {
    fn from(category: Category) -> Self {
        ListCategoryOutput {
            id: category.id().to_string(),
            name: category.name().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_request_uses_defaults() {
        let query = CategoryListRequest::new().into_search_query().unwrap();

        assert_eq!(query.page(), 0);
        assert_eq!(query.per_page(), 10);
        assert_eq!(query.terms(), "");
        assert_eq!(query.sort(), "name");
        assert_eq!(query.direction(), SortDirection::Asc);
    }

    #[test]
    fn test_custom_request_is_carried_over() {
        let query = CategoryListRequest::new()
            .with_search("asd")
            .with_page(2, 15)
            .with_sort("id", "desc")
            .into_search_query()
            .unwrap();

        assert_eq!(query.page(), 2);
        assert_eq!(query.per_page(), 15);
        assert_eq!(query.terms(), "asd");
        assert_eq!(query.sort(), "id");
        assert_eq!(query.direction(), SortDirection::Desc);
    }

    #[test]
    fn test_invalid_parameters_are_reported_together() {
        let err = CategoryListRequest::new()
            .with_page(0, 0)
            .with_sort("name", "up")
            .into_search_query()
            .unwrap_err();

        let messages: Vec<&str> = err.errors().iter().map(|e| e.message()).collect();
        assert_eq!(
            messages,
            vec![
                "'direction' should be 'asc' or 'desc'",
                "'perPage' should be greater than zero"
            ]
        );
    }

    #[test]
    fn test_request_deserializes_from_camel_case() {
        let request: CategoryListRequest = serde_json::from_str(
            r#"{"search":"aul","page":1,"perPage":5,"direction":"desc"}"#,
        )
        .unwrap();

        assert_eq!(request.per_page, Some(5));
        assert_eq!(request.sort, None);
        assert_eq!(request.into_search_query().unwrap().offset(), 5);
    }
}
