use std::cell::RefCell;
use std::collections::HashMap;

use crate::application::repositories::CategoryGateway;
use crate::domain::{
    category::Category,
    pagination::{Pagination, SearchQuery},
    DomainResult,
};

/// In-memory gateway that records every call, used for unit tests.
#[derive(Default)]
pub struct RecordingGateway {
    stored: RefCell<HashMap<String, Category>>,
    page: Option<Pagination<Category>>,
    pub saved: RefCell<Vec<Category>>,
    pub deleted: RefCell<Vec<String>>,
    pub looked_up: RefCell<Vec<String>>,
    pub queries: RefCell<Vec<SearchQuery>>,
}

impl RecordingGateway {
    pub fn new() -> Self {
        Self::default()
    }

    /// Answer every `find_all` with this page
    pub fn returning_page(page: Pagination<Category>) -> Self {
        Self {
            page: Some(page),
            ..Self::default()
        }
    }

    pub fn with_stored(categories: Vec<Category>) -> Self {
        let gateway = Self::default();
        gateway.stored.borrow_mut().extend(
            categories
                .into_iter()
                .map(|c| (c.id().to_string(), c)),
        );
        gateway
    }
}

impl CategoryGateway for RecordingGateway {
    fn save(&self, category: Category) -> DomainResult<Category> {
        self.saved.borrow_mut().push(category.clone());
        self.stored
            .borrow_mut()
            .insert(category.id().to_string(), category.clone());
        Ok(category)
    }

    fn delete_by_id(&self, id: &str) -> DomainResult<()> {
        self.deleted.borrow_mut().push(id.to_string());
        self.stored.borrow_mut().remove(id);
        Ok(())
    }

    fn find_by_id(&self, id: &str) -> DomainResult<Option<Category>> {
        self.looked_up.borrow_mut().push(id.to_string());
        Ok(self.stored.borrow().get(id).cloned())
    }

    fn find_all(&self, query: &SearchQuery) -> DomainResult<Pagination<Category>> {
        self.queries.borrow_mut().push(query.clone());
        Ok(self.page.clone().unwrap_or_else(|| {
            Pagination::new(query.page(), query.per_page(), 0, Vec::new())
        }))
    }
}
