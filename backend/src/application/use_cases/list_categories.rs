use tracing::debug;

use crate::application::{dto::ListCategoryOutput, repositories::CategoryGateway};
use crate::domain::{
    pagination::{Pagination, SearchQuery},
    DomainResult,
};

/// Use case for listing categories
///
/// Filtering, sorting and paging are the gateway's job; this only projects
/// each category into its list view.
pub struct ListCategories<'a, G: CategoryGateway> {
    gateway: &'a G,
}

impl<'a, G: CategoryGateway> ListCategories<'a, G> {
    pub fn new(gateway: &'a G) -> Self {
        Self { gateway }
    }

    pub fn execute(&self, query: &SearchQuery) -> DomainResult<Pagination<ListCategoryOutput>> {
        let page = self.gateway.find_all(query)?;
        debug!(
            "Listed {} of {} categories (page {})",
            page.items().len(),
            page.total(),
            page.current_page()
        );
        Ok(page.map(ListCategoryOutput::from))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::use_cases::test_gateway::RecordingGateway;
    use crate::domain::{
        category::{ActivationStatus, Category},
        pagination::SortDirection,
        utils,
    };

    fn category(name: &str) -> Category {
        Category::with(
            utils::new_id(),
            name,
            "",
            ActivationStatus::Active,
            utils::now(),
            utils::now(),
        )
        .unwrap()
    }

    #[test]
    fn test_gateway_page_is_projected() {
        let categories = vec![category("Lives"), category("Aulas")];
        let expected: Vec<ListCategoryOutput> = categories
            .iter()
            .cloned()
            .map(ListCategoryOutput::from)
            .collect();
        let gateway = RecordingGateway::returning_page(Pagination::new(
            0,
            10,
            categories.len() as u64,
            categories,
        ));
        let query = SearchQuery::new(0, 10, "Algo", "name", SortDirection::Asc).unwrap();

        let output = ListCategories::new(&gateway).execute(&query).unwrap();

        assert_eq!(output.current_page(), 0);
        assert_eq!(output.per_page(), 10);
        assert_eq!(output.total(), 2);
        assert_eq!(output.items(), expected.as_slice());
        assert_eq!(*gateway.queries.borrow(), vec![query]);
    }

    #[test]
    fn test_empty_page_is_passed_through() {
        let gateway = RecordingGateway::new();
        let query = SearchQuery::new(3, 5, "", "name", SortDirection::Desc).unwrap();

        let output = ListCategories::new(&gateway).execute(&query).unwrap();

        assert_eq!(output.current_page(), 3);
        assert_eq!(output.per_page(), 5);
        assert_eq!(output.total(), 0);
        assert!(output.items().is_empty());
    }
}
