use crate::domain::{category::Category, pagination::Pagination, pagination::SearchQuery, DomainResult};

/// Gateway trait for persisting and searching Category aggregates.
///
/// This trait defines the contract between the use cases and the document
/// store. Implementations own the query translation: text filter, sort,
/// tie-break and paging all happen behind `find_all`.
pub trait CategoryGateway {
    /// Upserts a category keyed by its id and returns what was stored.
    ///
    /// There is no separate insert or update; the last write wins.
    fn save(&self, category: Category) -> DomainResult<Category>;

    /// Deletes a category by its id.
    ///
    /// Deleting an id that does not exist is not an error.
    fn delete_by_id(&self, id: &str) -> DomainResult<()>;

    /// Finds a category by its id.
    ///
    /// Returns `Ok(None)` if not found, or an error if the store fails.
    fn find_by_id(&self, id: &str) -> DomainResult<Option<Category>>;

    /// Returns one page of categories matching the query.
    ///
    /// A page past the last match yields no items; `total` still reports
    /// the full match count.
    fn find_all(&self, query: &SearchQuery) -> DomainResult<Pagination<Category>>;
}
