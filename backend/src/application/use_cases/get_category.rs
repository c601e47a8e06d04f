use crate::application::{dto::CategoryOutput, repositories::CategoryGateway};
use crate::domain::DomainResult;

/// Use case for fetching a single category
///
/// Absence is a value, not an error: an unknown or blank id yields `None`.
pub struct GetCategoryById<'a, G: CategoryGateway> {
    gateway: &'a G,
}

impl<'a, G: CategoryGateway> GetCategoryById<'a, G> {
    pub fn new(gateway: &'a G) -> Self {
        Self { gateway }
    }

    pub fn execute(&self, id: &str) -> DomainResult<Option<CategoryOutput>> {
        if id.trim().is_empty() {
            return Ok(None);
        }
        Ok(self
            .gateway
            .find_by_id(id)?
            .map(|category| CategoryOutput::from(&category)))
    }
}
