use tracing::{debug, info};

use crate::application::repositories::CategoryGateway;
use crate::domain::DomainResult;

/// Use case for deleting a category by id
///
/// A missing or blank id is silently ignored; the gateway is never called.
pub struct DeleteCategory<'a, G: CategoryGateway> {
    gateway: &'a G,
}

impl<'a, G: CategoryGateway> DeleteCategory<'a, G> {
    pub fn new(gateway: &'a G) -> Self {
        Self { gateway }
    }

    pub fn execute(&self, id: Option<&str>) -> DomainResult<()> {
        let Some(id) = id.filter(|id| !id.trim().is_empty()) else {
            debug!("Ignoring delete without an id");
            return Ok(());
        };

        self.gateway.delete_by_id(id)?;
        info!("Deleted category {}", id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::use_cases::test_gateway::RecordingGateway;

    #[test]
    fn test_valid_id_is_deleted_once() {
        let gateway = RecordingGateway::new();

        DeleteCategory::new(&gateway)
            .execute(Some("0a1b2c3d"))
            .unwrap();

        assert_eq!(*gateway.deleted.borrow(), vec!["0a1b2c3d".to_string()]);
    }

    #[test]
    fn test_whitespace_id_never_reaches_gateway() {
        let gateway = RecordingGateway::new();

        DeleteCategory::new(&gateway).execute(Some(" ")).unwrap();

        assert!(gateway.deleted.borrow().is_empty());
    }

    #[test]
    fn test_missing_id_never_reaches_gateway() {
        let gateway = RecordingGateway::new();

        DeleteCategory::new(&gateway).execute(None).unwrap();

        assert!(gateway.deleted.borrow().is_empty());
    }
}
