use tracing::{debug, info};

use crate::application::repositories::CategoryGateway;
use crate::domain::{
    base::AggregateRoot,
    category::Category,
    validation::{Notification, ValidationError, ValidationHandler},
    DomainError, DomainResult,
};

/// Use case for saving (upserting) a category
///
/// The category is validated again before it reaches the gateway, this time
/// collecting every violation, so a caller hears about all of its mistakes in
/// one response. A category may reach this point without having passed the
/// guarded constructor, for example after deserialization.
pub struct SaveCategory<'a, G: CategoryGateway> {
    gateway: &'a G,
}

impl<'a, G: CategoryGateway> SaveCategory<'a, G> {
    pub fn new(gateway: &'a G) -> Self {
        Self { gateway }
    }

    pub fn execute(&self, category: Option<Category>) -> DomainResult<Category> {
        let Some(category) = category else {
            return Err(DomainError::with_error(ValidationError::new(
                "'aCategory' should not be null",
            )));
        };

        let mut notification = Notification::create();
        category.validate(&mut notification)?;
        if notification.has_errors() {
            debug!(
                "Rejected category {:?} with {} error(s)",
                category.id(),
                notification.errors().len()
            );
            return Err(DomainError::with_notification(
                "Invalid category",
                &notification,
            ));
        }

        let saved = self.gateway.save(category)?;
        info!("Saved category {}", saved.id());
        Ok(saved)
    }
}
