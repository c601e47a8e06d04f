/// Base DDD abstractions for the domain layer
use std::fmt::Debug;
use thiserror::Error;

use super::validation::{ValidationError, ValidationHandler};

/// Trait for value objects - immutable objects defined by their attributes
/// Value objects are equal if all their attributes are equal
pub trait ValueObject: Clone + PartialEq + Eq + Debug {}

/// Trait for entities - objects with identity
/// Entities are equal if their IDs are equal, regardless of other attributes
pub trait Entity: Debug {
    type Id: ?Sized + PartialEq + Debug;

    fn id(&self) -> &Self::Id;
}

/// Trait for aggregate roots - entities that guard their own invariants
///
/// `validate` reports every violated rule to the handler. Which policy applies
/// (fail on the first error or collect them all) is up to the handler.
pub trait AggregateRoot: Entity {
    fn validate<H: ValidationHandler>(&self, handler: &mut H) -> DomainResult<()>;
}

/// Result type for domain operations
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-specific errors
#[derive(Debug, Error)]
pub enum DomainError {
    /// One or more validation rules were violated
    #[error("{message}")]
    Validation {
        message: String,
        errors: Vec<ValidationError>,
    },

    /// Opaque failure from an external collaborator (document store, codec)
    #[error("{message}")]
    Internal {
        message: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

impl DomainError {
    /// A validation failure carrying exactly one error
    pub fn with_error(error: ValidationError) -> Self {
        DomainError::Validation {
            message: error.message().to_string(),
            errors: vec![error],
        }
    }

    /// A validation failure carrying every error in `errors`
    pub fn with_errors(errors: Vec<ValidationError>) -> Self {
        let message = errors
            .iter()
            .map(ValidationError::message)
            .collect::<Vec<_>>()
            .join(", ");
        DomainError::Validation { message, errors }
    }

    /// A validation failure summarising everything a handler collected
    pub fn with_notification(message: impl Into<String>, handler: &impl ValidationHandler) -> Self {
        DomainError::Validation {
            message: message.into(),
            errors: handler.errors().to_vec(),
        }
    }

    pub fn internal(
        message: impl Into<String>,
        source: impl Into<Box<dyn std::error::Error + Send + Sync>>,
    ) -> Self {
        DomainError::Internal {
            message: message.into(),
            source: source.into(),
        }
    }

    /// Validation errors carried by this failure; empty for internal errors
    pub fn errors(&self) -> &[ValidationError] {
        match self {
            DomainError::Validation { errors, .. } => errors,
            DomainError::Internal { .. } => &[],
        }
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, DomainError::Validation { .. })
    }
}
