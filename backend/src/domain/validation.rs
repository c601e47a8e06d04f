/// Validation handlers: fail on the first error, or collect every error
use serde::{Deserialize, Serialize};
use std::fmt;

use super::base::{DomainError, DomainResult, ValueObject};

/// A single violated rule
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ValidationError {
    message: String,
}

impl ValidationError {
    pub fn new(message: impl Into<String>) -> Self {
        ValidationError {
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl ValueObject for ValidationError {}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

/// Shared capability set of the validation policies.
///
/// `append` returns the handler itself so calls can be chained with `?`.
pub trait ValidationHandler {
    /// Record a single error
    fn append(&mut self, error: ValidationError) -> DomainResult<&mut Self>;

    /// Record every error another handler holds
    fn append_all<H: ValidationHandler>(&mut self, other: &H) -> DomainResult<&mut Self>;

    /// Run a unit of work, turning its failure into a validation error.
    ///
    /// Returns `Ok(None)` when the failure was recorded instead of raised.
    fn validate<T, E, F>(&mut self, work: F) -> DomainResult<Option<T>>
    where
        F: FnOnce() -> Result<T, E>,
        E: fmt::Display;

    fn errors(&self) -> &[ValidationError];

    fn has_errors(&self) -> bool {
        !self.errors().is_empty()
    }

    fn first_error(&self) -> Option<&ValidationError> {
        self.errors().first()
    }
}

/// Fails immediately on the first error it is given.
///
/// It never holds errors: by the time one exists, the call has already failed.
#[derive(Debug, Default, Clone, Copy)]
pub struct ThrowsValidationHandler;

impl ValidationHandler for ThrowsValidationHandler {
    fn append(&mut self, error: ValidationError) -> DomainResult<&mut Self> {
        Err(DomainError::with_error(error))
    }

    fn append_all<H: ValidationHandler>(&mut self, other: &H) -> DomainResult<&mut Self> {
        if other.has_errors() {
            return Err(DomainError::with_errors(other.errors().to_vec()));
        }
        Ok(self)
    }

    fn validate<T, E, F>(&mut self, work: F) -> DomainResult<Option<T>>
    where
        F: FnOnce() -> Result<T, E>,
        E: fmt::Display,
    {
        work()
            .map(Some)
            .map_err(|e| DomainError::with_error(ValidationError::new(e.to_string())))
    }

    fn errors(&self) -> &[ValidationError] {
        &[]
    }
}

/// Collects errors in the order they were reported, duplicates included.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Notification {
    errors: Vec<ValidationError>,
}

impl Notification {
    pub fn create() -> Self {
        Self::default()
    }

    pub fn with_error(error: ValidationError) -> Self {
        Notification {
            errors: vec![error],
        }
    }

    pub fn into_errors(self) -> Vec<ValidationError> {
        self.errors
    }
}

impl ValidationHandler for Notification {
    fn append(&mut self, error: ValidationError) -> DomainResult<&mut Self> {
        self.errors.push(error);
        Ok(self)
    }

    fn append_all<H: ValidationHandler>(&mut self, other: &H) -> DomainResult<&mut Self> {
        self.errors.extend_from_slice(other.errors());
        Ok(self)
    }

    fn validate<T, E, F>(&mut self, work: F) -> DomainResult<Option<T>>
    where
        F: FnOnce() -> Result<T, E>,
        E: fmt::Display,
    {
        match work() {
            Ok(value) => Ok(Some(value)),
            Err(e) => {
                self.errors.push(ValidationError::new(e.to_string()));
                Ok(None)
            }
        }
    }

    fn errors(&self) -> &[ValidationError] {
        &self.errors
    }
}
