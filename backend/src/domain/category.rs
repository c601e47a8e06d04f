/// The Category aggregate
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::base::{AggregateRoot, DomainResult, Entity};
use super::utils;
use super::validation::{ThrowsValidationHandler, ValidationError, ValidationHandler};

/// Whether a category is offered to the catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ActivationStatus {
    #[default]
    Active,
    Inactive,
}

impl ActivationStatus {
    pub fn is_active(self) -> bool {
        self == ActivationStatus::Active
    }

    /// An absent flag means active
    pub fn from_active_flag(active: Option<bool>) -> Self {
        match active {
            Some(false) => ActivationStatus::Inactive,
            _ => ActivationStatus::Active,
        }
    }
}

/// Raw, unchecked input for building a [`Category`].
///
/// `id` and `name` are optional so that a missing value can be told apart
/// from a blank one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryProps {
    pub id: Option<String>,
    pub name: Option<String>,
    pub description: String,
    pub activation_status: ActivationStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
}

impl From<&Category> for CategoryProps {
    fn from(category: &Category) -> Self {
        CategoryProps {
            id: Some(category.id.clone()),
            name: Some(category.name.clone()),
            description: category.description.clone(),
            activation_status: category.activation_status,
            created_at: category.created_at,
            updated_at: category.updated_at,
            deleted_at: category.deleted_at,
        }
    }
}

/// A category of catalog content.
///
/// Every constructor validates through a [`ThrowsValidationHandler`], so a
/// value built here always has a non-blank id and name. Revisions consume the
/// aggregate and hand back a new one.
///
/// Deserializing skips those checks; callers about to persist a category
/// re-validate it (see `SaveCategory`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    id: String,
    name: String,
    #[serde(default)]
    description: String,
    #[serde(default)]
    activation_status: ActivationStatus,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    #[serde(default)]
    deleted_at: Option<DateTime<Utc>>,
}

impl Category {
    /// Build a category from unchecked input, failing on the first violated rule
    pub fn from_props(props: CategoryProps) -> DomainResult<Self> {
        check_required_fields(
            props.id.as_deref(),
            props.name.as_deref(),
            &mut ThrowsValidationHandler,
        )?;

        Ok(Category {
            id: props.id.unwrap_or_default(),
            name: props.name.unwrap_or_default(),
            description: props.description,
            activation_status: props.activation_status,
            created_at: props.created_at,
            updated_at: props.updated_at,
            deleted_at: props.deleted_at,
        })
    }

    pub fn with(
        id: impl Into<String>,
        name: impl Into<String>,
        description: impl Into<String>,
        activation_status: ActivationStatus,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> DomainResult<Self> {
        Self::from_props(CategoryProps {
            id: Some(id.into()),
            name: Some(name.into()),
            description: description.into(),
            activation_status,
            created_at,
            updated_at,
            deleted_at: None,
        })
    }

    /// A brand-new category with a generated id
    pub fn new_category(
        name: impl Into<String>,
        description: impl Into<String>,
        activation_status: ActivationStatus,
    ) -> DomainResult<Self> {
        let now = utils::now();
        Self::with(
            utils::new_id(),
            name,
            description,
            activation_status,
            now,
            now,
        )
    }

    /// Rebuild an equal category through the guarded constructor
    pub fn copy_of(other: &Category) -> DomainResult<Self> {
        Self::from_props(CategoryProps::from(other))
    }

    pub fn update(
        self,
        name: impl Into<String>,
        description: impl Into<String>,
        activation_status: ActivationStatus,
    ) -> DomainResult<Self> {
        Self::from_props(CategoryProps {
            name: Some(name.into()),
            description: description.into(),
            activation_status,
            updated_at: utils::now(),
            ..CategoryProps::from(&self)
        })
    }

    pub fn activate(self) -> Self {
        self.with_status(ActivationStatus::Active)
    }

    pub fn deactivate(self) -> Self {
        self.with_status(ActivationStatus::Inactive)
    }

    /// Soft-delete; the original deletion time is kept on repeated calls
    pub fn mark_deleted(self) -> Self {
        if self.deleted_at.is_some() {
            return self;
        }
        let now = utils::now();
        Category {
            deleted_at: Some(now),
            updated_at: now,
            ..self
        }
    }

    pub fn restore(self) -> Self {
        Category {
            deleted_at: None,
            updated_at: utils::now(),
            ..self
        }
    }

    fn with_status(self, activation_status: ActivationStatus) -> Self {
        Category {
            activation_status,
            updated_at: utils::now(),
            ..self
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn activation_status(&self) -> ActivationStatus {
        self.activation_status
    }

    pub fn is_active(&self) -> bool {
        self.activation_status.is_active()
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    pub fn deleted_at(&self) -> Option<DateTime<Utc>> {
        self.deleted_at
    }

    pub fn is_deleted(&self) -> bool {
        self.deleted_at.is_some()
    }
}

impl Entity for Category {
    type Id = str;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

impl AggregateRoot for Category {
    fn validate<H: ValidationHandler>(&self, handler: &mut H) -> DomainResult<()> {
        check_required_fields(Some(self.id.as_str()), Some(self.name.as_str()), handler)
    }
}

// id first, then name; each field reports at most one error.
fn check_required_fields<H: ValidationHandler>(
    id: Option<&str>,
    name: Option<&str>,
    handler: &mut H,
) -> DomainResult<()> {
    check_required("id", id, handler)?;
    check_required("name", name, handler)?;
    Ok(())
}

fn check_required<H: ValidationHandler>(
    field: &str,
    value: Option<&str>,
    handler: &mut H,
) -> DomainResult<()> {
    match value {
        None => {
            handler.append(ValidationError::new(format!("'{field}' should not be null")))?;
        }
        Some(value) if value.trim().is_empty() => {
            handler.append(ValidationError::new(format!("'{field}' should not be empty")))?;
        }
        Some(_) => {}
    }
    Ok(())
}
