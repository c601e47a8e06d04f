use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::{
    category::{ActivationStatus, Category, CategoryProps},
    DomainResult,
};

/// A category as sent over the wire.
///
/// Everything is optional on input; the conversion to [`Category`] decides
/// what is actually required.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryDto {
    pub id: Option<String>,
    pub name: Option<String>,
    pub description: Option<String>,
    #[serde(rename = "is_active")]
    pub active: Option<bool>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
}

impl CategoryDto {
    /// Build the aggregate through its guarded constructor; an absent
    /// `is_active` means active
    pub fn to_category(&self) -> DomainResult<Category> {
        Category::from_props(CategoryProps {
            id: self.id.clone(),
            name: self.name.clone(),
            description: self.description.clone().unwrap_or_default(),
            activation_status: ActivationStatus::from_active_flag(self.active),
            created_at: self.created_at,
            updated_at: self.updated_at,
            deleted_at: self.deleted_at,
        })
    }
}

impl From<&Category> for CategoryDto {
    fn from(category: &Category) -> Self {
        CategoryDto {
            id: Some(category.id().to_string()),
            name: Some(category.name().to_string()),
            description: Some(category.description().to_string()),
            active: Some(category.is_active()),
            created_at: category.created_at(),
            updated_at: category.updated_at(),
            deleted_at: category.deleted_at(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::utils;

    #[test]
    fn test_absent_is_active_defaults_to_active() {
        let dto: CategoryDto = serde_json::from_str(
            r#"{
                "id": "6a1b2c",
                "name": "Aulas",
                "description": "A melhor categoria",
                "created_at": "2024-05-01T10:00:00.123456Z",
                "updated_at": "2024-05-01T10:00:00.123456Z"
            }"#,
        )
        .unwrap();

        let category = dto.to_category().unwrap();

        assert_eq!(category.activation_status(), ActivationStatus::Active);
        assert!(category.deleted_at().is_none());
    }

    #[test]
    fn test_every_field_is_carried_over() {
        let dto: CategoryDto = serde_json::from_str(
            r#"{
                "id": "6a1b2c",
                "name": "Aulas",
                "description": "A melhor categoria",
                "is_active": false,
                "created_at": "2024-05-01T10:00:00.123456Z",
                "updated_at": "2024-05-02T10:00:00.123456Z",
                "deleted_at": "2024-05-03T10:00:00.123456Z"
            }"#,
        )
        .unwrap();

        let category = dto.to_category().unwrap();

        assert_eq!(category.id(), "6a1b2c");
        assert_eq!(category.name(), "Aulas");
        assert_eq!(category.description(), "A melhor categoria");
        assert_eq!(category.activation_status(), ActivationStatus::Inactive);
        assert_eq!(
            category.created_at().to_rfc3339(),
            "2024-05-01T10:00:00.123456+00:00"
        );
        assert!(category.updated_at() > category.created_at());
        assert!(category.deleted_at().is_some());
    }

    #[test]
    fn test_missing_name_is_reported_as_null() {
        let dto: CategoryDto = serde_json::from_str(
            r#"{
                "id": "6a1b2c",
                "created_at": "2024-05-01T10:00:00Z",
                "updated_at": "2024-05-01T10:00:00Z"
            }"#,
        )
        .unwrap();

        let err = dto.to_category().unwrap_err();

        assert_eq!(err.errors()[0].message(), "'name' should not be null");
    }

    #[test]
    fn test_dto_from_category_serializes_is_active() {
        let category =
            Category::new_category("Lives", "Conteúdo ao vivo", ActivationStatus::Inactive)
                .unwrap();

        let json = serde_json::to_value(CategoryDto::from(&category)).unwrap();

        assert_eq!(json["is_active"], serde_json::json!(false));
        assert_eq!(json["name"], serde_json::json!("Lives"));
        assert_eq!(json["deleted_at"], serde_json::Value::Null);
        assert!(utils::now() >= category.created_at());
    }
}
