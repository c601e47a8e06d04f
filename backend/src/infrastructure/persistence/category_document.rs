use chrono::{DateTime, SecondsFormat, Utc};
use rusqlite::Row;

use crate::domain::{
    category::{ActivationStatus, Category, CategoryProps},
    DomainError, DomainResult,
};
use crate::infrastructure::search::analyze;

/// Storage form of a category.
///
/// Timestamps are RFC 3339 strings with fixed microsecond precision and a `Z`
/// suffix, so comparing the strings orders them chronologically.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryDocument {
    pub id: String,
    pub name: String,
    pub description: String,
    pub active: Option<bool>,
    pub created_at: String,
    pub updated_at: String,
    pub deleted_at: Option<String>,
}

impl CategoryDocument {
    pub const COLUMNS: &'static str =
        "id, name, description, active, created_at, updated_at, deleted_at";

    pub fn from_category(category: &Category) -> Self {
        CategoryDocument {
            id: category.id().to_string(),
            name: category.name().to_string(),
            description: category.description().to_string(),
            active: Some(category.is_active()),
            created_at: format_timestamp(category.created_at()),
            updated_at: format_timestamp(category.updated_at()),
            deleted_at: category.deleted_at().map(format_timestamp),
        }
    }

    /// Read a row selected with [`Self::COLUMNS`]
    pub fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(CategoryDocument {
            id: row.get(0)?,
            name: row.get(1)?,
            description: row.get(2)?,
            active: row.get(3)?,
            created_at: row.get(4)?,
            updated_at: row.get(5)?,
            deleted_at: row.get(6)?,
        })
    }

    pub fn name_text(&self) -> String {
        analyze(&self.name)
    }

    pub fn description_text(&self) -> String {
        analyze(&self.description)
    }

    /// Rebuild the aggregate through its guarded constructor
    pub fn to_category(&self) -> DomainResult<Category> {
        Category::from_props(CategoryProps {
            id: Some(self.id.clone()),
            name: Some(self.name.clone()),
            description: self.description.clone(),
            activation_status: ActivationStatus::from_active_flag(self.active),
            created_at: parse_timestamp(&self.created_at)?,
            updated_at: parse_timestamp(&self.updated_at)?,
            deleted_at: self
                .deleted_at
                .as_deref()
                .map(parse_timestamp)
                .transpose()?,
        })
    }
}

pub fn format_timestamp(timestamp: DateTime<Utc>) -> String {
    timestamp.to_rfc3339_opts(SecondsFormat::Micros, true)
}

fn parse_timestamp(value: &str) -> DomainResult<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(value)
        .map(|timestamp| timestamp.with_timezone(&Utc))
        .map_err(|e| DomainError::internal(format!("Invalid stored timestamp '{value}'"), e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::utils;

    #[test]
    fn test_document_round_trips_category() {
        let talks = Category::with(
            utils::new_id(),
            "Talks",
            "Conteúdo ao vivo",
            ActivationStatus::Inactive,
            utils::now(),
            utils::now(),
        )
        .unwrap()
        .mark_deleted();

        let document = CategoryDocument::from_category(&talks);

        assert_eq!(document.active, Some(false));
        assert_eq!(document.to_category().unwrap(), talks);
    }

    #[test]
    fn test_missing_active_flag_reads_as_active() {
        let document = CategoryDocument {
            id: "abc".to_string(),
            name: "Aulas".to_string(),
            description: String::new(),
            active: None,
            created_at: "2024-01-01T00:00:00.000000Z".to_string(),
            updated_at: "2024-01-01T00:00:00.000000Z".to_string(),
            deleted_at: None,
        };

        let category = document.to_category().unwrap();

        assert_eq!(category.activation_status(), ActivationStatus::Active);
    }

    #[test]
    fn test_timestamps_have_fixed_width() {
        let timestamp = DateTime::parse_from_rfc3339("2024-03-05T07:08:09Z")
            .unwrap()
            .with_timezone(&Utc);

        assert_eq!(format_timestamp(timestamp), "2024-03-05T07:08:09.000000Z");
    }

    #[test]
    fn test_corrupt_timestamp_is_internal_error() {
        let document = CategoryDocument {
            id: "abc".to_string(),
            name: "Aulas".to_string(),
            description: String::new(),
            active: Some(true),
            created_at: "yesterday".to_string(),
            updated_at: "2024-01-01T00:00:00.000000Z".to_string(),
            deleted_at: None,
        };

        let err = document.to_category().unwrap_err();

        assert!(!err.is_validation());
    }

    #[test]
    fn test_analyzed_text_is_lower_cased() {
        let document = CategoryDocument::from_category(
            &Category::new_category("Aulas Ao Vivo", " Conteúdo ", ActivationStatus::Active)
                .unwrap(),
        );

        assert_eq!(document.name_text(), "aulas ao vivo");
        assert_eq!(document.description_text(), "conteúdo");
    }
}
