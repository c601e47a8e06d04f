use std::str::FromStr;

use tracing::debug;

use crate::domain::{
    pagination::{SearchQuery, SortDirection},
    validation::ValidationError,
    DomainError,
};

/// A text field whose analyzed (lower-cased) form can be matched by search terms
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextField {
    Name,
    Description,
}

/// A field the index can sort on.
///
/// Analyzed text is not sortable; `name` sorts on its raw keyword form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortField {
    Id,
    NameKeyword,
    CreatedAt,
    UpdatedAt,
    DeletedAt,
    Active,
}

impl SortField {
    /// Path of the field inside the index mapping
    pub fn index_path(self) -> &'static str {
        match self {
            SortField::Id => "id",
            SortField::NameKeyword => "name.keyword",
            SortField::CreatedAt => "created_at",
            SortField::UpdatedAt => "updated_at",
            SortField::DeletedAt => "deleted_at",
            SortField::Active => "active",
        }
    }

    /// Whether a document may have no value for this field
    pub fn may_be_missing(self) -> bool {
        matches!(self, SortField::DeletedAt)
    }
}

impl FromStr for SortField {
    type Err = DomainError;

    /// Parse a logical sort field name as used by the query API
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "id" => Ok(SortField::Id),
            "name" => Ok(SortField::NameKeyword),
            "created_at" => Ok(SortField::CreatedAt),
            "updated_at" => Ok(SortField::UpdatedAt),
            "deleted_at" => Ok(SortField::DeletedAt),
            "active" => Ok(SortField::Active),
            other => Err(DomainError::with_error(ValidationError::new(format!(
                "'sort' field '{other}' is not sortable"
            )))),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortClause {
    pub field: SortField,
    pub direction: SortDirection,
    /// Documents without a value go after every valued one, in either direction
    pub nulls_last: bool,
}

impl SortClause {
    fn new(field: SortField, direction: SortDirection) -> Self {
        SortClause {
            field,
            direction,
            nulls_last: field.may_be_missing(),
        }
    }
}

/// Case-insensitive substring match of `term` against any of `fields`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextFilter {
    /// Already analyzed: trimmed and lower-cased
    pub term: String,
    pub fields: Vec<TextField>,
}

/// What the document store must execute for one search query
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchPlan {
    /// `None` matches every document
    pub filter: Option<TextFilter>,
    /// Ordered; ends with the id tie-break unless the primary key is already id
    pub sort: Vec<SortClause>,
    pub offset: u64,
    pub limit: u32,
}

/// Turns a [`SearchQuery`] into a [`SearchPlan`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryQueryTranslator {
    text_fields: Vec<TextField>,
}

impl Default for CategoryQueryTranslator {
    fn default() -> Self {
        CategoryQueryTranslator {
            text_fields: vec![TextField::Name],
        }
    }
}

impl CategoryQueryTranslator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Also match search terms against the description
    pub fn with_description_search(mut self, enabled: bool) -> Self {
        self.text_fields.retain(|field| *field != TextField::Description);
        if enabled {
            self.text_fields.push(TextField::Description);
        }
        self
    }

    pub fn text_fields(&self) -> &[TextField] {
        &self.text_fields
    }

    pub fn translate(&self, query: &SearchQuery) -> Result<SearchPlan, DomainError> {
        let term = analyze(query.terms());
        let filter = (!term.is_empty()).then(|| TextFilter {
            term,
            fields: self.text_fields.clone(),
        });

        let primary: SortField = query.sort().parse()?;
        let mut sort = vec![SortClause::new(primary, query.direction())];
        if primary != SortField::Id {
            sort.push(SortClause::new(SortField::Id, SortDirection::Asc));
        }

        let plan = SearchPlan {
            filter,
            sort,
            offset: query.offset(),
            limit: query.per_page(),
        };
        debug!(
            "Search plan: filter={:?} sort={} {} offset={} limit={}",
            plan.filter.as_ref().map(|f| f.term.as_str()),
            primary.index_path(),
            query.direction(),
            plan.offset,
            plan.limit
        );
        Ok(plan)
    }
}

/// The analyzer applied to both indexed text and search terms.
///
/// Folds one character at a time, without context, so a term folds the same
/// way as any text containing it (`str::to_lowercase` special-cases a final
/// Greek sigma).
pub(crate) fn analyze(text: &str) -> String {
    text.trim().chars().flat_map(char::to_lowercase).collect()
}
