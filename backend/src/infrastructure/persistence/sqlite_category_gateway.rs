use rusqlite::{params, Connection, OptionalExtension, Result as SqliteResult, ToSql};
use tracing::{debug, info};

use super::category_document::CategoryDocument;
use crate::application::repositories::CategoryGateway;
use crate::config::CatalogConfig;
use crate::domain::{
    category::Category,
    pagination::{Pagination, SearchQuery, SortDirection},
    DomainError, DomainResult,
};
use crate::infrastructure::search::{
    CategoryQueryTranslator, SortClause, SortField, TextField, TextFilter,
};

/// SQLite-backed category document store implementing [`CategoryGateway`]
pub struct SqliteCategoryGateway {
    conn: Connection,
    translator: CategoryQueryTranslator,
}

impl SqliteCategoryGateway {
    /// Create a gateway over an open connection, creating the index if needed
    pub fn new(conn: Connection) -> SqliteResult<Self> {
        super::schema::initialize_database(&conn)?;
        Ok(SqliteCategoryGateway {
            conn,
            translator: CategoryQueryTranslator::default(),
        })
    }

    /// Create a new in-memory store (useful for testing)
    pub fn new_in_memory() -> SqliteResult<Self> {
        Self::new(Connection::open_in_memory()?)
    }

    /// Create a new file-based store
    pub fn new_with_path(path: impl AsRef<std::path::Path>) -> SqliteResult<Self> {
        Self::new(Connection::open(path)?)
    }

    /// Open the store described by the configuration
    pub fn open(config: &CatalogConfig) -> SqliteResult<Self> {
        let gateway = if config.database_path == ":memory:" {
            Self::new_in_memory()?
        } else {
            Self::new_with_path(&config.database_path)?
        };
        info!("Opened category store at {}", config.database_path);
        Ok(gateway.with_translator(
            CategoryQueryTranslator::new().with_description_search(config.search_description),
        ))
    }

    pub fn with_translator(mut self, translator: CategoryQueryTranslator) -> Self {
        self.translator = translator;
        self
    }
}

impl CategoryGateway for SqliteCategoryGateway {
    fn save(&self, category: Category) -> DomainResult<Category> {
        let document = CategoryDocument::from_category(&category);
        self.conn
            .execute(
                "INSERT OR REPLACE INTO categories
                    (id, name, name_text, description, description_text, active,
                     created_at, updated_at, deleted_at)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)",
                params![
                    document.id,
                    document.name,
                    document.name_text(),
                    document.description,
                    document.description_text(),
                    document.active,
                    document.created_at,
                    document.updated_at,
                    document.deleted_at,
                ],
            )
            .map_err(db_error)?;

        debug!("Indexed category document {}", document.id);
        Ok(category)
    }

    fn delete_by_id(&self, id: &str) -> DomainResult<()> {
        let rows_affected = self
            .conn
            .execute("DELETE FROM categories WHERE id = ?1", params![id])
            .map_err(db_error)?;

        if rows_affected == 0 {
            debug!("No category document {} to delete", id);
        }
        Ok(())
    }

    fn find_by_id(&self, id: &str) -> DomainResult<Option<Category>> {
        let document = self
            .conn
            .query_row(
                &format!(
                    "SELECT {} FROM categories WHERE id = ?1",
                    CategoryDocument::COLUMNS
                ),
                params![id],
                CategoryDocument::from_row,
            )
            .optional()
            .map_err(db_error)?;

        document.map(|d| d.to_category()).transpose()
    }

    fn find_all(&self, query: &SearchQuery) -> DomainResult<Pagination<Category>> {
        let plan = self.translator.translate(query)?;

        let where_sql = where_clause(plan.filter.as_ref());
        let limit = i64::from(plan.limit);
        // An offset past i64::MAX is past every document anyway.
        let offset = i64::try_from(plan.offset).unwrap_or(i64::MAX);

        let mut named: Vec<(&str, &dyn ToSql)> = Vec::new();
        if let Some(filter) = &plan.filter {
            named.push((":term", &filter.term as &dyn ToSql));
        }

        let total: i64 = self
            .conn
            .query_row(
                &format!("SELECT COUNT(*) FROM categories WHERE {where_sql}"),
                named.as_slice(),
                |row| row.get(0),
            )
            .map_err(db_error)?;

        named.push((":limit", &limit as &dyn ToSql));
        named.push((":offset", &offset as &dyn ToSql));

        let sql = format!(
            "SELECT {} FROM categories WHERE {} ORDER BY {} LIMIT :limit OFFSET :offset",
            CategoryDocument::COLUMNS,
            where_sql,
            order_clause(&plan.sort)
        );
        let mut stmt = self.conn.prepare(&sql).map_err(db_error)?;
        let documents = stmt
            .query_map(named.as_slice(), CategoryDocument::from_row)
            .map_err(db_error)?
            .collect::<SqliteResult<Vec<_>>>()
            .map_err(db_error)?;

        let items = documents
            .iter()
            .map(CategoryDocument::to_category)
            .collect::<DomainResult<Vec<_>>>()?;

        debug!(
            "Search matched {} categories, returning {} from offset {}",
            total,
            items.len(),
            plan.offset
        );

        Ok(Pagination::new(
            query.page(),
            query.per_page(),
            u64::try_from(total).unwrap_or_default(),
            items,
        ))
    }
}

fn db_error(e: rusqlite::Error) -> DomainError {
    DomainError::internal(format!("Database error: {e}"), e)
}

fn text_column(field: TextField) -> &'static str {
    match field {
        TextField::Name => "name_text",
        TextField::Description => "description_text",
    }
}

fn sort_column(field: SortField) -> &'static str {
    match field {
        SortField::Id => "id",
        SortField::NameKeyword => "name",
        SortField::CreatedAt => "created_at",
        SortField::UpdatedAt => "updated_at",
        SortField::DeletedAt => "deleted_at",
        // documents written without the flag count as active
        SortField::Active => "COALESCE(active, 1)",
    }
}

fn where_clause(filter: Option<&TextFilter>) -> String {
    let Some(filter) = filter else {
        return "1 = 1".to_string();
    };
    let matches: Vec<String> = filter
        .fields
        .iter()
        .map(|field| format!("instr({}, :term) > 0", text_column(*field)))
        .collect();
    format!("({})", matches.join(" OR "))
}

fn order_clause(sort: &[SortClause]) -> String {
    sort.iter()
        .map(|clause| {
            let column = sort_column(clause.field);
            let direction = match clause.direction {
                SortDirection::Asc => "ASC",
                SortDirection::Desc => "DESC",
            };
            if clause.nulls_last {
                format!("{column} IS NULL, {column} {direction}")
            } else {
                format!("{column} {direction}")
            }
        })
        .collect::<Vec<_>>()
        .join(", ")
}
