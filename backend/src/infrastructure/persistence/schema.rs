use rusqlite::{Connection, Result};

/// Initialize the SQLite database with the category index.
/// This function is idempotent and can be safely called multiple times.
///
/// Each row is one category document. `name` keeps the raw keyword used for
/// sorting; `name_text` and `description_text` hold the analyzed (lower-cased)
/// forms that search terms are matched against.
pub fn initialize_database(conn: &Connection) -> Result<()> {
    conn.execute(
        "CREATE TABLE IF NOT EXISTS categories (
            id TEXT PRIMARY KEY,
            name TEXT NOT NULL,
            name_text TEXT NOT NULL,
            description TEXT NOT NULL,
            description_text TEXT NOT NULL,
            active INTEGER,
            created_at TEXT NOT NULL,
            updated_at TEXT NOT NULL,
            deleted_at TEXT
        )",
        [],
    )?;

    conn.execute(
        "CREATE INDEX IF NOT EXISTS idx_categories_name ON categories(name)",
        [],
    )?;

    conn.execute(
        "CREATE INDEX IF NOT EXISTS idx_categories_created_at ON categories(created_at)",
        [],
    )?;

    Ok(())
}
