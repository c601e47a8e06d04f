mod category_document;
mod schema;
mod sqlite_category_gateway;

pub use category_document::{format_timestamp, CategoryDocument};
pub use schema::initialize_database;
pub use sqlite_category_gateway::SqliteCategoryGateway;
