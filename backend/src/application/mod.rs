pub mod dto;
pub mod repositories;
pub mod use_cases;

pub use dto::{CategoryListRequest, CategoryOutput, ListCategoryOutput};
pub use repositories::CategoryGateway;
pub use use_cases::{DeleteCategory, GetCategoryById, ListCategories, SaveCategory};
