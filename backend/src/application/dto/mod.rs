mod category;

pub use category::{CategoryListRequest, CategoryOutput, ListCategoryOutput};
