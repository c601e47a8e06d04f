pub mod delete_category;
pub mod get_category;
pub mod list_categories;
pub mod save_category;
#[cfg(test)]
pub mod test_gateway;

pub use delete_category::DeleteCategory;
pub use get_category::GetCategoryById;
pub use list_categories::ListCategories;
pub use save_category::SaveCategory;
