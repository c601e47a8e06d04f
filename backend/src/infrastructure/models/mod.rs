/// Wire representations exchanged with the query API
mod category_dto;

pub use category_dto::CategoryDto;
