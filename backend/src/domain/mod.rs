// Domain layer module
pub mod base;
pub mod category;
pub mod pagination;
pub mod utils;
pub mod validation;

pub use base::*;
pub use category::*;
pub use pagination::*;
pub use validation::*;
