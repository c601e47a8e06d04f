pub mod models;
pub mod persistence;
pub mod search;
