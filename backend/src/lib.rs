//! Catalog administration backend: validated category aggregates and a
//! paginated search gateway over a document store.

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
