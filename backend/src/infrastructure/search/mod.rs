/// Translation of search queries into engine-neutral plans
mod query_translator;

pub(crate) use query_translator::analyze;
pub use query_translator::{
    CategoryQueryTranslator, SearchPlan, SortClause, SortField, TextField, TextFilter,
};
