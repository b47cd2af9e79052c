pub mod api;
pub mod query;
