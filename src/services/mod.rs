pub mod api;
pub mod query_cache;
pub mod retry;
