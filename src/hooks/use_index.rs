use yew::prelude::*;

use super::use_query::{QueryHandle, use_query};
use crate::config::Config;
use crate::models::index::IndexSnapshot;
use crate::services::api::fetch_index;
use crate::services::query::{QueryKey, QueryOptions};

/// Index snapshot, polled every 30 seconds while mounted.
#[hook]
pub fn use_index() -> QueryHandle<IndexSnapshot> {
    use_query(
        QueryKey::Index,
        QueryOptions::polling(Config::INDEX_REFRESH_INTERVAL_MS),
        fetch_index,
    )
}
