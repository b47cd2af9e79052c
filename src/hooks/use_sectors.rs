use yew::prelude::*;

use super::use_query::{QueryHandle, use_query};
use crate::config::Config;
use crate::models::sector::Sector;
use crate::services::api::fetch_sectors;
use crate::services::query::{QueryKey, QueryOptions};

#[hook]
pub fn use_sectors() -> QueryHandle<Vec<Sector>> {
    use_query(
        QueryKey::Sectors,
        QueryOptions::stale_after(Config::MARKET_STALE_TIME_MS),
        fetch_sectors,
    )
}
