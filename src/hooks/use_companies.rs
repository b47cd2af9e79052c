use yew::prelude::*;

use super::use_query::{QueryHandle, use_query};
use crate::config::Config;
use crate::models::company::Company;
use crate::services::api::fetch_top_companies;
use crate::services::query::{QueryKey, QueryOptions};

/// Top `limit` companies by market cap, cached per limit.
#[hook]
pub fn use_companies(limit: u32) -> QueryHandle<Vec<Company>> {
    use_query(
        QueryKey::TopCompanies(limit),
        QueryOptions::stale_after(Config::MARKET_STALE_TIME_MS),
        move || fetch_top_companies(limit),
    )
}
