use yew::prelude::*;

use super::use_query::{QueryHandle, use_query};
use crate::config::Config;
use crate::models::health::HealthStatus;
use crate::services::api::check_health;
use crate::services::query::{QueryKey, QueryOptions};

#[hook]
pub fn use_health() -> QueryHandle<HealthStatus> {
    use_query(
        QueryKey::Health,
        QueryOptions::stale_after(Config::HEALTH_STALE_TIME_MS),
        check_health,
    )
}
