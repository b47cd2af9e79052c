use crate::hooks::use_health::use_health;
use yew::prelude::*;

/// Header badge reflecting `/api/v1/health`.
#[function_component(ApiStatus)]
pub fn api_status() -> Html {
    let health = use_health();

    let (class, label) = match (&health.data, &health.error) {
        (_, Some(_)) => ("api-status offline", "API unreachable".to_string()),
        (Some(status), None) if status.is_healthy() => ("api-status online", "API online".to_string()),
        (Some(status), None) => (
            "api-status degraded",
            format!("API {}", status.status().unwrap_or("degraded")),
        ),
        (None, None) => ("api-status checking", "Checking API...".to_string()),
    };

    let title = health
        .error
        .as_ref()
        .map_or_else(|| label.clone(), ToString::to_string);

    html! {
        <span class={class} {title}>
            <span class="api-status-dot"></span>
            {label}
        </span>
    }
}
