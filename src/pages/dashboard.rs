use yew::prelude::*;

use crate::components::{IndexCard, Status};
use crate::hooks::use_index::use_index;

/// Index overview, refreshed in the background every 30 seconds.
#[function_component(DashboardPage)]
pub fn dashboard_page() -> Html {
    let index = use_index();

    let onclick = index.refetch.reform(|_: MouseEvent| ());
    let icon_class = classes!("refresh-icon", index.is_fetching.then_some("spinning"));

    html! {
        <div class="page dashboard-page">
            <div class="page-header">
                <div>
                    <h1>{"KSE100 Index Dashboard"}</h1>
                    <p class="muted">{"Real-time market data and insights"}</p>
                </div>
                <button
                    class="refresh-button"
                    {onclick}
                    disabled={index.is_fetching}
                    aria-busy={index.is_fetching.to_string()}
                >
                    <span class={icon_class}>{"⟳"}</span>
                    <span>{"Refresh"}</span>
                </button>
            </div>

            <Status
                loading={index.is_loading()}
                error={index.error.clone()}
                retrying={index.is_fetching}
                on_retry={index.refetch.clone()}
            />

            if let Some(data) = &index.data {
                <IndexCard data={data.clone()} />

                <section class="about-section">
                    <h2>{"About KSE100 Index"}</h2>
                    <p class="muted">
                        {"The KSE100 Index comprises the top 100 companies listed on the Pakistan \
                          Stock Exchange by market capitalization and serves as the benchmark for \
                          the Pakistani equity market."}
                    </p>
                    <div class="summary-grid">
                        <div class="summary-item">
                            <h3>{"Constituent Companies"}</h3>
                            <p>{format!("{} leading companies across various sectors", data.constituent_count)}</p>
                        </div>
                        <div class="summary-item">
                            <h3>{"Market Coverage"}</h3>
                            <p>{"Represents approximately 80% of total market capitalization"}</p>
                        </div>
                    </div>
                </section>
            }
        </div>
    }
}
