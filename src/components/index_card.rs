use crate::models::index::IndexSnapshot;
use crate::utils::format::{
    change_bg_class, change_class, format_currency, format_gain, format_number, format_signed,
    format_volume,
};
use chrono::Local;
use std::rc::Rc;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct IndexCardProps {
    pub data: Rc<IndexSnapshot>,
}

#[function_component(IndexCard)]
pub fn index_card(props: &IndexCardProps) -> Html {
    let data = &props.data;
    let trend = data.trend();

    let card_class = format!("index-card {}", change_bg_class(data.change));
    let change_line_class = format!("index-change {}", trend.css_class());
    let ytd_class = format!("index-ytd {}", change_class(data.ytd_change_percent));
    let updated = data
        .timestamp
        .with_timezone(&Local)
        .format("%b %-d, %Y, %-I:%M:%S %p")
        .to_string();

    html! {
        <div class="index-card-container">
            <div class={card_class}>
                <div class="index-header">
                    <div>
                        <h2 class="index-symbol">{&data.symbol}</h2>
                        <h1 class="index-name">{&data.name}</h1>
                    </div>
                    <div class={format!("trend-icon {}", trend.css_class())}>
                        {trend.icon()}
                    </div>
                </div>

                <div class="index-value">{format_number(data.value, 2)}</div>
                <div class={change_line_class}>
                    <span class="index-change-points">{format_signed(data.change, 2)}</span>
                    <span class="index-change-percent">
                        {format!("({}%)", format_signed(data.change_percent, 2))}
                    </span>
                </div>

                <div class="metric-grid">
                    <div class="metric">
                        <h3>{"Open"}</h3>
                        <p class="metric-value">{format_number(data.open, 2)}</p>
                    </div>
                    <div class="metric">
                        <h3>{"High"}</h3>
                        <p class="metric-value change-up">{format_number(data.high, 2)}</p>
                    </div>
                    <div class="metric">
                        <h3>{"Low"}</h3>
                        <p class="metric-value change-down">{format_number(data.low, 2)}</p>
                    </div>
                    <div class="metric">
                        <h3>{"Prev Close"}</h3>
                        <p class="metric-value">{format_number(data.previous_close, 2)}</p>
                    </div>
                </div>
            </div>

            <div class="summary-grid">
                <div class="summary-item">
                    <h3>{"Market Cap"}</h3>
                    <p class="summary-value">{format_currency(data.market_cap as f64, true)}</p>
                </div>
                <div class="summary-item">
                    <h3>{"Volume"}</h3>
                    <p class="summary-value">{format_volume(data.volume)}</p>
                    if let Some(average) = data.average_volume_30d {
                        <p class="summary-note">{format!("Avg: {}", format_volume(average))}</p>
                    }
                </div>
                <div class="summary-item">
                    <h3>{"52-Week Range"}</h3>
                    <p class="summary-value">
                        {format!("{} - {}", format_number(data.year_low, 0), format_number(data.year_high, 0))}
                    </p>
                    <p class={ytd_class}>
                        {format!("YTD: {}%", format_gain(data.ytd_change_percent, 2))}
                    </p>
                </div>
            </div>

            <div class="status-bar">
                <div>
                    <span class="status-bar-label">{"Last Updated: "}</span>
                    <span class="status-bar-value">{updated}</span>
                </div>
                <div>
                    <span class={data.trading_status.css_class()}></span>
                    <span class="status-bar-value">{data.trading_status.label()}</span>
                </div>
            </div>
        </div>
    }
}
