use crate::models::sector::Sector;
use crate::utils::format::{change_class, format_percent};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct SectorDetailProps {
    pub sector: Sector,
}

/// Key figures of the selected sector.
#[function_component(SectorDetail)]
pub fn sector_detail(props: &SectorDetailProps) -> Html {
    let sector = &props.sector;
    let day_class = format!("detail-value {}", change_class(sector.day_change_percent));

    html! {
        <div class="sector-detail">
            <h3>{&sector.name}</h3>
            <div class="detail-grid">
                <div>
                    <span class="detail-label">{"Weight:"}</span>
                    <span class="detail-value">{format!("{}%", sector.weight_percent)}</span>
                </div>
                <div>
                    <span class="detail-label">{"Market Cap:"}</span>
                    <span class="detail-value">
                        {format!("PKR {:.0}B", sector.market_cap as f64 / 1e9)}
                    </span>
                </div>
                <div>
                    <span class="detail-label">{"Companies:"}</span>
                    <span class="detail-value">{sector.companies_count}</span>
                </div>
                <div>
                    <span class="detail-label">{"Avg P/E:"}</span>
                    <span class="detail-value">{format!("{:.1}", sector.avg_pe_ratio)}</span>
                </div>
                <div>
                    <span class="detail-label">{"Day Change:"}</span>
                    <span class={day_class}>{format_percent(sector.day_change_percent)}</span>
                </div>
            </div>
        </div>
    }
}
