use crate::models::sector::Sector;
use std::f64::consts::{FRAC_PI_2, PI, TAU};
use std::rc::Rc;
use yew::prelude::*;

const VIEW_WIDTH: f64 = 480.0;
const VIEW_HEIGHT: f64 = 360.0;
const RADIUS: f64 = 120.0;
const LABEL_RADIUS: f64 = RADIUS * 1.18;

/// One clickable wedge of the sector pie.
#[derive(Debug, Clone, PartialEq)]
pub struct PieSegment {
    pub sector_id: u32,
    /// Share of the total weight, 0..=1
    pub fraction: f64,
    pub path: String,
    pub label: String,
    pub label_x: f64,
    pub label_y: f64,
    pub anchor: &'static str,
}

fn point(cx: f64, cy: f64, r: f64, angle: f64) -> (f64, f64) {
    (cx + r * angle.cos(), cy + r * angle.sin())
}

/// Lays sectors out clockwise from twelve o'clock, each sized by its share
/// of the summed `weight_percent`. Zero-weight sectors get no wedge.
pub fn pie_segments(sectors: &[Sector], cx: f64, cy: f64, radius: f64) -> Vec<PieSegment> {
    let total: f64 = sectors.iter().map(|s| s.weight_percent.max(0.0)).sum();
    if total <= 0.0 {
        return Vec::new();
    }

    let mut start = -FRAC_PI_2;
    sectors
        .iter()
        .filter(|s| s.weight_percent > 0.0)
        .map(|sector| {
            let fraction = sector.weight_percent / total;
            let sweep = fraction * TAU;
            let end = start + sweep;

            let path = if fraction >= 1.0 - f64::EPSILON {
                // A single arc cannot close on itself; draw two halves
                format!(
                    "M {cx:.2},{top:.2} A {radius:.2},{radius:.2} 0 1,1 {cx:.2},{bottom:.2} \
                     A {radius:.2},{radius:.2} 0 1,1 {cx:.2},{top:.2} Z",
                    top = cy - radius,
                    bottom = cy + radius,
                )
            } else {
                let (x1, y1) = point(cx, cy, radius, start);
                let (x2, y2) = point(cx, cy, radius, end);
                let large_arc = u8::from(sweep > PI);
                format!(
                    "M {cx:.2},{cy:.2} L {x1:.2},{y1:.2} A {radius:.2},{radius:.2} 0 {large_arc},1 {x2:.2},{y2:.2} Z"
                )
            };

            let mid = start + sweep / 2.0;
            let (label_x, label_y) = point(cx, cy, radius * LABEL_RADIUS / RADIUS, mid);
            start = end;

            PieSegment {
                sector_id: sector.id,
                fraction,
                path,
                label: sector.chart_label(),
                label_x,
                label_y,
                anchor: if mid.cos() >= 0.0 { "start" } else { "end" },
            }
        })
        .collect()
}

#[derive(Properties, PartialEq)]
pub struct SectorChartProps {
    pub sectors: Rc<Vec<Sector>>,
    pub selected: Option<u32>,
    pub on_select: Callback<Sector>,
}

/// Sector pie with a clickable legend. Clicks are reported, not applied here.
#[function_component(SectorChart)]
pub fn sector_chart(props: &SectorChartProps) -> Html {
    let segments = use_memo(props.sectors.clone(), |sectors| {
        pie_segments(sectors, VIEW_WIDTH / 2.0, VIEW_HEIGHT / 2.0, RADIUS)
    });

    let find_sector = |id: u32| props.sectors.iter().find(|s| s.id == id).cloned();
    let select = |sector: Sector| {
        let on_select = props.on_select.clone();
        Callback::from(move |_: MouseEvent| on_select.emit(sector.clone()))
    };

    let wedges = segments.iter().filter_map(|segment| {
        let sector = find_sector(segment.sector_id)?;
        let is_selected = props.selected == Some(sector.id);
        let class = classes!("pie-segment", is_selected.then_some("selected"));
        let fill = sector.color.clone();
        let title = format!("{}: {:.1}%", sector.name, sector.weight_percent);

        Some(html! {
            <g key={segment.sector_id} class={class} onclick={select(sector)}>
                <title>{title}</title>
                <path d={segment.path.clone()} {fill} />
            </g>
        })
    });

    let labels = segments.iter().map(|segment| {
        html! {
            <text
                key={format!("label-{}", segment.sector_id)}
                class="pie-label"
                x={format!("{:.2}", segment.label_x)}
                y={format!("{:.2}", segment.label_y)}
                text-anchor={segment.anchor}
                dominant-baseline="middle"
            >
                {&segment.label}
            </text>
        }
    });

    let legend = props.sectors.iter().map(|sector| {
        let is_selected = props.selected == Some(sector.id);
        let class = classes!("legend-item", is_selected.then_some("selected"));
        let swatch = format!("background-color: {};", sector.color);
        html! {
            <li key={sector.id}>
                <button class={class} onclick={select(sector.clone())}>
                    <span class="legend-swatch" style={swatch}></span>
                    {&sector.name}
                </button>
            </li>
        }
    });

    html! {
        <div class="sector-chart">
            <svg
                viewBox={format!("0 0 {VIEW_WIDTH} {VIEW_HEIGHT}")}
                preserveAspectRatio="xMidYMid meet"
                class="sector-pie"
                role="img"
                aria-label="Sector weights in the KSE100"
            >
                { for wedges }
                { for labels }
            </svg>
            <ul class="sector-legend">
                { for legend }
            </ul>
        </div>
    }
}
