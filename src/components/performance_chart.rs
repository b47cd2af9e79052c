use charming::{
    Chart as CharmingChart,
    component::{Axis, Grid, Title, VisualMap, VisualMapPiece},
    element::{
        AxisLabel, AxisPointer, AxisPointerType, AxisType, LineStyle, LineStyleType, SplitLine,
        TextStyle, Tooltip, Trigger,
    },
    renderer::WasmRenderer,
    series::Bar,
};
use std::rc::Rc;
use web_sys::HtmlElement;
use yew::prelude::*;

use crate::models::sector::Sector;
use crate::utils::debounce::on_window_resize;

const CHART_ID: &str = "sector-performance-chart";
const RESIZE_DEBOUNCE_MS: u32 = 150;

#[derive(Properties, PartialEq)]
pub struct PerformanceChartProps {
    pub sectors: Rc<Vec<Sector>>,
    pub dark_mode: bool,
}

/// Category labels and day change values, in sector order.
pub fn performance_series(sectors: &[Sector]) -> (Vec<String>, Vec<f64>) {
    sectors
        .iter()
        .map(|s| (s.short_name().to_string(), s.day_change_percent))
        .unzip()
}

/// Bar chart of each sector's day change.
#[function_component(PerformanceChart)]
pub fn performance_chart(props: &PerformanceChartProps) -> Html {
    let container_ref = use_node_ref();
    let series = use_memo(props.sectors.clone(), |sectors| performance_series(sectors));

    {
        let container_ref = container_ref.clone();
        let dark_mode = props.dark_mode;

        use_effect_with(
            (series, container_ref, dark_mode),
            |(series, container_ref, dark_mode)| {
                let listener = container_ref.cast::<HtmlElement>().and_then(|container| {
                    render_chart(&container, series, *dark_mode);

                    let series = series.clone();
                    let dark_mode = *dark_mode;
                    on_window_resize(RESIZE_DEBOUNCE_MS, move || {
                        render_chart(&container, &series, dark_mode);
                    })
                });

                move || drop(listener)
            },
        );
    }

    html! {
        <div class="chart-container" ref={container_ref}>
            <div id={CHART_ID} />
        </div>
    }
}

fn render_chart(container: &HtmlElement, series: &(Vec<String>, Vec<f64>), dark_mode: bool) {
    let width = container.client_width().cast_unsigned();
    let height = container.client_height().cast_unsigned();

    if width == 0 || height == 0 || series.0.is_empty() {
        return;
    }

    let chart = build_chart(series, dark_mode);
    if let Err(e) = WasmRenderer::new(width, height).render(CHART_ID, &chart) {
        gloo::console::error!(format!("Render error: {e:?}"));
    }
}

fn build_chart(series: &(Vec<String>, Vec<f64>), dark_mode: bool) -> CharmingChart {
    let (categories, changes) = series;

    // Theme-aware colors
    let (title_color, axis_color, grid_color) = if dark_mode {
        ("#e4e4e7", "#a1a1aa", "#404040")
    } else {
        ("#1f2937", "#6b7280", "#e5e7eb")
    };
    let (gain_color, loss_color) = if dark_mode {
        ("#4ade80", "#f87171")
    } else {
        ("#16a34a", "#dc2626")
    };

    CharmingChart::new()
        .title(
            Title::new()
                .text("Sector Day Change")
                .left("center")
                .text_style(TextStyle::new().font_size(16).color(title_color)),
        )
        .tooltip(
            Tooltip::new()
                .trigger(Trigger::Axis)
                .axis_pointer(AxisPointer::new().type_(AxisPointerType::Shadow)),
        )
        .visual_map(VisualMap::new().show(false).pieces(vec![
            VisualMapPiece::new().lt(0.0).color(loss_color),
            VisualMapPiece::new().gte(0.0).color(gain_color),
        ]))
        .grid(
            Grid::new()
                .left("8%")
                .right("4%")
                .bottom("18%")
                .contain_label(true),
        )
        .x_axis(
            Axis::new()
                .type_(AxisType::Category)
                .data(categories.clone())
                .axis_label(AxisLabel::new().rotate(45).color(axis_color)),
        )
        .y_axis(
            Axis::new()
                .type_(AxisType::Value)
                .name("%")
                .axis_label(AxisLabel::new().color(axis_color))
                .split_line(
                    SplitLine::new().line_style(
                        LineStyle::new()
                            .color(grid_color)
                            .type_(LineStyleType::Dashed),
                    ),
                ),
        )
        .series(Bar::new().data(changes.clone()).bar_width("60%"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_performance_series() {
        let sectors: Vec<Sector> = serde_json::from_str(
            r##"[
                {"id": 1, "name": "Commercial Banks", "market_cap": 1, "weight_percent": 33.4,
                 "companies_count": 18, "day_change_percent": -0.65, "avg_pe_ratio": 4.2, "color": "#0088FE"},
                {"id": 5, "name": "Cement", "market_cap": 1, "weight_percent": 7.2,
                 "companies_count": 8, "day_change_percent": 0.31, "avg_pe_ratio": 6.8, "color": "#8884D8"}
            ]"##,
        )
        .unwrap();

        let (categories, changes) = performance_series(&sectors);
        assert_eq!(categories, vec!["Commercial", "Cement"]);
        assert_eq!(changes, vec![-0.65, 0.31]);
    }

    #[test]
    fn test_empty_series() {
        let (categories, changes) = performance_series(&[]);
        assert!(categories.is_empty());
        assert!(changes.is_empty());
    }
}
