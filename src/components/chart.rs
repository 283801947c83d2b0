use charming::{
    Chart as CharmingChart,
    component::{Axis, Grid, Title},
    element::{
        AxisLabel, AxisPointer, AxisPointerType, AxisType, LineStyle, LineStyleType, SplitLine,
        TextStyle, Tooltip, Trigger,
    },
    renderer::WasmRenderer,
    series::Line,
};
use std::rc::Rc;
use web_sys::HtmlElement;
use yew::prelude::*;

use crate::config::Config;
use crate::models::{chart::ChartSeries, snapshot::Snapshot};
use crate::utils::debounce::debounced_window_listener;

const CHART_ID: &str = "price-chart";

#[derive(Properties, PartialEq)]
pub struct PriceChartProps {
    pub snapshots: Rc<Vec<Snapshot>>,
}

/// Price over capture time as a line chart.
#[function_component(PriceChart)]
pub fn price_chart(props: &PriceChartProps) -> Html {
    let container_ref = use_node_ref();
    let series = use_memo(props.snapshots.clone(), |snapshots| {
        ChartSeries::from_snapshots(snapshots)
    });

    {
        let container_ref = container_ref.clone();

        use_effect_with((series.clone(), container_ref), |(series, container_ref)| {
            let listener = container_ref.cast::<HtmlElement>().and_then(|container| {
                render_chart(&container, series);

                let series = series.clone();
                debounced_window_listener("resize", Config::RESIZE_DEBOUNCE_MS, move || {
                    render_chart(&container, &series);
                })
            });

            move || drop(listener)
        });
    }

    if series.is_empty() {
        return html! {
            <div class="chart-empty">{"No priced snapshots in this window."}</div>
        };
    }

    html! {
        <div class="chart-container" ref={container_ref}>
            <div id={CHART_ID} />
        </div>
    }
}

fn render_chart(container: &HtmlElement, series: &ChartSeries) {
    let width = container.client_width().cast_unsigned();
    let height = container.client_height().cast_unsigned();

    if width == 0 || height == 0 || series.is_empty() {
        return;
    }

    let chart = build_chart(series);
    if let Err(e) = WasmRenderer::new(width, height).render(CHART_ID, &chart) {
        web_sys::console::error_1(&format!("Render error: {e:?}").into());
    }
}

fn build_chart(series: &ChartSeries) -> CharmingChart {
    let (title_color, axis_color, grid_color, line_color) =
        ("#e4e4e7", "#a1a1aa", "#404040", "#8884d8");

    CharmingChart::new()
        .title(
            Title::new()
                .text("Price History")
                .left("center")
                .text_style(TextStyle::new().font_size(16).color(title_color)),
        )
        .tooltip(
            Tooltip::new()
                .trigger(Trigger::Axis)
                .axis_pointer(AxisPointer::new().type_(AxisPointerType::Line)),
        )
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
                .data(series.labels.clone())
                .axis_label(AxisLabel::new().rotate(45).color(axis_color)),
        )
        .y_axis(
            Axis::new()
                .type_(AxisType::Value)
                .name("$")
                .min(series.y_min)
                .max(series.y_max)
                .axis_label(AxisLabel::new().color(axis_color))
                .split_line(
                    SplitLine::new().line_style(
                        LineStyle::new()
                            .color(grid_color)
                            .type_(LineStyleType::Dashed),
                    ),
                ),
        )
        .series(
            Line::new()
                .name("Price")
                .data(series.prices.clone())
                .line_style(LineStyle::new().color(line_color).width(2)),
        )
}
