use charming::{
    Chart as CharmingChart,
    component::{Axis, Grid, Legend},
    datatype::CompositeValue,
    element::{
        AxisLabel, AxisType, ItemStyle, LineStyle, LineStyleType, SplitLine, Tooltip, Trigger,
    },
    renderer::WasmRenderer,
    series::Line,
};
use gloo::events::EventListener;
use std::rc::Rc;
use web_sys::HtmlElement;
use yew::prelude::*;

use super::status::Status;
use crate::config::Config;
use crate::hooks::use_archive::use_archive;
use crate::models::archive::{Archive, ArchiveSeries};

const CHART_ID: &str = "queue-chart";

#[derive(Properties, PartialEq)]
pub struct ChartProps {
    pub archive: Rc<Archive>,
}

/// Line chart of queue positions over time, one line per property.
#[function_component(Chart)]
pub fn chart(props: &ChartProps) -> Html {
    let container_ref = use_node_ref();

    {
        let container_ref = container_ref.clone();

        use_effect_with(
            (props.archive.clone(), container_ref),
            |(archive, container_ref)| {
                let listener = container_ref.cast::<HtmlElement>().and_then(|container| {
                    render_chart(&container, archive);

                    let archive = archive.clone();
                    web_sys::window().map(|window| {
                        EventListener::new(&window, "resize", move |_| {
                            render_chart(&container, &archive);
                        })
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

/// Queue history page body: polls `/archive` and charts it.
#[function_component(QueueChart)]
pub fn queue_chart() -> Html {
    let archive = use_archive(Config::ARCHIVE_MAX_POSITION);

    html! {
        <>
            <Status loading={archive.is_loading()} error={archive.blocking_error()} />
            if let Some(archive) = archive.data.clone() {
                if archive.is_empty() {
                    <p class="status">{"Ingen köhistorik ännu."}</p>
                } else {
                    <Chart {archive} />
                }
            }
        </>
    }
}

fn render_chart(container: &HtmlElement, archive: &Archive) {
    let width = container.client_width().cast_unsigned();
    let height = container.client_height().cast_unsigned();

    if width == 0 || height == 0 {
        return;
    }

    let chart = build_chart(archive);
    if let Err(e) = WasmRenderer::new(width, height).render(CHART_ID, &chart) {
        web_sys::console::error_1(&format!("Render error: {e:?}").into());
    }
}

/// Missing positions become "-" so the line breaks there.
fn series_values(series: &ArchiveSeries) -> Vec<CompositeValue> {
    series
        .data
        .iter()
        .map(|value| match value {
            Some(position) => CompositeValue::from(f64::from(*position)),
            None => CompositeValue::from("-"),
        })
        .collect()
}

fn build_line(series: &ArchiveSeries) -> Line {
    let line = Line::new().name(series.name.as_str()).data(series_values(series));

    match &series.color {
        Some(color) => line
            .item_style(ItemStyle::new().color(color.as_str()))
            .line_style(LineStyle::new().color(color.as_str())),
        None => line,
    }
}

fn build_chart(archive: &Archive) -> CharmingChart {
    let (axis_color, grid_color) = ("#6b7280", "#e5e7eb");

    archive.series.iter().fold(
        CharmingChart::new()
            .tooltip(Tooltip::new().trigger(Trigger::Axis))
            .legend(Legend::new().show(false))
            .grid(
                Grid::new()
                    .left("4%")
                    .right("4%")
                    .bottom("12%")
                    .contain_label(true),
            )
            .x_axis(
                Axis::new()
                    .type_(AxisType::Category)
                    .data(archive.category_labels())
                    .axis_label(AxisLabel::new().rotate(45).color(axis_color)),
            )
            .y_axis(
                Axis::new()
                    .type_(AxisType::Value)
                    .min(0)
                    .max(i64::from(Config::ARCHIVE_MAX_POSITION))
                    .axis_label(AxisLabel::new().color(axis_color))
                    .split_line(
                        SplitLine::new().line_style(
                            LineStyle::new()
                                .color(grid_color)
                                .type_(LineStyleType::Dashed),
                        ),
                    ),
            ),
        |chart, series| chart.series(build_line(series)),
    )
}

