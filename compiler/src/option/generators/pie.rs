use crate::option::config::{Radius, RenderConfig, Series, SeriesData, SeriesType, Slice, Tooltip};

use super::ChartData;

const PIE_TOOLTIP_FORMATTER: &str = "{a} <br/>{b}: {c} ({d}%)";
const OUTER_RADIUS: &str = "70%";
const INNER_RADIUS: &str = "40%";

pub fn pie(base: RenderConfig, data: &ChartData) -> RenderConfig {
    pie_chart(base, data, Radius::Outer(OUTER_RADIUS.to_string()))
}

pub fn donut(base: RenderConfig, data: &ChartData) -> RenderConfig {
    pie_chart(
        base,
        data,
        Radius::Ring(INNER_RADIUS.to_string(), OUTER_RADIUS.to_string()),
    )
}

/// One slice per row, sized by the first measure.
fn pie_chart(base: RenderConfig, data: &ChartData, radius: Radius) -> RenderConfig {
    let measure = data.spec.first_measure();
    let slices = data
        .rows
        .iter()
        .map(|row| Slice {
            name: data.dimension_value(row),
            value: match measure {
                Some(measure) => data.measure_value(row, measure),
                None => data.value(row, "value").or_zero(),
            },
        })
        .collect();

    let name = measure.map(|m| m.field.as_str()).unwrap_or("Value");
    let mut series = Series::new(SeriesType::Pie, SeriesData::Slices(slices)).named(name);
    series.radius = Some(radius);

    RenderConfig {
        tooltip: Some(Tooltip {
            trigger: "item".to_string(),
            formatter: Some(PIE_TOOLTIP_FORMATTER.to_string()),
        }),
        x_axis: None,
        y_axis: None,
        series: vec![series],
        ..base
    }
}
