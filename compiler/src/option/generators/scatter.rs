use crate::{
    option::config::{Axis, AxisType, RenderConfig, Series, SeriesData, SeriesType},
    spec::Scalar,
};

use super::{category::axis_name, ChartData};

/// `[x, y]` per row: the raw first-dimension value against the first measure.
pub fn scatter(base: RenderConfig, data: &ChartData) -> RenderConfig {
    let measure = data.spec.first_measure();
    let points = data
        .rows
        .iter()
        .map(|row| {
            let y = match measure {
                Some(measure) => data.measure_value(row, measure),
                None => Scalar::ZERO,
            };
            (data.dimension_value(row), y)
        })
        .collect();

    let x_name = axis_name(&base.x_axis, data.dimension_name());
    let y_name = axis_name(&base.y_axis, data.measure_name());
    let value_axis = |name| Axis {
        axis_type: Some(AxisType::Value),
        name: Some(name),
        data: None,
    };
    RenderConfig {
        x_axis: Some(value_axis(x_name)),
        y_axis: Some(value_axis(y_name)),
        series: vec![Series::new(SeriesType::Scatter, SeriesData::Points(points))],
        ..base
    }
}
