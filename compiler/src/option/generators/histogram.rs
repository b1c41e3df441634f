use crate::{
    option::{
        binning::{bin_values, HISTOGRAM_BIN_COUNT},
        config::{Axis, AxisType, RenderConfig, Series, SeriesData, SeriesType},
    },
    spec::Scalar,
};

use super::{category::axis_name, ChartData};

const FREQUENCY_AXIS_NAME: &str = "Frequency";

/// Frequency of the first dimension's values over equal-width bins. Measures are ignored.
pub fn histogram(base: RenderConfig, data: &ChartData) -> RenderConfig {
    let values = data
        .rows
        .iter()
        .map(|row| data.dimension_value(row).as_f64_or_zero())
        .collect::<Vec<_>>();
    let bins = bin_values(&values, HISTOGRAM_BIN_COUNT);

    let labels = bins.iter().map(|bin| Scalar::Text(bin.label())).collect();
    let counts = bins
        .iter()
        .map(|bin| Scalar::Number(bin.count as f64))
        .collect();

    let y_name = axis_name(&base.y_axis, FREQUENCY_AXIS_NAME.to_string());
    RenderConfig {
        x_axis: Some(Axis {
            axis_type: Some(AxisType::Category),
            name: None,
            data: Some(labels),
        }),
        y_axis: Some(Axis {
            axis_type: Some(AxisType::Value),
            name: Some(y_name),
            data: None,
        }),
        series: vec![Series::new(SeriesType::Bar, SeriesData::Values(counts))],
        ..base
    }
}
