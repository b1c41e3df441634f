//! Charts with a category x axis and one value series per measure: bars, lines and areas.

use crate::{
    option::config::{AreaStyle, Axis, AxisType, RenderConfig, Series, SeriesData, SeriesType},
    spec::Scalar,
};

use super::ChartData;

const STACK_TOTAL: &str = "total";

pub fn bar(base: RenderConfig, data: &ChartData) -> RenderConfig {
    category_chart(base, data, SeriesType::Bar, None, false)
}

/// Also lays out percent-stacked bars. The rendering surface normalizes those to 100%; values
/// are not normalized here.
pub fn bar_stacked(base: RenderConfig, data: &ChartData) -> RenderConfig {
    category_chart(base, data, SeriesType::Bar, Some(STACK_TOTAL), false)
}

pub fn line(base: RenderConfig, data: &ChartData) -> RenderConfig {
    category_chart(base, data, SeriesType::Line, None, false)
}

pub fn area(base: RenderConfig, data: &ChartData) -> RenderConfig {
    category_chart(base, data, SeriesType::Line, None, true)
}

/// Distinct dimension values in the order they first appear.
fn categories(data: &ChartData) -> Vec<Scalar> {
    let mut categories: Vec<Scalar> = Vec::new();
    for row in data.rows {
        let value = data.dimension_value(row);
        if !categories.contains(&value) {
            categories.push(value);
        }
    }
    categories
}

fn category_chart(
    base: RenderConfig,
    data: &ChartData,
    series_type: SeriesType,
    stack: Option<&str>,
    filled: bool,
) -> RenderConfig {
    let categories = categories(data);

    let series = data
        .spec
        .measures
        .iter()
        .map(|measure| {
            let values = categories
                .iter()
                .map(|category| {
                    data.rows
                        .iter()
                        .find(|row| data.dimension_value(row) == *category)
                        .map(|row| data.measure_value(row, measure))
                        .unwrap_or(Scalar::ZERO)
                })
                .collect();
            let mut series =
                Series::new(series_type, SeriesData::Values(values)).named(&measure.field);
            series.stack = stack.map(str::to_string);
            series.area_style = filled.then_some(AreaStyle {});
            series
        })
        .collect();

    let x_name = axis_name(&base.x_axis, data.dimension_name());
    let y_name = axis_name(&base.y_axis, data.measure_name());
    RenderConfig {
        x_axis: Some(Axis {
            axis_type: Some(AxisType::Category),
            name: Some(x_name),
            data: Some(categories),
        }),
        y_axis: Some(Axis {
            axis_type: Some(AxisType::Value),
            name: Some(y_name),
            data: None,
        }),
        series,
        ..base
    }
}

/// The caller's axis name if one was given, otherwise `fallback`.
pub(super) fn axis_name(base_axis: &Option<Axis>, fallback: String) -> String {
    base_axis
        .as_ref()
        .and_then(Axis::explicit_name)
        .map(str::to_string)
        .unwrap_or(fallback)
}

#[cfg(test)]
mod tests {
    use crate::{
        option::{build_base_option, generator_for, generators::test_utils::row},
        spec::{Aggregation, ChartSpec, ChartType, FieldRef},
        Options,
    };

    use super::*;

    fn spec(chart_type: ChartType) -> ChartSpec {
        let mut spec = ChartSpec::new(chart_type);
        spec.dimensions = vec![FieldRef::new("region")];
        spec.measures = vec![FieldRef::new("sales")];
        spec
    }

    fn render(
        generator: fn(RenderConfig, &ChartData) -> RenderConfig,
        spec: &ChartSpec,
        rows: &[crate::ResultRow],
    ) -> RenderConfig {
        let options = Options::default();
        generator(build_base_option(&spec.config), &ChartData::new(spec, rows, &options))
    }

    fn values(series: &Series) -> Vec<Scalar> {
        match &series.data {
            SeriesData::Values(values) => values.clone(),
            other => panic!("expected values, got {:?}", other),
        }
    }

    #[test]
    fn test_bar() {
        let rows = vec![
            row(&[("region", "A".into()), ("sales_sum", 10.0.into())]),
            row(&[("region", "B".into()), ("sales_sum", 20.0.into())]),
        ];
        let config = render(bar, &spec(ChartType::Bar), &rows);
        let x_axis = config.x_axis.unwrap();
        assert_eq!(x_axis.axis_type, Some(AxisType::Category));
        assert_eq!(x_axis.data, Some(vec!["A".into(), "B".into()]));
        assert_eq!(x_axis.name.as_deref(), Some("region"));
        let y_axis = config.y_axis.unwrap();
        assert_eq!(y_axis.axis_type, Some(AxisType::Value));
        assert_eq!(y_axis.name.as_deref(), Some("sales"));

        assert_eq!(config.series.len(), 1);
        let series = &config.series[0];
        assert_eq!(series.series_type, SeriesType::Bar);
        assert_eq!(series.name.as_deref(), Some("sales"));
        assert_eq!(series.stack, None);
        assert_eq!(values(series), vec![Scalar::from(10.0), Scalar::from(20.0)]);
    }

    #[test]
    fn test_categories_keep_first_seen_order() {
        let rows = vec![
            row(&[("region", "West".into()), ("sales_sum", 1.0.into())]),
            row(&[("region", "East".into()), ("sales_sum", 2.0.into())]),
            row(&[("region", "West".into()), ("sales_sum", 3.0.into())]),
        ];
        let config = render(bar, &spec(ChartType::Bar), &rows);
        assert_eq!(
            config.x_axis.unwrap().data,
            Some(vec!["West".into(), "East".into()])
        );
        // The first matching row wins.
        assert_eq!(values(&config.series[0]), vec![Scalar::from(1.0), Scalar::from(2.0)]);
    }

    #[test]
    fn test_missing_and_null_values_are_zero() {
        let mut spec = spec(ChartType::Bar);
        spec.measures.push(FieldRef::new("qty"));
        spec.aggregations.insert("qty", Aggregation::Max);
        let rows = vec![
            row(&[("region", "A".into()), ("sales_sum", Scalar::Null), ("qty_max", 3.0.into())]),
            row(&[("region", "B".into())]),
        ];
        let config = render(bar, &spec, &rows);
        assert_eq!(values(&config.series[0]), vec![Scalar::ZERO, Scalar::ZERO]);
        assert_eq!(values(&config.series[1]), vec![Scalar::from(3.0), Scalar::ZERO]);
        assert_eq!(config.series[1].name.as_deref(), Some("qty"));
    }

    #[test]
    fn test_stacks() {
        let rows = vec![row(&[("region", "A".into()), ("sales_sum", 1.0.into())])];
        let stacked = render(bar_stacked, &spec(ChartType::BarStacked), &rows);
        assert_eq!(stacked.series[0].stack.as_deref(), Some("total"));
        let percent = render(
            generator_for(ChartType::BarPercentStacked),
            &spec(ChartType::BarPercentStacked),
            &rows,
        );
        assert_eq!(percent.series[0].stack.as_deref(), Some("total"));
        assert_eq!(values(&percent.series[0]), vec![Scalar::from(1.0)]);
    }

    #[test]
    fn test_line_and_area() {
        let rows = vec![row(&[("region", "A".into()), ("sales_sum", 1.0.into())])];
        let plain = render(line, &spec(ChartType::Line), &rows);
        assert_eq!(plain.series[0].series_type, SeriesType::Line);
        assert_eq!(plain.series[0].area_style, None);
        let filled = render(area, &spec(ChartType::Area), &rows);
        assert_eq!(filled.series[0].series_type, SeriesType::Line);
        assert_eq!(filled.series[0].area_style, Some(AreaStyle {}));
    }

    #[test]
    fn test_explicit_axis_names() {
        let mut spec = spec(ChartType::Bar);
        spec.config.x_axis.name = Some("Region".to_string());
        spec.config.y_axis.name = Some(String::new());
        let rows = vec![row(&[("region", "A".into()), ("sales_sum", 1.0.into())])];
        let config = render(bar, &spec, &rows);
        assert_eq!(config.x_axis.unwrap().name.as_deref(), Some("Region"));
        assert_eq!(config.y_axis.unwrap().name.as_deref(), Some("sales"));
    }

    #[test]
    fn test_base_option_is_kept() {
        let mut spec = spec(ChartType::Bar);
        spec.config.title = Some("Sales".to_string());
        let rows = vec![row(&[("region", "A".into()), ("sales_sum", 1.0.into())])];
        let config = render(bar, &spec, &rows);
        assert_eq!(config.title.text, "Sales");
        assert!(config.legend.is_some());
        assert_eq!(config.tooltip.unwrap().trigger, "axis");
    }
}
