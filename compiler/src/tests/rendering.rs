use serde_json::json;

use crate::{
    resolve_alias, Aggregation, ChartSpec, ChartType, Compiler, FieldRef, RenderConfig, ResultRow,
    Scalar, SeriesData, SeriesType,
};

use super::test_utils::{get_test_resource, get_test_rows};

const ALL_CHART_TYPES: [ChartType; 11] = [
    ChartType::Bar,
    ChartType::BarGrouped,
    ChartType::BarStacked,
    ChartType::BarPercentStacked,
    ChartType::Line,
    ChartType::Area,
    ChartType::Pie,
    ChartType::Donut,
    ChartType::Scatter,
    ChartType::Histogram,
    ChartType::Other,
];

fn monthly_spec(chart_type: ChartType) -> ChartSpec {
    let mut spec = ChartSpec::new(chart_type);
    spec.dimensions = vec![FieldRef::new("month")];
    spec.measures = vec![FieldRef::new("sales"), FieldRef::new("orders")];
    spec.aggregations.insert("orders", Aggregation::Count);
    spec
}

#[test]
fn test_stacked_bar_json() {
    let spec = r#"{
        "type": "bar_stacked",
        "dimensions": [{"field": "month"}],
        "measures": [{"field": "sales"}, {"field": "orders"}],
        "aggregations": {"orders": "COUNT"},
        "config": {
            "title": "Monthly sales",
            "legend": {"position": "bottom"},
            "colorScheme": "green"
        }
    }"#;
    let rows = get_test_resource("monthly_sales.json");
    let json = Compiler::default().render_config_json(spec, &rows).unwrap();
    let actual: serde_json::Value = serde_json::from_str(&json).unwrap();
    let expected = json!({
        "title": {"text": "Monthly sales", "subtext": ""},
        "legend": {"show": true, "top": "bottom", "left": "center", "orient": "horizontal"},
        "tooltip": {"trigger": "axis"},
        "color": ["#43a047"],
        "xAxis": {"type": "category", "name": "month", "data": ["2024-01", "2024-02", "2024-03"]},
        "yAxis": {"type": "value", "name": "sales"},
        "series": [
            {"name": "sales", "type": "bar", "data": [120.0, 150.0, 0.0], "stack": "total"},
            {"name": "orders", "type": "bar", "data": [12.0, 15.0, 4.0], "stack": "total"}
        ]
    });
    assert_eq!(actual, expected);
}

#[test]
fn test_every_chart_type_is_deterministic() {
    let compiler = Compiler::default();
    let rows = get_test_rows("monthly_sales.json");
    for chart_type in ALL_CHART_TYPES {
        let spec = monthly_spec(chart_type);
        let first = compiler.render_config(&spec, &rows);
        let second = compiler.render_config(&spec, &rows);
        assert_eq!(first, second, "{:?}", chart_type);
    }
}

#[test]
fn test_every_chart_type_has_series() {
    let compiler = Compiler::default();
    let rows = get_test_rows("monthly_sales.json");
    for chart_type in ALL_CHART_TYPES {
        let config = compiler.render_config(&monthly_spec(chart_type), &rows);
        if chart_type == ChartType::Other {
            assert!(config.series.is_empty());
        } else {
            assert!(!config.series.is_empty(), "{:?}", chart_type);
        }
    }
}

#[test]
fn test_every_chart_type_without_rows() {
    let compiler = Compiler::default();
    for chart_type in ALL_CHART_TYPES {
        let config = compiler.render_config(&monthly_spec(chart_type), &[]);
        assert_eq!(config, RenderConfig::no_data());
        assert_eq!(config.title.text, "No data");
    }
}

#[test]
fn test_pie_from_fixture() {
    let mut spec = ChartSpec::new(ChartType::Donut);
    spec.dimensions = vec![FieldRef::new("region")];
    spec.measures = vec![FieldRef::new("sales")];
    let config = Compiler::default().render_config(&spec, &get_test_rows("monthly_sales.json"));
    let series = &config.series[0];
    assert_eq!(series.series_type, SeriesType::Pie);
    let SeriesData::Slices(slices) = &series.data else {
        panic!("expected slices");
    };
    let values = slices.iter().map(|s| s.value.clone()).collect::<Vec<_>>();
    assert_eq!(
        values,
        vec![120.0.into(), 80.0.into(), 150.0.into(), Scalar::ZERO]
    );
    let json = serde_json::to_value(&config).unwrap();
    assert_eq!(json["series"][0]["radius"], json!(["40%", "70%"]));
    assert!(json.get("xAxis").is_none());
}

#[test]
fn test_histogram_from_fixture() {
    let mut spec = ChartSpec::new(ChartType::Histogram);
    spec.dimensions = vec![FieldRef::typed("price", "decimal(10,2)")];
    let config = Compiler::default().render_config(&spec, &get_test_rows("monthly_sales.json"));
    let json = serde_json::to_value(&config).unwrap();
    assert_eq!(json["xAxis"]["data"][0], "5.00-8.75");
    assert_eq!(json["xAxis"]["data"][9], "38.75-42.50");
    assert_eq!(
        json["series"][0]["data"],
        json!([2.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 0.0, 1.0])
    );
    assert_eq!(json["yAxis"]["name"], "Frequency");
}

#[test]
fn test_query_and_rows_agree_on_aliases() {
    let compiler = Compiler::default();
    for aggregation in ["SUM", "AVG", "COUNT", "COUNT_DISTINCT", "MAX", "MIN", "BOGUS"] {
        let mut spec = ChartSpec::new(ChartType::Bar);
        spec.dimensions = vec![FieldRef::new("region")];
        spec.measures = vec![FieldRef::new("sales")];
        spec.aggregations.insert("sales", Aggregation::from(aggregation));

        let alias = resolve_alias("sales", Aggregation::from(aggregation));
        let sql = compiler.generate_sql(&spec, "orders");
        assert!(sql.contains(&format!("AS `{}`", alias)), "{}", sql);

        let rows: Vec<ResultRow> = vec![[
            ("region".to_string(), Scalar::from("A")),
            (alias, Scalar::from(7.0)),
        ]
        .into_iter()
        .collect()];
        let config = compiler.render_config(&spec, &rows);
        assert_eq!(config.series[0].data, SeriesData::Values(vec![7.0.into()]));
    }
}
