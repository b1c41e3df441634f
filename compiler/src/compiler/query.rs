use tracing::warn;

use crate::{
    spec::{resolve_alias, Aggregation, Aggregations, ChartSpec, FieldRef, Filter},
    sql::{
        expr::build::agg,
        tree::{Column, ComparisonOperator, Condition, Select, SortEntry, SqlExpr},
        Dialect,
    },
};

use super::constants::ROW_LIMIT;

/// Lower a chart spec into a `SELECT` against `table_name`.
///
/// Dimensions are selected and grouped on, measures are aggregated under their resolved alias,
/// filters become ANDed conditions, and the result is always capped at [`ROW_LIMIT`] rows.
pub fn build_select(spec: &ChartSpec, table_name: &str, dialect: &dyn Dialect) -> Select {
    let column = |field: &str| SqlExpr::atom(dialect.quote_identifier(field));

    let mut select = Select::from(table_name.to_string());

    let dimension_columns = spec
        .dimensions
        .iter()
        .map(|dimension| Column::new(column(&dimension.field), None));
    let measure_columns = spec
        .measures
        .iter()
        .map(|measure| convert_measure(measure, &spec.aggregations, dialect));
    select.columns = dimension_columns.chain(measure_columns).collect();

    select.conditions = spec
        .filters
        .iter()
        .map(|filter| convert_filter(filter, dialect))
        .collect();

    select.grouping = spec.dimensions.iter().map(|d| column(&d.field)).collect();

    select.sorting = spec.sort.as_ref().map(|sort| SortEntry {
        expr: column(&sort.field),
        direction: sort.order.unwrap_or_default(),
    });

    select.limit = ROW_LIMIT;
    select
}

fn convert_measure(measure: &FieldRef, aggregations: &Aggregations, dialect: &dyn Dialect) -> Column {
    let aggregation = aggregations.get(&measure.field);
    let field = SqlExpr::atom(dialect.quote_identifier(&measure.field));
    let expr = match aggregation {
        Aggregation::Sum => agg::sum(field),
        Aggregation::Avg => agg::avg(field),
        // The field is only used to name the alias.
        Aggregation::Count => agg::count_star(),
        Aggregation::CountDistinct => agg::count_distinct(field),
        Aggregation::Max => agg::max(field),
        Aggregation::Min => agg::min(field),
    };
    Column::new(expr, Some(resolve_alias(&measure.field, aggregation)))
}

/// Filters the dialect cannot express become [`Condition::Never`], so they match no rows.
fn convert_filter(filter: &Filter, dialect: &dyn Dialect) -> Condition {
    let operator = ComparisonOperator::parse(&filter.operator)
        .and_then(|operator| dialect.comparison_operator(operator));
    let Some(operator) = operator else {
        warn!(
            field = filter.field.as_str(),
            operator = filter.operator.as_str(),
            "unsupported filter operator, filter matches no rows"
        );
        return Condition::Never;
    };
    Condition::Comparison {
        column: SqlExpr::atom(dialect.quote_identifier(&filter.field)),
        operator,
        value: filter.value.clone(),
    }
}
