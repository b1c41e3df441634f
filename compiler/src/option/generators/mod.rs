mod category;
mod histogram;
mod pie;
mod scatter;

use tracing::warn;

use crate::{
    spec::{ChartSpec, ChartType, FieldRef, ResultRow, Scalar},
    Options,
};

use super::config::RenderConfig;

/// Everything a generator reads besides the base option.
pub struct ChartData<'a> {
    pub spec: &'a ChartSpec,
    pub rows: &'a [ResultRow],
    options: &'a Options,
}

impl<'a> ChartData<'a> {
    pub fn new(spec: &'a ChartSpec, rows: &'a [ResultRow], options: &'a Options) -> Self {
        Self {
            spec,
            rows,
            options,
        }
    }

    /// The value of `column` in `row`, or null when the row has no such column.
    pub fn value(&self, row: &ResultRow, column: &str) -> Scalar {
        self.options
            .resolve_identifier(row, column)
            .cloned()
            .unwrap_or_default()
    }

    /// The first dimension's value in `row`. Null when the spec has no dimension.
    pub fn dimension_value(&self, row: &ResultRow) -> Scalar {
        match self.spec.first_dimension() {
            Some(dimension) => self.value(row, &dimension.field),
            None => Scalar::Null,
        }
    }

    /// The alias of `measure` in `row`, with blanks read as zero.
    pub fn measure_value(&self, row: &ResultRow, measure: &FieldRef) -> Scalar {
        self.value(row, &self.spec.measure_alias(measure)).or_zero()
    }

    pub fn dimension_name(&self) -> String {
        self.spec
            .first_dimension()
            .map(|d| d.field.clone())
            .unwrap_or_default()
    }

    pub fn measure_name(&self) -> String {
        self.spec
            .first_measure()
            .map(|m| m.field.clone())
            .unwrap_or_default()
    }
}

/// Produces the final render configuration for one chart family from the base option.
pub type Generator = fn(RenderConfig, &ChartData) -> RenderConfig;

const GENERATORS: [(ChartType, Generator); 10] = [
    (ChartType::Bar, category::bar),
    (ChartType::BarGrouped, category::bar),
    (ChartType::BarStacked, category::bar_stacked),
    (ChartType::BarPercentStacked, category::bar_stacked),
    (ChartType::Line, category::line),
    (ChartType::Area, category::area),
    (ChartType::Pie, pie::pie),
    (ChartType::Donut, pie::donut),
    (ChartType::Scatter, scatter::scatter),
    (ChartType::Histogram, histogram::histogram),
];

pub fn generator_for(chart_type: ChartType) -> Generator {
    GENERATORS
        .iter()
        .find(|(t, _)| *t == chart_type)
        .map(|(_, generator)| *generator)
        .unwrap_or(passthrough)
}

fn passthrough(base: RenderConfig, _: &ChartData) -> RenderConfig {
    warn!("no layout for chart type, returning base option");
    base
}
