//! Compiles declarative chart specs into the SQL that fetches their data and into a
//! library-agnostic render configuration for the rows that SQL returns.
//!
//! ```
//! use chartspec::{ChartSpec, ChartType, Compiler, FieldRef};
//!
//! let mut spec = ChartSpec::new(ChartType::Bar);
//! spec.dimensions = vec![FieldRef::new("region")];
//! spec.measures = vec![FieldRef::new("sales")];
//!
//! let sql = Compiler::default().generate_sql(&spec, "orders");
//! assert_eq!(
//!     sql,
//!     "SELECT `region`, SUM(`sales`) AS `sales_sum` FROM `orders` GROUP BY `region` LIMIT 1000"
//! );
//! ```

mod compiler;
mod errors;
mod option;
mod options;
mod spec;
mod sql;
#[cfg(test)]
mod tests;
mod utils;

pub use compiler::{Compiler, Query, ROW_LIMIT};
pub use errors::Error;
pub use option::{
    bin_values, build_base_option, color_scheme, generator_for, legend_placement, AreaStyle, Axis,
    AxisType, Bin, ChartData, Generator, Legend, LegendPlacement, Orient, Radius, RenderConfig,
    Series, SeriesData, SeriesType, Slice, Title, Tooltip, COLOR_SCHEMES, HISTOGRAM_BIN_COUNT,
    LEGEND_PLACEMENTS, NO_DATA_TITLE,
};
pub use options::{IdentifierResolution, Options};
pub use spec::{
    is_dimension, partition_fields, resolve_alias, Aggregation, Aggregations, AxisHints,
    ChartSpec, ChartType, FieldRef, FieldRole, Filter, LegendHints, RenderHints, ResultRow,
    Scalar, SortOrder, SortSpec, TooltipHints,
};
pub use sql::{dialect_from_name, Dialect, MySql, Postgres};

/// [`Compiler::generate_sql`] with default options.
pub fn generate_sql(spec: &ChartSpec, table_name: &str) -> String {
    Compiler::default().generate_sql(spec, table_name)
}

/// [`Compiler::render_config`] with default options.
pub fn render_config(spec: &ChartSpec, rows: &[ResultRow]) -> RenderConfig {
    Compiler::default().render_config(spec, rows)
}
