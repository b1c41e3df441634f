use serde::Serialize;
use tracing::debug;

use crate::{
    errors::Error,
    option::{build_base_option, generator_for, ChartData, RenderConfig},
    spec::{ChartSpec, ResultRow},
    Options,
};

use super::{
    query::build_select,
    rendering::{Render, RenderContext},
};

/// A statement with its filter values split out as bind parameters, in placeholder order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Query {
    pub sql: String,
    pub params: Vec<String>,
}

#[derive(Default)]
pub struct Compiler {
    options: Options,
}

impl Compiler {
    pub fn new(options: Options) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &Options {
        &self.options
    }

    /// The chart's query as a single statement with filter values inlined as escaped literals.
    pub fn generate_sql(&self, spec: &ChartSpec, table_name: &str) -> String {
        let dialect = self.options.dialect.as_ref();
        let select = build_select(spec, table_name, dialect);
        let sql = select.render(&mut RenderContext::inline(dialect));
        debug!(sql = sql.as_str(), "compiled chart query");
        sql
    }

    /// The chart's query with filter values as bind parameters.
    pub fn compile_query(&self, spec: &ChartSpec, table_name: &str) -> Query {
        let dialect = self.options.dialect.as_ref();
        let select = build_select(spec, table_name, dialect);
        let mut cx = RenderContext::parameterized(dialect);
        let sql = select.render(&mut cx);
        let params = cx.into_params();
        debug!(sql = sql.as_str(), params = params.len(), "compiled parameterized chart query");
        Query { sql, params }
    }

    /// Lay out the rows returned by the chart's query. Rows must be in the order the database
    /// returned them, since category axes keep first-seen order.
    pub fn render_config(&self, spec: &ChartSpec, rows: &[ResultRow]) -> RenderConfig {
        if rows.is_empty() {
            debug!("no rows, rendering placeholder");
            return RenderConfig::no_data();
        }
        let base = build_base_option(&spec.config);
        let generate = generator_for(spec.chart_type);
        debug!(chart_type = ?spec.chart_type, rows = rows.len(), "rendering chart");
        generate(base, &ChartData::new(spec, rows, &self.options))
    }

    /// [`generate_sql`](Self::generate_sql) for a JSON chart spec.
    pub fn generate_sql_json(&self, spec_json: &str, table_name: &str) -> Result<String, Error> {
        let spec = ChartSpec::from_json(spec_json)?;
        Ok(self.generate_sql(&spec, table_name))
    }

    /// [`render_config`](Self::render_config) for a JSON chart spec and a JSON array of rows,
    /// returning the configuration as JSON.
    pub fn render_config_json(&self, spec_json: &str, rows_json: &str) -> Result<String, Error> {
        let spec = ChartSpec::from_json(spec_json)?;
        let rows: Vec<ResultRow> = serde_json::from_str(rows_json).map_err(Error::InvalidRows)?;
        let config = self.render_config(&spec, &rows);
        serde_json::to_string(&config).map_err(Error::Serialization)
    }
}
