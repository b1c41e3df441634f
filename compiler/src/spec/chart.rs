use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::errors::Error;

use super::{Aggregations, FieldRef};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChartType {
    #[default]
    Bar,
    BarGrouped,
    BarStacked,
    BarPercentStacked,
    Line,
    Area,
    Pie,
    Donut,
    Scatter,
    Histogram,
    /// Any identifier we don't know how to lay out. Produces the base option with no series.
    #[serde(other)]
    Other,
}

/// A declarative, library-agnostic description of one chart.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartSpec {
    #[serde(rename = "type")]
    pub chart_type: ChartType,
    pub dimensions: Vec<FieldRef>,
    pub measures: Vec<FieldRef>,
    pub filters: Vec<Filter>,
    pub aggregations: Aggregations,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort: Option<SortSpec>,
    pub config: RenderHints,
}

impl ChartSpec {
    pub fn new(chart_type: ChartType) -> Self {
        Self {
            chart_type,
            ..Default::default()
        }
    }

    pub fn from_json(json: &str) -> Result<Self, Error> {
        serde_json::from_str(json).map_err(Error::InvalidSpec)
    }

    pub fn first_dimension(&self) -> Option<&FieldRef> {
        self.dimensions.first()
    }

    pub fn first_measure(&self) -> Option<&FieldRef> {
        self.measures.first()
    }

    /// The result column holding `measure`'s aggregated value.
    pub fn measure_alias(&self, measure: &FieldRef) -> String {
        self.aggregations.alias_for(&measure.field)
    }
}

/// One `field operator value` clause. All filters of a spec are ANDed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Filter {
    pub field: String,
    #[serde(default)]
    pub operator: String,
    #[serde(default)]
    pub value: String,
}

impl Filter {
    pub fn new(field: impl Into<String>, operator: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            operator: operator.into(),
            value: value.into(),
        }
    }
}

/// Parsing is lenient: case is ignored and anything unrecognized sorts ascending.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

impl SortOrder {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortOrder::Asc => "ASC",
            SortOrder::Desc => "DESC",
        }
    }
}

impl From<&str> for SortOrder {
    fn from(value: &str) -> Self {
        match value.trim().to_ascii_uppercase().as_str() {
            "ASC" | "ASCENDING" => SortOrder::Asc,
            "DESC" | "DESCENDING" => SortOrder::Desc,
            _ => {
                warn!(order = value, "unrecognized sort order, using ASC");
                SortOrder::Asc
            }
        }
    }
}

impl From<String> for SortOrder {
    fn from(value: String) -> Self {
        SortOrder::from(value.as_str())
    }
}

impl From<SortOrder> for String {
    fn from(value: SortOrder) -> Self {
        value.as_str().to_string()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortSpec {
    pub field: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order: Option<SortOrder>,
}

/// Presentation-only overrides. None of these affect the SQL.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RenderHints {
    pub title: Option<String>,
    pub subtitle: Option<String>,
    #[serde(rename = "xAxis")]
    pub x_axis: AxisHints,
    #[serde(rename = "yAxis")]
    pub y_axis: AxisHints,
    pub legend: LegendHints,
    pub tooltip: TooltipHints,
    pub color_scheme: Option<String>,
    pub colors: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AxisHints {
    pub name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LegendHints {
    pub show: Option<bool>,
    pub position: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TooltipHints {
    pub trigger: Option<String>,
    pub formatter: Option<String>,
}
