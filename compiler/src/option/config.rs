use serde::Serialize;

use crate::spec::Scalar;

pub const NO_DATA_TITLE: &str = "No data";

/// A library-agnostic description of how to draw one chart. Serializes to the JSON tree rendering
/// surfaces consume.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct RenderConfig {
    pub title: Title,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub legend: Option<Legend>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tooltip: Option<Tooltip>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<Vec<String>>,
    #[serde(rename = "xAxis", skip_serializing_if = "Option::is_none")]
    pub x_axis: Option<Axis>,
    #[serde(rename = "yAxis", skip_serializing_if = "Option::is_none")]
    pub y_axis: Option<Axis>,
    pub series: Vec<Series>,
}

impl RenderConfig {
    /// Placeholder for a query that returned nothing.
    pub fn no_data() -> Self {
        Self {
            title: Title {
                text: NO_DATA_TITLE.to_string(),
                subtext: String::new(),
            },
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct Title {
    pub text: String,
    pub subtext: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Legend {
    pub show: bool,
    #[serde(flatten)]
    pub placement: LegendPlacement,
}

/// Where the legend sits: the edges it is anchored to and how its entries flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LegendPlacement {
    pub top: &'static str,
    pub left: &'static str,
    pub orient: Orient,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Orient {
    Horizontal,
    Vertical,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Tooltip {
    pub trigger: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub formatter: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct Axis {
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub axis_type: Option<AxisType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Vec<Scalar>>,
}

impl Axis {
    /// The axis name, if one was given and is not blank.
    pub fn explicit_name(&self) -> Option<&str> {
        self.name.as_deref().filter(|name| !name.is_empty())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AxisType {
    Category,
    Value,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Series {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(rename = "type")]
    pub series_type: SeriesType,
    pub data: SeriesData,
    /// Series sharing a stack group are drawn on top of each other.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stack: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub area_style: Option<AreaStyle>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub radius: Option<Radius>,
}

impl Series {
    pub fn new(series_type: SeriesType, data: SeriesData) -> Self {
        Self {
            name: None,
            series_type,
            data,
            stack: None,
            area_style: None,
            radius: None,
        }
    }

    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SeriesType {
    Bar,
    Line,
    Pie,
    Scatter,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum SeriesData {
    /// One value per category of the x axis.
    Values(Vec<Scalar>),
    Slices(Vec<Slice>),
    /// `[x, y]` pairs.
    Points(Vec<(Scalar, Scalar)>),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Slice {
    pub name: Scalar,
    pub value: Scalar,
}

/// Fill under a line. Empty means "use the surface's default fill".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct AreaStyle {}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Radius {
    Outer(String),
    Ring(String, String),
}
