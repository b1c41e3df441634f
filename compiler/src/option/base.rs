use crate::spec::RenderHints;

use super::{
    config::{Axis, Legend, RenderConfig, Title, Tooltip},
    tables::{color_scheme, legend_placement},
};

const DEFAULT_TOOLTIP_TRIGGER: &str = "axis";

/// The part of a render configuration every chart type shares. Axis names are placeholders; the
/// chart type's generator fills in the rest of the axes and the series.
pub fn build_base_option(hints: &RenderHints) -> RenderConfig {
    let tooltip = Tooltip {
        trigger: hints
            .tooltip
            .trigger
            .clone()
            .filter(|t| !t.is_empty())
            .unwrap_or_else(|| DEFAULT_TOOLTIP_TRIGGER.to_string()),
        formatter: hints.tooltip.formatter.clone(),
    };
    let legend = Legend {
        show: hints.legend.show != Some(false),
        placement: legend_placement(hints.legend.position.as_deref()),
    };
    let title = Title {
        text: hints.title.clone().unwrap_or_default(),
        subtext: hints.subtitle.clone().unwrap_or_default(),
    };
    let placeholder_axis = |name: &Option<String>| Axis {
        name: Some(name.clone().unwrap_or_default()),
        ..Default::default()
    };
    RenderConfig {
        title,
        legend: Some(legend),
        tooltip: Some(tooltip),
        color: resolve_color(hints),
        x_axis: Some(placeholder_axis(&hints.x_axis.name)),
        y_axis: Some(placeholder_axis(&hints.y_axis.name)),
        series: vec![],
    }
}

/// A known scheme name wins over an explicit color list. With neither, the surface's own palette
/// applies.
fn resolve_color(hints: &RenderHints) -> Option<Vec<String>> {
    if let Some(color) = hints.color_scheme.as_deref().and_then(color_scheme) {
        return Some(vec![color.to_string()]);
    }
    if hints.colors.is_empty() {
        None
    } else {
        Some(hints.colors.clone())
    }
}
