use super::config::{LegendPlacement, Orient};

/// Built-in single-color schemes, keyed by name.
pub const COLOR_SCHEMES: [(&str, &str); 5] = [
    ("default", "#5470c6"),
    ("red", "#e53935"),
    ("yellow", "#fdd835"),
    ("black", "#000000"),
    ("green", "#43a047"),
];

pub const LEGEND_PLACEMENTS: [(&str, LegendPlacement); 4] = [
    (
        "top",
        LegendPlacement {
            top: "top",
            left: "center",
            orient: Orient::Horizontal,
        },
    ),
    (
        "bottom",
        LegendPlacement {
            top: "bottom",
            left: "center",
            orient: Orient::Horizontal,
        },
    ),
    (
        "left",
        LegendPlacement {
            top: "middle",
            left: "left",
            orient: Orient::Vertical,
        },
    ),
    (
        "right",
        LegendPlacement {
            top: "middle",
            left: "right",
            orient: Orient::Vertical,
        },
    ),
];

pub fn color_scheme(name: &str) -> Option<&'static str> {
    COLOR_SCHEMES
        .iter()
        .find(|(scheme, _)| *scheme == name)
        .map(|(_, color)| *color)
}

/// Placement for a legend position name. Unknown or missing positions get the `top` placement.
pub fn legend_placement(position: Option<&str>) -> LegendPlacement {
    let lookup = |name: &str| {
        LEGEND_PLACEMENTS
            .iter()
            .find(|(position, _)| *position == name)
            .map(|(_, placement)| *placement)
    };
    position
        .and_then(lookup)
        .unwrap_or(LEGEND_PLACEMENTS[0].1)
}
