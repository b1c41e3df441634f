mod base;
mod binning;
mod config;
mod generators;
mod tables;

pub use base::build_base_option;
pub use binning::{bin_values, Bin, HISTOGRAM_BIN_COUNT};
pub use config::*;
pub use generators::{generator_for, ChartData, Generator};
pub use tables::{color_scheme, legend_placement, COLOR_SCHEMES, LEGEND_PLACEMENTS};
