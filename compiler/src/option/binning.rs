use tracing::warn;

pub const HISTOGRAM_BIN_COUNT: usize = 10;

/// One interval of a histogram's domain and how many values fell in it.
#[derive(Debug, Clone, PartialEq)]
pub struct Bin {
    pub start: f64,
    pub end: f64,
    pub count: usize,
}

impl Bin {
    pub fn label(&self) -> String {
        format!("{:.2}-{:.2}", self.start, self.end)
    }
}

/// Partition `[min, max]` of `values` into `bin_count` equal-width bins and count the values in
/// each. Bins are half-open except the last, which also takes `max`.
///
/// When every value is the same the domain has zero width; the result is then a single bin
/// holding all of them.
pub fn bin_values(values: &[f64], bin_count: usize) -> Vec<Bin> {
    if values.is_empty() || bin_count == 0 {
        return vec![];
    }
    let min = values.iter().copied().fold(f64::INFINITY, f64::min);
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    // Work in halves so spans wider than f64::MAX stay finite. Halving is exact, so edges and
    // indices are unchanged for ordinary ranges.
    let half_size = (max / 2.0 - min / 2.0) / bin_count as f64;

    if half_size == 0.0 {
        return vec![Bin {
            start: min,
            end: max,
            count: values.len(),
        }];
    }
    if !half_size.is_finite() {
        warn!(min, max, "histogram domain is unbounded, using a single bin");
        return vec![Bin {
            start: min,
            end: max,
            count: values.len(),
        }];
    }

    let edge = |i: usize| 2.0 * (min / 2.0 + i as f64 * half_size);
    let mut bins = (0..bin_count)
        .map(|i| Bin {
            start: edge(i),
            end: edge(i + 1),
            count: 0,
        })
        .collect::<Vec<_>>();
    for value in values {
        // The float-to-usize cast saturates, so NaN and negatives land in bin 0.
        let index = ((value / 2.0 - min / 2.0) / half_size).floor() as usize;
        bins[index.min(bin_count - 1)].count += 1;
    }
    bins
}
