// File: crates/story-core/src/scale.rs
// Summary: Linear and band scales mapping data domains onto the shared plot area.

use crate::grid::linspace;
use crate::types::Insets;

/// Pixel rectangle available to marks once the fixed margins are removed.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlotArea {
    pub left: f64,
    pub right: f64,
    pub top: f64,
    pub bottom: f64,
}

impl PlotArea {
    pub fn new(width: u32, height: u32, insets: Insets) -> Self {
        Self {
            left: insets.left as f64,
            right: width.saturating_sub(insets.right) as f64,
            top: insets.top as f64,
            bottom: height.saturating_sub(insets.bottom) as f64,
        }
    }
    /// Horizontal pixel range, left to right.
    pub fn x_range(&self) -> (f64, f64) { (self.left, self.right) }
    /// Vertical pixel range, bottom to top (larger values sit higher).
    pub fn y_range(&self) -> (f64, f64) { (self.bottom, self.top) }
}

/// Continuous domain -> pixel range transform.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LinearScale {
    pub d0: f64,
    pub d1: f64,
    pub r0: f64,
    pub r1: f64,
}

impl LinearScale {
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        Self { d0: domain.0, d1: domain.1, r0: range.0, r1: range.1 }
    }

    /// True when the domain collapses to one value (or is not finite).
    pub fn is_degenerate(&self) -> bool {
        let span = self.d1 - self.d0;
        !span.is_finite() || span.abs() < 1e-12
    }

    #[inline]
    pub fn map(&self, v: f64) -> f64 {
        if self.is_degenerate() {
            return (self.r0 + self.r1) * 0.5;
        }
        self.r0 + (v - self.d0) / (self.d1 - self.d0) * (self.r1 - self.r0)
    }

    /// `count` evenly spaced domain values, ends included.
    pub fn ticks(&self, count: usize) -> Vec<f64> {
        if self.is_degenerate() {
            return vec![self.d0];
        }
        linspace(self.d0, self.d1, count)
    }
}

/// `[min, max]` over a set of years, `None` when empty.
pub fn year_extent(years: impl IntoIterator<Item = i32>) -> Option<(f64, f64)> {
    let mut it = years.into_iter();
    let first = it.next()?;
    let (lo, hi) = it.fold((first, first), |(lo, hi), y| (lo.min(y), hi.max(y)));
    Some((lo as f64, hi as f64))
}

/// `[0, max]` for a set of values; an empty set gives `[0, 0]`.
pub fn value_domain(values: impl IntoIterator<Item = f64>) -> (f64, f64) {
    let max = values.into_iter().fold(f64::NEG_INFINITY, f64::max);
    (0.0, if max.is_finite() { max } else { 0.0 })
}

/// Ordered categories -> equal-width bands with uniform padding (centered).
#[derive(Clone, Debug, PartialEq)]
pub struct BandScale {
    labels: Vec<String>,
    start: f64,
    step: f64,
    bandwidth: f64,
}

impl BandScale {
    /// `padding` is applied both between bands and at the outer edges, as a fraction of the step.
    pub fn new(labels: Vec<String>, range: (f64, f64), padding: f64) -> Self {
        let (r0, r1) = range;
        let n = labels.len();
        let padding = padding.clamp(0.0, 1.0);
        match n {
            0 => Self { labels, start: r0, step: 0.0, bandwidth: 0.0 },
            1 => Self { labels, start: r0, step: r1 - r0, bandwidth: r1 - r0 },
            _ => {
                let n = n as f64;
                let step = (r1 - r0) / (n - padding + 2.0 * padding).max(1.0);
                let start = r0 + (r1 - r0 - step * (n - padding)) * 0.5;
                Self { labels, start, step, bandwidth: step * (1.0 - padding) }
            }
        }
    }

    pub fn labels(&self) -> &[String] { &self.labels }
    pub fn bandwidth(&self) -> f64 { self.bandwidth }

    /// Left edge of the `i`-th band (duplicates in the domain each keep their own slot).
    pub fn position_at(&self, i: usize) -> f64 {
        self.start + self.step * i as f64
    }
}
