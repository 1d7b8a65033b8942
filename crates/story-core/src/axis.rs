// File: crates/story-core/src/axis.rs
// Summary: Axis decorations (axis lines, value ticks, year ticks, category labels) as frame marks.

use crate::geometry::{Anchor, Mark, Point};
use crate::grid::integer_ticks;
use crate::scale::{BandScale, LinearScale, PlotArea};
use crate::theme::Theme;

const TICK_SIZE: f64 = 10.0;
const VALUE_TICKS: usize = 5;
const YEAR_TICKS: usize = 6;

/// Compact value label: `1.2B`, `350.0M`, `12.0k`, `7`.
pub fn compact_label(v: f64) -> String {
    let a = v.abs();
    if a >= 1e9 {
        format!("{:.1}B", v / 1e9)
    } else if a >= 1e6 {
        format!("{:.1}M", v / 1e6)
    } else if a >= 1e3 {
        format!("{:.1}k", v / 1e3)
    } else {
        format!("{:.0}", v)
    }
}

/// Left axis line, bottom baseline and value tick labels.
pub fn value_axis(area: &PlotArea, y: &LinearScale, theme: &Theme) -> Vec<Mark> {
    let mut marks = vec![
        Mark::Segment {
            from: Point::new(area.left, area.top),
            to: Point::new(area.left, area.bottom),
            stroke: theme.axis,
            width: 1.0,
        },
        Mark::Segment {
            from: Point::new(area.left, area.bottom),
            to: Point::new(area.right, area.bottom),
            stroke: theme.axis,
            width: 1.0,
        },
    ];
    for v in y.ticks(VALUE_TICKS) {
        let py = y.map(v);
        marks.push(Mark::Segment {
            from: Point::new(area.left - 4.0, py),
            to: Point::new(area.left, py),
            stroke: theme.axis,
            width: 1.0,
        });
        marks.push(Mark::text(Point::new(area.left - 6.0, py + 3.5), compact_label(v), TICK_SIZE, theme.muted, Anchor::End));
    }
    marks
}

/// Year labels under the baseline for line scenes.
pub fn year_axis(area: &PlotArea, x: &LinearScale, first: i32, last: i32, theme: &Theme) -> Vec<Mark> {
    integer_ticks(first, last, YEAR_TICKS)
        .into_iter()
        .map(|year| {
            let px = x.map(year as f64);
            Mark::text(Point::new(px, area.bottom + 16.0), year.to_string(), TICK_SIZE, theme.muted, Anchor::Middle)
        })
        .collect()
}

/// Category labels centred under each band.
pub fn band_axis(area: &PlotArea, band: &BandScale, theme: &Theme) -> Vec<Mark> {
    band.labels()
        .iter()
        .enumerate()
        .map(|(i, label)| {
            let cx = band.position_at(i) + band.bandwidth() * 0.5;
            Mark::text(Point::new(cx, area.bottom + 16.0), label.clone(), TICK_SIZE, theme.muted, Anchor::Middle)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compact_labels() {
        assert_eq!(compact_label(0.0), "0");
        assert_eq!(compact_label(950.0), "950");
        assert_eq!(compact_label(12_000.0), "12.0k");
        assert_eq!(compact_label(3_500_000.0), "3.5M");
        assert_eq!(compact_label(36_000_000_000.0), "36.0B");
    }
}
