// File: crates/story-core/src/grid.rs
// Summary: Simple tick layout helpers.

pub fn linspace(start: f64, end: f64, steps: usize) -> Vec<f64> {
    if steps < 2 { return vec![start, end]; }
    let step = (end - start) / (steps as f64 - 1.0);
    (0..steps).map(|i| start + step * i as f64).collect()
}

/// Integer ticks across `[start, end]`, rounded and de-duplicated.
pub fn integer_ticks(start: i32, end: i32, max_ticks: usize) -> Vec<i32> {
    if end <= start { return vec![start]; }
    let span = usize::try_from(end.abs_diff(start)).unwrap_or(usize::MAX);
    let steps = max_ticks.min(span.saturating_add(1)).max(2);
    let mut out: Vec<i32> = linspace(start as f64, end as f64, steps)
        .into_iter()
        .map(|v| v.round() as i32)
        .collect();
    out.dedup();
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn linspace_hits_both_ends() {
        assert_eq!(linspace(0.0, 10.0, 3), vec![0.0, 5.0, 10.0]);
        assert_eq!(linspace(2.0, 4.0, 1), vec![2.0, 4.0]);
    }

    #[test]
    fn integer_ticks_never_repeat() {
        assert_eq!(integer_ticks(2018, 2019, 6), vec![2018, 2019]);
        assert_eq!(integer_ticks(1950, 2000, 6), vec![1950, 1960, 1970, 1980, 1990, 2000]);
        assert_eq!(integer_ticks(2000, 2000, 6), vec![2000]);
    }

    #[test]
    fn integer_ticks_span_the_whole_i32_range() {
        let ticks = integer_ticks(-2_000_000_000, 2_000_000_000, 6);
        assert_eq!(ticks.len(), 6);
        assert_eq!(ticks.first(), Some(&-2_000_000_000));
        assert_eq!(ticks.last(), Some(&2_000_000_000));
        let full = integer_ticks(i32::MIN, i32::MAX, 3);
        assert_eq!((full.len(), full[0], full[2]), (3, i32::MIN, i32::MAX));
    }
}
