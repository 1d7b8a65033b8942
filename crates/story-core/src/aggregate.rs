// File: crates/story-core/src/aggregate.rs
// Summary: Pure aggregations over the row set (yearly totals, latest-year ranking, per-country series, peak).

use std::collections::BTreeMap;

use crate::data::Row;

/// Global total for one year.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct YearTotal {
    pub year: i32,
    pub value: f64,
}

/// Sum `co2` per `year` over rows where both are numeric.
/// Years reached only through invalid rows are absent, not zero.
pub fn aggregate_global_by_year(rows: &[Row]) -> BTreeMap<i32, f64> {
    let mut totals = BTreeMap::new();
    for (year, co2) in rows.iter().filter_map(Row::point) {
        *totals.entry(year).or_insert(0.0) += co2;
    }
    totals
}

/// Yearly totals ordered by ascending year.
pub fn global_series(rows: &[Row]) -> Vec<YearTotal> {
    aggregate_global_by_year(rows)
        .into_iter()
        .map(|(year, value)| YearTotal { year, value })
        .collect()
}

/// Largest numeric `year` in the row set.
pub fn latest_year(rows: &[Row]) -> Option<i32> {
    rows.iter().filter_map(|r| r.year).max()
}

/// Rows of the latest year, sorted by `co2` descending, truncated to `n`.
/// Equal values keep their original row order.
pub fn top_n_for_latest_year(rows: &[Row], n: usize) -> Vec<Row> {
    let Some(year) = latest_year(rows) else { return Vec::new() };
    let mut latest: Vec<Row> = rows
        .iter()
        .filter(|r| r.year == Some(year) && r.co2.is_some())
        .cloned()
        .collect();
    // sort_by is stable
    latest.sort_by(|a, b| b.co2.unwrap_or(0.0).total_cmp(&a.co2.unwrap_or(0.0)));
    latest.truncate(n);
    latest
}

/// Rows for exactly `country` that carry a numeric year, ascending by year.
pub fn series_for_country(rows: &[Row], country: &str) -> Vec<Row> {
    let mut series: Vec<Row> = rows
        .iter()
        .filter(|r| r.country == country && r.year.is_some())
        .cloned()
        .collect();
    series.sort_by_key(|r| r.year);
    series
}

/// Row with the highest `co2`; the earliest such row wins a tie.
pub fn peak_of(series: &[Row]) -> Option<&Row> {
    let mut best: Option<(&Row, i32, f64)> = None;
    for row in series {
        let Some((year, co2)) = row.point() else { continue };
        let better = match best {
            None => true,
            Some((_, by, bv)) => co2 > bv || (co2 == bv && year < by),
        };
        if better {
            best = Some((row, year, co2));
        }
    }
    best.map(|(row, _, _)| row)
}

/// Maximum of an iterator of values, `None` when empty.
pub fn max_value(values: impl IntoIterator<Item = f64>) -> Option<f64> {
    values.into_iter().fold(None, |acc, v| Some(acc.map_or(v, |m: f64| m.max(v))))
}
