// File: crates/story-core/tests/aggregate.rs
// Purpose: Aggregation functions over small hand-built row sets.

use story_core::aggregate::max_value;
use story_core::{aggregate_global_by_year, global_series, peak_of, series_for_country, top_n_for_latest_year, Row};

fn sample() -> Vec<Row> {
    vec![Row::new("US", 2018, 5000.0), Row::new("US", 2019, 5200.0), Row::new("CN", 2019, 9000.0)]
}

fn blank(country: &str, year: Option<i32>, co2: Option<f64>) -> Row {
    Row { country: country.to_string(), year, co2 }
}

#[test]
fn global_totals_per_year() {
    let totals = aggregate_global_by_year(&sample());
    assert_eq!(totals.len(), 2);
    assert_eq!(totals[&2018], 5000.0);
    assert_eq!(totals[&2019], 14200.0);

    let series = global_series(&sample());
    assert_eq!(series.iter().map(|t| t.year).collect::<Vec<_>>(), vec![2018, 2019]);
}

#[test]
fn years_with_only_invalid_rows_are_absent() {
    let mut rows = sample();
    rows.push(blank("US", Some(1990), None));
    rows.push(blank("FR", None, Some(12.0)));
    let totals = aggregate_global_by_year(&rows);
    assert!(!totals.contains_key(&1990));
    assert_eq!(totals.len(), 2);
    assert_eq!(totals[&2019], 14200.0);
}

#[test]
fn top_n_example() {
    let top = top_n_for_latest_year(&sample(), 10);
    assert_eq!(top, vec![Row::new("CN", 2019, 9000.0), Row::new("US", 2019, 5200.0)]);
}

#[test]
fn top_n_truncates_and_sorts() {
    let rows: Vec<Row> = (0..15)
        .map(|i| Row::new(format!("C{i}"), 2020, (i * 7 % 15) as f64))
        .chain(std::iter::once(Row::new("Old", 2010, 1e9)))
        .collect();
    let top = top_n_for_latest_year(&rows, 10);
    assert_eq!(top.len(), 10);
    assert!(top.iter().all(|r| r.year == Some(2020)));
    assert!(top.windows(2).all(|w| w[0].co2 >= w[1].co2));
}

#[test]
fn top_n_ties_keep_row_order() {
    let rows = vec![Row::new("A", 2020, 5.0), Row::new("B", 2020, 7.0), Row::new("C", 2020, 5.0)];
    let top = top_n_for_latest_year(&rows, 10);
    let names: Vec<&str> = top.iter().map(|r| r.country.as_str()).collect();
    assert_eq!(names, vec!["B", "A", "C"]);
}

#[test]
fn top_n_skips_blank_emissions_in_latest_year() {
    let rows = vec![Row::new("A", 2020, 5.0), blank("B", Some(2020), None)];
    let top = top_n_for_latest_year(&rows, 10);
    assert_eq!(top.len(), 1);
    assert!(top_n_for_latest_year(&[], 10).is_empty());
}

#[test]
fn country_series_example() {
    let mut rows = sample();
    rows.reverse();
    let series = series_for_country(&rows, "US");
    assert_eq!(series, vec![Row::new("US", 2018, 5000.0), Row::new("US", 2019, 5200.0)]);
    assert_eq!(peak_of(&series), Some(&Row::new("US", 2019, 5200.0)));
}

#[test]
fn country_series_is_exact_match() {
    let rows = vec![Row::new("US", 2001, 1.0), Row::new("us", 2000, 1.0), Row::new("USA", 2000, 1.0)];
    let series = series_for_country(&rows, "US");
    assert_eq!(series.len(), 1);
    assert!(series_for_country(&rows, "Nowhere").is_empty());
}

#[test]
fn peak_prefers_earliest_year_on_tie() {
    let series = vec![Row::new("X", 1990, 3.0), Row::new("X", 2000, 8.0), Row::new("X", 2010, 8.0)];
    assert_eq!(peak_of(&series).and_then(|r| r.year), Some(2000));
    assert_eq!(peak_of(&[]), None);
    assert_eq!(peak_of(&[blank("X", Some(2000), None)]), None);
}

#[test]
fn max_value_of_empty_is_none() {
    assert_eq!(max_value(Vec::<f64>::new()), None);
    assert_eq!(max_value([1.0, 4.0, 2.0]), Some(4.0));
}
