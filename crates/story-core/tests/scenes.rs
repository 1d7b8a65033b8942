// File: crates/story-core/tests/scenes.rs
// Purpose: Scene renderers produce the expected geometry, titles and callouts, and degrade on empty data.

use story_core::scene::{render_country_explorer, render_global_trend, render_top_emitters};
use story_core::{render_scene, Anchor, Dataset, Row, Scene, StoryConfig, YearAnchor};

fn rows() -> Vec<Row> {
    vec![
        Row::new("US", 1950, 2500.0),
        Row::new("US", 1955, 2800.0),
        Row::new("CN", 1955, 80.0),
        Row::new("US", 1960, 2900.0),
        Row::new("CN", 1960, 780.0),
        Row::new("IN", 1960, 120.0),
    ]
}

#[test]
fn global_trend_draws_one_line_with_callout() {
    let cfg = StoryConfig::default();
    let frame = render_global_trend(&rows(), &cfg);
    assert_eq!(frame.scene, Some(Scene::GlobalTrend));
    let paths: Vec<_> = frame.paths().collect();
    assert_eq!(paths.len(), 1);
    assert_eq!(paths[0].len(), 3);
    // x spans the plot area left to right
    assert_eq!(paths[0][0].x, 50.0);
    assert_eq!(paths[0][2].x, 1150.0);
    // the largest total sits on the top margin
    assert_eq!(paths[0][2].y, 120.0);

    let note = frame.annotation.as_ref().expect("1955 present");
    assert_eq!(note.title, "Industrial Growth");
    assert_eq!(note.target.x, 600.0);
    assert_eq!((note.dx, note.dy), (-60.0, -30.0));
    assert_eq!(note.align, Anchor::Start);
    assert!(frame.texts().any(|t| t == "Global CO₂ Emissions Over Time"));
}

#[test]
fn missing_annotation_year_is_omitted_by_default() {
    let rows: Vec<Row> = rows().into_iter().filter(|r| r.year != Some(1955)).collect();
    let frame = render_global_trend(&rows, &StoryConfig::default());
    assert!(frame.annotation.is_none());
    assert_eq!(frame.paths().count(), 1);
}

#[test]
fn nearest_policy_snaps_to_closest_year() {
    let rows: Vec<Row> = rows().into_iter().filter(|r| r.year != Some(1955)).collect();
    let cfg = StoryConfig { year_anchor: YearAnchor::Nearest, ..StoryConfig::default() };
    let frame = render_global_trend(&rows, &cfg);
    let note = frame.annotation.as_ref().expect("nearest year used");
    // 1950 and 1960 are equally close; the earlier one wins
    assert_eq!(note.target.x, 50.0);
}

#[test]
fn top_emitters_one_bar_per_country() {
    let cfg = StoryConfig::default();
    let frame = render_top_emitters(&rows(), &cfg);
    let rects: Vec<_> = frame.rects().collect();
    assert_eq!(rects.len(), 3);
    // tallest bar first, touching the top margin and the baseline
    assert_eq!(rects[0].top, 120.0);
    assert_eq!(rects[0].bottom, 600.0);
    assert!(rects[0].height() > rects[1].height());
    assert!(rects[1].height() > rects[2].height());
    assert!(frame.texts().any(|t| t == "Top 10 CO₂ Emitters in 1960"));

    let note = frame.annotation.as_ref().expect("leader callout");
    assert_eq!(note.label, "US leads CO₂ emissions this year");
    assert_eq!(note.target.y, 120.0);
    assert!((note.target.x - (rects[0].left + rects[0].width() / 2.0)).abs() < 1e-9);
}

#[test]
fn explorer_defaults_to_first_country() {
    let ds = Dataset::from_rows(rows());
    let frame = render_country_explorer(&ds, None, &StoryConfig::default());
    assert!(frame.texts().any(|t| t == "CO₂ Emissions for US"));
    let sel = frame.selector.as_ref().expect("selector");
    assert_eq!(sel.options, vec!["US", "CN", "IN"]);
    assert_eq!(sel.selected_label(), Some("US"));
    let note = frame.annotation.as_ref().expect("peak");
    assert_eq!(note.label, "CO₂ peaked in 1960");
}

#[test]
fn explorer_with_single_year_country_does_not_divide_by_zero() {
    let ds = Dataset::from_rows(rows());
    let frame = render_country_explorer(&ds, Some("IN"), &StoryConfig::default());
    let note = frame.annotation.as_ref().expect("peak");
    assert_eq!(note.target.x, 600.0);
    assert!(note.target.y.is_finite());
}

#[test]
fn explorer_unknown_country_renders_empty_chart() {
    let ds = Dataset::from_rows(rows());
    let frame = render_country_explorer(&ds, Some("Atlantis"), &StoryConfig::default());
    assert_eq!(frame.paths().count(), 0);
    assert!(frame.annotation.is_none());
    assert_eq!(frame.selector.as_ref().and_then(|s| s.selected), None);
    assert!(frame.texts().any(|t| t == "CO₂ Emissions for Atlantis"));
}

#[test]
fn empty_dataset_keeps_titles_only() {
    let ds = Dataset::default();
    let cfg = StoryConfig::default();
    for scene in Scene::ALL {
        let frame = render_scene(&ds, scene, None, &cfg);
        assert_eq!(frame.scene, Some(scene));
        assert_eq!(frame.paths().count(), 0);
        assert_eq!(frame.rects().count(), 0);
        assert!(frame.annotation.is_none());
        assert_eq!(frame.texts().count(), 2, "{scene:?} should keep title and subtitle");
    }
}

#[test]
fn axes_can_be_switched_off() {
    let cfg = StoryConfig { show_axes: false, ..StoryConfig::default() };
    let frame = render_top_emitters(&rows(), &cfg);
    assert_eq!(frame.texts().count(), 2);
    assert_eq!(frame.marks.len(), 2 + 3);
}

#[test]
fn far_apart_years_render_without_overflow() {
    let rows = vec![Row::new("A", -2_000_000_000, 1.0), Row::new("A", 2_000_000_000, 2.0)];
    let cfg = StoryConfig::default();
    let frame = render_global_trend(&rows, &cfg);
    let paths: Vec<_> = frame.paths().collect();
    assert_eq!(paths[0].len(), 2);
    assert!(frame.texts().any(|t| t == "-2000000000"));
    assert!(frame.texts().any(|t| t == "2000000000"));

    let ds = Dataset::from_rows(rows);
    let frame = render_country_explorer(&ds, Some("A"), &cfg);
    assert_eq!(frame.paths().count(), 1);
}
