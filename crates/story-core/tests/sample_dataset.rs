// File: crates/story-core/tests/sample_dataset.rs
// Purpose: The bundled sample CSV loads and drives every scene.

use story_core::{latest_year, top_n_for_latest_year, Dataset, Scene, SceneController, StoryConfig};

fn sample() -> Dataset {
    let path = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("../../data/co2_sample.csv");
    Dataset::load_csv(path).expect("sample data loads")
}

#[test]
fn sample_shape() {
    let ds = sample();
    assert_eq!(ds.len(), 12 * 83);
    assert_eq!(ds.countries().len(), 12);
    assert_eq!(ds.countries()[0], "United States");
    assert_eq!(ds.rows().iter().filter(|r| !r.is_valid()).count(), 2);
    assert_eq!(latest_year(ds.rows()), Some(2022));
}

#[test]
fn sample_story_walkthrough() {
    let ds = sample();
    let top = top_n_for_latest_year(ds.rows(), 10);
    assert_eq!(top.len(), 10);
    assert_eq!(top[0].country, "China");

    let mut ctl = SceneController::new(ds, StoryConfig::default());
    assert!(ctl.frame().annotation.is_some(), "1955 is in the sample");
    assert!(ctl.advance());
    assert_eq!(ctl.frame().rects().count(), 10);
    assert!(ctl.advance());
    assert_eq!(ctl.current_scene(), Scene::CountryExplorer);
    assert_eq!(ctl.frame().selector.as_ref().map(|s| s.options.len()), Some(12));
    assert!(ctl.on_country_selected("Brazil"));
    // two blank years are skipped in the line
    assert_eq!(ctl.frame().paths().next().map(Vec::len), Some(83 - 2));
}
