// File: crates/story-core/tests/snapshot_svg.rs
// Purpose: Golden SVG snapshots for each scene with bless flow.
// Behavior:
// - If env UPDATE_SNAPSHOTS=1, (re)writes the snapshot files.
// - Else, compares text for exact match; a missing golden is a failure.

use story_core::svg::frame_to_svg;
use story_core::{Dataset, Row, Scene, SceneController, StoryConfig};

fn bless_mode() -> bool {
    std::env::var("UPDATE_SNAPSHOTS").ok().map(|v| v == "1" || v.eq_ignore_ascii_case("true")).unwrap_or(false)
}

fn write_or_compare(path: &std::path::Path, got: &str) {
    if bless_mode() {
        if let Some(parent) = path.parent() { std::fs::create_dir_all(parent).ok(); }
        std::fs::write(path, got).expect("write snapshot");
        eprintln!("[snapshot] Updated {} ({} bytes)", path.display(), got.len());
        return;
    }
    let want = std::fs::read_to_string(path)
        .unwrap_or_else(|e| panic!("missing golden {} ({e}); set UPDATE_SNAPSHOTS=1 to bless", path.display()));
    assert_eq!(got, want, "SVG differs from golden snapshot: {}", path.display());
}

fn controller() -> SceneController {
    let mut rows = Vec::new();
    for (i, year) in (1950..=1960).enumerate() {
        rows.push(Row::new("United States", year, 2500.0 + 60.0 * i as f64));
        rows.push(Row::new("China", year, 80.0 + 70.0 * i as f64));
        rows.push(Row::new("India", year, 60.0 + 8.0 * i as f64));
    }
    SceneController::new(Dataset::from_rows(rows), StoryConfig::default())
}

#[test]
fn golden_scenes() {
    let mut ctl = controller();
    let dir = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/__snapshots__");
    for scene in Scene::ALL {
        let svg = frame_to_svg(ctl.show(scene));
        assert!(svg.contains("CO₂"));
        write_or_compare(&dir.join(format!("{}.svg", scene.slug())), &svg);
    }
}
