// File: crates/story-render-skia/tests/smoke.rs
// Purpose: End-to-end render smoke tests (PNG file, PNG bytes, RGBA buffer) for every scene.

use story_core::{Dataset, Frame, Row, Rgba, Scene, SceneController, StoryConfig};
use story_render_skia::{RenderOptions, SkiaRenderer};

fn controller() -> SceneController {
    let rows = vec![
        Row::new("US", 1954, 2500.0),
        Row::new("US", 1955, 2800.0),
        Row::new("CN", 1955, 80.0),
        Row::new("US", 1956, 2900.0),
        Row::new("CN", 1956, 780.0),
    ];
    SceneController::new(Dataset::from_rows(rows), StoryConfig::default())
}

#[test]
fn render_smoke_png() {
    let mut ctl = controller();
    let renderer = SkiaRenderer::default();
    for scene in Scene::ALL {
        let out = std::path::PathBuf::from(format!("target/test_out/smoke_{}.png", scene.slug()));
        renderer.render_to_png(ctl.show(scene), &out).expect("render should succeed");
        let meta = std::fs::metadata(&out).expect("output exists");
        assert!(meta.len() > 0, "png should be non-empty");
    }

    // Also verify in-memory API works
    let bytes = renderer.render_to_png_bytes(ctl.frame()).expect("render bytes");
    assert!(bytes.starts_with(&[137, 80, 78, 71]), "should be PNG header");
}

#[test]
fn render_rgba8_buffer() {
    let ctl = controller();
    let renderer = SkiaRenderer::new(RenderOptions { draw_text: false, ..RenderOptions::default() });
    let img = renderer.render_to_rgba8(ctl.frame()).expect("rgba render");
    assert_eq!((img.width, img.height), (1200, 650));
    assert_eq!(img.pixels.len(), img.stride * img.height as usize);
    assert_eq!(img.stride, img.width as usize * 4);

    // top-left corner is plain white background
    assert_eq!(&img.pixels[0..4], &[255, 255, 255, 255]);
}

#[test]
fn blank_frame_is_uniform() {
    let renderer = SkiaRenderer::new(RenderOptions { draw_text: false, ..RenderOptions::default() });
    let frame = Frame::blank(16, 8, Rgba::rgb(10, 20, 30));
    let img = renderer.render_to_rgba8(&frame).expect("rgba render");
    assert!(img.pixels.chunks_exact(4).all(|px| px == [10, 20, 30, 255]));
}
