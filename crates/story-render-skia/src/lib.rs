// File: crates/story-render-skia/src/lib.rs
// Summary: Skia renderer; paints story frames onto CPU raster surfaces and encodes them.

pub mod text;

use anyhow::Result;
use skia_safe as skia;
use story_core::{paint_frame, Anchor, Frame, Painter, Point, RectF, Rgba};

pub use text::TextShaper;

pub struct RenderOptions {
    /// Text goes through system fonts; tests turn it off for deterministic pixels.
    pub draw_text: bool,
    pub anti_alias: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self { draw_text: true, anti_alias: true }
    }
}

/// RGBA8 pixels with their dimensions and row stride.
pub struct RgbaImage {
    pub pixels: Vec<u8>,
    pub width: u32,
    pub height: u32,
    pub stride: usize,
}

pub struct SkiaRenderer {
    opts: RenderOptions,
    shaper: TextShaper,
}

impl Default for SkiaRenderer {
    fn default() -> Self { Self::new(RenderOptions::default()) }
}

impl SkiaRenderer {
    pub fn new(opts: RenderOptions) -> Self {
        Self { opts, shaper: TextShaper::new() }
    }

    fn render_surface(&self, frame: &Frame) -> Result<skia::Surface> {
        let mut surface = skia::surfaces::raster_n32_premul((frame.width as i32, frame.height as i32))
            .ok_or_else(|| anyhow::anyhow!("failed to create {}x{} raster surface", frame.width, frame.height))?;
        {
            let mut painter = SkiaPainter { canvas: surface.canvas(), shaper: &self.shaper, opts: &self.opts };
            paint_frame(frame, &mut painter);
        }
        Ok(surface)
    }

    /// Render the frame and return encoded PNG bytes.
    pub fn render_to_png_bytes(&self, frame: &Frame) -> Result<Vec<u8>> {
        let mut surface = self.render_surface(frame)?;
        let image = surface.image_snapshot();
        #[allow(deprecated)]
        let data = image
            .encode_to_data(skia::EncodedImageFormat::PNG)
            .ok_or_else(|| anyhow::anyhow!("encode PNG failed"))?;
        Ok(data.as_bytes().to_vec())
    }

    /// Render the frame to a PNG at `output_png_path`, creating parent directories.
    pub fn render_to_png(&self, frame: &Frame, output_png_path: impl AsRef<std::path::Path>) -> Result<()> {
        let path = output_png_path.as_ref();
        let bytes = self.render_to_png_bytes(frame)?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, &bytes)?;
        tracing::debug!(path = %path.display(), bytes = bytes.len(), "wrote PNG");
        Ok(())
    }

    /// Render the frame into an unpremultiplied RGBA8 buffer.
    pub fn render_to_rgba8(&self, frame: &Frame) -> Result<RgbaImage> {
        let mut surface = self.render_surface(frame)?;
        let (w, h) = (frame.width, frame.height);
        let info = skia::ImageInfo::new(
            (w as i32, h as i32),
            skia::ColorType::RGBA8888,
            skia::AlphaType::Unpremul,
            None,
        );
        let stride = w as usize * 4;
        let mut pixels = vec![0u8; stride * h as usize];
        if !surface.read_pixels(&info, &mut pixels, stride, (0, 0)) {
            anyhow::bail!("reading back {w}x{h} pixels failed");
        }
        Ok(RgbaImage { pixels, width: w, height: h, stride })
    }
}

fn color(c: Rgba) -> skia::Color {
    skia::Color::from_argb(c.a, c.r, c.g, c.b)
}

struct SkiaPainter<'a> {
    canvas: &'a skia::Canvas,
    shaper: &'a TextShaper,
    opts: &'a RenderOptions,
}

impl SkiaPainter<'_> {
    fn stroke(&self, c: Rgba, width: f64) -> skia::Paint {
        let mut paint = skia::Paint::default();
        paint.set_anti_alias(self.opts.anti_alias);
        paint.set_style(skia::paint::Style::Stroke);
        paint.set_stroke_width(width as f32);
        paint.set_color(color(c));
        paint
    }
}

impl Painter for SkiaPainter<'_> {
    fn clear(&mut self, c: Rgba) {
        self.canvas.clear(color(c));
    }

    fn stroke_polyline(&mut self, points: &[Point], c: Rgba, width: f64) {
        let Some((first, rest)) = points.split_first() else { return };
        let mut path = skia::Path::new();
        path.move_to((first.x as f32, first.y as f32));
        for p in rest {
            path.line_to((p.x as f32, p.y as f32));
        }
        let paint = self.stroke(c, width);
        self.canvas.draw_path(&path, &paint);
    }

    fn fill_rect(&mut self, rect: RectF, c: Rgba) {
        let mut body = skia::Paint::default();
        body.set_anti_alias(self.opts.anti_alias);
        body.set_style(skia::paint::Style::Fill);
        body.set_color(color(c));
        let r = skia::Rect::from_ltrb(rect.left as f32, rect.top as f32, rect.right as f32, rect.bottom as f32);
        self.canvas.draw_rect(r, &body);
    }

    fn segment(&mut self, from: Point, to: Point, c: Rgba, width: f64) {
        let paint = self.stroke(c, width);
        self.canvas.draw_line((from.x as f32, from.y as f32), (to.x as f32, to.y as f32), &paint);
    }

    fn text(&mut self, at: Point, text: &str, size: f64, c: Rgba, anchor: Anchor, bold: bool) {
        if !self.opts.draw_text || text.is_empty() {
            return;
        }
        let shift = match anchor {
            Anchor::Start => 0.0,
            Anchor::Middle => 0.5,
            Anchor::End => 1.0,
        };
        self.shaper.draw_anchored(self.canvas, text, at.x as f32, at.y as f32, size as f32, color(c), bold, shift);
    }
}
