// File: crates/story-core/src/svg.rs
// Summary: Deterministic SVG writer for frames, built on the `Painter` seam.

use std::fmt::Write as _;
use std::path::Path;

use crate::error::{StoryError, StoryResult};
use crate::geometry::{Anchor, Frame, Point, RectF, Rgba};
use crate::paint::{paint_frame, Painter};

/// Accumulates SVG elements for one frame.
pub struct SvgPainter {
    width: u32,
    height: u32,
    body: String,
}

impl SvgPainter {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height, body: String::new() }
    }

    pub fn finish(self) -> String {
        format!(
            "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{w}\" height=\"{h}\" viewBox=\"0 0 {w} {h}\" font-family=\"sans-serif\">\n{body}</svg>\n",
            w = self.width,
            h = self.height,
            body = self.body
        )
    }
}

fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            c => out.push(c),
        }
    }
    out
}

fn opacity(c: Rgba) -> String {
    if c.a == 255 { String::new() } else { format!(" opacity=\"{:.3}\"", c.a as f64 / 255.0) }
}

impl Painter for SvgPainter {
    fn clear(&mut self, color: Rgba) {
        self.body.clear();
        let _ = writeln!(
            self.body,
            "<rect x=\"0\" y=\"0\" width=\"{}\" height=\"{}\" fill=\"{}\"/>",
            self.width,
            self.height,
            color.hex()
        );
    }

    fn stroke_polyline(&mut self, points: &[Point], color: Rgba, width: f64) {
        let mut d = String::new();
        for (i, p) in points.iter().enumerate() {
            let _ = write!(d, "{}{:.2},{:.2}", if i == 0 { "M" } else { "L" }, p.x, p.y);
        }
        let _ = writeln!(
            self.body,
            "<path d=\"{d}\" fill=\"none\" stroke=\"{}\" stroke-width=\"{width}\"{}/>",
            color.hex(),
            opacity(color)
        );
    }

    fn fill_rect(&mut self, rect: RectF, color: Rgba) {
        let _ = writeln!(
            self.body,
            "<rect x=\"{:.2}\" y=\"{:.2}\" width=\"{:.2}\" height=\"{:.2}\" fill=\"{}\"{}/>",
            rect.left,
            rect.top,
            rect.width(),
            rect.height(),
            color.hex(),
            opacity(color)
        );
    }

    fn segment(&mut self, from: Point, to: Point, color: Rgba, width: f64) {
        let _ = writeln!(
            self.body,
            "<line x1=\"{:.2}\" y1=\"{:.2}\" x2=\"{:.2}\" y2=\"{:.2}\" stroke=\"{}\" stroke-width=\"{width}\"/>",
            from.x,
            from.y,
            to.x,
            to.y,
            color.hex()
        );
    }

    fn text(&mut self, at: Point, text: &str, size: f64, color: Rgba, anchor: Anchor, bold: bool) {
        let anchor = match anchor {
            Anchor::Start => "start",
            Anchor::Middle => "middle",
            Anchor::End => "end",
        };
        let weight = if bold { " font-weight=\"bold\"" } else { "" };
        let _ = writeln!(
            self.body,
            "<text x=\"{:.2}\" y=\"{:.2}\" font-size=\"{size}px\" fill=\"{}\" text-anchor=\"{anchor}\"{weight}>{}</text>",
            at.x,
            at.y,
            color.hex(),
            escape(text)
        );
    }
}

/// Serialize a frame to an SVG document.
pub fn frame_to_svg(frame: &Frame) -> String {
    let mut painter = SvgPainter::new(frame.width, frame.height);
    paint_frame(frame, &mut painter);
    painter.finish()
}

/// Write a frame as SVG, creating parent directories as needed.
pub fn write_svg(frame: &Frame, path: impl AsRef<Path>) -> StoryResult<()> {
    let path = path.as_ref();
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| StoryError::io(parent, e))?;
    }
    std::fs::write(path, frame_to_svg(frame)).map_err(|e| StoryError::io(path, e))
}
