// File: crates/story-core/src/geometry.rs
// Summary: Plain geometric description of a rendered scene (marks, annotation, selector).

use crate::scene::Scene;
use crate::theme::Theme;

/// 8-bit RGBA colour.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self { Self { r, g, b, a: 255 } }

    /// `#rrggbb` form, alpha dropped.
    pub fn hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self { Self { x, y } }
    pub fn offset(&self, dx: f64, dy: f64) -> Self { Self::new(self.x + dx, self.y + dy) }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RectF {
    pub left: f64,
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
}

impl RectF {
    pub const fn from_ltrb(left: f64, top: f64, right: f64, bottom: f64) -> Self {
        Self { left, top, right, bottom }
    }
    pub fn width(&self) -> f64 { self.right - self.left }
    pub fn height(&self) -> f64 { self.bottom - self.top }
}

/// Horizontal text alignment relative to the anchor point.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Anchor {
    Start,
    Middle,
    End,
}

/// One drawing primitive.
#[derive(Clone, Debug, PartialEq)]
pub enum Mark {
    Path { points: Vec<Point>, stroke: Rgba, width: f64 },
    Rect { rect: RectF, fill: Rgba },
    Segment { from: Point, to: Point, stroke: Rgba, width: f64 },
    Text { at: Point, text: String, size: f64, color: Rgba, anchor: Anchor, bold: bool },
}

impl Mark {
    pub fn text(at: Point, text: impl Into<String>, size: f64, color: Rgba, anchor: Anchor) -> Self {
        Mark::Text { at, text: text.into(), size, color, anchor, bold: false }
    }
}

/// Label-style callout: a connector from `target` to the note at `target + (dx, dy)`.
#[derive(Clone, Debug, PartialEq)]
pub struct Annotation {
    pub title: String,
    pub label: String,
    pub target: Point,
    pub dx: f64,
    pub dy: f64,
    pub align: Anchor,
    pub color: Rgba,
}

impl Annotation {
    pub fn note_point(&self) -> Point { self.target.offset(self.dx, self.dy) }
}

/// Scene-local dropdown: options in discovery order plus the chosen index.
/// `selected` is `None` when the active choice is not one of the options.
#[derive(Clone, Debug, PartialEq)]
pub struct Selector {
    pub options: Vec<String>,
    pub selected: Option<usize>,
    pub color: Rgba,
}

impl Selector {
    pub fn selected_label(&self) -> Option<&str> {
        self.selected.and_then(|i| self.options.get(i)).map(String::as_str)
    }
}

/// Everything visible on the canvas after one render.
#[derive(Clone, Debug, PartialEq)]
pub struct Frame {
    pub width: u32,
    pub height: u32,
    pub background: Rgba,
    pub scene: Option<Scene>,
    pub marks: Vec<Mark>,
    pub annotation: Option<Annotation>,
    pub selector: Option<Selector>,
}

impl Frame {
    /// Empty canvas (nothing loaded yet).
    pub fn blank(width: u32, height: u32, background: Rgba) -> Self {
        Self { width, height, background, scene: None, marks: Vec::new(), annotation: None, selector: None }
    }

    /// Visible fatal-error state.
    pub fn error(width: u32, height: u32, theme: &Theme, message: &str) -> Self {
        let mut f = Self::blank(width, height, theme.background);
        let cx = width as f64 / 2.0;
        let cy = height as f64 / 2.0;
        f.push(Mark::Text {
            at: Point::new(cx, cy - 12.0),
            text: "Unable to load emissions data".to_string(),
            size: 18.0,
            color: theme.error,
            anchor: Anchor::Middle,
            bold: true,
        });
        f.push(Mark::text(Point::new(cx, cy + 14.0), message, 14.0, theme.muted, Anchor::Middle));
        f
    }

    pub fn push(&mut self, mark: Mark) { self.marks.push(mark); }

    /// Polyline geometry in draw order.
    pub fn paths(&self) -> impl Iterator<Item = &Vec<Point>> {
        self.marks.iter().filter_map(|m| match m {
            Mark::Path { points, .. } => Some(points),
            _ => None,
        })
    }

    pub fn rects(&self) -> impl Iterator<Item = &RectF> {
        self.marks.iter().filter_map(|m| match m {
            Mark::Rect { rect, .. } => Some(rect),
            _ => None,
        })
    }

    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.marks.iter().filter_map(|m| match m {
            Mark::Text { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }
}
