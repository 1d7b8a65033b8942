// File: crates/story-core/src/paint.rs
// Summary: Drawing-primitive seam; backends implement `Painter`, `paint_frame` fixes the draw order.

use crate::geometry::{Anchor, Annotation, Frame, Mark, Point, RectF, Rgba, Selector};

const NOTE_TITLE_SIZE: f64 = 13.0;
const NOTE_LABEL_SIZE: f64 = 12.0;
const SELECTOR_SIZE: f64 = 13.0;

/// Minimal set of primitives a backend has to provide.
pub trait Painter {
    fn clear(&mut self, color: Rgba);
    fn stroke_polyline(&mut self, points: &[Point], color: Rgba, width: f64);
    fn fill_rect(&mut self, rect: RectF, color: Rgba);
    fn segment(&mut self, from: Point, to: Point, color: Rgba, width: f64);
    fn text(&mut self, at: Point, text: &str, size: f64, color: Rgba, anchor: Anchor, bold: bool);
}

/// Draw a whole frame: background, marks in order, then the annotation and selector caption.
pub fn paint_frame<P: Painter + ?Sized>(frame: &Frame, painter: &mut P) {
    painter.clear(frame.background);
    for mark in &frame.marks {
        match mark {
            Mark::Path { points, stroke, width } => {
                if points.len() >= 2 {
                    painter.stroke_polyline(points, *stroke, *width);
                }
            }
            Mark::Rect { rect, fill } => painter.fill_rect(*rect, *fill),
            Mark::Segment { from, to, stroke, width } => painter.segment(*from, *to, *stroke, *width),
            Mark::Text { at, text, size, color, anchor, bold } => {
                painter.text(*at, text, *size, *color, *anchor, *bold)
            }
        }
    }
    if let Some(note) = &frame.annotation {
        paint_annotation(note, painter);
    }
    if let Some(sel) = &frame.selector {
        paint_selector(sel, frame, painter);
    }
}

fn paint_annotation<P: Painter + ?Sized>(note: &Annotation, painter: &mut P) {
    let color = note.color;
    let at = note.note_point();
    if note.dx != 0.0 || note.dy != 0.0 {
        painter.segment(note.target, at, color, 1.0);
    }
    // text block sits above the note point when the note is raised, below otherwise
    let (title_y, label_y) = if note.dy <= 0.0 {
        (at.y - NOTE_LABEL_SIZE - 8.0, at.y - 4.0)
    } else {
        (at.y + NOTE_TITLE_SIZE + 2.0, at.y + NOTE_TITLE_SIZE + NOTE_LABEL_SIZE + 6.0)
    };
    painter.text(Point::new(at.x, title_y), &note.title, NOTE_TITLE_SIZE, color, note.align, true);
    painter.text(Point::new(at.x, label_y), &note.label, NOTE_LABEL_SIZE, color, note.align, false);
}

fn paint_selector<P: Painter + ?Sized>(sel: &Selector, frame: &Frame, painter: &mut P) {
    let caption = match (sel.selected, sel.selected_label()) {
        (Some(i), Some(label)) => format!("Country: {label} ({} of {})", i + 1, sel.options.len()),
        _ => format!("Country: none selected ({} available)", sel.options.len()),
    };
    painter.text(Point::new(frame.width as f64 / 2.0, 85.0), &caption, SELECTOR_SIZE, sel.color, Anchor::Middle, false);
}
