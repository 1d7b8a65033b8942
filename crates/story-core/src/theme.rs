// File: crates/story-core/src/theme.rs
// Summary: Light/Dark colour presets for scene frames.

use crate::geometry::Rgba;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Theme {
    pub name: &'static str,
    pub background: Rgba,
    pub text: Rgba,
    pub muted: Rgba,
    pub axis: Rgba,
    pub trend_stroke: Rgba,
    pub bar_fill: Rgba,
    pub country_stroke: Rgba,
    pub annotation: Rgba,
    pub error: Rgba,
}

impl Theme {
    pub fn light() -> Self {
        Self {
            name: "light",
            background: Rgba::rgb(0xff, 0xff, 0xff),
            text: Rgba::rgb(0x11, 0x11, 0x11),
            muted: Rgba::rgb(0x66, 0x66, 0x66),
            axis: Rgba::rgb(0x99, 0x99, 0x99),
            trend_stroke: Rgba::rgb(0x33, 0x33, 0x33),
            bar_fill: Rgba::rgb(0x34, 0x98, 0xdb),
            country_stroke: Rgba::rgb(0x2e, 0xcc, 0x71),
            annotation: Rgba::rgb(0x22, 0x22, 0x22),
            error: Rgba::rgb(0xc0, 0x39, 0x2b),
        }
    }

    pub fn dark() -> Self {
        Self {
            name: "dark",
            background: Rgba::rgb(18, 18, 20),
            text: Rgba::rgb(235, 235, 245),
            muted: Rgba::rgb(150, 150, 160),
            axis: Rgba::rgb(180, 180, 190),
            trend_stroke: Rgba::rgb(64, 160, 255),
            bar_fill: Rgba::rgb(96, 156, 255),
            country_stroke: Rgba::rgb(40, 200, 120),
            annotation: Rgba::rgb(255, 230, 70),
            error: Rgba::rgb(220, 80, 80),
        }
    }
}

impl Default for Theme {
    fn default() -> Self { Self::light() }
}

/// Return a list of built-in theme presets.
pub fn presets() -> Vec<Theme> {
    vec![Theme::light(), Theme::dark()]
}

/// Find a theme by its `name`, falling back to light.
pub fn find(name: &str) -> Theme {
    presets()
        .into_iter()
        .find(|t| t.name.eq_ignore_ascii_case(name))
        .unwrap_or_else(Theme::light)
}
