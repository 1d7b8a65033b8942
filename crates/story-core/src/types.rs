// File: crates/story-core/src/types.rs
// Summary: Shared types and constants (canvas size, plot margins).

/// Default canvas width in pixels.
pub const WIDTH: u32 = 1200;
/// Default canvas height in pixels.
pub const HEIGHT: u32 = 650;

/// Screen margins, in pixels.
/// Contract: all fields are non-negative.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Insets {
    pub left: u32,
    pub right: u32,
    pub top: u32,
    pub bottom: u32,
}

impl Insets {
    /// Create new insets (non-negative by type).
    pub const fn new(left: u32, right: u32, top: u32, bottom: u32) -> Self {
        Self { left, right, top, bottom }
    }
}

impl Default for Insets {
    /// Same margins for every scene; the top band leaves room for title and subtitle.
    fn default() -> Self {
        Self::new(50, 50, 120, 50)
    }
}
