// File: crates/story-core/src/config.rs
// Summary: Story-wide settings (canvas size, margins, ranking size, annotation policy, theme).

use crate::theme::Theme;
use crate::types::{Insets, HEIGHT, WIDTH};

/// How the global-trend callout picks its year when the configured one has no data.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum YearAnchor {
    /// Only the configured year; the callout is omitted when it is absent.
    #[default]
    Exact,
    /// Closest year with data; the earlier year wins a tie.
    Nearest,
}

#[derive(Clone, Debug, PartialEq)]
pub struct StoryConfig {
    pub width: u32,
    pub height: u32,
    pub insets: Insets,
    pub top_n: usize,
    pub annotation_year: i32,
    pub year_anchor: YearAnchor,
    pub show_axes: bool,
    pub theme: Theme,
}

impl Default for StoryConfig {
    fn default() -> Self {
        Self {
            width: WIDTH,
            height: HEIGHT,
            insets: Insets::default(),
            top_n: 10,
            annotation_year: 1955,
            year_anchor: YearAnchor::Exact,
            show_axes: true,
            theme: Theme::light(),
        }
    }
}
