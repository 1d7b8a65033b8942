// File: crates/story-core/src/lib.rs
// Summary: Core library entry point; exports the dataset, aggregation, scale and scene APIs.

pub mod error;
pub mod types;
pub mod data;
pub mod aggregate;
pub mod grid;
pub mod scale;
pub mod axis;
pub mod geometry;
pub mod theme;
pub mod config;
pub mod scene;
pub mod controller;
pub mod paint;
pub mod svg;

pub use error::{StoryError, StoryResult};
pub use data::{Dataset, Row};
pub use aggregate::{
    aggregate_global_by_year, global_series, latest_year, peak_of, series_for_country,
    top_n_for_latest_year, YearTotal,
};
pub use scale::{BandScale, LinearScale, PlotArea};
pub use geometry::{Anchor, Annotation, Frame, Mark, Point, RectF, Rgba, Selector};
pub use theme::Theme;
pub use config::{StoryConfig, YearAnchor};
pub use scene::{render_scene, Scene};
pub use controller::{SceneController, Session, SessionState};
pub use paint::{paint_frame, Painter};
