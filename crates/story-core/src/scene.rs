// File: crates/story-core/src/scene.rs
// Summary: The three scene renderers; each turns rows (plus the explorer's selection) into a Frame.

use crate::aggregate::{global_series, latest_year, peak_of, series_for_country, top_n_for_latest_year, YearTotal};
use crate::axis;
use crate::config::{StoryConfig, YearAnchor};
use crate::data::{Dataset, Row};
use crate::geometry::{Anchor, Annotation, Frame, Mark, Point, RectF, Selector};
use crate::scale::{value_domain, year_extent, BandScale, LinearScale, PlotArea};

const BAR_PADDING: f64 = 0.2;
const LINE_WIDTH: f64 = 2.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Scene {
    GlobalTrend,
    TopEmitters,
    CountryExplorer,
}

impl Scene {
    pub const ALL: [Scene; 3] = [Scene::GlobalTrend, Scene::TopEmitters, Scene::CountryExplorer];
    pub const COUNT: usize = Self::ALL.len();

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    pub fn index(self) -> usize {
        match self {
            Scene::GlobalTrend => 0,
            Scene::TopEmitters => 1,
            Scene::CountryExplorer => 2,
        }
    }

    /// Short name used for output files and logs.
    pub fn slug(self) -> &'static str {
        match self {
            Scene::GlobalTrend => "global-trend",
            Scene::TopEmitters => "top-emitters",
            Scene::CountryExplorer => "country-explorer",
        }
    }
}

/// Render `scene` from scratch. `selection` only matters for the country explorer;
/// `None` there means the first country in discovery order.
pub fn render_scene(dataset: &Dataset, scene: Scene, selection: Option<&str>, config: &StoryConfig) -> Frame {
    match scene {
        Scene::GlobalTrend => render_global_trend(dataset.rows(), config),
        Scene::TopEmitters => render_top_emitters(dataset.rows(), config),
        Scene::CountryExplorer => render_country_explorer(dataset, selection, config),
    }
}

fn base_frame(config: &StoryConfig, scene: Scene, title: String, subtitle: String) -> Frame {
    let theme = &config.theme;
    let mut frame = Frame::blank(config.width, config.height, theme.background);
    frame.scene = Some(scene);
    let cx = config.width as f64 / 2.0;
    frame.push(Mark::text(Point::new(cx, 30.0), title, 18.0, theme.text, Anchor::Middle));
    frame.push(Mark::text(Point::new(cx, 55.0), subtitle, 14.0, theme.muted, Anchor::Middle));
    frame
}

/// Scale pair for a year/value line chart, or `None` when there is nothing to plot.
fn line_scales(area: &PlotArea, points: &[(i32, f64)]) -> Option<(LinearScale, LinearScale, i32, i32)> {
    let (first, last) = year_extent(points.iter().map(|p| p.0))?;
    let x = LinearScale::new((first, last), area.x_range());
    let y = LinearScale::new(value_domain(points.iter().map(|p| p.1)), area.y_range());
    Some((x, y, first as i32, last as i32))
}

fn pick_anchor_year(totals: &[YearTotal], want: i32, policy: YearAnchor) -> Option<&YearTotal> {
    match policy {
        YearAnchor::Exact => totals.iter().find(|t| t.year == want),
        YearAnchor::Nearest => totals
            .iter()
            .min_by_key(|t| ((t.year as i64 - want as i64).abs(), t.year)),
    }
}

pub fn render_global_trend(rows: &[Row], config: &StoryConfig) -> Frame {
    let theme = &config.theme;
    let mut frame = base_frame(
        config,
        Scene::GlobalTrend,
        "Global CO₂ Emissions Over Time".to_string(),
        "Total worldwide CO₂ emissions, aggregated by year.".to_string(),
    );

    let totals = global_series(rows);
    let points: Vec<(i32, f64)> = totals.iter().map(|t| (t.year, t.value)).collect();
    let area = PlotArea::new(config.width, config.height, config.insets);
    let Some((x, y, first, last)) = line_scales(&area, &points) else {
        tracing::debug!("global trend: no valid rows");
        return frame;
    };

    if config.show_axes {
        frame.marks.extend(axis::value_axis(&area, &y, theme));
        frame.marks.extend(axis::year_axis(&area, &x, first, last, theme));
    }
    frame.push(Mark::Path {
        points: points.iter().map(|&(yr, v)| Point::new(x.map(yr as f64), y.map(v))).collect(),
        stroke: theme.trend_stroke,
        width: LINE_WIDTH,
    });

    match pick_anchor_year(&totals, config.annotation_year, config.year_anchor) {
        Some(t) => {
            frame.annotation = Some(Annotation {
                title: "Industrial Growth".to_string(),
                label: "Emissions began rising rapidly after 1950".to_string(),
                target: Point::new(x.map(t.year as f64), y.map(t.value)),
                dx: -60.0,
                dy: -30.0,
                align: Anchor::Start,
                color: theme.annotation,
            });
        }
        None => tracing::warn!(year = config.annotation_year, "no data for annotation year; callout omitted"),
    }
    frame
}

pub fn render_top_emitters(rows: &[Row], config: &StoryConfig) -> Frame {
    let theme = &config.theme;
    let n = config.top_n;
    let title = match latest_year(rows) {
        Some(year) => format!("Top {n} CO₂ Emitters in {year}"),
        None => format!("Top {n} CO₂ Emitters"),
    };
    let mut frame = base_frame(
        config,
        Scene::TopEmitters,
        title,
        format!("The top {n} countries by total CO₂ emissions in the most recent year available."),
    );

    let top = top_n_for_latest_year(rows, n);
    if top.is_empty() {
        tracing::debug!("top emitters: nothing to rank");
        return frame;
    }

    let area = PlotArea::new(config.width, config.height, config.insets);
    let values: Vec<f64> = top.iter().filter_map(|r| r.co2).collect();
    let band = BandScale::new(top.iter().map(|r| r.country.clone()).collect(), area.x_range(), BAR_PADDING);
    let y = LinearScale::new(value_domain(values.iter().copied()), area.y_range());

    if config.show_axes {
        frame.marks.extend(axis::value_axis(&area, &y, theme));
        frame.marks.extend(axis::band_axis(&area, &band, theme));
    }
    for (i, v) in values.iter().enumerate() {
        let left = band.position_at(i);
        let top_px = y.map(*v);
        frame.push(Mark::Rect {
            rect: RectF::from_ltrb(left, top_px.min(area.bottom), left + band.bandwidth(), top_px.max(area.bottom)),
            fill: theme.bar_fill,
        });
    }

    let leader = &top[0];
    frame.annotation = Some(Annotation {
        title: "Top Emitter".to_string(),
        label: format!("{} leads CO₂ emissions this year", leader.country),
        target: Point::new(band.position_at(0) + band.bandwidth() / 2.0, y.map(values[0])),
        dx: 0.0,
        dy: -20.0,
        align: Anchor::Middle,
        color: theme.annotation,
    });
    frame
}

pub fn render_country_explorer(dataset: &Dataset, selection: Option<&str>, config: &StoryConfig) -> Frame {
    let theme = &config.theme;
    let countries = dataset.countries();
    let country = selection.or_else(|| countries.first().copied());
    let title = match country {
        Some(c) => format!("CO₂ Emissions for {c}"),
        None => "CO₂ Emissions by Country".to_string(),
    };
    let mut frame = base_frame(
        config,
        Scene::CountryExplorer,
        title,
        "Explore annual CO₂ emissions for individual countries.".to_string(),
    );
    if !countries.is_empty() {
        frame.selector = Some(Selector {
            selected: country.and_then(|c| countries.iter().position(|o| *o == c)),
            options: countries.iter().map(|c| c.to_string()).collect(),
            color: theme.text,
        });
    }

    let Some(country) = country else { return frame };
    let series = series_for_country(dataset.rows(), country);
    let points: Vec<(i32, f64)> = series.iter().filter_map(Row::point).collect();
    let area = PlotArea::new(config.width, config.height, config.insets);
    let Some((x, y, first, last)) = line_scales(&area, &points) else {
        tracing::debug!(country, "country explorer: no valid rows");
        return frame;
    };

    if config.show_axes {
        frame.marks.extend(axis::value_axis(&area, &y, theme));
        frame.marks.extend(axis::year_axis(&area, &x, first, last, theme));
    }
    frame.push(Mark::Path {
        points: points.iter().map(|&(yr, v)| Point::new(x.map(yr as f64), y.map(v))).collect(),
        stroke: theme.country_stroke,
        width: LINE_WIDTH,
    });

    if let Some((year, co2)) = peak_of(&series).and_then(Row::point) {
        frame.annotation = Some(Annotation {
            title: "Peak Emission".to_string(),
            label: format!("CO₂ peaked in {year}"),
            target: Point::new(x.map(year as f64), y.map(co2)),
            dx: 0.0,
            dy: -40.0,
            align: Anchor::Middle,
            color: theme.annotation,
        });
    }
    frame
}
