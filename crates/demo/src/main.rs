// File: crates/demo/src/main.rs
// Summary: Demo loads the emissions CSV, steps through every scene with the controller and writes PNG/SVG files.

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use std::path::{Path, PathBuf};
use story_core::{svg, theme, Dataset, Frame, Scene, SceneController, StoryConfig, YearAnchor};
use story_render_skia::SkiaRenderer;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser, Debug)]
#[command(name = "story-demo", version)]
#[command(about = "Render the CO₂ emissions story scenes to image files")]
struct Cli {
    /// Input CSV (Entity, Year, Annual CO₂ emissions). A .csv/.cvs typo is tolerated.
    #[arg(long, default_value = "data/co2_sample.csv")]
    data: PathBuf,

    /// Output directory.
    #[arg(long, default_value = "target/out")]
    out: PathBuf,

    /// Output format.
    #[arg(long, value_enum, default_value_t = Format::Both)]
    format: Format,

    /// Theme preset (light, dark).
    #[arg(long, default_value = "light")]
    theme: String,

    /// Countries to render in the explorer scene (repeatable); defaults to the first country.
    #[arg(long)]
    country: Vec<String>,

    /// Year the global-trend callout points at.
    #[arg(long, default_value_t = 1955)]
    annotation_year: i32,

    /// Snap the callout to the closest available year instead of omitting it.
    #[arg(long)]
    nearest_year: bool,

    /// Hide axis lines and tick labels.
    #[arg(long)]
    no_axes: bool,

    /// Canvas width in pixels.
    #[arg(long, default_value_t = story_core::types::WIDTH)]
    width: u32,

    /// Canvas height in pixels.
    #[arg(long, default_value_t = story_core::types::HEIGHT)]
    height: u32,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Format {
    Png,
    Svg,
    Both,
}

impl Cli {
    fn config(&self) -> StoryConfig {
        StoryConfig {
            width: self.width,
            height: self.height,
            annotation_year: self.annotation_year,
            year_anchor: if self.nearest_year { YearAnchor::Nearest } else { YearAnchor::Exact },
            show_axes: !self.no_axes,
            theme: theme::find(&self.theme),
            ..StoryConfig::default()
        }
    }
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();
    let (path, used_alt) = resolve_path(&cli.data)?;
    info!("Using input file: {}", path.display());
    if used_alt {
        info!("  (extension swapped between .csv/.cvs)");
    }

    // Without data no scene can render; fail the whole run.
    let dataset = Dataset::load_csv(&path).with_context(|| format!("failed to load CSV '{}'", path.display()))?;
    info!("Loaded {} rows, {} countries", dataset.len(), dataset.countries().len());
    if dataset.is_empty() {
        warn!("dataset has no rows; scenes will only show titles");
    }

    let renderer = SkiaRenderer::default();
    let mut ctl = SceneController::new(dataset, cli.config());
    loop {
        let scene = ctl.current_scene();
        if scene == Scene::CountryExplorer && !cli.country.is_empty() {
            for country in &cli.country {
                ctl.on_country_selected(country);
                write_frame(&renderer, ctl.frame(), &cli, &out_name(&cli.out, scene, Some(country)))?;
            }
        } else {
            write_frame(&renderer, ctl.frame(), &cli, &out_name(&cli.out, scene, None))?;
        }
        if !ctl.advance() {
            break;
        }
    }
    Ok(())
}

fn write_frame(renderer: &SkiaRenderer, frame: &Frame, cli: &Cli, stem: &Path) -> Result<()> {
    if matches!(cli.format, Format::Png | Format::Both) {
        let png = stem.with_extension("png");
        renderer.render_to_png(frame, &png).with_context(|| format!("writing {}", png.display()))?;
        info!("Wrote {}", png.display());
    }
    if matches!(cli.format, Format::Svg | Format::Both) {
        let out = stem.with_extension("svg");
        svg::write_svg(frame, &out)?;
        info!("Wrote {}", out.display());
    }
    Ok(())
}

/// Produce an output stem like target/out/scene_2_country-explorer_united-states (no extension).
fn out_name(dir: &Path, scene: Scene, country: Option<&str>) -> PathBuf {
    let mut name = format!("scene_{}_{}", scene.index(), scene.slug());
    if let Some(c) = country {
        let slug: String = c
            .chars()
            .map(|ch| if ch.is_alphanumeric() { ch.to_ascii_lowercase() } else { '-' })
            .collect();
        name.push('_');
        name.push_str(&slug);
    }
    dir.join(name)
}

/// Resolve path, trying .csv/.cvs swap if needed.
/// Returns (actual_path, used_alt)
fn resolve_path(raw: &Path) -> Result<(PathBuf, bool)> {
    if raw.exists() {
        return Ok((raw.to_path_buf(), false));
    }
    if let Some(alt) = swap_ext(raw) {
        if alt.exists() {
            return Ok((alt, true));
        }
    }
    anyhow::bail!("file not found: {}", raw.display());
}

fn swap_ext(p: &Path) -> Option<PathBuf> {
    let mut alt = p.to_path_buf();
    let ext = p.extension()?.to_string_lossy().to_lowercase();
    match ext.as_str() {
        "cvs" => {
            alt.set_extension("csv");
            Some(alt)
        }
        "csv" => {
            alt.set_extension("cvs");
            Some(alt)
        }
        _ => None,
    }
}
