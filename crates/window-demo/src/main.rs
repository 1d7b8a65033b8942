// File: crates/window-demo/src/main.rs
// Summary: Interactive story viewer; renders scene frames to a window via RGBA blit (CPU) using winit + softbuffer.
// Keys: Right/Space next scene, Left previous scene, Down/Up cycle the explorer country, Esc quits.

use anyhow::{anyhow, Result};
use clap::Parser;
use std::num::NonZeroU32;
use std::path::PathBuf;
use story_core::{theme, Dataset, Session, StoryConfig, StoryError};
use story_render_skia::SkiaRenderer;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use winit::event::{ElementState, Event, KeyboardInput, VirtualKeyCode, WindowEvent};
use winit::event_loop::{ControlFlow, EventLoopBuilder};
use winit::window::WindowBuilder;

#[derive(Parser, Debug)]
#[command(name = "story-window", version)]
#[command(about = "Step through the CO₂ emissions story in a window")]
struct Cli {
    /// Input CSV (Entity, Year, Annual CO₂ emissions).
    #[arg(default_value = "data/co2_sample.csv")]
    data: PathBuf,

    /// Theme preset (light, dark).
    #[arg(long, default_value = "light")]
    theme: String,
}

/// Completion of the background dataset load.
enum UserEvent {
    Loaded(Result<Dataset, StoryError>),
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();
    let config = StoryConfig { theme: theme::find(&cli.theme), ..StoryConfig::default() };

    let event_loop = EventLoopBuilder::<UserEvent>::with_user_event().build();
    let window = WindowBuilder::new()
        .with_title("Emissions Story")
        .with_inner_size(winit::dpi::PhysicalSize::new(config.width, config.height))
        .with_resizable(false)
        .build(&event_loop)
        .map_err(|e| anyhow!("window: {e}"))?;

    let context = unsafe { softbuffer::Context::new(&window) }.map_err(|e| anyhow!("softbuffer context: {e}"))?;
    let mut surface =
        unsafe { softbuffer::Surface::new(&context, &window) }.map_err(|e| anyhow!("softbuffer surface: {e}"))?;

    // Canvas stays blank until the loader thread reports back.
    let proxy = event_loop.create_proxy();
    let data = cli.data.clone();
    std::thread::spawn(move || {
        let result = Dataset::load_csv(&data);
        let _ = proxy.send_event(UserEvent::Loaded(result));
    });

    let renderer = SkiaRenderer::default();
    let mut session = Session::Loading;

    let canvas_config = config.clone();
    let mut draw = move |session: &Session, size: winit::dpi::PhysicalSize<u32>| -> Result<()> {
        let (Some(w), Some(h)) = (NonZeroU32::new(size.width), NonZeroU32::new(size.height)) else {
            return Ok(());
        };
        surface.resize(w, h).map_err(|e| anyhow!("resize: {e}"))?;

        let frame = session.frame(&canvas_config);
        let img = renderer.render_to_rgba8(&frame)?;
        let mut buffer = surface.buffer_mut().map_err(|e| anyhow!("frame buffer: {e}"))?;
        buffer.fill(0);
        let (bw, bh) = (size.width as usize, size.height as usize);
        let rows = bh.min(img.height as usize);
        let cols = bw.min(img.width as usize);
        for y in 0..rows {
            let src = &img.pixels[y * img.stride..y * img.stride + cols * 4];
            for (x, px) in src.chunks_exact(4).enumerate() {
                // softbuffer expects 0RGB
                buffer[y * bw + x] = (px[0] as u32) << 16 | (px[1] as u32) << 8 | px[2] as u32;
            }
        }
        buffer.present().map_err(|e| anyhow!("present: {e}"))?;
        Ok(())
    };

    event_loop.run(move |event, _, control_flow| {
        *control_flow = ControlFlow::Wait;
        match event {
            Event::UserEvent(UserEvent::Loaded(result)) => {
                session = Session::from_load(result, config.clone());
                if let Session::Ready(ctl) = &session {
                    info!("Loaded {} rows, {} countries", ctl.dataset().len(), ctl.dataset().countries().len());
                }
                window.request_redraw();
            }
            Event::WindowEvent { event, .. } => match event {
                WindowEvent::CloseRequested => *control_flow = ControlFlow::Exit,
                WindowEvent::KeyboardInput {
                    input: KeyboardInput { state: ElementState::Pressed, virtual_keycode: Some(key), .. },
                    ..
                } => {
                    let changed = match key {
                        VirtualKeyCode::Right | VirtualKeyCode::Space => session.advance(),
                        VirtualKeyCode::Left => session.retreat(),
                        VirtualKeyCode::Down => session.controller_mut().is_some_and(|c| c.select_next_country()),
                        VirtualKeyCode::Up => session.controller_mut().is_some_and(|c| c.select_previous_country()),
                        VirtualKeyCode::Escape => {
                            *control_flow = ControlFlow::Exit;
                            false
                        }
                        _ => false,
                    };
                    if changed {
                        if let Some(ctl) = session.controller_mut() {
                            window.set_title(&format!("Emissions Story: {}", ctl.current_scene().slug()));
                        }
                        window.request_redraw();
                    }
                }
                _ => {}
            },
            Event::RedrawRequested(_) => {
                if let Err(e) = draw(&session, window.inner_size()) {
                    error!("draw failed: {e:#}");
                }
            }
            _ => {}
        }
    });
}
